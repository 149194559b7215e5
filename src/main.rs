// src/main.rs

mod app;
mod ui;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use app::StrobeApp;
use strobe::demo_scene;
use strobe::strobe_lib::{
    scene_logic, state::CaptureStats, CaptureMode, ContainmentPolicy, GameState, RecordingCanvas,
    Rectangle, StrobeConfig,
};

const FPS: f64 = 60.0;
/// Frames per tick with `--slow`.
const SLOW_FACTOR: f64 = 5.0;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Segments spinning past a stroboscope flash.")]
pub struct Args {
    /// Degrees the reference advances per tick
    #[arg(long, default_value_t = 6.0)]
    pub tick_degrees: f32,

    /// The flash fires whenever the reference is a multiple of this many degrees
    #[arg(long, default_value_t = 60.0)]
    pub capture_period: f32,

    /// Share of the tick delta a capture loses in opacity per frame
    #[arg(long, default_value_t = 0.67)]
    pub fade_fraction: f32,

    /// How many endpoints must be inside the flash for a capture
    #[arg(long, value_enum, default_value_t = ContainmentPolicy::EitherInclusive)]
    pub containment: ContainmentPolicy,

    #[arg(long, value_enum, default_value_t = CaptureMode::Fade)]
    pub capture_mode: CaptureMode,

    /// Pause when the reference completes a lap
    #[arg(long)]
    pub pause_on_lap: bool,

    /// Tick every 5/60 s instead of every 1/60 s
    #[arg(long)]
    pub slow: bool,

    /// Seed for the scene's random orientation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width and height of the square display, in pixels
    #[arg(long, default_value_t = 600)]
    pub size: u32,

    /// Run without a window and log what the flash catches
    #[arg(long)]
    pub headless: bool,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,
}

impl Args {
    fn strobe_config(&self) -> StrobeConfig {
        StrobeConfig {
            tick_degrees_per_step: self.tick_degrees,
            capture_on_period: self.capture_period,
            fade_step_fraction: self.fade_fraction,
            containment: self.containment,
            capture_mode: self.capture_mode,
            pause_on_lap: self.pause_on_lap,
            width: self.size,
            height: self.size,
        }
    }

    fn tick_period(&self) -> Duration {
        let frames = if self.slow { SLOW_FACTOR } else { 1.0 };
        Duration::from_secs_f64(frames / FPS)
    }
}

fn build_state(config: &StrobeConfig, seed: Option<u64>) -> GameState {
    let seed = seed.unwrap_or_else(rand::random);
    log::info!("Scene seed: {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut state = GameState::new(config);
    state.segments =
        demo_scene::generate_box_shape(&mut rng, config.center(), config.capture_on_period);
    state
}

/// Totals from a windowless run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeadlessSummary {
    ticks: u64,
    laps: u64,
    stats: CaptureStats,
}

fn run_headless(
    config: &StrobeConfig,
    mut state: GameState,
    ticks: u64,
) -> anyhow::Result<HeadlessSummary> {
    let flash = Rectangle::flash_for(config.width as f32, config.height as f32);
    let mut canvas = RecordingCanvas::new();
    let mut ran = 0;
    for _ in 0..ticks {
        match scene_logic::update(&mut state, &flash, config, &mut canvas) {
            Some(report) => {
                if report.captured > 0 {
                    log::info!(
                        "Tick {}: flash at {:.0} degrees caught {}, {} fading",
                        ran + 1,
                        report.angle,
                        report.captured,
                        report.fading
                    );
                }
                ran += 1;
            }
            None => break,
        }
    }
    log::info!(
        "Headless run finished after {} ticks: {} lap(s), {} capture(s)",
        ran,
        state.reference.laps(),
        state.stats.total
    );
    Ok(HeadlessSummary {
        ticks: ran,
        laps: state.reference.laps(),
        stats: state.stats,
    })
}

fn present(app: &mut StrobeApp, window: &winit::window::Window, target: &EventLoopWindowTarget<()>) {
    match app.render(window) {
        Ok(_) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            app.resize(app.get_size());
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("GPU out of memory, exiting");
            target.exit();
        }
        Err(e) => log::warn!("Surface error: {:?}", e),
    }
}

async fn run(config: StrobeConfig, state: GameState, tick_period: Duration) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event queue")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Strobe")
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)
            .context("Failed to create display")?,
    );

    let mut app = StrobeApp::new(window.clone(), config, state).await?;
    let mut next_tick = Instant::now() + tick_period;

    event_loop
        .run(move |event, target: &EventLoopWindowTarget<()>| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    if !app.handle_window_event(event, &window) {
                        match event {
                            WindowEvent::Resized(physical_size) => {
                                app.resize(*physical_size);
                            }
                            WindowEvent::RedrawRequested => {
                                present(&mut app, &window, target);
                            }
                            _ => {}
                        }
                    }
                    if !app.is_running() {
                        target.exit();
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    if now >= next_tick {
                        app.update();
                        window.request_redraw();
                        next_tick += tick_period;
                        if next_tick < now {
                            // fell behind; don't try to catch up
                            next_tick = now + tick_period;
                        }
                    }
                    if !target.exiting() {
                        target.set_control_flow(ControlFlow::WaitUntil(next_tick));
                    }
                }
                _ => {}
            }
        })
        .context("Event loop failed")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.strobe_config();
    config.validate()?;
    log::info!("{:?}", config);

    let state = build_state(&config, args.seed);
    if args.headless {
        run_headless(&config, state, args.ticks)?;
        return Ok(());
    }
    run(config, state, args.tick_period()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_named_constants() {
        let args = Args::parse_from(["strobe"]);
        let config = args.strobe_config();
        assert_eq!(config.tick_degrees_per_step, 6.0);
        assert_eq!(config.capture_on_period, 60.0);
        assert_eq!(config.fade_step_fraction, 0.67);
        assert_eq!(config.containment, ContainmentPolicy::EitherInclusive);
        assert_eq!(args.tick_period(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn parses_policy_and_mode() {
        let args = Args::parse_from([
            "strobe",
            "--containment",
            "both-exclusive",
            "--capture-mode",
            "snapshot",
            "--slow",
            "--seed",
            "3",
        ]);
        assert_eq!(args.containment, ContainmentPolicy::BothExclusive);
        assert_eq!(args.capture_mode, CaptureMode::Snapshot);
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.tick_period(), Duration::from_secs_f64(5.0 / 60.0));
    }

    #[test]
    fn headless_run_completes() {
        let args = Args::parse_from(["strobe", "--headless", "--ticks", "120", "--seed", "1"]);
        let config = args.strobe_config();
        let state = build_state(&config, args.seed);
        let summary = run_headless(&config, state, args.ticks).expect("headless run");
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.laps, 2);
        assert!(summary.stats.total > 0);
        assert_eq!(summary.stats.this_lap, 0);
    }

    #[test]
    fn headless_run_stops_at_the_first_lap_when_asked() {
        let args = Args::parse_from(["strobe", "--headless", "--pause-on-lap", "--seed", "7"]);
        let config = args.strobe_config();
        let state = build_state(&config, args.seed);
        let summary = run_headless(&config, state, args.ticks).expect("headless run");
        assert_eq!(summary.ticks, 60);
        assert_eq!(summary.laps, 1);
        assert_eq!(summary.stats.last_lap, summary.stats.total);
    }
}
