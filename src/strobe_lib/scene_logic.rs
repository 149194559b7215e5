// src/strobe_lib/scene_logic.rs

use super::canvas::Canvas;
use super::capture::{check_overlap, on_capture_period, Rectangle};
use super::color::{palette, Color};
use super::config::{CaptureMode, StrobeConfig};
use super::fade::FadeSegment;
use super::state::GameState;

/// What one update cycle did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub angle: f32,
    pub looped: bool,
    pub flashed: bool,
    pub captured: usize,
    pub fading: usize,
}

/// Runs one tick: advances the reference, captures, fades and draws the frame
/// onto `canvas`. Returns `None` without touching anything while paused.
pub fn update<C: Canvas + ?Sized>(
    state: &mut GameState,
    flash: &Rectangle,
    config: &StrobeConfig,
    canvas: &mut C,
) -> Option<FrameReport> {
    if state.paused {
        return None;
    }

    canvas.clear(Color::BLACK);

    state.reference.draw(canvas);
    state.reference.tick();
    let angle = state.reference.angle();
    let looped = state.reference.looped();

    let flashed = on_capture_period(angle, config.capture_on_period);
    if flashed {
        flash.draw_with(canvas, palette::flash_active());
    } else {
        flash.draw(canvas);
    }

    // the lap frame shows the snapshot, it does not add to it
    let captures = if looped && config.capture_mode == CaptureMode::Snapshot {
        Vec::new()
    } else {
        check_overlap(
            &state.segments,
            flash,
            angle,
            config.capture_on_period,
            config.containment,
        )
    };
    let captured = captures.len();
    record_captures(state, captured, angle);

    let mut draw_live = true;
    match config.capture_mode {
        CaptureMode::Fade => {
            let step = config.fade_step();
            state
                .fading
                .extend(captures.into_iter().map(|seg| FadeSegment::new(seg, step)));
            draw_fading(state, canvas);
        }
        CaptureMode::Snapshot => {
            state.snapshot.extend(captures);
            if looped {
                for seg in &state.snapshot {
                    seg.draw_with(canvas, 0.0, palette::captured());
                }
                state.snapshot.clear();
                draw_live = false;
            }
        }
    }

    if draw_live {
        for seg in &state.segments {
            seg.draw(canvas, angle);
        }
    }

    if state.debug {
        let overlay = palette::debug_overlay();
        for fade in &state.fading {
            fade.segment().draw_with(canvas, 0.0, overlay);
        }
    }

    state.border.draw(canvas);

    if looped {
        finish_lap(state, config);
    }

    Some(FrameReport {
        angle,
        looped,
        flashed,
        captured,
        fading: state.fading.len(),
    })
}

fn record_captures(state: &mut GameState, captured: usize, angle: f32) {
    if captured == 0 {
        return;
    }
    log::debug!("Flash at {:.0} degrees caught {} segment(s)", angle, captured);
    state.stats.total += captured as u64;
    state.stats.this_lap += captured as u64;
}

fn draw_fading<C: Canvas + ?Sized>(state: &mut GameState, canvas: &mut C) {
    for fade in state.fading.iter_mut() {
        fade.draw(canvas);
    }
    let before = state.fading.len();
    state.fading.retain(|fade| !fade.removable());
    let purged = before - state.fading.len();
    if purged > 0 {
        log::trace!("Purged {} faded segment(s)", purged);
    }
}

fn finish_lap(state: &mut GameState, config: &StrobeConfig) {
    log::info!(
        "Lap {} complete: {} capture(s), {} total",
        state.reference.laps(),
        state.stats.this_lap,
        state.stats.total
    );
    state.stats.last_lap = state.stats.this_lap;
    state.stats.this_lap = 0;
    if config.pause_on_lap {
        state.paused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strobe_lib::canvas::{DrawCommand, RecordingCanvas};
    use crate::strobe_lib::geometry::Point;
    use crate::strobe_lib::segment::Segment;

    fn setup(config: &StrobeConfig) -> (GameState, Rectangle) {
        let mut state = GameState::new(config);
        let c = config.center();
        // far enough out that only the 0 degree flash catches it
        state.segments.push(Segment::new(
            Point::new(200.0, 0.0).to_polar(c),
            Point::new(220.0, 0.0).to_polar(c),
        ));
        (state, Rectangle::flash_for(config.width as f32, config.height as f32))
    }

    #[test]
    fn paused_update_is_a_no_op() {
        let config = StrobeConfig::default();
        let (mut state, flash) = setup(&config);
        state.paused = true;
        let mut canvas = RecordingCanvas::new();
        assert!(update(&mut state, &flash, &config, &mut canvas).is_none());
        assert!(canvas.commands().is_empty());
        assert_eq!(state.reference.angle(), 0.0);
    }

    #[test]
    fn frame_draws_in_order() {
        let config = StrobeConfig::default();
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();
        update(&mut state, &flash, &config, &mut canvas);
        let cmds = canvas.commands();
        assert!(matches!(cmds.first(), Some(DrawCommand::Clear(_))));
        assert!(matches!(cmds[1], DrawCommand::Line { .. }));
        assert!(matches!(cmds[2], DrawCommand::FilledRectangle { .. }));
        assert!(matches!(cmds.last(), Some(DrawCommand::Circle { .. })));
    }

    #[test]
    fn capture_fades_and_is_purged() {
        let config = StrobeConfig::default();
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();

        // one lap ends on angle 0, where the segment is in the flash
        let mut reports = Vec::new();
        for _ in 0..60 {
            reports.extend(update(&mut state, &flash, &config, &mut canvas));
        }
        let last = reports.last().copied().unwrap_or_default();
        assert!(last.looped && last.flashed);
        assert_eq!(last.captured, 1);
        assert_eq!(state.fading.len(), 1);
        assert_eq!(state.stats.last_lap, 1);

        // a capture outlives its source and survives 90 draws with the default step
        state.segments.clear();
        for _ in 0..88 {
            update(&mut state, &flash, &config, &mut canvas);
        }
        assert_eq!(state.fading.len(), 1);
        update(&mut state, &flash, &config, &mut canvas);
        assert!(state.fading.is_empty());
    }

    #[test]
    fn snapshot_mode_shows_lap_captures_then_clears() {
        let config = StrobeConfig { capture_mode: CaptureMode::Snapshot, ..Default::default() };
        let (mut state, flash) = setup(&config);
        // a second segment that the flash catches at 60 degrees
        let c = config.center();
        state.segments.push(Segment::new(
            Point::new(200.0, 0.0).to_polar(c),
            Point::new(220.0, 0.0).to_polar(c),
        ));
        state.segments[1].rotate(-60.0);

        let mut canvas = RecordingCanvas::new();
        for _ in 0..10 {
            update(&mut state, &flash, &config, &mut canvas);
        }
        assert_eq!(state.snapshot.len(), 1);
        for _ in 10..60 {
            update(&mut state, &flash, &config, &mut canvas);
        }
        // lap frame: snapshot drawn in the capture colour instead of live
        // segments; the first segment sits in the flash only at 0 and is skipped
        assert!(state.snapshot.is_empty());
        assert!(state.fading.is_empty());
        assert_eq!(canvas.lines_with_color(palette::captured()), 1);
        assert_eq!(canvas.lines_with_color(palette::segment()), 0);
    }

    #[test]
    fn snapshot_mode_does_not_capture_on_the_lap_frame() {
        let config = StrobeConfig { capture_mode: CaptureMode::Snapshot, ..Default::default() };
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();
        let reports: Vec<FrameReport> = (0..120)
            .filter_map(|_| update(&mut state, &flash, &config, &mut canvas))
            .collect();
        let laps: Vec<&FrameReport> = reports.iter().filter(|r| r.looped).collect();
        assert_eq!(laps.len(), 2);
        assert!(laps.iter().all(|r| r.flashed && r.captured == 0));
        assert_eq!(state.stats.total, 0);
        assert!(state.snapshot.is_empty());
    }

    #[test]
    fn fade_mode_captures_on_the_lap_frame() {
        let config = StrobeConfig::default();
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();
        let last = (0..60)
            .filter_map(|_| update(&mut state, &flash, &config, &mut canvas))
            .last()
            .unwrap_or_default();
        assert!(last.looped);
        assert_eq!(last.captured, 1);
    }

    #[test]
    fn sub_degree_period_never_flashes() {
        let config = StrobeConfig { capture_on_period: 0.5, ..Default::default() };
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();
        for _ in 0..60 {
            let report = update(&mut state, &flash, &config, &mut canvas).unwrap_or_default();
            assert!(!report.flashed);
            assert_eq!(report.captured, 0);
        }
    }

    #[test]
    fn pause_on_lap_stops_after_the_lap() {
        let config = StrobeConfig { pause_on_lap: true, ..Default::default() };
        let (mut state, flash) = setup(&config);
        let mut canvas = RecordingCanvas::new();
        let ran = (0..100)
            .filter_map(|_| update(&mut state, &flash, &config, &mut canvas))
            .count();
        assert_eq!(ran, 60);
        assert!(state.paused);
    }

    #[test]
    fn debug_overlays_undecayed_captures() {
        let config = StrobeConfig::default();
        let (mut state, flash) = setup(&config);
        state.debug = true;
        let mut canvas = RecordingCanvas::new();
        for _ in 0..61 {
            update(&mut state, &flash, &config, &mut canvas);
        }
        assert_eq!(canvas.lines_with_color(palette::debug_overlay()), 1);
    }
}
