// src/strobe_lib/state.rs

use super::border::Border;
use super::config::StrobeConfig;
use super::controller::KeyAction;
use super::fade::FadeSegment;
use super::reference::Reference;
use super::segment::Segment;

/// Running totals shown in the debug overlay and logged per lap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptureStats {
    pub total: u64,
    pub this_lap: u64,
    pub last_lap: u64,
}

/// Everything a run owns. Mutated only by the tick and key handlers.
#[derive(Debug)]
pub struct GameState {
    pub running: bool,
    pub paused: bool,
    pub debug: bool,
    pub border: Border,
    pub reference: Reference,
    pub segments: Vec<Segment>,
    pub fading: Vec<FadeSegment>,
    /// Captures of the current lap in snapshot mode.
    pub snapshot: Vec<Segment>,
    pub stats: CaptureStats,
}

impl GameState {
    pub fn new(config: &StrobeConfig) -> Self {
        let center = config.center();
        let rim = config.width.min(config.height) as f32 / 2.0;
        Self {
            running: true,
            paused: false,
            debug: false,
            border: Border::new(center, rim),
            reference: Reference::new(config.tick_degrees_per_step, center, rim),
            segments: Vec::new(),
            fading: Vec::new(),
            snapshot: Vec::new(),
            stats: CaptureStats::default(),
        }
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.running = false,
            KeyAction::TogglePause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
            }
            KeyAction::ToggleDebug => self.debug = !self.debug,
        }
    }
}
