// src/ui.rs

use strobe::strobe_lib::{CaptureMode, ContainmentPolicy, GameState, StrobeConfig};

/// Snapshot of the simulation shown in the debug window.
pub struct DebugInfo {
    pub angle: f32,
    pub laps: u64,
    pub live: usize,
    pub fading: usize,
    pub snapshot: usize,
    pub total_captures: u64,
    pub last_lap_captures: u64,
    pub containment: ContainmentPolicy,
    pub capture_mode: CaptureMode,
    pub paused: bool,
}

impl DebugInfo {
    pub fn collect(state: &GameState, config: &StrobeConfig) -> Self {
        Self {
            angle: state.reference.angle(),
            laps: state.reference.laps(),
            live: state.segments.len(),
            fading: state.fading.len(),
            snapshot: state.snapshot.len(),
            total_captures: state.stats.total,
            last_lap_captures: state.stats.last_lap,
            containment: config.containment,
            capture_mode: config.capture_mode,
            paused: state.paused,
        }
    }
}

pub fn build_ui(ctx: &egui::Context, info: &DebugInfo) {
    egui::Window::new("Strobe Debug")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(format!("Reference: {:.0}°  (lap {})", info.angle, info.laps));
                if info.paused {
                    ui.label("Paused");
                }
                ui.separator();
                ui.label(format!("Live segments: {}", info.live));
                match info.capture_mode {
                    CaptureMode::Fade => ui.label(format!("Fading: {}", info.fading)),
                    CaptureMode::Snapshot => ui.label(format!("Snapshot: {}", info.snapshot)),
                };
                ui.label(format!(
                    "Captures: {} total, {} last lap",
                    info.total_captures, info.last_lap_captures
                ));
                ui.label(format!("Policy: {:?}", info.containment));
                ui.separator();
                ui.label("Space: Pause / Resume");
                ui.label("D: Toggle this overlay");
                ui.label("Escape: Quit");
            });
        });
}
