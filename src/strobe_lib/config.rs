// src/strobe_lib/config.rs

use anyhow::bail;

use super::capture::ContainmentPolicy;
use super::geometry::Point;

/// What happens to segments caught by the flash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CaptureMode {
    /// Each capture fades out over the following frames.
    #[default]
    Fade,
    /// Captures collect over a lap and are shown together when it completes.
    Snapshot,
}

#[derive(Clone, Debug)]
pub struct StrobeConfig {
    /// Degrees the reference advances per tick (360 / 60).
    pub tick_degrees_per_step: f32,
    /// The flash fires when the reference angle is a multiple of this.
    pub capture_on_period: f32,
    /// Share of the reference delta a capture loses in opacity per frame,
    /// with a full lap mapped onto full opacity.
    pub fade_step_fraction: f32,
    pub containment: ContainmentPolicy,
    pub capture_mode: CaptureMode,
    pub pause_on_lap: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for StrobeConfig {
    fn default() -> Self {
        Self {
            tick_degrees_per_step: 6.0,
            capture_on_period: 60.0,
            fade_step_fraction: 0.67,
            containment: ContainmentPolicy::default(),
            capture_mode: CaptureMode::default(),
            pause_on_lap: false,
            width: 600,
            height: 600,
        }
    }
}

impl StrobeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.tick_degrees_per_step > 0.0 && self.tick_degrees_per_step < 360.0) {
            bail!(
                "tick degrees per step must be in (0, 360), got {}",
                self.tick_degrees_per_step
            );
        }
        if !(self.capture_on_period >= 1.0) {
            bail!("capture period must be at least 1 degree, got {}", self.capture_on_period);
        }
        if !(self.fade_step_fraction > 0.0) {
            bail!("fade fraction must be positive, got {}", self.fade_step_fraction);
        }
        if self.width == 0 || self.height == 0 {
            bail!("display size must be non-zero, got {}x{}", self.width, self.height);
        }
        Ok(())
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn fade_step(&self) -> f32 {
        super::fade::fade_step(self.tick_degrees_per_step, self.fade_step_fraction)
    }
}
