// src/strobe_lib/fade.rs

use super::canvas::Canvas;
use super::color::{palette, Color};
use super::segment::Segment;

pub const FULL_OPACITY: f32 = 255.0;

/// Per-draw opacity step on the 0-255 scale: `fade_fraction` of the
/// reference delta, with a full lap mapped onto full opacity.
pub fn fade_step(tick_degrees: f32, fade_fraction: f32) -> f32 {
    fade_fraction * tick_degrees * FULL_OPACITY / 360.0
}

/// A baked segment that loses opacity every time it is drawn.
#[derive(Clone, Debug)]
pub struct FadeSegment {
    segment: Segment,
    opacity: f32,
    step: f32,
    color: Color,
    removable: bool,
}

impl FadeSegment {
    pub fn new(segment: Segment, step: f32) -> Self {
        Self::with_opacity(segment, FULL_OPACITY, step)
    }

    pub fn with_opacity(segment: Segment, opacity: f32, step: f32) -> Self {
        Self {
            segment,
            opacity,
            step,
            color: Self::color_for(opacity),
            removable: opacity <= 0.0,
        }
    }

    fn color_for(opacity: f32) -> Color {
        let (r, g, b) = palette::CAPTURED_RGB;
        Color::from_channels(r, g, b, opacity)
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn removable(&self) -> bool {
        self.removable
    }

    /// Draws at the current opacity, then decays by one step.
    pub fn draw<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.segment.draw_with(canvas, 0.0, self.color);
        self.decay();
    }

    fn decay(&mut self) {
        self.opacity -= self.step;
        self.color = Self::color_for(self.opacity);
        if self.opacity <= 0.0 {
            self.removable = true;
        }
    }
}
