// src/strobe_lib/border.rs

use super::canvas::Canvas;
use super::color::{palette, Color};
use super::geometry::Point;

/// Circular edge of the drawable region. Only circles are supported.
#[derive(Clone, Debug)]
pub struct Border {
    center: Point,
    radius: f32,
    color: Color,
}

impl Border {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius, color: palette::border() }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_circle(self.center, self.radius, self.color, 1.0);
    }
}
