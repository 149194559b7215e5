// src/strobe_lib/reference.rs

use super::canvas::Canvas;
use super::color::{palette, Color};
use super::geometry::{Point, PolarPoint};
use super::segment::Segment;

pub const ANGLE_MAX: f32 = 360.0;

/// Length of the hand drawn at the rim to show the current reference angle.
const HAND_LENGTH: f32 = 15.0;

/// The clock hand every live segment is rotated by.
#[derive(Clone, Debug)]
pub struct Reference {
    angle: f32,
    delta: f32,
    looped: bool,
    laps: u64,
    hand: Segment,
    color: Color,
}

impl Reference {
    pub fn new(delta: f32, center: Point, rim_radius: f32) -> Self {
        let hand = Segment::new(
            PolarPoint::new(rim_radius - HAND_LENGTH, 0.0, center),
            PolarPoint::new(rim_radius, 0.0, center),
        );
        Self {
            angle: 0.0,
            delta,
            looped: false,
            laps: 0,
            hand,
            color: palette::reference(),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// True only after the tick that wrapped past 360.
    pub fn looped(&self) -> bool {
        self.looped
    }

    pub fn laps(&self) -> u64 {
        self.laps
    }

    pub fn tick(&mut self) {
        self.angle += self.delta;
        if self.angle >= ANGLE_MAX {
            self.angle -= ANGLE_MAX;
            self.looped = true;
            self.laps += 1;
        } else {
            self.looped = false;
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.hand.draw_with(canvas, self.angle, self.color);
    }
}
