// src/strobe_lib/geometry.rs

use glam::Vec2;

/// Cartesian point in display pixel space (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset of this point from `origin`, as a point relative to it.
    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Treats `(x, y)` as an offset from `center` and returns the polar form
    /// anchored there. Theta is in degrees, measured from the positive x-axis.
    pub fn to_polar(&self, center: Point) -> PolarPoint {
        let radius = (self.x * self.x + self.y * self.y).sqrt();
        let theta = self.y.atan2(self.x).to_degrees();
        PolarPoint::new(radius, theta, center)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// A point stored as a distance from a fixed centre and a rotation from the
/// x-axis. Rotation offsets are applied at query time, never stored, except
/// through [`PolarPoint::rotate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarPoint {
    radius: f32,
    theta: f32,
    center: Point,
}

impl PolarPoint {
    pub fn new(radius: f32, theta: f32, center: Point) -> Self {
        Self { radius, theta, center }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Cartesian position when rotated an extra `angle` degrees.
    pub fn to_xy(&self, angle: f32) -> Point {
        let (sin, cos) = (self.theta + angle).to_radians().sin_cos();
        Point::new(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }

    /// Permanently adds `delta` degrees to the stored angle.
    pub fn rotate(&mut self, delta: f32) {
        self.theta += delta;
    }

    /// Copy with `delta` degrees folded into the stored angle.
    pub fn rotated(&self, delta: f32) -> PolarPoint {
        let mut p = *self;
        p.rotate(delta);
        p
    }
}
