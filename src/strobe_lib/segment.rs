// src/strobe_lib/segment.rs

use super::canvas::Canvas;
use super::color::{palette, Color};
use super::geometry::{Point, PolarPoint};

pub const LINE_WIDTH: f32 = 1.0;

/// Line segment between two polar points. Live segments are drawn at the
/// reference angle; baked ones (see [`Segment::save_at`]) are drawn at 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: PolarPoint,
    end: PolarPoint,
    color: Color,
}

impl Segment {
    pub fn new(start: PolarPoint, end: PolarPoint) -> Self {
        Self::with_color(start, end, palette::segment())
    }

    pub fn with_color(start: PolarPoint, end: PolarPoint, color: Color) -> Self {
        Self { start, end, color }
    }

    pub fn start(&self) -> &PolarPoint {
        &self.start
    }

    pub fn end(&self) -> &PolarPoint {
        &self.end
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Both endpoints in cartesian space at rotation `angle`.
    pub fn endpoints(&self, angle: f32) -> (Point, Point) {
        (self.start.to_xy(angle), self.end.to_xy(angle))
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, angle: f32) {
        self.draw_with(canvas, angle, self.color);
    }

    pub fn draw_with<C: Canvas + ?Sized>(&self, canvas: &mut C, angle: f32, color: Color) {
        let (p1, p2) = self.endpoints(angle);
        canvas.draw_line(p1, p2, color, LINE_WIDTH);
    }

    /// New segment whose rest orientation is this one rotated by `angle`.
    pub fn save_at(&self, angle: f32) -> Segment {
        Segment {
            start: self.start.rotated(angle),
            end: self.end.rotated(angle),
            color: self.color,
        }
    }

    pub fn rotate(&mut self, delta: f32) {
        self.start.rotate(delta);
        self.end.rotate(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strobe_lib::canvas::RecordingCanvas;

    const CENTER: Point = Point { x: 300.0, y: 300.0 };

    fn sample() -> Segment {
        Segment::new(
            Point::new(100.0, 0.0).to_polar(CENTER),
            Point::new(120.0, -20.0).to_polar(CENTER),
        )
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn baked_segment_at_zero_matches_live_at_angle() {
        let seg = sample();
        for angle in [0.0, 6.0, 60.0, 174.0, 300.0, 354.0] {
            let baked = seg.save_at(angle);
            let (a1, a2) = baked.endpoints(0.0);
            let (b1, b2) = seg.endpoints(angle);
            assert!(close(a1, b1) && close(a2, b2), "mismatch at {}", angle);
        }
    }

    #[test]
    fn save_at_leaves_original_untouched() {
        let seg = sample();
        let before = seg;
        let _ = seg.save_at(90.0);
        assert_eq!(seg, before);
    }

    #[test]
    fn draw_issues_one_line_between_rotated_endpoints() {
        let seg = sample();
        let mut canvas = RecordingCanvas::new();
        seg.draw(&mut canvas, 30.0);
        let lines: Vec<_> = canvas.lines().collect();
        assert_eq!(lines.len(), 1);
        let (p1, p2) = seg.endpoints(30.0);
        assert!(close(lines[0].0, p1) && close(lines[0].1, p2));
        assert_eq!(lines[0].2, palette::segment());
    }

    #[test]
    fn rotate_moves_both_endpoints() {
        let mut seg = sample();
        let expected = seg.endpoints(60.0);
        seg.rotate(60.0);
        let got = seg.endpoints(0.0);
        assert!(close(got.0, expected.0) && close(got.1, expected.1));
    }
}
