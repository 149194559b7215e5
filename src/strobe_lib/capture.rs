// src/strobe_lib/capture.rs

use super::canvas::Canvas;
use super::color::{palette, Color};
use super::geometry::Point;
use super::segment::Segment;

/// How many endpoints of a segment must fall inside the flash rectangle for
/// it to be captured, and whether the edges count as inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ContainmentPolicy {
    /// Either endpoint, edges inclusive.
    #[default]
    EitherInclusive,
    /// Both endpoints, edges exclusive.
    BothExclusive,
}

/// Axis-aligned region fixed on the display. It does not rotate with the
/// reference.
///
/// The containment test compares against `p1` as the lower bound and `p2` as
/// the upper bound on both axes, without normalising. Corners given
/// bottom-left / top-right in screen space (larger y first) produce a
/// rectangle that never contains anything, so the test only behaves for a
/// region whose corners are supplied in (min, max) order.
#[derive(Clone, Debug)]
pub struct Rectangle {
    p1: Point,
    p2: Point,
    color: Color,
}

impl Rectangle {
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2, color: palette::flash() }
    }

    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// The flash region of a `width` x `height` display: the right half,
    /// spanning the middle half of the height.
    pub fn flash_for(width: f32, height: f32) -> Self {
        let hhalf = height / 2.0;
        let hq = hhalf / 2.0;
        Self::from_coords(width / 2.0, hhalf - hq, width, hhalf + hq)
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    fn holds_inclusive(&self, p: Point) -> bool {
        (p.x >= self.p1.x && p.x <= self.p2.x) && (p.y >= self.p1.y && p.y <= self.p2.y)
    }

    fn holds_exclusive(&self, p: Point) -> bool {
        (p.x > self.p1.x && p.x < self.p2.x) && (p.y > self.p1.y && p.y < self.p2.y)
    }

    pub fn contains(&self, seg: &Segment, angle: f32, policy: ContainmentPolicy) -> bool {
        let (start, end) = seg.endpoints(angle);
        match policy {
            ContainmentPolicy::EitherInclusive => {
                self.holds_inclusive(start) || self.holds_inclusive(end)
            }
            ContainmentPolicy::BothExclusive => {
                self.holds_exclusive(start) && self.holds_exclusive(end)
            }
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.draw_with(canvas, self.color);
    }

    pub fn draw_with<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Color) {
        canvas.draw_filled_rectangle(self.p1, self.p2, color);
    }
}

/// Whether the capture flash fires at `angle`. Both values are truncated to
/// whole degrees first; `period` must be at least 1.
pub fn on_capture_period(angle: f32, period: f32) -> bool {
    (angle as i64)
        .checked_rem(period as i64)
        .map_or(false, |rem| rem == 0)
}

/// Bakes every segment the flash holds at `angle`. Returns nothing when the
/// angle is off the flash period.
pub fn check_overlap(
    segments: &[Segment],
    flash: &Rectangle,
    angle: f32,
    period: f32,
    policy: ContainmentPolicy,
) -> Vec<Segment> {
    if !on_capture_period(angle, period) {
        return Vec::new();
    }
    segments
        .iter()
        .filter(|seg| flash.contains(seg, angle, policy))
        .map(|seg| seg.save_at(angle))
        .collect()
}
