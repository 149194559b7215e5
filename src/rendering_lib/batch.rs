// src/rendering_lib/batch.rs

use glam::Vec2;

use super::vertex::Vertex;
use crate::strobe_lib::canvas::Canvas;
use crate::strobe_lib::color::Color;
use crate::strobe_lib::geometry::Point;

/// Quads used to approximate an unfilled circle.
pub const CIRCLE_SEGMENTS: usize = 96;

/// One frame's worth of primitives, tessellated into indexed triangles.
#[derive(Debug)]
pub struct FrameBatch {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    clear_color: Color,
}

impl Default for FrameBatch {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            clear_color: Color::BLACK,
        }
    }
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Fan-triangulates a convex polygon. Fewer than three points draw nothing.
    fn add_convex_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        let start = self.vertices.len() as u32;
        self.vertices.extend(points.iter().map(|&p| Vertex::new(p, color)));
        for i in 1..(points.len() as u32 - 1) {
            self.indices.extend_from_slice(&[start, start + i, start + i + 1]);
        }
    }
}

impl Canvas for FrameBatch {
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.indices.clear();
        self.clear_color = color;
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let (a, b) = (Vec2::from(from), Vec2::from(to));
        let Some(dir) = (b - a).try_normalize() else {
            return;
        };
        let offset = dir.perp() * (width / 2.0);
        self.add_convex_polygon(&[a + offset, b + offset, b - offset, a - offset], color);
    }

    fn draw_filled_rectangle(&mut self, p1: Point, p2: Point, color: Color) {
        let min = Vec2::from(p1).min(Vec2::from(p2));
        let max = Vec2::from(p1).max(Vec2::from(p2));
        self.add_convex_polygon(
            &[min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        let c = Vec2::from(center);
        let inner = (radius - width / 2.0).max(0.0);
        let outer = radius + width / 2.0;
        let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
        for i in 0..CIRCLE_SEGMENTS {
            let d0 = Vec2::from_angle(step * i as f32);
            let d1 = Vec2::from_angle(step * (i + 1) as f32);
            self.add_convex_polygon(
                &[c + d0 * inner, c + d0 * outer, c + d1 * outer, c + d1 * inner],
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::rgba8(255, 0, 0, 255)
    }

    #[test]
    fn line_becomes_one_quad() {
        let mut batch = FrameBatch::new();
        batch.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), red(), 2.0);
        assert_eq!(batch.vertices().len(), 4);
        assert_eq!(batch.indices(), &[0, 1, 2, 0, 2, 3]);
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.position[1]).collect();
        assert_eq!(ys, vec![1.0, 1.0, -1.0, -1.0]);
    }

    #[test]
    fn zero_length_line_is_skipped() {
        let mut batch = FrameBatch::new();
        batch.draw_line(Point::new(5.0, 5.0), Point::new(5.0, 5.0), red(), 1.0);
        assert!(batch.is_empty());
    }

    #[test]
    fn rectangle_corners_are_normalised_for_drawing() {
        let mut batch = FrameBatch::new();
        batch.draw_filled_rectangle(Point::new(10.0, 20.0), Point::new(0.0, 0.0), red());
        assert_eq!(batch.vertices()[0].position, [0.0, 0.0]);
        assert_eq!(batch.vertices()[2].position, [10.0, 20.0]);
    }

    #[test]
    fn circle_is_a_ring_of_quads() {
        let mut batch = FrameBatch::new();
        batch.draw_circle(Point::new(300.0, 300.0), 300.0, red(), 1.0);
        assert_eq!(batch.vertices().len(), CIRCLE_SEGMENTS * 4);
        assert_eq!(batch.indices().len(), CIRCLE_SEGMENTS * 6);
    }

    #[test]
    fn clear_resets_geometry_and_keeps_colour() {
        let mut batch = FrameBatch::new();
        batch.draw_line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), red(), 1.0);
        let blue = Color::rgba8(0, 0, 255, 255);
        batch.clear(blue);
        assert!(batch.is_empty() && batch.vertices().is_empty());
        assert_eq!(batch.clear_color(), blue);
    }
}
