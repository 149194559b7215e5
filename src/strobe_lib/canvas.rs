// src/strobe_lib/canvas.rs

use super::color::Color;
use super::geometry::Point;

/// The drawing primitives the simulation needs from whatever displays it.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);
    fn draw_filled_rectangle(&mut self, p1: Point, p2: Point, color: Color);
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line { from: Point, to: Point, color: Color, width: f32 },
    FilledRectangle { p1: Point, p2: Point, color: Color },
    Circle { center: Point, radius: f32, color: Color, width: f32 },
}

/// Canvas that keeps the commands of the current frame. Used for headless
/// runs and tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    pub fn lines_with_color(&self, color: Color) -> usize {
        self.lines().filter(|(_, _, c)| *c == color).count()
    }
}

impl Canvas for RecordingCanvas {
    // A clear starts a new frame
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn draw_filled_rectangle(&mut self, p1: Point, p2: Point, color: Color) {
        self.commands.push(DrawCommand::FilledRectangle { p1, p2, color });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle { center, radius, color, width });
    }
}
