// src/strobe_lib/mod.rs

pub mod border;
pub mod canvas;
pub mod capture;
pub mod color;
pub mod config;
pub mod controller;
pub mod fade;
pub mod geometry;
pub mod reference;
pub mod scene_logic;
pub mod segment;
pub mod state;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use capture::{ContainmentPolicy, Rectangle};
pub use color::Color;
pub use config::{CaptureMode, StrobeConfig};
pub use controller::KeyAction;
pub use fade::FadeSegment;
pub use geometry::{Point, PolarPoint};
pub use reference::Reference;
pub use scene_logic::{update, FrameReport};
pub use segment::Segment;
pub use state::GameState;
