// src/lib.rs

pub mod demo_scene;
pub mod rendering_lib;
pub mod strobe_lib;
