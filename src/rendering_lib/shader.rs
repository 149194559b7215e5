// src/rendering_lib/shader.rs

/// Pass-through shader for pixel-space triangles with a y-down origin.
pub const WGSL_SHADER_SOURCE: &str = r#"
struct Display {
    width: f32,
    height: f32,
}

@group(0) @binding(0)
var<uniform> display: Display;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(model: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.color = model.color;

    // [0, width] x [0, height] with y down -> NDC with y up
    let x = (model.position.x / (display.width / 2.0)) - 1.0;
    let y = 1.0 - (model.position.y / (display.height / 2.0));
    out.clip_position = vec4<f32>(x, y, 0.0, 1.0);

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
