// src/strobe_lib/color.rs

/// Premultiplied RGBA colour with float channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Builds a premultiplied colour from 0-255 channels.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_channels(r as f32, g as f32, b as f32, a as f32)
    }

    /// Same as [`Color::rgba8`] but with a fractional alpha on the 0-255 scale,
    /// clamped into range.
    pub fn from_channels(r: f32, g: f32, b: f32, a: f32) -> Self {
        let fa = (a / 255.0).clamp(0.0, 1.0);
        Self {
            r: r / 255.0 * fa,
            g: g / 255.0 * fa,
            b: b / 255.0 * fa,
            a: fa,
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

pub mod palette {
    use super::Color;

    pub fn segment() -> Color { Color::rgba8(0, 0, 255, 255) }
    pub fn flash() -> Color { Color::rgba8(30, 255, 10, 30) }
    pub fn flash_active() -> Color { Color::rgba8(30, 255, 10, 90) }
    pub fn reference() -> Color { Color::rgba8(30, 255, 10, 255) }
    pub fn border() -> Color { Color::rgba8(255, 0, 0, 255) }
    pub fn captured() -> Color { Color::rgba8(255, 69, 0, 255) }
    pub fn debug_overlay() -> Color { Color::rgba8(200, 200, 200, 120) }

    /// Channels of [`captured`], used to rebuild the colour as alpha decays.
    pub const CAPTURED_RGB: (f32, f32, f32) = (255.0, 69.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_premultiplied() {
        let c = Color::rgba8(255, 0, 0, 51);
        assert!((c.a - 0.2).abs() < 1e-6);
        assert!((c.r - 0.2).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn negative_alpha_clamps_to_transparent() {
        let c = Color::from_channels(255.0, 69.0, 0.0, -3.0);
        assert_eq!(c.to_array(), [0.0, 0.0, 0.0, 0.0]);
    }
}
