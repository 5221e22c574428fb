//! Paint contract for drawable surfaces.
//!
//! The backdrop only needs four immediate-mode operations: filled rectangles,
//! filled closed polygons, filled circles and a full-surface vertical gradient.
//! Backends: `RecordingPainter` (headless/tests), `VectorPainter` (lyon
//! tessellation, feature `vectors`) and the Canvas2D painter in `glade-web`.

use glam::Vec2;

use crate::api::types::SurfaceSize;

/// RGBA color, each component in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create an opaque color from hue (degrees), saturation and lightness (0.0 - 1.0).
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Self::new(r + m, g + m, b + m, 1.0)
    }

    /// Same color with the given alpha, clamped to 0.0 - 1.0.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Components as 0-255 bytes (alpha included).
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// One stop of a linear gradient. `offset` runs 0.0 (top) to 1.0 (bottom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A 2D immediate-mode drawable surface.
pub trait Painter {
    /// Rebind the surface's pixel size.
    fn set_size(&mut self, size: SurfaceSize);

    /// Called before the first paint operation of every frame.
    fn begin_frame(&mut self) {}

    /// Fill the whole `size` area with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, size: SurfaceSize, stops: &[GradientStop]);

    /// Fill an axis-aligned rectangle with its top-left corner at `pos`.
    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color);

    /// Fill a closed polygon. Fewer than three points paints nothing.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Fill a circle. Non-positive radii paint nothing.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 0.01 && (a.g - b.g).abs() < 0.01 && (a.b - b.b).abs() < 0.01
    }

    #[test]
    fn hsl_primaries() {
        assert!(approx(Color::hsl(0.0, 1.0, 0.5), Color::new(1.0, 0.0, 0.0, 1.0)));
        assert!(approx(Color::hsl(120.0, 1.0, 0.5), Color::new(0.0, 1.0, 0.0, 1.0)));
        assert!(approx(Color::hsl(240.0, 1.0, 0.5), Color::new(0.0, 0.0, 1.0, 1.0)));
        assert!(approx(Color::hsl(360.0, 1.0, 0.5), Color::new(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn hsl_forest_green() {
        // hsl(120, 40%, 20%) = rgb(31, 71, 31)
        let c = Color::hsl(120.0, 0.4, 0.2).to_rgba8();
        assert_eq!(c, [31, 71, 31, 255]);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::rgb8(255, 0, 0).with_alpha(1.2).a, 1.0);
        assert_eq!(Color::rgb8(255, 0, 0).with_alpha(-0.01).a, 0.0);
    }
}
