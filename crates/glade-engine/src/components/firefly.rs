use glam::Vec2;

use crate::api::types::SurfaceSize;

/// A single firefly: drifts at constant velocity and pulses its opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Firefly {
    /// Position in surface pixels.
    pub pos: Vec2,
    /// Radius in pixels, fixed at creation.
    pub size: f32,
    /// Per-frame displacement, fixed at creation.
    pub velocity: Vec2,
    /// Current opacity. May overshoot [0, 1] by one step before reversing.
    pub opacity: f32,
    /// Signed per-frame opacity step (±`OPACITY_STEP`).
    pub opacity_dir: f32,
}

impl Firefly {
    pub const OPACITY_STEP: f32 = 0.01;
    pub const MIN_SIZE: f32 = 1.0;
    pub const MAX_SIZE: f32 = 4.0;
    /// Each velocity component lies strictly inside (-MAX_SPEED, MAX_SPEED).
    pub const MAX_SPEED: f32 = 0.25;

    pub fn new(pos: Vec2, size: f32, velocity: Vec2, opacity: f32, opacity_dir: f32) -> Self {
        Self {
            pos,
            size,
            velocity,
            opacity,
            opacity_dir,
        }
    }

    /// Advance one frame: move, pulse, wrap toroidally against `bounds`.
    pub fn step(&mut self, bounds: SurfaceSize) {
        self.pos += self.velocity;

        // Reverse direction instead of clamping, so the pulse overshoots by one step.
        self.opacity += self.opacity_dir;
        if self.opacity >= 1.0 || self.opacity <= 0.0 {
            self.opacity_dir = -self.opacity_dir;
        }

        if self.pos.x < 0.0 {
            self.pos.x = bounds.width;
        } else if self.pos.x > bounds.width {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = bounds.height;
        } else if self.pos.y > bounds.height {
            self.pos.y = 0.0;
        }
    }

    /// Opacity to paint with. The stored value is left untouched.
    pub fn paint_alpha(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    fn firefly_at(x: f32, y: f32, vx: f32, vy: f32) -> Firefly {
        Firefly::new(Vec2::new(x, y), 2.0, Vec2::new(vx, vy), 0.5, Firefly::OPACITY_STEP)
    }

    #[test]
    fn wraps_right_edge() {
        let mut f = firefly_at(800.0 - 0.01, 300.0, 0.2, 0.0);
        f.step(BOUNDS);
        assert!(f.pos.x >= 0.0 && f.pos.x <= 0.2, "x = {}", f.pos.x);
    }

    #[test]
    fn wraps_left_edge() {
        let mut f = firefly_at(0.01, 300.0, -0.2, 0.0);
        f.step(BOUNDS);
        assert!(f.pos.x <= 800.0 && f.pos.x >= 800.0 - 0.2, "x = {}", f.pos.x);
    }

    #[test]
    fn wraps_bottom_edge() {
        let mut f = firefly_at(400.0, 600.0 - 0.01, 0.0, 0.2);
        f.step(BOUNDS);
        assert!(f.pos.y >= 0.0 && f.pos.y <= 0.2, "y = {}", f.pos.y);
    }

    #[test]
    fn wraps_top_edge() {
        let mut f = firefly_at(400.0, 0.01, 0.0, -0.2);
        f.step(BOUNDS);
        assert!(f.pos.y <= 600.0 && f.pos.y >= 600.0 - 0.2, "y = {}", f.pos.y);
    }

    #[test]
    fn moves_by_velocity_inside_bounds() {
        let mut f = firefly_at(100.0, 100.0, 0.1, -0.2);
        f.step(BOUNDS);
        assert!((f.pos.x - 100.1).abs() < 1e-4);
        assert!((f.pos.y - 99.8).abs() < 1e-4);
    }

    #[test]
    fn opacity_overshoots_then_reverses() {
        let mut f = firefly_at(100.0, 100.0, 0.0, 0.0);
        f.opacity = 0.995;
        f.opacity_dir = 0.01;

        f.step(BOUNDS);
        assert!(f.opacity >= 1.0, "opacity = {}", f.opacity);
        assert_eq!(f.opacity_dir, -0.01);

        let peak = f.opacity;
        f.step(BOUNDS);
        assert!(f.opacity < peak, "opacity should fall: {} -> {}", peak, f.opacity);
    }

    #[test]
    fn opacity_reverses_at_zero() {
        let mut f = firefly_at(100.0, 100.0, 0.0, 0.0);
        f.opacity = 0.004;
        f.opacity_dir = -0.01;

        f.step(BOUNDS);
        assert!(f.opacity <= 0.0);
        assert_eq!(f.opacity_dir, 0.01);
        assert_eq!(f.paint_alpha(), 0.0);

        f.step(BOUNDS);
        assert!(f.opacity > 0.0);
    }

    #[test]
    fn opacity_never_escapes_band() {
        let mut f = firefly_at(100.0, 100.0, 0.0, 0.0);
        f.opacity = 0.0;
        f.opacity_dir = -0.01;
        for _ in 0..5000 {
            f.step(BOUNDS);
            assert!(f.opacity >= -0.0101 && f.opacity <= 1.0101, "opacity = {}", f.opacity);
        }
    }
}
