//! Static field: sky gradient, star field and ground strip.
//! Stateless; repainted in full every frame.

use glam::Vec2;

use crate::api::config::{BackdropConfig, StarSizing};
use crate::api::types::SurfaceSize;
use crate::core::rng::RandomSource;
use crate::renderer::traits::{Color, GradientStop, Painter};

pub const SKY_STOPS: [GradientStop; 3] = [
    GradientStop::new(0.0, Color::new(0.043, 0.122, 0.071, 1.0)),
    GradientStop::new(0.5, Color::new(0.102, 0.239, 0.141, 1.0)),
    GradientStop::new(1.0, Color::new(0.024, 0.078, 0.039, 1.0)),
];
pub const STAR_COLOR: Color = Color::new(1.0, 1.0, 0.9, 0.8);
pub const GROUND_COLOR: Color = Color::new(0.039, 0.102, 0.055, 1.0);

/// Stars live in the top 60% of the surface.
const STAR_BAND: f32 = 0.6;
const STAR_STRIDE_X: f32 = 123.0;
const STAR_STRIDE_Y: f32 = 456.0;
const STAR_MAX_SIZE: f32 = 2.0;

/// Deterministic position of star `i`.
pub fn star_position(i: usize, size: SurfaceSize) -> Vec2 {
    let i = i as f32;
    Vec2::new(
        (i * STAR_STRIDE_X).rem_euclid(size.width),
        (i * STAR_STRIDE_Y).rem_euclid(STAR_BAND * size.height),
    )
}

/// Index-derived star size in [0, 2), used by `StarSizing::Stable`.
pub fn stable_star_size(i: usize) -> f32 {
    ((i * 789) % 200) as f32 / 100.0
}

/// Paint the sky gradient, the star field and the ground strip.
pub fn draw_static_field<P: Painter, R: RandomSource>(
    painter: &mut P,
    size: SurfaceSize,
    config: &BackdropConfig,
    rng: &mut R,
) {
    painter.fill_vertical_gradient(size, &SKY_STOPS);

    // Modulo by zero is undefined: no stars on a collapsed surface.
    if !size.is_empty() {
        for i in 0..config.star_count {
            let pos = star_position(i, size);
            let star = match config.star_sizing {
                StarSizing::Flicker => rng.range(0.0, STAR_MAX_SIZE),
                StarSizing::Stable => stable_star_size(i),
            };
            painter.fill_rect(pos, star, star, STAR_COLOR);
        }
    }

    let ground = config.ground_height;
    painter.fill_rect(
        Vec2::new(0.0, size.height - ground),
        size.width,
        ground,
        GROUND_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::renderer::recorder::{PaintCommand, RecordingPainter};

    const SIZE: SurfaceSize = SurfaceSize::new(1024.0, 768.0);

    fn paint(config: &BackdropConfig, rng: &mut Rng) -> RecordingPainter {
        let mut p = RecordingPainter::new();
        p.begin_frame();
        draw_static_field(&mut p, SIZE, config, rng);
        p
    }

    #[test]
    fn gradient_then_stars_then_ground() {
        let config = BackdropConfig::default();
        let p = paint(&config, &mut Rng::new(1));
        let cmds = p.commands();
        assert_eq!(cmds.len(), 1 + 200 + 1);
        assert!(matches!(cmds[0], PaintCommand::Gradient { .. }));

        let (pos, w, h, color) = p.rects().last().unwrap();
        assert_eq!(pos, Vec2::new(0.0, 718.0));
        assert_eq!((w, h), (1024.0, 50.0));
        assert_eq!(color, GROUND_COLOR);
    }

    #[test]
    fn star_positions_follow_formula() {
        assert_eq!(star_position(0, SIZE), Vec2::ZERO);
        // 9 * 123 = 1107 -> 83; 9 * 456 = 4104 mod 460.8 = 417.6
        let p = star_position(9, SIZE);
        assert!((p.x - 83.0).abs() < 1e-3, "x = {}", p.x);
        assert!((p.y - 417.6).abs() < 1e-2, "y = {}", p.y);
    }

    #[test]
    fn stars_stay_in_upper_band() {
        for i in 0..200 {
            let p = star_position(i, SIZE);
            assert!(p.x >= 0.0 && p.x < 1024.0);
            assert!(p.y >= 0.0 && p.y < 0.6 * 768.0 + 1e-3);
        }
    }

    #[test]
    fn flicker_rerolls_sizes_but_not_positions() {
        let config = BackdropConfig::default();
        let mut rng = Rng::new(11);
        let a: Vec<_> = paint(&config, &mut rng).rects().collect();
        let b: Vec<_> = paint(&config, &mut rng).rects().collect();

        let stars = 0..200;
        assert!(a[stars.clone()].iter().zip(&b[stars.clone()]).all(|(x, y)| x.0 == y.0));
        assert!(a[stars.clone()].iter().zip(&b[stars]).any(|(x, y)| x.1 != y.1));
    }

    #[test]
    fn stable_sizes_repeat() {
        let config = BackdropConfig {
            star_sizing: StarSizing::Stable,
            ..BackdropConfig::default()
        };
        let mut rng = Rng::new(11);
        let a: Vec<_> = paint(&config, &mut rng).rects().collect();
        let b: Vec<_> = paint(&config, &mut rng).rects().collect();
        assert_eq!(a, b);
        assert!((0..200).all(|i| (0.0..2.0).contains(&stable_star_size(i))));
    }

    #[test]
    fn empty_surface_paints_no_stars() {
        let mut p = RecordingPainter::new();
        draw_static_field(
            &mut p,
            SurfaceSize::new(0.0, 0.0),
            &BackdropConfig::default(),
            &mut Rng::new(1),
        );
        assert_eq!(p.commands().len(), 2);
    }
}
