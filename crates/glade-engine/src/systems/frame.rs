use crate::api::config::BackdropConfig;
use crate::api::types::SurfaceSize;
use crate::core::rng::RandomSource;
use crate::core::scene::Scene;
use crate::renderer::traits::Painter;

use super::fireflies::simulate_fireflies;
use super::forest::draw_forest;
use super::sky::draw_static_field;

/// Render one frame: static field, then trees, then fireflies.
///
/// No scheduling lives here; call it directly to advance the scene by one frame.
pub fn render_frame<P: Painter, R: RandomSource>(
    painter: &mut P,
    scene: &mut Scene,
    size: SurfaceSize,
    config: &BackdropConfig,
    rng: &mut R,
) {
    painter.begin_frame();
    draw_static_field(painter, size, config, rng);
    draw_forest(painter, scene.trees(), size, config.ground_height);
    simulate_fireflies(painter, scene.fireflies_mut(), size);
}
