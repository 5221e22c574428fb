//! Scene generation. Runs once per mount.

use glam::Vec2;

use crate::api::config::BackdropConfig;
use crate::api::types::SurfaceSize;
use crate::components::firefly::Firefly;
use crate::components::tree::Tree;
use crate::core::rng::RandomSource;
use crate::core::scene::Scene;

/// Spawn one firefly uniformly over the surface.
pub fn spawn_firefly<R: RandomSource>(size: SurfaceSize, rng: &mut R) -> Firefly {
    let pos = Vec2::new(rng.range(0.0, size.width), rng.range(0.0, size.height));
    let radius = rng.range(Firefly::MIN_SIZE, Firefly::MAX_SIZE);
    let velocity = Vec2::new(rng.centered(Firefly::MAX_SPEED), rng.centered(Firefly::MAX_SPEED));
    let opacity = rng.range(0.0, 1.0);
    let dir = if rng.coin() {
        Firefly::OPACITY_STEP
    } else {
        -Firefly::OPACITY_STEP
    };
    Firefly::new(pos, radius, velocity, opacity, dir)
}

/// Spawn one tree at a uniform x across the surface width.
pub fn spawn_tree<R: RandomSource>(size: SurfaceSize, rng: &mut R) -> Tree {
    let x = rng.range(0.0, size.width);
    let height = rng.range(Tree::MIN_HEIGHT, Tree::MAX_HEIGHT);
    let width = rng.range(Tree::MIN_WIDTH, Tree::MAX_WIDTH);
    let layers = if rng.coin() {
        Tree::MIN_LAYERS
    } else {
        Tree::MAX_LAYERS
    };
    Tree::new(x, height, width, layers)
}

/// Build the fixed entity sets for a surface of `size`.
pub fn generate_scene<R: RandomSource>(
    size: SurfaceSize,
    config: &BackdropConfig,
    rng: &mut R,
) -> Scene {
    let fireflies = (0..config.firefly_count)
        .map(|_| spawn_firefly(size, rng))
        .collect();
    let trees = (0..config.tree_count).map(|_| spawn_tree(size, rng)).collect();

    log::debug!(
        "generate_scene: {} fireflies, {} trees for {}x{}",
        config.firefly_count,
        config.tree_count,
        size.width,
        size.height
    );
    Scene::new(fireflies, trees)
}
