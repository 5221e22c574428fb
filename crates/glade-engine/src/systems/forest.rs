//! Tree compositor: trunk plus stacked foliage tiers, in paint order.

use glam::Vec2;

use crate::api::types::SurfaceSize;
use crate::components::tree::Tree;
use crate::renderer::traits::{Color, Painter};

pub const TRUNK_WIDTH: f32 = 10.0;
/// Trunk height as a fraction of tree height.
pub const TRUNK_RATIO: f32 = 0.3;
pub const TRUNK_COLOR: Color = Color::new(0.239, 0.157, 0.090, 1.0);

/// Each tier up is this much narrower.
pub const TIER_SHRINK: f32 = 15.0;
const FOLIAGE_HUE: f32 = 120.0;
const FOLIAGE_HUE_STEP: f32 = 10.0;
const FOLIAGE_SATURATION: f32 = 0.4;
const FOLIAGE_LIGHTNESS: f32 = 0.20;
const FOLIAGE_LIGHTNESS_STEP: f32 = 0.05;

/// Fill color of foliage tier `tier` (0 = lowest).
pub fn tier_color(tier: u32) -> Color {
    let t = tier as f32;
    Color::hsl(
        FOLIAGE_HUE + FOLIAGE_HUE_STEP * t,
        FOLIAGE_SATURATION,
        FOLIAGE_LIGHTNESS + FOLIAGE_LIGHTNESS_STEP * t,
    )
}

/// Triangle vertices (left base, right base, apex) of foliage tier `tier`.
///
/// Tiers overlap: spacing is `foliage / (layers + 1)` and each tier is two
/// spacings tall, so the top apex lands exactly `tree.height` above `ground_y`.
pub fn tier_triangle(tree: &Tree, tier: u32, ground_y: f32) -> [Vec2; 3] {
    let trunk_h = tree.height * TRUNK_RATIO;
    let spacing = (tree.height - trunk_h) / (tree.layers + 1) as f32;
    let base_y = ground_y - trunk_h - tier as f32 * spacing;
    let apex_y = base_y - 2.0 * spacing;
    let half = (tree.width - TIER_SHRINK * tier as f32).max(0.0) / 2.0;
    [
        Vec2::new(tree.x - half, base_y),
        Vec2::new(tree.x + half, base_y),
        Vec2::new(tree.x, apex_y),
    ]
}

/// Draw one tree standing on `ground_y`.
pub fn draw_tree<P: Painter>(painter: &mut P, tree: &Tree, ground_y: f32) {
    let trunk_h = tree.height * TRUNK_RATIO;
    painter.fill_rect(
        Vec2::new(tree.x - TRUNK_WIDTH / 2.0, ground_y - trunk_h),
        TRUNK_WIDTH,
        trunk_h,
        TRUNK_COLOR,
    );

    for tier in 0..tree.layers {
        painter.fill_polygon(&tier_triangle(tree, tier, ground_y), tier_color(tier));
    }
}

/// Draw all trees in slice order. `trees` must already be in paint order
/// (see `sort_by_depth`); the scene keeps them that way.
pub fn draw_forest<P: Painter>(
    painter: &mut P,
    trees: &[Tree],
    size: SurfaceSize,
    ground_height: f32,
) {
    let ground_y = size.height - ground_height;
    for tree in trees {
        draw_tree(painter, tree, ground_y);
    }
}
