//! Firefly simulation: advance in place, then paint.

use crate::api::types::SurfaceSize;
use crate::components::firefly::Firefly;
use crate::renderer::traits::{Color, Painter};

pub const FIREFLY_COLOR: Color = Color::new(1.0, 0.9, 0.4, 1.0);

/// Step every firefly one frame and paint it at its new position.
/// Mutates in place; allocates nothing.
pub fn simulate_fireflies<P: Painter>(painter: &mut P, fireflies: &mut [Firefly], size: SurfaceSize) {
    for firefly in fireflies.iter_mut() {
        firefly.step(size);
        painter.fill_circle(
            firefly.pos,
            firefly.size,
            FIREFLY_COLOR.with_alpha(firefly.paint_alpha()),
        );
    }
}
