use crate::components::firefly::Firefly;
use crate::components::tree::{sort_by_depth, Tree};

/// The entity sets of one mounted backdrop.
/// Sizes are fixed after generation: nothing is spawned or despawned per frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    fireflies: Vec<Firefly>,
    /// Kept in paint order.
    trees: Vec<Tree>,
}

impl Scene {
    /// Build a scene. Trees are sorted into paint order once, here.
    pub fn new(fireflies: Vec<Firefly>, mut trees: Vec<Tree>) -> Self {
        sort_by_depth(&mut trees);
        Self { fireflies, trees }
    }

    pub fn fireflies(&self) -> &[Firefly] {
        &self.fireflies
    }

    /// Mutable access for in-place simulation. The slice cannot grow.
    pub fn fireflies_mut(&mut self) -> &mut [Firefly] {
        &mut self.fireflies
    }

    /// Trees in paint order.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }
}
