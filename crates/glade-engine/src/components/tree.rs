use std::cmp::Ordering;

/// A stylised conifer. Immutable after generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// Horizontal center in surface pixels.
    pub x: f32,
    /// Total height from the ground line to the top apex.
    pub height: f32,
    /// Width of the lowest foliage tier.
    pub width: f32,
    /// Number of foliage tiers (3 or 4).
    pub layers: u32,
}

impl Tree {
    pub const MIN_HEIGHT: f32 = 150.0;
    pub const MAX_HEIGHT: f32 = 350.0;
    pub const MIN_WIDTH: f32 = 40.0;
    pub const MAX_WIDTH: f32 = 100.0;
    pub const MIN_LAYERS: u32 = 3;
    pub const MAX_LAYERS: u32 = 4;

    pub fn new(x: f32, height: f32, width: f32, layers: u32) -> Self {
        Self {
            x,
            height,
            width,
            layers,
        }
    }

    /// Paint order: ascending x.
    pub fn depth_cmp(&self, other: &Tree) -> Ordering {
        self.x.total_cmp(&other.x)
    }
}

/// Sort trees into paint order (ascending x). Stable, so equal x keeps
/// generation order.
pub fn sort_by_depth(trees: &mut [Tree]) {
    trees.sort_by(Tree::depth_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_ascending_by_x() {
        let mut trees = vec![
            Tree::new(300.0, 200.0, 50.0, 3),
            Tree::new(10.0, 200.0, 50.0, 3),
            Tree::new(150.0, 200.0, 50.0, 4),
        ];
        sort_by_depth(&mut trees);
        let xs: Vec<f32> = trees.iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![10.0, 150.0, 300.0]);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut trees = vec![
            Tree::new(50.0, 160.0, 50.0, 3),
            Tree::new(20.0, 200.0, 50.0, 3),
            Tree::new(50.0, 340.0, 90.0, 4),
        ];
        sort_by_depth(&mut trees);
        assert_eq!(trees[1].height, 160.0);
        assert_eq!(trees[2].height, 340.0);
    }

    #[test]
    fn resort_is_idempotent() {
        let mut trees = vec![
            Tree::new(5.0, 160.0, 50.0, 3),
            Tree::new(1.0, 200.0, 50.0, 3),
        ];
        sort_by_depth(&mut trees);
        let once = trees.clone();
        sort_by_depth(&mut trees);
        assert_eq!(trees, once);
    }
}
