use serde::{Deserialize, Serialize};

/// How star sizes are chosen each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarSizing {
    /// Fresh random size per star per frame. Stars visibly twinkle.
    #[default]
    Flicker,
    /// Size derived from the star index, identical every frame.
    Stable,
}

/// Backdrop configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Number of fireflies generated at mount (default: 100).
    pub firefly_count: usize,
    /// Number of trees generated at mount (default: 30).
    pub tree_count: usize,
    /// Number of stars in the static field (default: 200).
    pub star_count: usize,
    /// Height of the ground strip in pixels (default: 50).
    pub ground_height: f32,
    pub star_sizing: StarSizing,
    /// RNG seed. `None` lets the host pick one from its entropy source.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            firefly_count: 100,
            tree_count: 30,
            star_count: 200,
            ground_height: 50.0,
            star_sizing: StarSizing::Flicker,
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
