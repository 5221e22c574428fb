pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod host;

// Re-export key types at crate root for convenience
pub use api::backdrop::Backdrop;
pub use api::config::{BackdropConfig, StarSizing};
pub use api::types::{SurfaceSize, FrameRequest, ResizeSubscription};
pub use components::firefly::Firefly;
pub use components::tree::{Tree, sort_by_depth};
pub use core::rng::{Rng, RandomSource};
pub use core::scene::Scene;
pub use host::{Host, BackdropMount};
pub use renderer::traits::{Painter, Color, GradientStop};
pub use renderer::recorder::{RecordingPainter, PaintCommand};
pub use systems::frame::render_frame;
pub use systems::generate::generate_scene;

#[cfg(feature = "vectors")]
pub use renderer::vector::{VectorPainter, VectorVertex};
