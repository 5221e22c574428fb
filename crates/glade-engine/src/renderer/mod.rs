pub mod traits;
pub mod recorder;
#[cfg(feature = "vectors")]
pub mod vector;

pub use traits::{Color, GradientStop, Painter};
pub use recorder::{PaintCommand, RecordingPainter};
#[cfg(feature = "vectors")]
pub use vector::{VectorPainter, VectorVertex};
