mod arc;
pub mod path;
pub mod sampler;

pub use arc::ArcGeometry;
pub use path::{Path, PathBuilder};
pub use sampler::{wrap_index, PathPoints, SampleMode, DEFAULT_MIN_SPACING, DEFAULT_STEP};

pub use lyon;
