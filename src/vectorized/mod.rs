pub mod ops;
pub mod dataset;

pub use ops::{apply, apply_unary, format_array};
pub use dataset::{Dataset, VectorizedResults};
