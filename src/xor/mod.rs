pub mod activation;
pub mod layer;
pub mod network;
pub mod separability;
pub mod problem;

pub use activation::Activation;
pub use layer::Layer;
pub use network::Network;
pub use separability::{LinearUnit, find_linear_unit, MAX_GRID};
pub use problem::{DecompositionRow, breakdown_consistent, decomposition_rows, xor_rows};
