pub mod gates;
pub mod circuit;
pub mod tree;
pub mod xor;
pub mod vectorized;
pub mod takeaways;

pub use gates::GatesReport;
pub use circuit::CircuitReport;
pub use tree::{TreeReport, CaseOutcome};
pub use xor::{XorReport, SeparabilityResult};
pub use vectorized::VectorizedReport;
