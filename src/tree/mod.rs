pub mod comparison;
pub mod node;
pub mod tree;
pub mod weather;

pub use comparison::Comparison;
pub use node::{Node, Decision, Trace, Features};
pub use tree::{DecisionTree, TestCase};
