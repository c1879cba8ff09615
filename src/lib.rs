pub mod error;
pub mod math;
pub mod gates;
pub mod circuit;
pub mod tree;
pub mod xor;
pub mod vectorized;
pub mod calculator;
pub mod report;

// Convenience re-exports
pub use error::{LogicError, Result};
pub use math::matrix::{Matrix, BitMatrix};
pub use gates::gate::Gate;
pub use gates::truth_table::TruthTable;
pub use circuit::expr::Expr;
pub use tree::tree::{DecisionTree, TestCase};
pub use tree::node::Node;
pub use xor::network::Network;
pub use vectorized::dataset::Dataset;
pub use calculator::calculator::Calculator;
pub use report::config::{DemoConfig, Section};
pub use report::demo::run_demo;
