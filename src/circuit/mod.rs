pub mod expr;
pub mod walkthrough;

pub use expr::{Expr, equivalent, xor_sum_of_products, xor_or_and_nand};
pub use walkthrough::{CircuitStep, IndividualComputation, nand_walkthrough, individual_computations};
