pub mod gate;
pub mod truth_table;

pub use gate::{Gate, and, or, not, xor, nand, nor, check_bit};
pub use truth_table::{TruthTable, TruthRow};
