pub mod menu;
pub mod source;
pub mod calculator;

pub use menu::MenuChoice;
pub use source::{LineSource, ReaderSource, EditorSource};
pub use calculator::{Calculator, describe_operation};
