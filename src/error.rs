//! Errors
//!
//! Error type shared by every module of the crate.
use thiserror::Error;

/// Errors raised while evaluating gates, circuits, trees and datasets.
#[derive(Debug, Error)]
pub enum LogicError {
    /// A gate or circuit input was something other than 0 or 1.
    #[error("Invalid bit value {0}, expected 0 or 1.")]
    InvalidBit(i64),
    /// Gate name could not be parsed.
    #[error("Unknown gate {0:?}, expected one of AND, OR, NOT, XOR, NAND, NOR.")]
    UnknownGate(String),
    /// First value is the gate name, second the expected input count, third what was passed.
    #[error("Gate {0} takes {1} input(s) but {2} were provided.")]
    ArityMismatch(String, usize, usize),
    /// A circuit referenced an input index that was not supplied.
    #[error("Circuit input {0} is not bound, only {1} input(s) provided.")]
    UnboundInput(usize, usize),
    /// Element-wise operation over vectors of different lengths.
    #[error("Vectors have different lengths: {0} and {1}.")]
    LengthMismatch(usize, usize),
    /// Rows of a bit matrix have different widths.
    #[error("Row {0} has {1} column(s), expected {2}.")]
    RaggedRow(usize, usize, usize),
    /// Operands of a matrix operation have incompatible shapes.
    #[error("Cannot combine a {0}x{1} matrix with a {2}x{3} matrix.")]
    ShapeMismatch(usize, usize, usize, usize),
    /// Requested column is outside the matrix.
    #[error("Column {0} is out of range for a matrix with {1} column(s).")]
    ColumnOutOfRange(usize, usize),
    /// Weight search range exceeds the largest grid searched; first value is the
    /// offending bound, second the limit.
    #[error("Weight grid bound {0} is outside [-{1}, {1}].")]
    GridTooLarge(i64, i32),
    /// A decision tree split tested a feature the sample does not carry.
    #[error("Feature {0:?} is missing from the sample.")]
    MissingFeature(String),
    /// Unable to write a file.
    #[error("Unable to write {0}: {1}")]
    UnableToWrite(String, String),
    /// Unable to read or parse a file.
    #[error("Unable to read {0}: {1}")]
    UnableToRead(String, String),
    /// The interactive line editor failed.
    #[error("Unable to read input: {0}")]
    Input(String),
    /// Failure writing rendered output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Failure serializing a JSON document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LogicError>;
