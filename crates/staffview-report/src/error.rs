use std::error::Error;
use std::fmt;

/// Custom error type for dataset and statistics shape failures
#[derive(Debug)]
pub enum DataError {
    /// A column's length disagrees with the rest of the table.
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
    /// An operation received a matrix with zero rows or columns.
    EmptyMatrix,
    /// Paired inputs must have equal length.
    LengthMismatch,
    /// Clustering needs at least two items to merge.
    TooFewItems(usize),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataError::ColumnLengthMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "Column '{}' has {} rows, expected {}",
                column, actual, expected
            ),
            DataError::EmptyMatrix => write!(f, "Operation requires a non-empty matrix"),
            DataError::LengthMismatch => write!(f, "Paired inputs must have equal length"),
            DataError::TooFewItems(n) => {
                write!(f, "Clustering requires at least 2 items, got {}", n)
            }
        }
    }
}

impl Error for DataError {}
