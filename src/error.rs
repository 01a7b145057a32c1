use thiserror::Error;

/// The legacy sentinel returned when popping an empty stack.
pub const UNDERFLOW: &str = "Underflow";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("Underflow")]
    Underflow,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("Heap is empty")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has {0} cells, expected 81")]
    BadLength(usize),

    #[error("unexpected character '{0}' in grid")]
    BadCell(char),

    #[error("cell value {value} at row {row}, column {col} is not 0-9")]
    BadValue { row: usize, col: usize, value: u8 },

    #[error("conflicting value at row {row}, column {col}")]
    Conflict { row: usize, col: usize },

    #[error("grid has no solution")]
    Unsolvable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown level '{0}'")]
pub struct ParseLevelError(pub String);
