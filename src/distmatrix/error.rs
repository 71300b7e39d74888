use thiserror::Error;

/// Error querying or populating a distance matrix
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Position outside of the matrix
    #[error("Position {position} is out of range for a matrix of {count} points")]
    OutOfRange { position: usize, count: usize },
    /// Strict lookup of an id that is not in the collection
    #[error("Point `{0}` is not in the collection")]
    UnknownIdentifier(String),
    /// Insertion of an id that is already in the collection
    #[error("Point `{0}` is already in the collection")]
    DuplicateIdentifier(String),
    /// Query hit a row that was never installed
    #[error("Row {0} of the distance matrix is not populated")]
    RowNotPopulated(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
