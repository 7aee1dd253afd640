//! Error types for benchratio

use thiserror::Error;

/// Crate error type
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric field in a benchmark line failed to parse
    #[error("invalid numeric field {value:?} in benchmark line {line:?}")]
    InvalidNumber { value: String, line: String },

    /// The input held no benchmark record lines
    #[error("no benchmark records found in input")]
    NoRecords,

    /// The input named a number of implementations other than the two compared
    #[error("expected exactly two implementations to compare, found {count}")]
    ImplementationCount { count: usize },

    /// A size bucket lacks one implementation's record
    #[error("size {size:?} has no record for implementation {implementation:?}")]
    MissingImplementation { size: String, implementation: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
