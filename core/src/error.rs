use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    /// Multi-row insert invoked without any row argument sets
    #[error("Invalid multi-row INSERT call with no arguments")]
    NoArguments,

    /// Batch size that cannot partition the rows
    #[error("Invalid multi-row INSERT batch size {0}")]
    InvalidBatchSize(usize),

    /// Statement does not look like `INSERT [INTO] <object> ... VALUES`
    #[error(
        "Invalid statement for multi-row INSERT: INSERT [ INTO ] <object> [ column_list ] VALUES sequence not recognized"
    )]
    StatementNotRecognized,

    /// Statement has no `VALUES (...)` group
    #[error(
        "Invalid statement for multi-row INSERT: ... VALUES (? [, ...?]) ... sequence not recognized"
    )]
    ValuesNotRecognized,

    /// The `VALUES` tuple could not be isolated or is empty
    #[error("Unable to parse VALUES (? [, ...?]) sequence")]
    UnparsableValues,

    /// Error preparing a statement, reported by the connection
    #[error("{0}")]
    PrepareError(String),

    /// Error executing a prepared statement, reported by the connection
    #[error("{0}")]
    ExecutionError(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error(transparent)]
    Rusqlite(#[from] rusqlite::Error),
}

impl BatchError {
    /// Whether the error was raised before any connection interaction.
    pub fn is_statement_error(&self) -> bool {
        matches!(
            self,
            BatchError::NoArguments
                | BatchError::InvalidBatchSize(_)
                | BatchError::StatementNotRecognized
                | BatchError::ValuesNotRecognized
                | BatchError::UnparsableValues
        )
    }
}

/// Result type for multi-row insert operations
pub type Result<T> = std::result::Result<T, BatchError>;
