//! Connection capability required by the multi-row executor.
//!
//! The executor never talks to a driver directly: it only prepares SQL text
//! and executes the resulting handle with a flat argument list. Transactions,
//! pooling and value typing stay with the caller's connection.

use batchsql_core::Result;

/// Any type able to prepare a SQL statement, such as a connection or a
/// transaction.
pub trait Preparable {
    /// Argument value bound to a placeholder.
    type Value;

    /// Prepared statement handle borrowing the connection.
    type Statement<'s>: PreparedStatement<Value = Self::Value>
    where
        Self: 's;

    /// Prepares `sql` for repeated execution.
    fn prepare(&self, sql: &str) -> Result<Self::Statement<'_>>;
}

/// Executable handle produced by [`Preparable::prepare`].
pub trait PreparedStatement {
    type Value;

    /// Executes the statement with placeholders bound in order, discarding any
    /// produced rows.
    fn execute(&mut self, args: &[&Self::Value]) -> Result<()>;

    /// Releases the statement. Consuming `self` makes a second close impossible.
    fn close(self) -> Result<()>;
}
