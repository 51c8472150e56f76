use crate::error::{BatchError, Result};
use crate::patterns::{SQL_INSERT_STMT, SQL_VALUES, strip_on_duplicate_key};

/// Checks whether `query` is eligible for rewriting into a multi-row insert.
///
/// A trailing `ON DUPLICATE KEY ...` clause is ignored, so `VALUES(col)`
/// references in its update list never make an `INSERT ... SELECT` eligible.
///
/// ```
/// use batchsql_core::{BatchError, check_query};
///
/// assert!(check_query("INSERT INTO t (a, b) VALUES (?, ?)").is_ok());
/// assert!(matches!(
///     check_query("INSERT INTO t DEFAULT VALUES"),
///     Err(BatchError::ValuesNotRecognized)
/// ));
/// ```
pub fn check_query(query: &str) -> Result<()> {
    let query = strip_on_duplicate_key(query);

    if !SQL_INSERT_STMT.is_match(&query) {
        return Err(BatchError::StatementNotRecognized);
    }
    if !SQL_VALUES.is_match(&query) {
        return Err(BatchError::ValuesNotRecognized);
    }
    Ok(())
}
