use crate::error::{BatchError, Result};
use crate::patterns::{EMPTY_VALUES, SQL_VALUES, strip_on_duplicate_key};

/// Extracts the single `VALUES` tuple of a single-row insert, verbatim.
///
/// The capture runs from the first `(` after `VALUES` to the last `)` on that
/// line, so trailing parenthesized expressions on the same line widen the
/// tuple. A trailing `ON DUPLICATE KEY ...` clause is removed first.
///
/// ```
/// use batchsql_core::extract_values;
///
/// let values = extract_values("INSERT INTO t (a, b) VALUES (?, CURRENT_TIMESTAMP)").unwrap();
/// assert_eq!(values, "(?, CURRENT_TIMESTAMP)");
/// ```
pub fn extract_values(query: &str) -> Result<String> {
    let query = strip_on_duplicate_key(query);

    let values = SQL_VALUES
        .captures(&query)
        .and_then(|caps| caps.name("values"))
        .map(|m| m.as_str())
        .ok_or(BatchError::UnparsableValues)?;

    if EMPTY_VALUES.is_match(values) {
        return Err(BatchError::UnparsableValues);
    }

    Ok(values.to_owned())
}
