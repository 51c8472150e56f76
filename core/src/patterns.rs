//! Text patterns used to recognize single-row `INSERT ... VALUES` statements.
//!
//! Recognition is intentionally pattern based rather than a full SQL parse:
//! statements are matched as-is (keywords are case-sensitive), `.` never
//! crosses a newline, and every pattern is an unanchored leftmost-first search.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A `/* ... */` block comment.
const SQL_COMMENT: &str = r"(/\*.*?\*/)";

/// `... VALUES (...) ...`, capturing the tuple from the first `(` to the last `)`
/// of its line.
pub(crate) static SQL_VALUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*VALUES(\n|\s)*?(?P<values>\(.+\)).*").expect("valid VALUES pattern")
});

/// A tuple holding nothing but whitespace, e.g. `( )`.
pub(crate) static EMPTY_VALUES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s+\).*").expect("valid empty tuple pattern"));

/// `INSERT [INTO] <object> ...` with optional leading comments, or any text
/// carrying a `VALUES` keyword.
pub(crate) static SQL_INSERT_STMT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({SQL_COMMENT}|\s)*INSERT({SQL_COMMENT}|\s)*INTO.+|\n*VALUES.*"
    ))
    .expect("valid INSERT pattern")
});

/// MySQL `ON DUPLICATE KEY ...` suffix running to the end of the statement.
/// Quoted identifiers and literals are skipped as balanced pairs.
pub(crate) static MYSQL_ON_DUPLICATE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*ON\s+DUPLICATE\s+KEY(?:[^"'`]*["'`][^"'`]*["'`])*[^"'`]*$"#)
        .expect("valid ON DUPLICATE KEY pattern")
});

/// Removes a trailing `ON DUPLICATE KEY ...` clause, borrowing the input when
/// there is nothing to strip.
pub fn strip_on_duplicate_key(query: &str) -> Cow<'_, str> {
    MYSQL_ON_DUPLICATE_KEY.replace_all(query, "")
}
