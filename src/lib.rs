//! # batchsql
//!
//! Executes a single-row parameterized `INSERT` for many rows by rewriting it
//! into a multi-row `INSERT` and running it in fixed-size batches, amortizing
//! the round-trip cost of one statement per row.
//!
//! ```text
//! INSERT INTO t (a, b) VALUES (?, ?)
//!     -> INSERT INTO t (a, b) VALUES (?, ?),(?, ?),(?, ?)
//! ```
//!
//! Statements are recognized with text patterns rather than a full SQL parse.
//! Supported shapes include an optional `INTO`, an optional column list,
//! multi-line layouts, leading `/* ... */` comments and a trailing MySQL
//! `ON DUPLICATE KEY UPDATE` clause. Use [`check_query`] to test a statement
//! up front.
//!
//! ## Database Support
//!
//! | Database | Driver   | Feature Flag |
//! |----------|----------|--------------|
//! | SQLite   | rusqlite | `rusqlite`   |
//!
//! Other drivers plug in by implementing [`Preparable`] and
//! [`PreparedStatement`]. The rewrite repeats the value tuple verbatim, so the
//! driver must use positional `?` placeholders.
//!
//! ## Features
//!
//! - `tracing`: emit `batchsql.prepare`, `batchsql.execute` and
//!   `batchsql.close` events through the `tracing` crate
//! - `serde`: (de)serialize [`BatchConfig`]

pub mod config;
pub mod connection;
pub mod multi_row;
#[cfg(feature = "rusqlite")]
pub mod rusqlite;

pub use batchsql_core::{
    BatchError, Result, check_query, extract_values, join_args, rewrite_insert_sql,
};
pub use config::BatchConfig;
pub use connection::{Preparable, PreparedStatement};
pub use multi_row::{MultiRow, multi_insert};
#[cfg(feature = "rusqlite")]
pub use self::rusqlite::RusqliteStatement;
