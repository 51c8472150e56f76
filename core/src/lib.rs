//! SQL text analysis for multi-row `INSERT` batching.
//!
//! The engine recognizes a single-row `INSERT ... VALUES (...)` statement with
//! text patterns, isolates its value tuple, and repeats that tuple to build a
//! statement inserting many rows per round-trip.

pub mod check;
pub mod error;
pub mod patterns;
pub mod rewrite;
pub mod tracing;
pub mod values;

pub use check::check_query;
pub use error::{BatchError, Result};
pub use patterns::strip_on_duplicate_key;
pub use rewrite::{join_args, rewrite_insert_sql};
pub use values::extract_values;
