//! Tracing utilities for statement preparation and batch execution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a debug-level tracing event when a statement is built for a batch width.
///
/// ```ignore
/// batchsql_trace_prepare!(&multi_query, width);
/// ```
#[macro_export]
macro_rules! batchsql_trace_prepare {
    ($sql:expr, $width:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, width = $width, "batchsql.prepare");
    };
}

/// Emit a trace-level event for every executed batch.
///
/// ```ignore
/// batchsql_trace_batch!(batch.len(), args.len());
/// ```
#[macro_export]
macro_rules! batchsql_trace_batch {
    ($width:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(width = $width, params = $param_count, "batchsql.execute");
    };
}

/// Emit an event when a cached statement is released. Failed closes are
/// reported at warn level.
///
/// ```ignore
/// batchsql_trace_close!(width, &result);
/// ```
#[macro_export]
macro_rules! batchsql_trace_close {
    ($width:expr, $result:expr) => {
        #[cfg(feature = "tracing")]
        let () = match $result {
            Ok(_) => tracing::debug!(width = $width, "batchsql.close"),
            Err(error) => tracing::warn!(width = $width, %error, "batchsql.close"),
        };
    };
}
