//! Multi-row insert execution.

use batchsql_core::{
    BatchError, Result, batchsql_trace_batch, batchsql_trace_close, batchsql_trace_prepare,
    check_query, extract_values, join_args, rewrite_insert_sql,
};

use crate::config::BatchConfig;
use crate::connection::{Preparable, PreparedStatement};

/// Wrapper around a connection or transaction executing single-row `INSERT`
/// statements as batched multi-row inserts.
#[derive(Debug)]
pub struct MultiRow<C> {
    conn: C,
    batch_size: usize,
}

impl<C> MultiRow<C> {
    pub const fn new(conn: C, batch_size: usize) -> Self {
        Self { conn, batch_size }
    }

    pub fn from_config(conn: C, config: BatchConfig) -> Self {
        Self::new(conn, config.batch_size)
    }

    /// Gets a reference to the underlying connection
    pub fn conn(&self) -> &C {
        &self.conn
    }

    pub fn mut_conn(&mut self) -> &mut C {
        &mut self.conn
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }

    /// Returns the connection, e.g. to commit a transaction.
    pub fn into_inner(self) -> C {
        self.conn
    }
}

impl<C: Preparable> MultiRow<C> {
    /// Executes `query` once per row of `args`, `batch_size` rows per round-trip.
    ///
    /// See [`multi_insert`].
    pub fn multi_insert<R>(&self, query: &str, args: &[R]) -> Result<()>
    where
        R: AsRef<[C::Value]>,
    {
        multi_insert(&self.conn, query, self.batch_size, args)
    }
}

/// Executes a single-row `INSERT` for every row argument set in `args`,
/// rewriting it into multi-row statements of at most `batch_size` rows.
/// Results are discarded.
///
/// A statement is prepared for the first batch and reused while the batch
/// width stays the same; only a shorter trailing batch triggers a rebuild. At
/// most one prepared statement is open at a time and it is closed on every
/// exit path. The first failure aborts the call; batches already executed are
/// not rolled back, so wrap the call in a transaction when atomicity matters.
pub fn multi_insert<C, R>(conn: &C, query: &str, batch_size: usize, args: &[R]) -> Result<()>
where
    C: Preparable + ?Sized,
    R: AsRef<[C::Value]>,
{
    if args.is_empty() {
        return Err(BatchError::NoArguments);
    }
    if batch_size == 0 {
        return Err(BatchError::InvalidBatchSize(batch_size));
    }

    check_query(query)?;
    let values = extract_values(query)?;

    let mut slot = StatementSlot::new();
    for batch in args.chunks(batch_size) {
        let stmt = slot.get_or_prepare(batch.len(), |width| {
            let multi_query = rewrite_insert_sql(query, &values, width);
            batchsql_trace_prepare!(multi_query, width);
            conn.prepare(&multi_query)
        })?;

        let batch_args = join_args(batch);
        batchsql_trace_batch!(batch.len(), batch_args.len());
        stmt.execute(&batch_args)?;
    }
    slot.finish()
}

/// The single statement cached by a [`multi_insert`] call, keyed by the batch
/// width it was built for. Dropping the slot closes the statement.
struct StatementSlot<S: PreparedStatement> {
    cached: Option<(usize, S)>,
}

impl<S: PreparedStatement> StatementSlot<S> {
    const fn new() -> Self {
        Self { cached: None }
    }

    /// Returns the cached statement when it was built for `width`; otherwise
    /// closes it and prepares a replacement.
    fn get_or_prepare<F>(&mut self, width: usize, prepare: F) -> Result<&mut S>
    where
        F: FnOnce(usize) -> Result<S>,
    {
        let cached = match self.cached.take() {
            Some((cached_width, stmt)) if cached_width == width => (cached_width, stmt),
            previous => {
                if let Some((previous_width, stmt)) = previous {
                    // A failed close does not prevent building the next statement.
                    let _ = close(previous_width, stmt);
                }
                (width, prepare(width)?)
            }
        };
        let (_, stmt) = self.cached.insert(cached);
        Ok(stmt)
    }

    /// Closes the cached statement, reporting the close result.
    fn finish(mut self) -> Result<()> {
        match self.cached.take() {
            Some((width, stmt)) => close(width, stmt),
            None => Ok(()),
        }
    }
}

impl<S: PreparedStatement> Drop for StatementSlot<S> {
    fn drop(&mut self) {
        if let Some((width, stmt)) = self.cached.take() {
            let _ = close(width, stmt);
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn close<S: PreparedStatement>(width: usize, stmt: S) -> Result<()> {
    let closed = stmt.close();
    batchsql_trace_close!(width, &closed);
    closed
}
