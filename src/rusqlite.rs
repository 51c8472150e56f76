//! SQLite adapter over `rusqlite`.
//!
//! Connections and transactions prepare statements binding
//! `rusqlite::types::Value` arguments:
//!
//! ```
//! use batchsql::MultiRow;
//! use rusqlite::{Connection, types::Value};
//!
//! # fn main() -> batchsql::Result<()> {
//! let conn = Connection::open_in_memory()?;
//! conn.execute("CREATE TABLE t (a INTEGER, b TEXT)", [])?;
//!
//! let rows: Vec<[Value; 2]> = (0..10)
//!     .map(|i| [Value::Integer(i), Value::Text(format!("row {i}"))])
//!     .collect();
//!
//! let mr = MultiRow::new(conn, 4);
//! mr.multi_insert("INSERT INTO t (a, b) VALUES (?, ?)", &rows)?;
//!
//! let count: i64 = mr.conn().query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))?;
//! assert_eq!(count, 10);
//! # Ok(())
//! # }
//! ```

use batchsql_core::Result;
use ::rusqlite::{Connection, Transaction, params_from_iter, types::Value};

use crate::connection::{Preparable, PreparedStatement};

/// Prepared statement wrapper
#[derive(Debug)]
pub struct RusqliteStatement<'conn> {
    stmt: ::rusqlite::Statement<'conn>,
}

impl<'conn> RusqliteStatement<'conn> {
    /// Gets a reference to the underlying statement
    #[inline]
    pub fn inner(&self) -> &::rusqlite::Statement<'conn> {
        &self.stmt
    }
}

impl PreparedStatement for RusqliteStatement<'_> {
    type Value = Value;

    fn execute(&mut self, args: &[&Value]) -> Result<()> {
        // Stepping through `query` also accepts statements that return rows,
        // such as `INSERT ... RETURNING`.
        let mut rows = self.stmt.query(params_from_iter(args.iter().copied()))?;
        while rows.next()?.is_some() {}
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.stmt.finalize()?;
        Ok(())
    }
}

impl Preparable for Connection {
    type Value = Value;
    type Statement<'s>
        = RusqliteStatement<'s>
    where
        Self: 's;

    fn prepare(&self, sql: &str) -> Result<RusqliteStatement<'_>> {
        let stmt = Connection::prepare(self, sql)?;
        Ok(RusqliteStatement { stmt })
    }
}

impl Preparable for Transaction<'_> {
    type Value = Value;
    type Statement<'s>
        = RusqliteStatement<'s>
    where
        Self: 's;

    fn prepare(&self, sql: &str) -> Result<RusqliteStatement<'_>> {
        let stmt = Connection::prepare(self, sql)?;
        Ok(RusqliteStatement { stmt })
    }
}
