#![cfg(feature = "rusqlite")]

use batchsql::{BatchError, MultiRow};
use rusqlite::{Connection, types::Value};

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    conn.execute("CREATE TABLE t (v INT)", [])
        .expect("Failed to create t table");
    conn
}

fn count_rows(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}

fn int_rows(count: i64) -> Vec<Vec<Value>> {
    (1..=count).map(|i| vec![Value::Integer(i)]).collect()
}

#[test]
fn test_multi_insert() {
    let mr = MultiRow::new(setup_db(), 5);

    mr.multi_insert("INSERT INTO t VALUES (?)", &int_rows(12))
        .unwrap();

    assert_eq!(count_rows(mr.conn(), "SELECT COUNT(1) FROM t"), 12);
    assert_eq!(count_rows(mr.conn(), "SELECT SUM(v) FROM t"), 78);
}

#[test]
fn test_multi_insert_preserves_row_order() {
    let conn = setup_db();
    conn.execute("CREATE TABLE pairs (id INTEGER PRIMARY KEY, a INT, b TEXT)", [])
        .unwrap();
    let rows: Vec<[Value; 2]> = (0..7)
        .map(|i| [Value::Integer(i), Value::Text(format!("r{i}"))])
        .collect();

    let mr = MultiRow::new(conn, 3);
    mr.multi_insert("INSERT INTO pairs (a, b) VALUES (?, ?)", &rows)
        .unwrap();

    let mut stmt = mr
        .conn()
        .prepare("SELECT a, b FROM pairs ORDER BY id")
        .unwrap();
    let stored: Vec<(i64, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();
    let expected: Vec<(i64, String)> = (0..7).map(|i| (i, format!("r{i}"))).collect();
    assert_eq!(stored, expected);
}

#[test]
fn test_multi_insert_with_literal_in_tuple() {
    let conn = setup_db();
    conn.execute("CREATE TABLE stamped (v INT, at TEXT)", [])
        .unwrap();

    let mr = MultiRow::new(conn, 4);
    mr.multi_insert(
        "INSERT INTO stamped (v, at) VALUES (?, CURRENT_TIMESTAMP)",
        &int_rows(6),
    )
    .unwrap();

    assert_eq!(
        count_rows(mr.conn(), "SELECT COUNT(1) FROM stamped WHERE at IS NOT NULL"),
        6
    );
}

#[test]
fn test_multi_insert_returning_discards_rows() {
    let mr = MultiRow::new(setup_db(), 2);

    mr.multi_insert("INSERT INTO t (v) VALUES (?) RETURNING v", &int_rows(3))
        .unwrap();

    assert_eq!(count_rows(mr.conn(), "SELECT COUNT(1) FROM t"), 3);
}

#[test]
fn test_multi_insert_no_args() {
    let mr = MultiRow::new(setup_db(), 5);
    let args: Vec<Vec<Value>> = Vec::new();

    let err = mr.multi_insert("XXX", &args).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid multi-row INSERT call with no arguments"
    );
}

#[test]
fn test_multi_insert_no_insert() {
    let mr = MultiRow::new(setup_db(), 5);

    let err = mr
        .multi_insert("UPDATE t SET v = 1", &int_rows(1))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid statement for multi-row INSERT: INSERT [ INTO ] <object> [ column_list ] VALUES sequence not recognized"
    );
}

#[test]
fn test_multi_insert_invalid_multi_insert() {
    let mr = MultiRow::new(setup_db(), 5);

    let err = mr
        .multi_insert("INSERT INTO t (v) SELECT a FROM b", &int_rows(1))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid statement for multi-row INSERT: ... VALUES (? [, ...?]) ... sequence not recognized"
    );
}

#[test]
fn test_multi_insert_invalid_multi_insert_no_values() {
    let mr = MultiRow::new(setup_db(), 5);

    let err = mr
        .multi_insert("INSERT INTO t (v) VALUES ( )", &int_rows(1))
        .unwrap_err();

    assert_eq!(err.to_string(), "Unable to parse VALUES (? [, ...?]) sequence");
}

#[test]
fn test_multi_insert_unknown_table_surfaces_driver_error() {
    let mr = MultiRow::new(setup_db(), 5);

    let err = mr
        .multi_insert("INSERT INTO missing VALUES (?)", &int_rows(2))
        .unwrap_err();

    assert!(matches!(err, BatchError::Rusqlite(_)));
    assert!(err.to_string().contains("no such table: missing"));
}

#[test]
fn test_multi_insert_failure_is_not_rolled_back() {
    let conn = setup_db();
    conn.execute("CREATE TABLE uniq (v INT UNIQUE)", []).unwrap();
    let rows: Vec<Vec<Value>> = [1, 2, 3, 4, 4, 5]
        .into_iter()
        .map(|v| vec![Value::Integer(v)])
        .collect();

    let mr = MultiRow::new(conn, 2);
    let err = mr
        .multi_insert("INSERT INTO uniq VALUES (?)", &rows)
        .unwrap_err();

    assert!(matches!(err, BatchError::Rusqlite(_)));
    assert_eq!(count_rows(mr.conn(), "SELECT COUNT(1) FROM uniq"), 4);
}

#[test]
fn test_multi_insert_inside_transaction() {
    let mut conn = setup_db();

    {
        let tx = conn.transaction().unwrap();
        let mr = MultiRow::new(tx, 4);
        mr.multi_insert("INSERT INTO t VALUES (?)", &int_rows(10))
            .unwrap();
        mr.into_inner().rollback().unwrap();
    }
    assert_eq!(count_rows(&conn, "SELECT COUNT(1) FROM t"), 0);

    {
        let tx = conn.transaction().unwrap();
        let mr = MultiRow::new(tx, 4);
        mr.multi_insert("INSERT INTO t VALUES (?)", &int_rows(10))
            .unwrap();
        mr.into_inner().commit().unwrap();
    }
    assert_eq!(count_rows(&conn, "SELECT COUNT(1) FROM t"), 10);
}
