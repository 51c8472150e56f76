/// Repeats the `values` tuple `count` times, comma-joined, in place of its first
/// occurrence in `query`.
///
/// `values` is expected to come from [`extract_values`](crate::extract_values)
/// on the same `query`; with `count == 1` the statement is returned unchanged.
///
/// ```
/// use batchsql_core::rewrite_insert_sql;
///
/// let sql = rewrite_insert_sql("INSERT INTO t VALUES (?,?)", "(?,?)", 3);
/// assert_eq!(sql, "INSERT INTO t VALUES (?,?),(?,?),(?,?)");
/// ```
pub fn rewrite_insert_sql(query: &str, values: &str, count: usize) -> String {
    let multi_values = vec![values; count].join(",");
    query.replacen(values, &multi_values, 1)
}

/// Flattens per-row arguments row-major into one borrowed argument list.
pub fn join_args<'a, V, R>(rows: &'a [R]) -> Vec<&'a V>
where
    R: AsRef<[V]>,
{
    let capacity = rows.iter().map(|row| row.as_ref().len()).sum();
    let mut joined = Vec::with_capacity(capacity);
    for row in rows {
        joined.extend(row.as_ref());
    }
    joined
}
