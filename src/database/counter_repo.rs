use sqlx::SqlitePool;

// Single-statement read-modify-write. Check-then-set would lose increments
// under concurrent signups; the upsert keeps the counter the sole source of
// truth for the next suffix.
pub const SQL_NEXT_SEQ: &str = r#"
INSERT INTO counters (name, seq) VALUES (?1, 1)
ON CONFLICT(name) DO UPDATE SET seq = seq + 1
RETURNING seq
"#;

const SQL_RESET: &str = r#"
DELETE FROM counters WHERE name = ?1
"#;

// strftime has no two-digit %y; derive it from %Y.
const SQL_DB_YEAR2: &str = r#"
SELECT CAST(strftime('%Y', 'now') AS INTEGER) % 100
"#;

/// Issues the next value in a namespace. Strictly increasing per namespace,
/// never reused, gaps allowed.
pub async fn next_seq(pool: &SqlitePool, namespace: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_NEXT_SEQ)
        .bind(namespace)
        .fetch_one(pool)
        .await
}

/// Admin-only. After a reset the namespace restarts at 1, which can collide
/// with previously issued IDs still referenced elsewhere.
pub async fn reset(pool: &SqlitePool, namespace: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_RESET).bind(namespace).execute(pool).await?;
    Ok(res.rows_affected())
}

/// Two-digit year from the database clock, so all instances agree.
pub async fn db_year2(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_DB_YEAR2).fetch_one(pool).await
}
