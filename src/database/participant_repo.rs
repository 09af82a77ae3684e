use sqlx::SqlitePool;

use crate::models::ParticipantRow;

// Re-selection replaces the whole row, never appends.
const SQL_UPSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (user_id, amount, events_json)
VALUES (?1, ?2, ?3)
ON CONFLICT(user_id) DO UPDATE SET
  amount = excluded.amount,
  events_json = excluded.events_json
"#;

const SQL_DELETE_PARTICIPANT: &str = r#"
DELETE FROM participants WHERE user_id = ?1
"#;

const SQL_LOAD_PARTICIPANT: &str = r#"
SELECT user_id, amount, events_json
FROM participants
WHERE user_id = ?1
LIMIT 1
"#;

pub async fn upsert_participant(
    pool: &SqlitePool,
    user_id: &str,
    amount: i64,
    events_json: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPSERT_PARTICIPANT)
        .bind(user_id)
        .bind(amount)
        .bind(events_json)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn delete_participant(pool: &SqlitePool, user_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PARTICIPANT)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn load_participant(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Option<ParticipantRow>> {
    sqlx::query_as::<_, ParticipantRow>(SQL_LOAD_PARTICIPANT)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
