use sqlx::SqlitePool;

use crate::models::EventsRow;

// ?1 is the optional event-type filter; ?2/?3 are the two target genders a
// caller is allowed to see (mixed-only callers pass 'mixed' twice).
const SQL_LIST_ACTIVE_EVENTS: &str = r#"
SELECT event_id, name, event_type, category, target_gender, is_active
FROM events
WHERE is_active = 1
  AND (?1 IS NULL OR event_type = ?1)
  AND target_gender IN (?2, ?3)
ORDER BY event_type ASC, category ASC, name ASC
"#;

pub async fn list_active_events(
    pool: &SqlitePool,
    event_type: Option<&str>,
    genders: (&str, &str),
) -> sqlx::Result<Vec<EventsRow>> {
    sqlx::query_as::<_, EventsRow>(SQL_LIST_ACTIVE_EVENTS)
        .bind(event_type)
        .bind(genders.0)
        .bind(genders.1)
        .fetch_all(pool)
        .await
}
