use sqlx::SqlitePool;

use crate::database::event_repo;
use crate::error::AppError;
use crate::models::EventsRow;

/// Active catalog entries, optionally narrowed by type.
///
/// Gender filter: "female" sees female+mixed events, "male" sees male+mixed,
/// anything else sees mixed only.
pub async fn list_active(
    pool: &SqlitePool,
    event_type: Option<&str>,
    gender: Option<&str>,
) -> Result<Vec<EventsRow>, AppError> {
    let event_type = event_type
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let genders = match gender.map(|g| g.trim().to_lowercase()) {
        Some(g) if g == "female" => ("female", "mixed"),
        Some(g) if g == "male" => ("male", "mixed"),
        _ => ("mixed", "mixed"),
    };

    Ok(event_repo::list_active_events(pool, event_type.as_deref(), genders).await?)
}
