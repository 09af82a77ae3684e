use serde::{Deserialize, Serialize};

/// One event as requested by the registrant.
#[derive(Debug, Clone, Deserialize)]
pub struct EventSelection {
    pub event_type: String, // sports|culturals|parasports
    pub category: String,
}

/// One stored event line. The fee is the selection-level charge replicated
/// onto every line for display, not a per-event price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParticipantEvent {
    pub event_type: String,
    pub category: String,
    pub fee: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ParticipantRow {
    pub user_id: String,
    pub amount: i64,
    pub events_json: String,
}
