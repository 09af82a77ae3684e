#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventsRow {
    pub event_id: String,
    pub name: String,
    pub event_type: String,    // sports|culturals|parasports
    pub category: String,
    pub target_gender: String, // male|female|mixed
    pub is_active: i64,
}
