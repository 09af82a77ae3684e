/// Append-only audit row for staff point adjustments. Authoritative for
/// dispute resolution; nothing in the crate updates or deletes these.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PointAdjustmentRow {
    pub id: String,
    pub mca_id: String,
    pub actor: String,
    pub old_points: i64,
    pub new_points: i64,
    pub note: Option<String>,
    pub created_at: Option<String>,
}
