#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CampusAmbassadorRow {
    pub mca_id: String,
    pub name: String,
    pub registration_number: String,
    pub college: String,
    pub points: i64,
    pub is_active: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReferralRow {
    pub id: String,
    pub mca_id: String,
    pub referred_user_id: String,
    pub referred_name: String,
    pub referred_college: String,
    pub points: i64,
    pub created_at: Option<String>,
}
