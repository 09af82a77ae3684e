#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RegistrantRow {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub phone: String,
    pub dob: String,
    pub college: String,
    pub branch: String,
    pub registration_number: String,
    pub state: String,
    pub district: String,
    pub referral_code: Option<String>,
    pub payment_status: String,
    pub created_at: Option<String>,
}
