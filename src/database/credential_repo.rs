use sqlx::SqlitePool;

use crate::models::RegistrantRow;

// Login accepts email, user ID, or registration number, matched
// case-insensitively. Email and registration number are stored lower-cased.
const SQL_FIND_BY_IDENTIFIER: &str = r#"
SELECT
  user_id, name, email, password, gender, phone, dob, college, branch,
  registration_number, state, district, referral_code, payment_status, created_at
FROM registrants
WHERE email = LOWER(?1)
   OR UPPER(user_id) = UPPER(?1)
   OR registration_number = LOWER(?1)
LIMIT 1
"#;

pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> sqlx::Result<Option<RegistrantRow>> {
    sqlx::query_as::<_, RegistrantRow>(SQL_FIND_BY_IDENTIFIER)
        .bind(identifier)
        .fetch_optional(pool)
        .await
}
