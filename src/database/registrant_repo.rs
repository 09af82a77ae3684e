use sqlx::SqlitePool;

use crate::models::RegistrantRow;

const SQL_INSERT_REGISTRANT: &str = r#"
INSERT INTO registrants (
  user_id,
  name,
  email,
  password,
  gender,
  phone,
  dob,
  college,
  branch,
  registration_number,
  state,
  district,
  referral_code,
  payment_status,
  created_at
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, datetime('now'))
"#;

const SQL_LOAD_BY_USER_ID: &str = r#"
SELECT
  user_id, name, email, password, gender, phone, dob, college, branch,
  registration_number, state, district, referral_code, payment_status, created_at
FROM registrants
WHERE user_id = ?1
LIMIT 1
"#;

const SQL_EMAIL_EXISTS: &str = r#"
SELECT 1 FROM registrants WHERE email = LOWER(?1) LIMIT 1
"#;

const SQL_REGISTRATION_NUMBER_EXISTS: &str = r#"
SELECT 1 FROM registrants WHERE registration_number = LOWER(?1) LIMIT 1
"#;

const SQL_SET_PAYMENT_STATUS: &str = r#"
UPDATE registrants SET payment_status = ?2 WHERE user_id = ?1
"#;

pub struct NewRegistrant<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    /// Stored lower-cased so the unique index is case-insensitive.
    pub email: &'a str,
    pub password: &'a str,
    pub gender: &'a str,
    pub phone: &'a str,
    pub dob: &'a str,
    pub college: &'a str,
    pub branch: &'a str,
    /// Stored lower-cased, same reason as email.
    pub registration_number: &'a str,
    pub state: &'a str,
    pub district: &'a str,
    pub referral_code: Option<&'a str>,
}

pub async fn insert_registrant(pool: &SqlitePool, new: NewRegistrant<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REGISTRANT)
        .bind(new.user_id)
        .bind(new.name)
        .bind(new.email)
        .bind(new.password)
        .bind(new.gender)
        .bind(new.phone)
        .bind(new.dob)
        .bind(new.college)
        .bind(new.branch)
        .bind(new.registration_number)
        .bind(new.state)
        .bind(new.district)
        .bind(new.referral_code)
        .bind("pending")
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn load_by_user_id(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Option<RegistrantRow>> {
    sqlx::query_as::<_, RegistrantRow>(SQL_LOAD_BY_USER_ID)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> sqlx::Result<bool> {
    let hit: Option<i64> = sqlx::query_scalar(SQL_EMAIL_EXISTS)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(hit.is_some())
}

pub async fn registration_number_exists(
    pool: &SqlitePool,
    registration_number: &str,
) -> sqlx::Result<bool> {
    let hit: Option<i64> = sqlx::query_scalar(SQL_REGISTRATION_NUMBER_EXISTS)
        .bind(registration_number)
        .fetch_optional(pool)
        .await?;
    Ok(hit.is_some())
}

pub async fn set_payment_status(
    pool: &SqlitePool,
    user_id: &str,
    status: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_PAYMENT_STATUS)
        .bind(user_id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
