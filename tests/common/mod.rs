#![allow(dead_code)] // not every test binary touches every helper

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use festreg::config::Config;
use festreg::services::registration_service::SignupRequest;

// Fixture schema for the in-memory database. The deployed schema lives
// outside this crate; tests only need the same tables and unique indexes.
const SCHEMA: &str = r#"
CREATE TABLE counters (
  name TEXT PRIMARY KEY,
  seq INTEGER NOT NULL
);
CREATE TABLE registrants (
  user_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE,
  password TEXT NOT NULL,
  gender TEXT NOT NULL,
  phone TEXT NOT NULL,
  dob TEXT NOT NULL,
  college TEXT NOT NULL,
  branch TEXT NOT NULL,
  registration_number TEXT NOT NULL UNIQUE,
  state TEXT NOT NULL,
  district TEXT NOT NULL,
  referral_code TEXT,
  payment_status TEXT NOT NULL,
  created_at TEXT
);
CREATE TABLE participants (
  user_id TEXT PRIMARY KEY,
  amount INTEGER NOT NULL,
  events_json TEXT NOT NULL
);
CREATE TABLE campus_ambassadors (
  mca_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  registration_number TEXT NOT NULL UNIQUE,
  college TEXT NOT NULL,
  points INTEGER NOT NULL,
  is_active INTEGER NOT NULL
);
CREATE TABLE referrals (
  id TEXT PRIMARY KEY,
  mca_id TEXT NOT NULL,
  referred_user_id TEXT NOT NULL,
  referred_name TEXT NOT NULL,
  referred_college TEXT NOT NULL,
  points INTEGER NOT NULL,
  created_at TEXT
);
CREATE UNIQUE INDEX idx_referrals_replay ON referrals (mca_id, referred_user_id);
CREATE TABLE point_adjustments (
  id TEXT PRIMARY KEY,
  mca_id TEXT NOT NULL,
  actor TEXT NOT NULL,
  old_points INTEGER NOT NULL,
  new_points INTEGER NOT NULL,
  note TEXT,
  created_at TEXT
);
CREATE TABLE events (
  event_id TEXT PRIMARY KEY,
  name TEXT NOT NULL,
  event_type TEXT NOT NULL,
  category TEXT NOT NULL,
  target_gender TEXT NOT NULL,
  is_active INTEGER NOT NULL
)
"#;

pub async fn setup_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    for stmt in SCHEMA.split(';') {
        let stmt = stmt.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt).execute(&pool).await.expect("schema");
        }
    }
    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        festival_year: Some(26),
        referral_points: 50,
    }
}

pub fn signup_request(email: &str, registration_number: &str) -> SignupRequest {
    SignupRequest {
        name: "Asha Rao".to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        gender: "female".to_string(),
        phone: "9876543210".to_string(),
        dob: "2004-06-15".to_string(),
        college: "Random College".to_string(),
        branch: "CSE".to_string(),
        registration_number: registration_number.to_string(),
        state: "Andhra Pradesh".to_string(),
        district: "Guntur".to_string(),
        referral_code: None,
    }
}
