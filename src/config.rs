use std::env;

/// Points awarded to an ambassador per successful referral.
pub const DEFAULT_REFERRAL_POINTS: i64 = 50;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Two-digit festival year stamped into user IDs. When unset, the SQLite
    /// clock decides so every server instance agrees.
    pub festival_year: Option<i64>,
    pub referral_points: i64,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into());
        let festival_year = env::var("FESTIVAL_YEAR").ok().and_then(|v| v.parse().ok());
        let referral_points = env::var("REFERRAL_POINTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFERRAL_POINTS);

        Self {
            database_url,
            festival_year,
            referral_points,
        }
    }
}
