use sqlx::SqlitePool;

use crate::config::Config;
use crate::database::counter_repo;
use crate::error::AppError;

pub const USER_ID_NAMESPACE: &str = "userId";
pub const MCA_ID_NAMESPACE: &str = "mcaId";

/// `MH` + 2-digit year + 6-digit zero-padded sequence, e.g. `MH26000001`.
pub fn format_user_id(year2: i64, seq: i64) -> String {
    format!("MH{:02}{:06}", year2.rem_euclid(100), seq)
}

/// `MCA` + 6-digit zero-padded sequence, e.g. `MCA000001`.
pub fn format_mca_id(seq: i64) -> String {
    format!("MCA{:06}", seq)
}

pub async fn next_user_id(pool: &SqlitePool, config: &Config) -> Result<String, AppError> {
    let year2 = match config.festival_year {
        Some(y) => y,
        None => counter_repo::db_year2(pool).await?,
    };
    let seq = counter_repo::next_seq(pool, USER_ID_NAMESPACE).await?;
    Ok(format_user_id(year2, seq))
}

pub async fn next_mca_id(pool: &SqlitePool) -> Result<String, AppError> {
    let seq = counter_repo::next_seq(pool, MCA_ID_NAMESPACE).await?;
    Ok(format_mca_id(seq))
}
