use sqlx::SqlitePool;

use crate::models::{CampusAmbassadorRow, PointAdjustmentRow, ReferralRow};

const SQL_INSERT_AMBASSADOR: &str = r#"
INSERT INTO campus_ambassadors (
  mca_id,
  name,
  registration_number,
  college,
  points,
  is_active
) VALUES (?, ?, ?, ?, 0, 1)
"#;

const SQL_LOAD_BY_MCA_ID: &str = r#"
SELECT mca_id, name, registration_number, college, points, is_active
FROM campus_ambassadors
WHERE mca_id = ?1
LIMIT 1
"#;

const SQL_REGISTRATION_NUMBER_EXISTS: &str = r#"
SELECT 1 FROM campus_ambassadors WHERE registration_number = LOWER(?1) LIMIT 1
"#;

// INSERT OR IGNORE keys the replay guard on the (mca_id, referred_user_id)
// unique index; points move only when a row actually landed.
const SQL_INSERT_REFERRAL: &str = r#"
INSERT OR IGNORE INTO referrals (
  id,
  mca_id,
  referred_user_id,
  referred_name,
  referred_college,
  points,
  created_at
) VALUES (?, ?, ?, ?, ?, ?, datetime('now'))
"#;

const SQL_ADD_POINTS: &str = r#"
UPDATE campus_ambassadors SET points = points + ?2 WHERE mca_id = ?1
"#;

const SQL_RECALCULATE_POINTS: &str = r#"
UPDATE campus_ambassadors
SET points = (
  SELECT COALESCE(SUM(points), 0) FROM referrals WHERE referrals.mca_id = ?1
)
WHERE mca_id = ?1
RETURNING points
"#;

const SQL_LOAD_POINTS: &str = r#"
SELECT points FROM campus_ambassadors WHERE mca_id = ?1 LIMIT 1
"#;

// Decrease clamps at zero at the storage layer.
const SQL_APPLY_DELTA_CLAMPED: &str = r#"
UPDATE campus_ambassadors
SET points = MAX(0, points + ?2)
WHERE mca_id = ?1
RETURNING points
"#;

const SQL_INSERT_ADJUSTMENT: &str = r#"
INSERT INTO point_adjustments (
  id,
  mca_id,
  actor,
  old_points,
  new_points,
  note,
  created_at
) VALUES (?, ?, ?, ?, ?, ?, datetime('now'))
"#;

const SQL_SET_ACTIVE: &str = r#"
UPDATE campus_ambassadors SET is_active = ?2 WHERE mca_id = ?1
"#;

const SQL_LIST_REFERRALS: &str = r#"
SELECT id, mca_id, referred_user_id, referred_name, referred_college, points, created_at
FROM referrals
WHERE mca_id = ?1
ORDER BY created_at ASC, rowid ASC
"#;

const SQL_LIST_ADJUSTMENTS: &str = r#"
SELECT id, mca_id, actor, old_points, new_points, note, created_at
FROM point_adjustments
WHERE mca_id = ?1
ORDER BY created_at ASC, rowid ASC
"#;

pub struct NewCampusAmbassador<'a> {
    pub mca_id: &'a str,
    pub name: &'a str,
    /// Stored lower-cased so the unique index is case-insensitive.
    pub registration_number: &'a str,
    pub college: &'a str,
}

pub struct NewReferral<'a> {
    pub id: &'a str,
    pub mca_id: &'a str,
    pub referred_user_id: &'a str,
    pub referred_name: &'a str,
    pub referred_college: &'a str,
    pub points: i64,
}

pub async fn insert_ambassador(
    pool: &SqlitePool,
    new: NewCampusAmbassador<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_AMBASSADOR)
        .bind(new.mca_id)
        .bind(new.name)
        .bind(new.registration_number)
        .bind(new.college)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn load_by_mca_id(
    pool: &SqlitePool,
    mca_id: &str,
) -> sqlx::Result<Option<CampusAmbassadorRow>> {
    sqlx::query_as::<_, CampusAmbassadorRow>(SQL_LOAD_BY_MCA_ID)
        .bind(mca_id)
        .fetch_optional(pool)
        .await
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

/// Appends a referral and awards its points in one transaction. Returns
/// `true` when the referral was new, `false` on replay (nothing changed).
pub async fn insert_referral_and_award(
    pool: &SqlitePool,
    new: NewReferral<'_>,
) -> sqlx::Result<bool> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(SQL_INSERT_REFERRAL)
        .bind(new.id)
        .bind(new.mca_id)
        .bind(new.referred_user_id)
        .bind(new.referred_name)
        .bind(new.referred_college)
        .bind(new.points)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if inserted == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(SQL_ADD_POINTS)
        .bind(new.mca_id)
        .bind(new.points)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(true)
}

/// Resyncs the points total from the referral list. Returns the new total,
/// or `None` for an unknown ambassador.
pub async fn recalculate_points(pool: &SqlitePool, mca_id: &str) -> sqlx::Result<Option<i64>> {
    sqlx::query_scalar::<_, i64>(SQL_RECALCULATE_POINTS)
        .bind(mca_id)
        .fetch_optional(pool)
        .await
}

/// Applies a signed delta (decrease clamped at zero) and appends the audit
/// row in the same transaction. Returns `(old, new)` totals, or `None` for
/// an unknown ambassador.
pub async fn apply_adjustment(
    pool: &SqlitePool,
    audit_id: &str,
    mca_id: &str,
    actor: &str,
    delta: i64,
    note: Option<&str>,
) -> sqlx::Result<Option<(i64, i64)>> {
    let mut tx = pool.begin().await?;

    let Some(old_points) = sqlx::query_scalar::<_, i64>(SQL_LOAD_POINTS)
        .bind(mca_id)
        .fetch_optional(&mut *tx)
        .await?
    else {
        tx.rollback().await?;
        return Ok(None);
    };

    let new_points = sqlx::query_scalar::<_, i64>(SQL_APPLY_DELTA_CLAMPED)
        .bind(mca_id)
        .bind(delta)
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query(SQL_INSERT_ADJUSTMENT)
        .bind(audit_id)
        .bind(mca_id)
        .bind(actor)
        .bind(old_points)
        .bind(new_points)
        .bind(note)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some((old_points, new_points)))
}

pub async fn set_active(pool: &SqlitePool, mca_id: &str, active: bool) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_ACTIVE)
        .bind(mca_id)
        .bind(if active { 1_i64 } else { 0 })
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_referrals(pool: &SqlitePool, mca_id: &str) -> sqlx::Result<Vec<ReferralRow>> {
    sqlx::query_as::<_, ReferralRow>(SQL_LIST_REFERRALS)
        .bind(mca_id)
        .fetch_all(pool)
        .await
}

pub async fn list_adjustments(
    pool: &SqlitePool,
    mca_id: &str,
) -> sqlx::Result<Vec<PointAdjustmentRow>> {
    sqlx::query_as::<_, PointAdjustmentRow>(SQL_LIST_ADJUSTMENTS)
        .bind(mca_id)
        .fetch_all(pool)
        .await
}
