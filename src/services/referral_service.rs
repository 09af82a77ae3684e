use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{ambassador_repo, registrant_repo};
use crate::error::{is_unique_violation, AppError};
use crate::models::{CampusAmbassadorRow, PointAdjustmentRow, ReferralRow};
use crate::services::id_service;

const ENROLL_ATTEMPTS: usize = 3;

/// Records a referral and awards its points. Replays (same ambassador, same
/// referred user) are a silent no-op; the invariant
/// `points == sum(referral.points)` holds after either outcome. Returns
/// whether the referral was new.
pub async fn add_referral(
    pool: &SqlitePool,
    mca_id: &str,
    referred_user_id: &str,
    referred_name: &str,
    referred_college: &str,
    points: i64,
) -> Result<bool, AppError> {
    if ambassador_repo::load_by_mca_id(pool, mca_id).await?.is_none() {
        return Err(AppError::NotFound(format!("ambassador {}", mca_id)));
    }

    let id = Uuid::new_v4().to_string();
    let inserted = ambassador_repo::insert_referral_and_award(
        pool,
        ambassador_repo::NewReferral {
            id: &id,
            mca_id,
            referred_user_id,
            referred_name,
            referred_college,
            points,
        },
    )
    .await?;
    Ok(inserted)
}

/// Corrective resync of the points total from the referral list, for when
/// manual adjustments have drifted it. Returns the new total.
pub async fn recalculate_points(pool: &SqlitePool, mca_id: &str) -> Result<i64, AppError> {
    match ambassador_repo::recalculate_points(pool, mca_id).await? {
        Some(total) => Ok(total),
        None => Err(AppError::NotFound(format!("ambassador {}", mca_id))),
    }
}

/// Staff point adjustment. Decrease clamps at zero; every call appends an
/// audit row (actor, old, new, note) in the same transaction. Returns the
/// new total.
pub async fn adjust_points(
    pool: &SqlitePool,
    actor: &str,
    mca_id: &str,
    delta: i64,
    direction: &str,
    note: Option<&str>,
) -> Result<i64, AppError> {
    if delta <= 0 {
        return Err(AppError::Validation { field: "delta" });
    }
    let signed = match direction.trim() {
        "increase" => delta,
        "decrease" => -delta,
        _ => return Err(AppError::Validation { field: "direction" }),
    };

    let audit_id = Uuid::new_v4().to_string();
    match ambassador_repo::apply_adjustment(pool, &audit_id, mca_id, actor, signed, note).await? {
        Some((_old, new_total)) => Ok(new_total),
        None => Err(AppError::NotFound(format!("ambassador {}", mca_id))),
    }
}

/// Gates whether signup accepts this ambassador's code. Historical referrals
/// and points are untouched.
pub async fn set_active(pool: &SqlitePool, mca_id: &str, active: bool) -> Result<(), AppError> {
    let updated = ambassador_repo::set_active(pool, mca_id, active).await?;
    if updated == 0 {
        return Err(AppError::NotFound(format!("ambassador {}", mca_id)));
    }
    Ok(())
}

/// Onboards a campus ambassador and allocates their MCA code. Same
/// allocate+insert retry as signup, since two enrollments can race on the
/// unique indexes.
pub async fn enroll_ambassador(
    pool: &SqlitePool,
    name: &str,
    registration_number: &str,
    college: &str,
) -> Result<String, AppError> {
    let name = required("name", name)?;
    let registration_number = required("registration_number", registration_number)?.to_lowercase();
    let college = required("college", college)?;

    if ambassador_repo::registration_number_exists(pool, &registration_number).await?
        || registrant_repo::registration_number_exists(pool, &registration_number).await?
    {
        return Err(AppError::Conflict {
            field: "registration_number",
        });
    }

    let mut attempt = 0;
    loop {
        attempt += 1;
        let mca_id = id_service::next_mca_id(pool).await?;
        match ambassador_repo::insert_ambassador(
            pool,
            ambassador_repo::NewCampusAmbassador {
                mca_id: &mca_id,
                name,
                registration_number: &registration_number,
                college,
            },
        )
        .await
        {
            Ok(_) => return Ok(mca_id),
            Err(e) if is_unique_violation(&e) && attempt < ENROLL_ATTEMPTS => {
                tracing::warn!("Ambassador insert hit unique race, retrying: {}", e);
            }
            Err(e) if is_unique_violation(&e) => return Err(AppError::Transient),
            Err(e) => return Err(e.into()),
        }
    }
}

pub async fn load_ambassador(
    pool: &SqlitePool,
    mca_id: &str,
) -> Result<CampusAmbassadorRow, AppError> {
    match ambassador_repo::load_by_mca_id(pool, mca_id).await? {
        Some(row) => Ok(row),
        None => Err(AppError::NotFound(format!("ambassador {}", mca_id))),
    }
}

pub async fn list_referrals(pool: &SqlitePool, mca_id: &str) -> Result<Vec<ReferralRow>, AppError> {
    Ok(ambassador_repo::list_referrals(pool, mca_id).await?)
}

/// Audit trail for dispute resolution; read-only, append happens in
/// [`adjust_points`].
pub async fn list_adjustments(
    pool: &SqlitePool,
    mca_id: &str,
) -> Result<Vec<PointAdjustmentRow>, AppError> {
    Ok(ambassador_repo::list_adjustments(pool, mca_id).await?)
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation { field });
    }
    Ok(trimmed)
}
