use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::Config;
use crate::database::{ambassador_repo, participant_repo, registrant_repo};
use crate::error::{is_unique_violation, AppError};
use crate::models::{CampusAmbassadorRow, EventSelection, ParticipantEvent};
use crate::services::{fee_service, id_service, referral_service};

/// Two concurrent signups can both pass the uniqueness pre-check before
/// either commits; the unique indexes catch that and we retry the whole
/// allocate+insert step this many times before giving up.
const SIGNUP_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
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
}

#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub amount: i64,
    pub events: Vec<ParticipantEvent>,
}

/// Signs a registrant up and returns their new user ID.
///
/// Field validation runs in a fixed order and reports the first blank field;
/// referral codes must resolve to an active ambassador; email and
/// registration number must be free on both registrants and ambassadors.
/// Referral bookkeeping after the insert is best-effort: a failure there is
/// logged and never rolls the registration back.
pub async fn register(
    pool: &SqlitePool,
    config: &Config,
    req: &SignupRequest,
) -> Result<String, AppError> {
    let name = required("name", &req.name)?;
    let email = required("email", &req.email)?.to_lowercase();
    let password = required("password", &req.password)?;
    let gender = required("gender", &req.gender)?;
    let phone = required("phone", &req.phone)?;
    let dob = required("dob", &req.dob)?;
    let college = required("college", &req.college)?;
    let branch = required("branch", &req.branch)?;
    let registration_number = required("registration_number", &req.registration_number)?.to_lowercase();
    let state = required("state", &req.state)?;
    let district = required("district", &req.district)?;

    let referral = resolve_referral_code(pool, req.referral_code.as_deref()).await?;

    if registrant_repo::email_exists(pool, &email).await? {
        return Err(AppError::Conflict { field: "email" });
    }
    if registrant_repo::registration_number_exists(pool, &registration_number).await?
        || ambassador_repo::registration_number_exists(pool, &registration_number).await?
    {
        return Err(AppError::Conflict {
            field: "registration_number",
        });
    }

    let mut attempt = 0;
    let user_id = loop {
        attempt += 1;
        let candidate = id_service::next_user_id(pool, config).await?;
        match registrant_repo::insert_registrant(
            pool,
            registrant_repo::NewRegistrant {
                user_id: &candidate,
                name,
                email: &email,
                password,
                gender,
                phone,
                dob,
                college,
                branch,
                registration_number: &registration_number,
                state,
                district,
                referral_code: referral.as_ref().map(|a| a.mca_id.as_str()),
            },
        )
        .await
        {
            Ok(_) => break candidate,
            Err(e) if is_unique_violation(&e) && attempt < SIGNUP_ATTEMPTS => {
                warn!("Signup insert hit unique race (attempt {}), retrying: {}", attempt, e);
            }
            Err(e) if is_unique_violation(&e) => return Err(AppError::Transient),
            Err(e) => return Err(e.into()),
        }
    };

    if let Some(ambassador) = referral {
        // Best-effort: registration already succeeded.
        if let Err(e) = referral_service::add_referral(
            pool,
            &ambassador.mca_id,
            &user_id,
            name,
            college,
            config.referral_points,
        )
        .await
        {
            warn!(
                "Referral link failed for {} via {}: {}",
                user_id, ambassador.mca_id, e
            );
        }
    }

    Ok(user_id)
}

/// Replaces the registrant's event selection.
///
/// An empty selection clears the participant record entirely (idempotent
/// unregister). Para-sports never mix with sports/culturals. The computed
/// fee is stamped onto every stored line item.
pub async fn select_events(
    pool: &SqlitePool,
    user_id: &str,
    selections: &[EventSelection],
) -> Result<SelectionOutcome, AppError> {
    let Some(registrant) = registrant_repo::load_by_user_id(pool, user_id).await? else {
        return Err(AppError::NotFound(format!("user {}", user_id)));
    };

    if selections.is_empty() {
        participant_repo::delete_participant(pool, user_id).await?;
        return Ok(SelectionOutcome {
            amount: 0,
            events: Vec::new(),
        });
    }

    let has_para = selections
        .iter()
        .any(|s| s.event_type.trim().eq_ignore_ascii_case("parasports"));
    let has_standard = selections.iter().any(|s| {
        let t = s.event_type.trim();
        t.eq_ignore_ascii_case("sports") || t.eq_ignore_ascii_case("culturals")
    });
    if has_para && has_standard {
        return Err(AppError::Validation { field: "events" });
    }

    let amount = fee_service::compute_fee(selections, &registrant.gender, &registrant.college);
    let events: Vec<ParticipantEvent> = selections
        .iter()
        .map(|s| ParticipantEvent {
            event_type: s.event_type.trim().to_lowercase(),
            category: fee_service::normalize_category(&s.category),
            fee: amount,
        })
        .collect();

    let events_json = serde_json::to_string(&events).map_err(|_| AppError::Transient)?;
    participant_repo::upsert_participant(pool, user_id, amount, &events_json).await?;

    Ok(SelectionOutcome { amount, events })
}

/// The registrant's stored selection, or an empty one when they never picked
/// events (or cleared them).
pub async fn current_selection(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<SelectionOutcome, AppError> {
    let Some(row) = participant_repo::load_participant(pool, user_id).await? else {
        return Ok(SelectionOutcome {
            amount: 0,
            events: Vec::new(),
        });
    };
    let events: Vec<ParticipantEvent> =
        serde_json::from_str(&row.events_json).unwrap_or_default();
    Ok(SelectionOutcome {
        amount: row.amount,
        events,
    })
}

/// Payment itself happens at an external gateway; only the tracked status is
/// mutable here.
pub async fn set_payment_status(
    pool: &SqlitePool,
    user_id: &str,
    status: &str,
) -> Result<(), AppError> {
    let status = status.trim();
    if status != "pending" && status != "paid" && status != "failed" {
        return Err(AppError::Validation {
            field: "payment_status",
        });
    }
    let updated = registrant_repo::set_payment_status(pool, user_id, status).await?;
    if updated == 0 {
        return Err(AppError::NotFound(format!("user {}", user_id)));
    }
    Ok(())
}

/// A supplied code must resolve to an ambassador whose code is currently
/// accepted; inactive codes read the same as unknown ones.
async fn resolve_referral_code(
    pool: &SqlitePool,
    code: Option<&str>,
) -> Result<Option<CampusAmbassadorRow>, AppError> {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    match ambassador_repo::load_by_mca_id(pool, code).await? {
        Some(ambassador) if ambassador.is_active == 1 => Ok(Some(ambassador)),
        _ => Err(AppError::Validation {
            field: "referral_code",
        }),
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation { field });
    }
    Ok(trimmed)
}
