use sqlx::SqlitePool;

use crate::database::credential_repo;
use crate::error::AppError;
use crate::models::RegistrantRow;

/// Seam for the external credential collaborator. Token issuance and hashing
/// live outside this crate; we only ask "does this plain credential match
/// the stored one".
pub trait CredentialVerifier {
    fn verify(&self, plain: &str, stored: &str) -> bool;
}

/// Test support. Production wires the external auth service behind
/// [`CredentialVerifier`] instead.
pub struct PlainTextVerifier;

impl CredentialVerifier for PlainTextVerifier {
    fn verify(&self, plain: &str, stored: &str) -> bool {
        plain == stored
    }
}

/// Looks the identifier up (email, user ID, or registration number, matched
/// case-insensitively) and checks the credential. Unknown identifiers and
/// rejected credentials are indistinguishable to the caller.
pub async fn authenticate<V: CredentialVerifier>(
    pool: &SqlitePool,
    verifier: &V,
    identifier: &str,
    credential: &str,
) -> Result<RegistrantRow, AppError> {
    let identifier = identifier.trim();
    if identifier.is_empty() || credential.is_empty() {
        return Err(AppError::Auth);
    }

    let Some(row) = credential_repo::find_by_identifier(pool, identifier).await? else {
        return Err(AppError::Auth);
    };
    if !verifier.verify(credential, &row.password) {
        return Err(AppError::Auth);
    }
    Ok(row)
}
