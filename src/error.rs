use thiserror::Error;

/// Error taxonomy for the registration core.
///
/// Every variant maps to a stable machine-checkable kind via [`AppError::kind`];
/// the Display message is the human-readable half. Internal causes (sqlx
/// errors) are logged by callers, never leaked through `kind()`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{field} is required")]
    Validation { field: &'static str },

    #[error("{field} is already registered")]
    Conflict { field: &'static str },

    #[error("{0} not found")]
    NotFound(String),

    #[error("server busy, please retry")]
    Transient,

    #[error("invalid credentials")]
    Auth,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation",
            AppError::Conflict { .. } => "conflict",
            AppError::NotFound(_) => "not_found",
            AppError::Transient => "transient",
            AppError::Auth => "auth",
        }
    }

    /// The field a validation or conflict error points at, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AppError::Validation { field } | AppError::Conflict { field } => Some(field),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("record".to_string()),
            _ => AppError::Transient,
        }
    }
}

/// True when the storage layer reports a unique-index collision, the signal
/// the signup retry loop keys on.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
