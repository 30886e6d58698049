//! Error taxonomy shared by every service.

use sqlx::error::ErrorKind as SqlErrorKind;

/// Caller-facing class of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Unauthorized,
    Forbidden,
    Conflict,
    StoreUnavailable,
}

/// How the store rejected a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreRejection {
    RowNotFound,
    UniqueViolation,

    /// Carries the violated constraint name when the driver reports it.
    ForeignKeyViolation(Option<String>),
    NotNullViolation,
    CheckViolation,
    Other,
}

impl StoreRejection {
    pub(crate) fn classify(error: &sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::RowNotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Other;
        };

        match database_error.kind() {
            SqlErrorKind::UniqueViolation => Self::UniqueViolation,
            SqlErrorKind::ForeignKeyViolation => {
                Self::ForeignKeyViolation(database_error.constraint().map(str::to_string))
            }
            SqlErrorKind::NotNullViolation => Self::NotNullViolation,
            SqlErrorKind::CheckViolation => Self::CheckViolation,
            _ => Self::Other,
        }
    }
}
