//! Users service errors.

use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("username or email already taken")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl UsersServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::MissingRequiredData | Self::InvalidData => ErrorKind::InvalidArgument,
            Self::Sql(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for UsersServiceError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            StoreRejection::RowNotFound => Self::NotFound,
            StoreRejection::UniqueViolation => Self::AlreadyExists,
            StoreRejection::NotNullViolation => Self::MissingRequiredData,
            StoreRejection::CheckViolation => Self::InvalidData,
            StoreRejection::ForeignKeyViolation(_) | StoreRejection::Other => Self::Sql(error),
        }
    }
}
