//! Listings service errors.

use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

#[derive(Debug, Error)]
pub enum ListingsServiceError {
    #[error("item id must be positive, got {0}")]
    InvalidItemId(i64),

    #[error("item not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl ListingsServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidItemId(_) | Self::InvalidData => ErrorKind::InvalidArgument,
            Self::NotFound => ErrorKind::NotFound,
            Self::Sql(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for ListingsServiceError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            StoreRejection::RowNotFound | StoreRejection::ForeignKeyViolation(_) => Self::NotFound,
            StoreRejection::CheckViolation | StoreRejection::NotNullViolation => Self::InvalidData,
            StoreRejection::UniqueViolation | StoreRejection::Other => Self::Sql(error),
        }
    }
}
