//! Catalog service errors.

use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("catalog entry already exists")]
    AlreadyExists,

    #[error("catalog entry not found")]
    NotFound,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("size {size} is not valid for item {item}")]
    InvalidSize { item: String, size: String },

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl CatalogServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists => ErrorKind::Conflict,
            Self::NotFound => ErrorKind::NotFound,
            Self::UnknownCategory(_)
            | Self::InvalidSize { .. }
            | Self::InvalidReference
            | Self::MissingRequiredData
            | Self::InvalidData => ErrorKind::InvalidArgument,
            Self::Sql(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for CatalogServiceError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            StoreRejection::RowNotFound => Self::NotFound,
            StoreRejection::UniqueViolation => Self::AlreadyExists,
            StoreRejection::ForeignKeyViolation(_) => Self::InvalidReference,
            StoreRejection::NotNullViolation => Self::MissingRequiredData,
            StoreRejection::CheckViolation => Self::InvalidData,
            StoreRejection::Other => Self::Sql(error),
        }
    }
}
