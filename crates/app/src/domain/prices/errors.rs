//! Price ledger errors.

use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

#[derive(Debug, Error)]
pub enum PriceLedgerError {
    #[error("item not found")]
    NotFound,

    #[error("invalid price data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl PriceLedgerError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound => ErrorKind::NotFound,
            Self::InvalidData => ErrorKind::InvalidArgument,
            Self::Sql(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for PriceLedgerError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            // The only reference a price event carries is its item.
            StoreRejection::RowNotFound | StoreRejection::ForeignKeyViolation(_) => Self::NotFound,
            StoreRejection::CheckViolation | StoreRejection::NotNullViolation => Self::InvalidData,
            StoreRejection::UniqueViolation | StoreRejection::Other => Self::Sql(error),
        }
    }
}
