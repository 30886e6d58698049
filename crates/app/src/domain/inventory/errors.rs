//! Inventory service errors.

use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

#[derive(Debug, Error)]
pub enum InventoryServiceError {
    #[error("item not found")]
    NotFound,

    #[error("size {0} is not valid for this item")]
    InvalidSize(String),

    /// The listing does not exist or belongs to another seller.
    #[error("listing not found")]
    NotFoundOrForbidden,

    #[error("unknown seller")]
    UnknownSeller,

    #[error("invalid listing data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl InventoryServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound | Self::NotFoundOrForbidden => ErrorKind::NotFound,
            Self::InvalidSize(_) | Self::InvalidData => ErrorKind::InvalidArgument,
            Self::UnknownSeller => ErrorKind::Unauthorized,
            Self::Sql(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for InventoryServiceError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            StoreRejection::RowNotFound => Self::NotFound,
            StoreRejection::ForeignKeyViolation(Some(constraint))
                if constraint == "inventory_listings_seller_fk" =>
            {
                Self::UnknownSeller
            }
            StoreRejection::ForeignKeyViolation(_) => Self::NotFound,
            StoreRejection::CheckViolation | StoreRejection::NotNullViolation => Self::InvalidData,
            StoreRejection::UniqueViolation | StoreRejection::Other => Self::Sql(error),
        }
    }
}
