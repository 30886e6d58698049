//! Orders service errors.

use grailify::pricing::TotalPriceError;
use thiserror::Error;

use crate::errors::{ErrorKind, StoreRejection};

/// Foreign key from an order to its buyer.
const ORDER_USER_CONSTRAINT: &str = "orders_user_fk";

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("cart is empty")]
    EmptyCart,

    #[error("invalid order total")]
    InvalidTotal(#[from] TotalPriceError),

    #[error("declared total {declared} does not match cart total {expected}")]
    TotalMismatch { declared: String, expected: String },

    #[error("unknown user")]
    Unauthorized,

    #[error("cart references an unknown item or listing")]
    InvalidReference,

    #[error("order not found")]
    NotFound,

    #[error("invalid order data")]
    InvalidData,

    #[error("storage error")]
    StoreUnavailable(#[source] sqlx::Error),
}

impl OrdersServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCart
            | Self::InvalidTotal(_)
            | Self::TotalMismatch { .. }
            | Self::InvalidReference
            | Self::InvalidData => ErrorKind::InvalidArgument,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::NotFound => ErrorKind::NotFound,
            Self::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
        }
    }
}

impl From<sqlx::Error> for OrdersServiceError {
    fn from(error: sqlx::Error) -> Self {
        match StoreRejection::classify(&error) {
            StoreRejection::RowNotFound => Self::NotFound,
            StoreRejection::ForeignKeyViolation(Some(constraint))
                if constraint == ORDER_USER_CONSTRAINT =>
            {
                Self::Unauthorized
            }
            StoreRejection::ForeignKeyViolation(_) => Self::InvalidReference,
            StoreRejection::CheckViolation | StoreRejection::NotNullViolation => Self::InvalidData,
            StoreRejection::UniqueViolation | StoreRejection::Other => {
                Self::StoreUnavailable(error)
            }
        }
    }
}
