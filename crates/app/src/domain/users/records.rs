//! User Records

use jiff::Timestamp;
use serde::Serialize;

use crate::ids::TypedId;

/// User ID
pub type UserId = TypedId<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}
