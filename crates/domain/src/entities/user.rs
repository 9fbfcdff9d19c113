//! User entity - The authenticated account

use serde::{Deserialize, Serialize};

use lifesim_domain::{Timestamp, UserId};

/// Account record returned by `/api/user/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub created_at: Timestamp,
}
