//! GameObject entity - Items held in the player's inventory

use serde::{Deserialize, Serialize};

use lifesim_domain::{ObjectId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}
