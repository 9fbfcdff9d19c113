//! Place entity - Locations the player has discovered

use serde::{Deserialize, Serialize};

use lifesim_domain::{PlaceId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}
