//! Action entity - One entry of the narrative log

use serde::{Deserialize, Serialize};

use lifesim_domain::{ActionId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub description: String,
    pub timestamp: Timestamp,
}
