//! Response envelopes

use serde::{Deserialize, Serialize};

use lifesim_domain::{Place, Timestamp};

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Returned by register and login
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

/// Returned by generate-action; the backend also appends it to the history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAction {
    pub action: String,
    pub timestamp: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelResult {
    pub message: String,
    pub place: Place,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_defaults_to_bearer() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token": "abc"}"#).expect("token");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn travel_result_carries_place() {
        let json = r#"{
            "message": "Traveled to Copper Hills",
            "place": {
                "id": "p-1", "name": "Copper Hills", "description": "Rolling hills",
                "image_url": null, "created_at": "2024-05-01T12:00:00"
            }
        }"#;
        let result: TravelResult = serde_json::from_str(json).expect("travel");
        assert_eq!(result.message, "Traveled to Copper Hills");
        assert_eq!(result.place.name, "Copper Hills");
    }
}
