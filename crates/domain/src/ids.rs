use std::fmt;

use serde::{Deserialize, Serialize};

// Backend ids are opaque strings; the client never generates or inspects them.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(UserId);
define_id!(CharacterId);
define_id!(PlaceId);
define_id!(ObjectId);
define_id!(ActionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = PlaceId::new("8f14e45f-ceea-467f-a0e6-1c2f4c4d2a1b");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"8f14e45f-ceea-467f-a0e6-1c2f4c4d2a1b\"");

        let back: PlaceId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn non_uuid_ids_are_accepted() {
        let id: CharacterId = serde_json::from_str("\"npc-42\"").expect("deserialize");
        assert_eq!(id.as_str(), "npc-42");
        assert_eq!(id.to_string(), "npc-42");
    }
}
