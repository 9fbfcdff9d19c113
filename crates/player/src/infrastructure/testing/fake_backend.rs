//! In-memory stand-in for the game backend
//!
//! Implements [`RawApiPort`] with the same routes, authentication rules and
//! state mutations as the real service, so application services can be
//! exercised end to end without a network. The bearer token is read from a
//! [`CredentialPort`] exactly like [`crate::infrastructure::http_client::ApiAdapter`]
//! does, and rejections go through the same `detail` extraction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use lifesim_domain::{
    Action, Character, CharacterAttributes, CharacterCharacteristics, GameObject, GameState,
    Place, PlaceId, Timestamp, User, UserId,
};

use crate::infrastructure::http_client::extract_error_message;
use crate::ports::outbound::{ApiError, CredentialPort, RawApiPort};

const GENERATED_CHARACTERS: &[&str] = &["Mira", "Tobin", "Elspeth", "Quill", "Saoirse"];
const GENERATED_PLACES: &[&str] = &[
    "Whispering Forest",
    "Saltmarsh Harbor",
    "Old Lantern Inn",
    "Copper Hills",
];
const GENERATED_OBJECTS: &[&str] = &["Brass Compass", "Worn Journal", "Silver Key"];

struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct Inner {
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, UserId>,
    states: HashMap<UserId, GameState>,
    places: HashMap<PlaceId, Place>,
    generated: usize,
    requests: Vec<String>,
}

pub struct FakeBackend {
    inner: Mutex<Inner>,
    credentials: Arc<dyn CredentialPort>,
}

#[derive(Deserialize)]
struct RegisterBody {
    email: String,
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct CharacterBody {
    name: String,
    attributes: CharacterAttributes,
    characteristics: CharacterCharacteristics,
}

#[derive(Deserialize)]
struct ActionBody {
    #[serde(default)]
    context: String,
}

fn reject(detail: &str) -> ApiError {
    ApiError::RequestFailed(extract_error_message(&json!({ "detail": detail }).to_string()))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Value) -> Result<T, ApiError> {
    serde_json::from_value(body.clone()).map_err(|_| reject("Invalid request body"))
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl FakeBackend {
    pub fn new(credentials: Arc<dyn CredentialPort>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            credentials,
        }
    }

    /// Every request seen so far, as `METHOD /path`
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    /// Register an account directly, returning its token
    pub fn seed_account(&self, email: &str, username: &str, password: &str) -> String {
        let mut inner = self.lock();
        Self::create_account(&mut inner, email, username, password)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means another test thread panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn create_account(inner: &mut Inner, email: &str, username: &str, password: &str) -> String {
        let user = User {
            id: UserId::new(new_id()),
            email: email.to_string(),
            username: username.to_string(),
            created_at: Timestamp::now(),
        };
        let token = new_id();
        inner
            .states
            .insert(user.id.clone(), GameState::new(user.id.clone(), Timestamp::now()));
        inner.tokens.insert(token.clone(), user.id.clone());
        inner.accounts.insert(
            email.to_string(),
            Account {
                user,
                password: password.to_string(),
            },
        );
        token
    }

    fn current_user_id(&self, inner: &Inner) -> Result<UserId, ApiError> {
        let token = self
            .credentials
            .bearer_token()
            .ok_or_else(|| reject("Not authenticated"))?;
        inner
            .tokens
            .get(&token)
            .cloned()
            .ok_or_else(|| reject("Could not validate credentials"))
    }

    fn state_mut<'a>(inner: &'a mut Inner, user_id: &UserId) -> Result<&'a mut GameState, ApiError> {
        inner
            .states
            .get_mut(user_id)
            .ok_or_else(|| reject("Game state not found"))
    }

    fn next_name(inner: &mut Inner, names: &[&str]) -> String {
        let name = names[inner.generated % names.len()].to_string();
        inner.generated += 1;
        name
    }

    fn build_character(body: CharacterBody) -> Character {
        Character {
            id: new_id().into(),
            image_url: Some(format!("https://images.test/character/{}.png", body.name)),
            name: body.name,
            attributes: body.attributes,
            characteristics: body.characteristics,
            created_at: Timestamp::now(),
        }
    }

    fn route(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut inner = self.lock();
        inner.requests.push(format!("{method} {path}"));
        let empty = Value::Null;
        let body = body.unwrap_or(&empty);

        match (method, path) {
            ("POST", "/api/auth/register") => {
                let body: RegisterBody = parse_body(body)?;
                if inner.accounts.contains_key(&body.email) {
                    return Err(reject("Email already registered"));
                }
                let token =
                    Self::create_account(&mut inner, &body.email, &body.username, &body.password);
                Ok(json!({ "access_token": token, "token_type": "bearer" }))
            }
            ("POST", "/api/auth/login") => {
                let body: LoginBody = parse_body(body)?;
                let user_id = match inner.accounts.get(&body.email) {
                    Some(account) if account.password == body.password => account.user.id.clone(),
                    _ => return Err(reject("Incorrect email or password")),
                };
                let token = new_id();
                inner.tokens.insert(token.clone(), user_id);
                Ok(json!({ "access_token": token, "token_type": "bearer" }))
            }
            ("GET", "/api/user/me") => {
                let user_id = self.current_user_id(&inner)?;
                let account = inner
                    .accounts
                    .values()
                    .find(|account| account.user.id == user_id)
                    .ok_or_else(|| reject("Could not validate credentials"))?;
                to_value(&account.user)
            }
            ("POST", "/api/character/create") => {
                let user_id = self.current_user_id(&inner)?;
                let character = Self::build_character(parse_body(body)?);
                Self::state_mut(&mut inner, &user_id)?.player_character = Some(character.clone());
                to_value(&character)
            }
            ("POST", "/api/character/preview") => {
                to_value(&Self::build_character(parse_body(body)?))
            }
            ("GET", "/api/game/state") => {
                let user_id = self.current_user_id(&inner)?;
                let state = Self::state_mut(&mut inner, &user_id)?;
                to_value(&*state)
            }
            ("POST", "/api/game/generate-character") => {
                let user_id = self.current_user_id(&inner)?;
                let name = Self::next_name(&mut inner, GENERATED_CHARACTERS);
                let character = Self::build_character(CharacterBody {
                    name,
                    attributes: CharacterAttributes::default(),
                    characteristics: CharacterCharacteristics::default(),
                });
                Self::state_mut(&mut inner, &user_id)?
                    .discovered_characters
                    .push(character.clone());
                to_value(&character)
            }
            ("POST", "/api/game/generate-place") => {
                let user_id = self.current_user_id(&inner)?;
                let name = Self::next_name(&mut inner, GENERATED_PLACES);
                let place = Place {
                    id: new_id().into(),
                    description: format!("You stand at the edge of {name}."),
                    image_url: None,
                    name,
                    created_at: Timestamp::now(),
                };
                inner.places.insert(place.id.clone(), place.clone());
                let state = Self::state_mut(&mut inner, &user_id)?;
                state.discovered_places.push(place.clone());
                state.current_place = Some(place.clone());
                to_value(&place)
            }
            ("POST", "/api/game/generate-object") => {
                let user_id = self.current_user_id(&inner)?;
                let name = Self::next_name(&mut inner, GENERATED_OBJECTS);
                let object = GameObject {
                    id: new_id().into(),
                    description: format!("A slightly battered {name}."),
                    image_url: None,
                    name,
                    created_at: Timestamp::now(),
                };
                Self::state_mut(&mut inner, &user_id)?
                    .inventory
                    .push(object.clone());
                to_value(&object)
            }
            ("POST", "/api/game/generate-action") => {
                let user_id = self.current_user_id(&inner)?;
                let body: ActionBody = parse_body(body)?;
                let text = if body.context.is_empty() {
                    "You wander without a destination.".to_string()
                } else {
                    format!("You explore {} and find fresh tracks.", body.context)
                };
                let action = Action {
                    id: new_id().into(),
                    description: text.clone(),
                    timestamp: Timestamp::now(),
                };
                let timestamp = action.timestamp;
                Self::state_mut(&mut inner, &user_id)?
                    .action_history
                    .push(action);
                Ok(json!({ "action": text, "timestamp": timestamp }))
            }
            ("POST", travel) if travel.starts_with("/api/game/travel-to-place/") => {
                let user_id = self.current_user_id(&inner)?;
                let place_id = PlaceId::new(travel.trim_start_matches("/api/game/travel-to-place/"));
                let place = inner
                    .places
                    .get(&place_id)
                    .cloned()
                    .ok_or_else(|| reject("Place not found"))?;
                Self::state_mut(&mut inner, &user_id)?.current_place = Some(place.clone());
                Ok(json!({ "message": format!("Traveled to {}", place.name), "place": place }))
            }
            _ => Err(reject("Not Found")),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for FakeBackend {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.route("GET", path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.route("POST", path, Some(body))
    }

    async fn post_empty_json(&self, path: &str) -> Result<Value, ApiError> {
        self.route("POST", path, None)
    }
}
