//! Credential Port - Bearer token access
//!
//! The HTTP adapter reads the token on every request; the auth flow writes
//! it. Both sides share one implementation (the token store) through this
//! trait so that neither depends on the other.

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CredentialPort: Send + Sync {
    /// Current bearer token, if any
    fn bearer_token(&self) -> Option<String>;

    /// Persist and cache a new token
    fn store_token(&self, token: &str);

    /// Forget the token (memory and storage)
    fn clear_token(&self);
}
