//! Auth Service - Register, login and identity checks
//!
//! Register and login store the returned bearer token through the
//! [`CredentialPort`] before returning; the HTTP adapter then picks it up for
//! every following request. Logout never contacts the server.

use std::sync::Arc;

use lifesim_domain::User;

use crate::application::dto::{AuthToken, LoginRequest, RegisterRequest};
use crate::ports::outbound::{ApiError, ApiPort, CredentialPort};

pub struct AuthService<A: ApiPort> {
    api: A,
    credentials: Arc<dyn CredentialPort>,
}

impl<A: ApiPort> AuthService<A> {
    pub fn new(api: A, credentials: Arc<dyn CredentialPort>) -> Self {
        Self { api, credentials }
    }

    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthToken, ApiError> {
        let request = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        let token: AuthToken = self.api.post("/api/auth/register", &request).await?;
        self.credentials.store_token(&token.access_token);
        tracing::info!(username, "Registered new account");
        Ok(token)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token: AuthToken = self.api.post("/api/auth/login", &request).await?;
        self.credentials.store_token(&token.access_token);
        tracing::info!("Logged in");
        Ok(token)
    }

    /// The user the stored token belongs to
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.api.get("/api/user/me").await
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.bearer_token().is_some()
    }

    pub fn logout(&self) {
        self.credentials.clear_token();
        tracing::info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::application::services::TokenStore;
    use crate::infrastructure::platform::mock::MemoryStorageProvider;
    use crate::infrastructure::testing::FakeBackend;
    use crate::ports::outbound::{MockCredentialPort, MockRawApiPort};
    use serde_json::json;

    fn scenario() -> (AuthService<Api>, Arc<TokenStore<MemoryStorageProvider>>) {
        let tokens = Arc::new(TokenStore::load(MemoryStorageProvider::default()));
        let backend = Arc::new(FakeBackend::new(tokens.clone()));
        (AuthService::new(Api::new(backend), tokens.clone()), tokens)
    }

    #[tokio::test]
    async fn login_then_current_user_succeeds() {
        let (auth, tokens) = scenario();
        auth.register("rin@example.test", "rin", "secret")
            .await
            .expect("register");
        auth.logout();
        assert!(!tokens.has_token());

        auth.login("rin@example.test", "secret").await.expect("login");

        assert!(tokens.has_token());
        let user = auth.current_user().await.expect("current user");
        assert_eq!(user.username, "rin");
        assert_eq!(user.email, "rin@example.test");
    }

    #[tokio::test]
    async fn cleared_token_makes_authenticated_calls_fail() {
        let (auth, tokens) = scenario();
        auth.register("ash@example.test", "ash", "pw").await.expect("register");

        auth.logout();

        assert!(!auth.is_logged_in());
        assert_eq!(tokens.token(), None);
        assert_eq!(
            auth.current_user().await,
            Err(ApiError::request_failed("Not authenticated"))
        );
    }

    #[tokio::test]
    async fn wrong_password_surfaces_server_detail() {
        let (auth, tokens) = scenario();
        auth.register("kai@example.test", "kai", "right").await.expect("register");
        auth.logout();

        let err = auth
            .login("kai@example.test", "wrong")
            .await
            .expect_err("login should fail");

        assert_eq!(err.message(), "Incorrect email or password");
        assert!(!tokens.has_token());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let (auth, _) = scenario();
        auth.register("dup@example.test", "one", "pw").await.expect("first");

        let err = auth
            .register("dup@example.test", "two", "pw")
            .await
            .expect_err("second register");

        assert_eq!(err, ApiError::request_failed("Email already registered"));
    }

    #[tokio::test]
    async fn failed_login_does_not_store_anything() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Err(ApiError::request_failed("An error occurred")));
        let mut credentials = MockCredentialPort::new();
        credentials.expect_store_token().never();
        let auth = AuthService::new(Api::new(Arc::new(raw)), Arc::new(credentials));

        assert!(auth.login("a@b.c", "pw").await.is_err());
    }

    #[tokio::test]
    async fn login_stores_returned_token() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_json()
            .returning(|_, _| Ok(json!({"access_token": "tok-9", "token_type": "bearer"})));
        let mut credentials = MockCredentialPort::new();
        credentials
            .expect_store_token()
            .withf(|token| token.to_string() == "tok-9")
            .times(1)
            .return_const(());
        let auth = AuthService::new(Api::new(Arc::new(raw)), Arc::new(credentials));

        let token = auth.login("a@b.c", "pw").await.expect("login");
        assert_eq!(token.access_token, "tok-9");
    }
}
