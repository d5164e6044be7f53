//! # Session service: the single owner of authentication state
//!
//! [`SessionService`] wraps a [`CookieStore`] and is the only code that reads or
//! writes the two session cookies:
//!
//! | Cookie | Content |
//! |--------|---------|
//! | `auth_token` | Raw bearer token returned by the API. |
//! | `auth_user` | JSON-serialised [`UserInfo`]. |
//!
//! Both are written together on login/registration (7-day expiry by default)
//! and deleted together on logout. Logout is local only: the API is not told.
//!
//! ## Outbound calls
//!
//! [`authorized_client`](SessionService::authorized_client) returns an
//! [`AuthorizedClient`] carrying the current token, so views never handle the
//! token themselves. Nothing is retried; each error carries the server's
//! message or a fixed fallback for the view to render.

use serde::{Deserialize, Serialize};
use store::CookieStore;

use crate::claims;
use crate::client::AuthorizedClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{AuthResponse, ProfileUpdate, RegisterRequest, UserInfo};

const LOGIN_FAILED: &str = "Login failed. Please try again.";
const REGISTRATION_FAILED: &str = "Registration failed";
const PROFILE_FAILED: &str = "Failed to fetch profile";
const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `GET /auth/profile` may answer with the user itself or wrapped in `{ user }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileEnvelope {
    Wrapped { user: UserInfo },
    Bare(UserInfo),
}

impl ProfileEnvelope {
    fn into_user(self) -> UserInfo {
        match self {
            ProfileEnvelope::Wrapped { user } | ProfileEnvelope::Bare(user) => user,
        }
    }
}

#[derive(Deserialize)]
struct ProfileUpdateResponse {
    #[serde(default)]
    user: Option<UserInfo>,
}

/// Authentication state and authenticated requests, backed by cookies.
#[derive(Clone, Debug)]
pub struct SessionService<S> {
    cookies: S,
    config: ClientConfig,
    http: reqwest::Client,
}

impl<S: CookieStore> SessionService<S> {
    pub fn new(cookies: S, config: ClientConfig) -> Self {
        Self {
            cookies,
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Log in with email and password, persisting the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, ApiError> {
        let client = self.anonymous_client();
        let request = client
            .post("/auth/login")
            .json(&LoginRequest { email, password });
        let auth: AuthResponse = client.send_json(request, LOGIN_FAILED).await?;
        self.persist(&auth)?;
        tracing::info!(user_id = %auth.user.id, role = %auth.user.role, "Logged in");
        Ok(auth.user)
    }

    /// Create an account, persisting the returned session like [`login`](Self::login).
    pub async fn register(&self, profile: &RegisterRequest) -> Result<UserInfo, ApiError> {
        let client = self.anonymous_client();
        let request = client.post("/auth/register").json(profile);
        let auth: AuthResponse = client.send_json(request, REGISTRATION_FAILED).await?;
        self.persist(&auth)?;
        tracing::info!(user_id = %auth.user.id, role = %auth.user.role, "Registered");
        Ok(auth.user)
    }

    /// Forget the session locally. The API is not contacted.
    pub fn logout(&self) {
        self.cookies.delete(&self.config.session.token_cookie);
        self.cookies.delete(&self.config.session.user_cookie);
        tracing::info!("Logged out");
    }

    /// The persisted user, if any.
    pub fn user(&self) -> Option<UserInfo> {
        let raw = self.cookies.get(&self.config.session.user_cookie)?;
        serde_json::from_str(&raw)
            .map_err(|e| tracing::warn!("Ignoring unreadable user cookie: {e}"))
            .ok()
    }

    /// The raw persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.cookies
            .get(&self.config.session.token_cookie)
            .filter(|t| !t.is_empty())
    }

    /// True iff a token is persisted. The token itself is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Client that attaches the current token (if any) to every request.
    pub fn authorized_client(&self) -> AuthorizedClient {
        AuthorizedClient::new(self.http.clone(), &self.config.api.base_url, self.token())
    }

    /// Claimed user id of the stored token.
    ///
    /// Fails with [`ApiError::AuthRequired`] without a token and with
    /// [`ApiError::Identity`] when the token carries no id.
    pub fn current_user_id(&self) -> Result<String, ApiError> {
        let token = self.token().ok_or_else(ApiError::auth_required)?;
        claims::extract_user_id(&token).ok_or_else(|| {
            tracing::warn!("Stored token has no readable user id");
            ApiError::identity()
        })
    }

    /// Fetch the profile of the logged-in user from the API.
    pub async fn profile(&self) -> Result<UserInfo, ApiError> {
        let client = self.require_token()?;
        let envelope: ProfileEnvelope = client
            .send_json(client.get("/auth/profile"), PROFILE_FAILED)
            .await?;
        Ok(envelope.into_user())
    }

    /// Update profile fields; the stored user is refreshed from the response.
    pub async fn update_profile(&self, updates: &ProfileUpdate) -> Result<Option<UserInfo>, ApiError> {
        let client = self.require_token()?;
        let request = client.put("/auth/profile").json(updates);
        let response: ProfileUpdateResponse =
            client.send_json(request, PROFILE_UPDATE_FAILED).await?;
        if let Some(user) = &response.user {
            self.store_user(user)?;
        }
        Ok(response.user)
    }

    fn anonymous_client(&self) -> AuthorizedClient {
        AuthorizedClient::new(self.http.clone(), &self.config.api.base_url, None)
    }

    fn require_token(&self) -> Result<AuthorizedClient, ApiError> {
        let client = self.authorized_client();
        if client.has_token() {
            Ok(client)
        } else {
            Err(ApiError::auth_required())
        }
    }

    fn persist(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        let user_json = user_json(&auth.user)?;
        let session = &self.config.session;
        self.cookies
            .set(&session.token_cookie, &auth.token, session.ttl_days);
        self.cookies
            .set(&session.user_cookie, &user_json, session.ttl_days);
        Ok(())
    }

    fn store_user(&self, user: &UserInfo) -> Result<(), ApiError> {
        let session = &self.config.session;
        self.cookies
            .set(&session.user_cookie, &user_json(user)?, session.ttl_days);
        Ok(())
    }
}

fn user_json(user: &UserInfo) -> Result<String, ApiError> {
    serde_json::to_string(user).map_err(|e| ApiError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::fake_token;
    use crate::mock_api::MockApi;
    use crate::models::Role;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::MemoryCookies;

    fn auth_router() -> Router {
        Router::new()
            .route(
                "/auth/login",
                post(|Json(body): Json<Value>| async move {
                    if body["email"] == "a@b.com" && body["password"] == "secret" {
                        (
                            StatusCode::OK,
                            Json(json!({
                                "token": fake_token(r#"{"userId":"u1"}"#),
                                "user": {"_id": "u1", "name": "Ann", "email": "a@b.com", "role": "jobseeker", "phone": "555"}
                            })),
                        )
                    } else if body["email"] == "boss@b.com" {
                        (
                            StatusCode::OK,
                            Json(json!({
                                "token": fake_token(r#"{"id":"e1"}"#),
                                "user": {"_id": "e1", "name": "Boss", "email": "boss@b.com", "role": "employer"}
                            })),
                        )
                    } else {
                        (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"error": "Invalid email or password"})),
                        )
                    }
                }),
            )
            .route(
                "/auth/register",
                post(|Json(body): Json<Value>| async move {
                    Json(json!({
                        "token": fake_token(r#"{"_id":"n1"}"#),
                        "user": {"id": "n1", "name": body["name"], "email": body["email"], "role": body["role"], "phone": body["phone"]}
                    }))
                }),
            )
            .route(
                "/auth/profile",
                get(|headers: HeaderMap| async move {
                    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
                        Some(h) if h.starts_with("Bearer ") => (
                            StatusCode::OK,
                            Json(json!({"_id": "u1", "name": "Ann", "email": "a@b.com", "role": "jobseeker"})),
                        ),
                        _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "No token"}))),
                    }
                })
                .put(|Json(body): Json<Value>| async move {
                    Json(json!({
                        "user": {"_id": "u1", "name": body["name"], "email": "a@b.com", "role": "jobseeker", "phone": "777"}
                    }))
                }),
            )
    }

    fn service(api: &MockApi) -> SessionService<MemoryCookies> {
        SessionService::new(MemoryCookies::new(), ClientConfig::new(&api.base_url))
    }

    #[tokio::test]
    async fn test_login_persists_session() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);
        assert!(!session.is_authenticated());

        let user = session.login("a@b.com", "secret").await.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role.landing_route(), "/alljobs");

        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(user));
        assert_eq!(session.current_user_id().unwrap(), "u1");
        // Login is sent without credentials of its own.
        assert_eq!(api.calls()[0].authorization, None);
    }

    #[tokio::test]
    async fn test_employer_lands_on_dashboard() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);

        let user = session.login("boss@b.com", "whatever").await.unwrap();
        assert_eq!(user.role, Role::Employer);
        assert_eq!(user.role.landing_route(), "/employer");
        assert_eq!(session.current_user_id().unwrap(), "e1");
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);

        let err = session.login("a@b.com", "wrong").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Remote {
                status: 401,
                message: "Invalid email or password".to_string()
            }
        );
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_login_unreachable_uses_fallback() {
        // Nothing listens on port 9 of the loopback interface.
        let session = SessionService::new(MemoryCookies::new(), ClientConfig::new("http://127.0.0.1:9"));
        let err = session.login("a@b.com", "secret").await.unwrap_err();
        assert_eq!(err.user_message(), LOGIN_FAILED);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_both_cookies() {
        let api = MockApi::start(auth_router()).await;
        let cookies = MemoryCookies::new();
        let session = SessionService::new(cookies.clone(), ClientConfig::new(&api.base_url));

        session.login("a@b.com", "secret").await.unwrap();
        assert!(session.is_authenticated());
        let calls_before = api.calls().len();

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(cookies.get("auth_token").is_none());
        assert!(cookies.get("auth_user").is_none());
        // Local-only invalidation.
        assert_eq!(api.calls().len(), calls_before);
    }

    #[tokio::test]
    async fn test_register_persists_session() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);

        let user = session
            .register(&RegisterRequest {
                name: "Nia".to_string(),
                email: "nia@x.io".to_string(),
                password: "hunter22".to_string(),
                role: Role::Employer,
                phone: "123".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.id, "n1");
        assert_eq!(user.role, Role::Employer);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user_id().unwrap(), "n1");
    }

    #[tokio::test]
    async fn test_authorized_client_attaches_token() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);
        session.login("a@b.com", "secret").await.unwrap();

        let profile = session.profile().await.unwrap();
        assert_eq!(profile.name, "Ann");

        let call = api.calls().into_iter().find(|c| c.path == "/auth/profile").unwrap();
        assert_eq!(
            call.authorization,
            Some(format!("Bearer {}", session.token().unwrap()))
        );
    }

    #[tokio::test]
    async fn test_profile_requires_token() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);

        assert_eq!(session.profile().await.unwrap_err(), ApiError::auth_required());
        assert_eq!(api.calls_to("/auth/profile"), 0);
    }

    #[tokio::test]
    async fn test_update_profile_refreshes_stored_user() {
        let api = MockApi::start(auth_router()).await;
        let session = service(&api);
        session.login("a@b.com", "secret").await.unwrap();

        let updated = session
            .update_profile(&ProfileUpdate {
                name: Some("Ann B".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ann B");
        assert_eq!(session.user().unwrap().name, "Ann B");
        assert_eq!(session.user().unwrap().phone.as_deref(), Some("777"));
    }

    #[test]
    fn test_identity_errors() {
        let cookies = MemoryCookies::new();
        let session = SessionService::new(cookies.clone(), ClientConfig::default());
        assert_eq!(session.current_user_id().unwrap_err(), ApiError::auth_required());

        cookies.set("auth_token", &fake_token("{}"), 7);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user_id().unwrap_err(), ApiError::identity());

        cookies.set("auth_token", "garbage", 7);
        assert_eq!(session.current_user_id().unwrap_err(), ApiError::identity());
    }

    #[test]
    fn test_unreadable_user_cookie() {
        let cookies = MemoryCookies::new();
        let session = SessionService::new(cookies.clone(), ClientConfig::default());
        cookies.set("auth_user", "{not json", 7);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_custom_cookie_names() {
        let cookies = MemoryCookies::new();
        let mut config = ClientConfig::default();
        config.session.token_cookie = "jb_token".to_string();
        let session = SessionService::new(cookies.clone(), config);

        cookies.set("auth_token", &fake_token(r#"{"userId":"u1"}"#), 7);
        assert!(!session.is_authenticated());
        cookies.set("jb_token", &fake_token(r#"{"userId":"u1"}"#), 7);
        assert!(session.is_authenticated());
    }
}
