//! Request-issuing handle bound to the API base URL and, optionally, a token.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP client pre-configured with the API base URL.
///
/// When built with a token, every request carries
/// `Authorization: Bearer <token>`; without one, no such header is sent.
#[derive(Clone, Debug)]
pub struct AuthorizedClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl AuthorizedClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Send `request` and return the raw body of a success response.
    ///
    /// Non-success statuses become [`ApiError::Remote`] with the server's
    /// message when it sent one, else `fallback`. Network failures become
    /// [`ApiError::Transport`] carrying `fallback`.
    pub async fn execute(&self, request: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed: {e}");
            ApiError::Transport {
                message: fallback.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {e}");
            ApiError::Transport {
                message: fallback.to_string(),
            }
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API returned an error");
            return Err(ApiError::remote(status.as_u16(), &body, fallback));
        }
        Ok(body)
    }

    /// Like [`execute`](Self::execute), then parse the body as JSON.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let body = self.execute(request, fallback).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unexpected response body: {e}");
            ApiError::Decode {
                message: fallback.to_string(),
            }
        })
    }
}
