//! # Client configuration
//!
//! Where the API lives and how the session is persisted in cookies.
//!
//! ```toml
//! [api]
//! base_url = "https://jobs.example.com"
//!
//! [session]
//! token_cookie = "auth_token"
//! user_cookie = "auth_user"
//! ttl_days = 7
//! ```
//!
//! Every section and field has a default, so an empty document is the default
//! configuration. In the browser build the base URL is baked in at compile
//! time from `JOBBOARD_API_URL` (see [`ClientConfig::from_build_env`]).

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Cookie names and lifetime for the persisted session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_cookie")]
    pub token_cookie: String,
    #[serde(default = "default_user_cookie")]
    pub user_cookie: String,
    #[serde(default = "default_ttl_days")]
    pub ttl_days: i64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_token_cookie() -> String {
    "auth_token".to_string()
}

fn default_user_cookie() -> String {
    "auth_user".to_string()
}

fn default_ttl_days() -> i64 {
    7
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_cookie: default_token_cookie(),
            user_cookie: default_user_cookie(),
            ttl_days: default_ttl_days(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with default session settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Config from the `JOBBOARD_API_URL` variable seen at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("JOBBOARD_API_URL").map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
