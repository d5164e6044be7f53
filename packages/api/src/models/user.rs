//! # User model
//!
//! [`UserInfo`] is the profile the API returns on login, registration and
//! `GET /auth/profile`, and the value the session keeps JSON-serialised in the
//! `auth_user` cookie. The API is backed by a document store, so the id may
//! arrive as `_id`; both spellings deserialise into [`UserInfo::id`], and it
//! is always written back out as `id`.
//!
//! [`Role`] drives the role-conditional parts of the UI: employers land on
//! `/employer` and see their postings, everyone else lands on `/alljobs`.
//! Unknown role strings are kept verbatim rather than rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role as sent by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    JobSeeker,
    Employer,
    Other(String),
}

impl Role {
    pub fn is_employer(&self) -> bool {
        matches!(self, Role::Employer)
    }

    /// Route a user of this role lands on after logging in.
    pub fn landing_route(&self) -> &'static str {
        if self.is_employer() {
            "/employer"
        } else {
            "/alljobs"
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::JobSeeker => "jobseeker",
            Role::Employer => "employer",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "employer" => Role::Employer,
            "jobseeker" | "job_seeker" | "candidate" | "" => Role::JobSeeker,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Body of `POST /auth/login` and `POST /auth/register` responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub phone: String,
}

/// Body of `PUT /auth/profile`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}
