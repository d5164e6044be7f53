//! # API crate: session and REST client for the job board
//!
//! Everything the views need to talk to the job-board API lives here, behind
//! one entry point: [`SessionService`]. Views hold a session, call its async
//! methods, and render either the result or [`ApiError::user_message`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | Login, registration, logout, persisted user and token, profile calls |
//! | [`client`] | [`AuthorizedClient`]: base URL + optional bearer token on every request |
//! | [`claims`] | Unverified decoding of the token payload to read the claimed user id |
//! | [`jobs`] | Job listing, posting and applicant review |
//! | [`applications`] | Resume upload for a job application |
//! | [`validate`] | Local form checks run before any request |
//! | [`models`] | Wire types (`UserInfo`, `Job`, `Applicant`, ...) |
//! | [`config`] | [`ClientConfig`]: API base URL and cookie settings |
//! | [`error`] | [`ApiError`] taxonomy |
//!
//! ## Endpoints consumed
//!
//! - **Auth**: `POST /auth/login`, `POST /auth/register`, `GET|PUT /auth/profile`
//! - **Jobs**: `GET /jobs`, `GET /jobs/user/:userId`, `POST /jobs/create`
//! - **Applications**: `GET /applications/job/:jobId`, `POST /api/resumes/upload`

pub mod applications;
pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod jobs;
pub mod models;
pub mod session;
pub mod validate;

#[cfg(test)]
mod mock_api;

pub use applications::ApplicationForm;
pub use claims::{extract_user_id, TokenClaims};
pub use client::AuthorizedClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use jobs::JobForm;
pub use models::{
    Applicant, AuthResponse, Job, NewJob, ProfileUpdate, RegisterRequest, ResumeFile, Role,
    UserInfo,
};
pub use session::SessionService;
