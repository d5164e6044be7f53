//! Data models exchanged with the job-board API.

mod application;
mod job;
mod user;

pub use application::{Applicant, ApplicantProfile, ApplicantRef, ResumeFile, ResumeUpload};
pub use job::{Job, NewJob};
pub use user::{AuthResponse, ProfileUpdate, RegisterRequest, Role, UserInfo};
