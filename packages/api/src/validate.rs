//! Local form checks run before any request is made.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;
use crate::models::{Job, RegisterRequest, ResumeFile};

/// Largest accepted resume upload (5 MiB).
pub const MAX_RESUME_SIZE: u64 = 5 * 1024 * 1024;
/// Shortest accepted password on registration.
pub const MIN_PASSWORD_LEN: usize = 6;

pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_INVALID: &str = "Please enter a valid email";
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";
pub const ERR_PASSWORD_SHORT: &str = "Password must be at least 6 characters";
pub const ERR_PHONE_REQUIRED: &str = "Phone number is required";
pub const ERR_RESUME_REQUIRED: &str = "Resume is required";
pub const ERR_RESUME_TOO_LARGE: &str = "File size must be less than 5MB";
pub const ERR_TITLE_REQUIRED: &str = "Job title is required";
pub const ERR_COMPANY_REQUIRED: &str = "Company name is required";
pub const ERR_DESCRIPTION_REQUIRED: &str = "Job description is required";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

fn required(value: &str, message: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::validation(message))
    } else {
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// Checks for the login form, in the order the form reports them.
pub fn validate_login(email: &str, password: &str) -> Result<(), ApiError> {
    required(email, ERR_EMAIL_REQUIRED)?;
    required(password, ERR_PASSWORD_REQUIRED)?;
    if !is_valid_email(email) {
        return Err(ApiError::validation(ERR_EMAIL_INVALID));
    }
    Ok(())
}

pub fn validate_registration(profile: &RegisterRequest) -> Result<(), ApiError> {
    required(&profile.name, ERR_NAME_REQUIRED)?;
    required(&profile.email, ERR_EMAIL_REQUIRED)?;
    if !is_valid_email(&profile.email) {
        return Err(ApiError::validation(ERR_EMAIL_INVALID));
    }
    if profile.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(ERR_PASSWORD_SHORT));
    }
    required(&profile.phone, ERR_PHONE_REQUIRED)
}

/// Size check applied when a resume is picked, before the form keeps it.
pub fn check_resume_size(size: u64) -> Result<(), ApiError> {
    if size > MAX_RESUME_SIZE {
        Err(ApiError::validation(ERR_RESUME_TOO_LARGE))
    } else {
        Ok(())
    }
}

/// MIME type for the resume formats the apply form accepts, by extension.
pub fn resume_content_type(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

/// Checks for the apply form.
pub fn validate_application(
    name: &str,
    email: &str,
    phone: &str,
    resume: Option<&ResumeFile>,
) -> Result<(), ApiError> {
    required(name, ERR_NAME_REQUIRED)?;
    required(email, ERR_EMAIL_REQUIRED)?;
    required(phone, ERR_PHONE_REQUIRED)?;
    let resume = resume.ok_or_else(|| ApiError::validation(ERR_RESUME_REQUIRED))?;
    check_resume_size(resume.size())
}

pub fn validate_new_job(title: &str, company: &str, description: &str) -> Result<(), ApiError> {
    required(title, ERR_TITLE_REQUIRED)?;
    required(company, ERR_COMPANY_REQUIRED)?;
    required(description, ERR_DESCRIPTION_REQUIRED)
}

/// Split a comma-separated skills field, dropping blanks and keeping order.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Description sent with an application: the job's skills, then its text.
pub fn application_description(job: &Job) -> String {
    if job.skills_required.is_empty() {
        job.description.clone()
    } else {
        format!(
            "Skills: {}. {}",
            job.skills_required.join(", "),
            job.description
        )
    }
}
