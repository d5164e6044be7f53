//! Job listing, posting and applicant review calls.
//!
//! The list endpoints answer with a `{ "jobs": [...] }` envelope. That shape
//! is the only one accepted: a bare array is reported as an unexpected
//! response rather than guessed at.

use serde::Deserialize;
use store::CookieStore;

use crate::client::AuthorizedClient;
use crate::error::ApiError;
use crate::models::{Applicant, Job, NewJob};
use crate::session::SessionService;
use crate::validate;

pub const ERR_LOAD_JOBS: &str = "Failed to load jobs. Please try again later.";
pub const ERR_POST_JOB: &str = "Failed to post job. Please try again.";
pub const ERR_LOAD_APPLICANTS: &str = "Failed to load applicants.";
pub const ERR_LOGIN_TO_POST: &str = "You must be logged in to post a job.";
pub const ERR_NO_TOKEN: &str = "No authentication token found.";

#[derive(Deserialize)]
struct JobsEnvelope {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Deserialize)]
struct ApplicantsEnvelope {
    #[serde(default)]
    applicants: Vec<Applicant>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedJob {
    Wrapped { job: Job },
    Bare(Job),
}

/// Contents of the post-a-job form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// Comma-separated, as typed.
    pub skills: String,
}

impl JobForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate::validate_new_job(&self.title, &self.company, &self.description)
    }

    pub fn to_new_job(&self, posted_by: String) -> NewJob {
        NewJob {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            skills_required: validate::parse_skills(&self.skills),
            posted_by,
        }
    }
}

impl AuthorizedClient {
    /// `GET /jobs`
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let envelope: JobsEnvelope = self.send_json(self.get("/jobs"), ERR_LOAD_JOBS).await?;
        Ok(envelope.jobs)
    }

    /// `GET /jobs/user/:userId`
    pub async fn jobs_posted_by(&self, user_id: &str) -> Result<Vec<Job>, ApiError> {
        let request = self.get(&format!("/jobs/user/{user_id}"));
        let envelope: JobsEnvelope = self.send_json(request, ERR_LOAD_JOBS).await?;
        Ok(envelope.jobs)
    }

    /// `POST /jobs/create`. Returns the created job when the response carries one.
    pub async fn create_job(&self, job: &NewJob) -> Result<Option<Job>, ApiError> {
        let body = self
            .execute(self.post("/jobs/create").json(job), ERR_POST_JOB)
            .await?;
        Ok(serde_json::from_str::<CreatedJob>(&body)
            .ok()
            .map(|created| match created {
                CreatedJob::Wrapped { job } | CreatedJob::Bare(job) => job,
            }))
    }

    /// `GET /applications/job/:jobId`
    pub async fn applicants_for(&self, job_id: &str) -> Result<Vec<Applicant>, ApiError> {
        let request = self.get(&format!("/applications/job/{job_id}"));
        let envelope: ApplicantsEnvelope = self.send_json(request, ERR_LOAD_APPLICANTS).await?;
        Ok(envelope.applicants)
    }
}

impl<S: CookieStore> SessionService<S> {
    /// All open postings.
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.authorized_client().list_jobs().await
    }

    /// Postings of the logged-in employer.
    pub async fn posted_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let user_id = self.current_user_id().map_err(|e| match e {
            ApiError::AuthRequired(_) => ApiError::AuthRequired(ERR_NO_TOKEN.to_string()),
            other => other,
        })?;
        self.authorized_client().jobs_posted_by(&user_id).await
    }

    /// Validate the form and post it on behalf of the logged-in user.
    pub async fn post_job(&self, form: &JobForm) -> Result<Option<Job>, ApiError> {
        form.validate()?;
        let user_id = self.current_user_id().map_err(|e| match e {
            ApiError::AuthRequired(_) => ApiError::AuthRequired(ERR_LOGIN_TO_POST.to_string()),
            other => other,
        })?;
        let created = self
            .authorized_client()
            .create_job(&form.to_new_job(user_id))
            .await?;
        tracing::info!(title = %form.title.trim(), "Job posted");
        Ok(created)
    }

    pub async fn applicants(&self, job_id: &str) -> Result<Vec<Applicant>, ApiError> {
        self.authorized_client().applicants_for(job_id).await
    }
}
