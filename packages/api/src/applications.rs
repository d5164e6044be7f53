//! Submitting a job application with a resume upload.
//!
//! [`SessionService::apply`] runs every local check before touching the
//! network, in this order: form fields, resume presence and size, stored
//! token, claimed user id. Only when all pass is the multipart upload sent.

use reqwest::multipart::{Form, Part};
use store::CookieStore;

use crate::client::AuthorizedClient;
use crate::error::ApiError;
use crate::models::{Job, ResumeFile, ResumeUpload};
use crate::session::SessionService;
use crate::validate;

pub const ERR_SUBMIT_APPLICATION: &str = "Failed to submit application";

/// Contents of the apply form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume: Option<ResumeFile>,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate::validate_application(&self.name, &self.email, &self.phone, self.resume.as_ref())
    }
}

impl AuthorizedClient {
    /// `POST /api/resumes/upload` as `multipart/form-data`.
    pub async fn upload_resume(&self, upload: ResumeUpload) -> Result<(), ApiError> {
        let ResumeUpload {
            job_id,
            user_id,
            description,
            resume,
        } = upload;

        let mut part = Part::bytes(resume.bytes).file_name(resume.file_name);
        if let Some(content_type) = resume.content_type.filter(|c| !c.is_empty()) {
            part = part
                .mime_str(&content_type)
                .map_err(|_| ApiError::validation("Unsupported resume file type"))?;
        }

        let form = Form::new()
            .text("jobid", job_id)
            .text("userid", user_id)
            .text("description", description)
            .part("resume", part);

        self.execute(
            self.post("/api/resumes/upload").multipart(form),
            ERR_SUBMIT_APPLICATION,
        )
        .await?;
        Ok(())
    }
}

impl<S: CookieStore> SessionService<S> {
    /// Apply to `job` with the filled-in form.
    pub async fn apply(&self, job: &Job, form: ApplicationForm) -> Result<(), ApiError> {
        form.validate()?;
        let user_id = self.current_user_id()?;
        let Some(resume) = form.resume else {
            return Err(ApiError::validation(validate::ERR_RESUME_REQUIRED));
        };

        self.authorized_client()
            .upload_resume(ResumeUpload {
                job_id: job.id.clone(),
                user_id,
                description: validate::application_description(job),
                resume,
            })
            .await?;
        tracing::info!(job_id = %job.id, "Application submitted");
        Ok(())
    }
}
