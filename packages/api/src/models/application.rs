use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Applicant's contact details, when the API populates the user reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// The `userId` field of an application: a populated profile or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApplicantRef {
    Profile(ApplicantProfile),
    Id(String),
}

/// One entry of `GET /applications/job/:jobId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default, rename = "userId")]
    pub user: Option<ApplicantRef>,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Applicant {
    fn profile(&self) -> Option<&ApplicantProfile> {
        match &self.user {
            Some(ApplicantRef::Profile(p)) => Some(p),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.profile()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn email(&self) -> &str {
        self.profile()
            .and_then(|p| p.email.as_deref())
            .unwrap_or("Not provided")
    }

    pub fn phone(&self) -> &str {
        self.profile()
            .and_then(|p| p.phone.as_deref())
            .unwrap_or("Not provided")
    }

    pub fn applied_on(&self) -> Option<String> {
        self.applied_at.map(|d| d.format("%Y-%m-%d").to_string())
    }

    /// Match score as shown in the applicants list.
    pub fn score_label(&self) -> String {
        match self.score {
            Some(s) if s > 0.0 => format!("{}%", s.round()),
            _ => "N/A".to_string(),
        }
    }
}

/// A resume picked in the apply form.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Multipart body of `POST /api/resumes/upload`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeUpload {
    pub job_id: String,
    pub user_id: String,
    pub description: String,
    pub resume: ResumeFile,
}
