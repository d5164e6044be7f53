use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as listed by `GET /jobs` and `GET /jobs/user/:userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub applied_count: u32,
}

impl Job {
    /// Location to display; postings without one are remote.
    pub fn display_location(&self) -> &str {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or("Remote")
    }

    /// Skills joined for a single line, or "Not specified".
    pub fn skills_line(&self) -> String {
        if self.skills_required.is_empty() {
            "Not specified".to_string()
        } else {
            self.skills_required.join(", ")
        }
    }

    /// Posting date as `YYYY-MM-DD`, if the API sent one.
    pub fn posted_on(&self) -> Option<String> {
        self.created_at.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Body of `POST /jobs/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub skills_required: Vec<String>,
    pub posted_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_from_api() {
        let job: Job = serde_json::from_str(
            r#"{
                "_id": "j1",
                "title": "Rust Engineer",
                "company": "Acme",
                "description": "Build things",
                "location": "Berlin",
                "skillsRequired": ["Rust", "SQL"],
                "createdAt": "2024-05-01T10:00:00.000Z",
                "appliedCount": 3,
                "postedBy": "u9"
            }"#,
        )
        .unwrap();
        assert_eq!(job.id, "j1");
        assert_eq!(job.skills_required, vec!["Rust", "SQL"]);
        assert_eq!(job.applied_count, 3);
        assert_eq!(job.posted_on().as_deref(), Some("2024-05-01"));
        assert_eq!(job.display_location(), "Berlin");
        assert_eq!(job.skills_line(), "Rust, SQL");
    }

    #[test]
    fn test_job_defaults() {
        let job: Job = serde_json::from_str(r#"{"id":"j2","title":"Intern","location":null}"#).unwrap();
        assert_eq!(job.display_location(), "Remote");
        assert_eq!(job.skills_line(), "Not specified");
        assert!(job.posted_on().is_none());
        assert_eq!(job.applied_count, 0);
    }

    #[test]
    fn test_new_job_wire_names() {
        let job = NewJob {
            title: "T".to_string(),
            description: "D".to_string(),
            company: "C".to_string(),
            location: "L".to_string(),
            skills_required: vec!["Go".to_string()],
            posted_by: "u1".to_string(),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["skillsRequired"][0], "Go");
        assert_eq!(json["postedBy"], "u1");
    }
}
