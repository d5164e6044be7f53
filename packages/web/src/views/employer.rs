//! Jobs posted by the signed-in employer and their applicants.

use api::jobs::ERR_LOAD_APPLICANTS;
use api::{Applicant, Job};
use dioxus::prelude::*;
use ui::{use_session, Alert, AlertKind, ApplicantList, Drawer, JobCard};

use crate::Route;

#[component]
pub fn Employer() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut viewing = use_signal(|| Option::<(Job, Vec<Applicant>)>::None);
    let mut applicants_error = use_signal(|| Option::<String>::None);

    let posted_session = session.clone();
    let mut posted = use_resource(move || {
        let session = posted_session.clone();
        async move { session.posted_jobs().await }
    });

    let view_applicants = move |job: Job| {
        let session = session.clone();
        spawn(async move {
            applicants_error.set(None);
            match session.applicants(&job.id).await {
                Ok(list) => viewing.set(Some((job, list))),
                Err(e) => {
                    tracing::warn!(job_id = %job.id, "Applicants failed: {e}");
                    applicants_error.set(Some(ERR_LOAD_APPLICANTS.to_string()));
                }
            }
        });
    };

    let body = match posted.read().clone() {
        None => rsx! {
            p { class: "loading", "Loading your jobs..." }
        },
        Some(Err(e)) => rsx! {
            Alert { kind: AlertKind::Error, message: e.user_message() }
            if e.needs_login() {
                Link { to: Route::Login {}, "Go to login" }
            } else {
                button {
                    class: "btn btn--secondary",
                    onclick: move |_| posted.restart(),
                    "Retry"
                }
            }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "empty-state", "You haven't posted any jobs yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "job-grid",
                for job in list {
                    JobCard {
                        key: "{job.id}",
                        job: job.clone(),
                        action_label: "View Applicants",
                        show_applied_count: true,
                        onaction: view_applicants.clone(),
                    }
                }
            }
        },
    };

    let (open, title, applicants) = match viewing() {
        Some((job, list)) => (true, format!("Applicants for {}", job.title), list),
        None => (false, String::new(), Vec::new()),
    };

    rsx! {
        section {
            class: "page-header",
            h1 { "My Posted Jobs" }
            button {
                class: "btn btn--primary",
                onclick: move |_| {
                    nav.push(Route::PostJob {});
                },
                "Post a New Job"
            }
        }
        if let Some(err) = applicants_error() {
            Alert { kind: AlertKind::Error, message: err }
        }
        {body}
        Drawer {
            open,
            title,
            onclose: move |_| viewing.set(None),
            ApplicantList { applicants }
        }
    }
}
