//! Every open job, with an apply drawer.

use api::jobs::ERR_LOAD_JOBS;
use api::Job;
use dioxus::prelude::*;
use ui::{use_session, Alert, AlertKind, ApplyForm, Drawer, JobCard};

#[component]
pub fn AllJobs() -> Element {
    let session = use_session();
    let mut selected = use_signal(|| Option::<Job>::None);

    let mut jobs = use_resource(move || {
        let session = session.clone();
        async move { session.jobs().await }
    });

    let body = match jobs.read().clone() {
        None => rsx! {
            p { class: "loading", "Loading jobs..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Job list failed: {e}");
            rsx! {
                Alert { kind: AlertKind::Error, message: ERR_LOAD_JOBS.to_string() }
                button {
                    class: "btn btn--secondary",
                    onclick: move |_| jobs.restart(),
                    "Retry"
                }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "empty-state", "No jobs available right now." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "job-grid",
                for job in list {
                    JobCard {
                        key: "{job.id}",
                        job: job.clone(),
                        action_label: "Apply Now",
                        onaction: move |job: Job| selected.set(Some(job)),
                    }
                }
            }
        },
    };

    let title = selected()
        .map(|job| format!("Apply for {}", job.title))
        .unwrap_or_default();

    rsx! {
        section {
            class: "page-header",
            h1 { "All Jobs" }
        }
        {body}
        Drawer {
            open: selected().is_some(),
            title,
            onclose: move |_| selected.set(None),
            if let Some(job) = selected() {
                ApplyForm {
                    key: "{job.id}",
                    job,
                    onclose: move |_| selected.set(None),
                }
            }
        }
    }
}
