//! Form for employers to publish a job.

use api::JobForm;
use dioxus::prelude::*;
use ui::{pause, use_session, Alert, AlertKind};

use crate::Route;

const MSG_POSTED: &str = "Job posted successfully!";

#[component]
pub fn PostJob() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut skills = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_post = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let form = JobForm {
                title: title(),
                company: company(),
                location: location(),
                description: description(),
                skills: skills(),
            };

            loading.set(true);
            match session.post_job(&form).await {
                Ok(_) => {
                    success.set(Some(MSG_POSTED.to_string()));
                    pause(1500).await;
                    loading.set(false);
                    nav.push(Route::Employer {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        section {
            class: "page-header",
            h1 { "Post a New Job" }
        }
        form {
            class: "form form--wide",
            onsubmit: handle_post,

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, message: err }
            }
            if let Some(msg) = success() {
                Alert { kind: AlertKind::Success, message: msg }
            }

            label { "Job title" }
            input {
                r#type: "text",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            label { "Company" }
            input {
                r#type: "text",
                value: company(),
                oninput: move |evt: FormEvent| company.set(evt.value()),
            }
            label { "Location" }
            input {
                r#type: "text",
                placeholder: "Leave empty for remote",
                value: location(),
                oninput: move |evt: FormEvent| location.set(evt.value()),
            }
            label { "Description" }
            textarea {
                rows: 6,
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            label { "Skills required" }
            input {
                r#type: "text",
                placeholder: "Comma separated, e.g. Rust, SQL",
                value: skills(),
                oninput: move |evt: FormEvent| skills.set(evt.value()),
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| {
                        nav.push(Route::Employer {});
                    },
                    "Cancel"
                }
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Posting..." } else { "Post Job" }
                }
            }
        }
    }
}
