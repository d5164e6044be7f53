//! Application form shown in the drawer of the job list.

use api::validate::{check_resume_size, resume_content_type};
use api::{ApplicationForm, Job, ResumeFile};
use dioxus::prelude::*;

use crate::icons::FaPaperPlane;
use crate::session::{use_auth, use_session};
use crate::{pause, Alert, AlertKind, Icon};

const MSG_APPLIED: &str = "Application submitted successfully!";

/// Apply to `job`. Contact fields start from the signed-in user.
///
/// A picked resume is size-checked before it is kept, so an oversized file
/// never replaces the previous pick.
#[component]
pub fn ApplyForm(job: Job, onclose: EventHandler<()>) -> Element {
    let session = use_session();
    let auth = use_auth();
    let user = auth.peek().user.clone();

    let mut name = use_signal(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| user.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default());
    let mut resume = use_signal(|| Option::<ResumeFile>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_file = move |evt: FormEvent| {
        error.set(None);
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        if let Err(e) = check_resume_size(file.size()) {
            error.set(Some(e.user_message()));
            return;
        }
        spawn(async move {
            let file_name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => resume.set(Some(ResumeFile {
                    content_type: resume_content_type(&file_name).map(str::to_string),
                    file_name,
                    bytes: bytes.to_vec(),
                })),
                Err(e) => {
                    tracing::warn!("Failed to read {file_name}: {e:?}");
                    error.set(Some("Could not read the selected file".to_string()));
                }
            }
        });
    };

    let job_for_submit = job.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let job = job_for_submit.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let form = ApplicationForm {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                phone: phone().trim().to_string(),
                resume: resume(),
            };

            loading.set(true);
            let result = session.apply(&job, form).await;
            loading.set(false);

            match result {
                Ok(()) => {
                    success.set(Some(MSG_APPLIED.to_string()));
                    resume.set(None);
                    pause(1500).await;
                    onclose.call(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let picked = resume().map(|r| r.file_name);

    rsx! {
        form {
            class: "form",
            onsubmit: handle_submit,

            p { class: "form-lead", "Applying for " strong { "{job.title}" } " at {job.company}" }

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, message: err }
            }
            if let Some(msg) = success() {
                Alert { kind: AlertKind::Success, message: msg }
            }

            label { "Full name" }
            input {
                r#type: "text",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            label { "Email" }
            input {
                r#type: "email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { "Phone" }
            input {
                r#type: "tel",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }
            label { "Resume (PDF or Word, max 5MB)" }
            input {
                r#type: "file",
                accept: ".pdf,.doc,.docx",
                onchange: handle_file,
            }
            if let Some(file_name) = picked {
                p { class: "form-hint", "Selected: {file_name}" }
            }

            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: loading(),
                Icon { icon: FaPaperPlane, width: 14, height: 14 }
                if loading() { "Submitting..." } else { "Submit Application" }
            }
        }
    }
}
