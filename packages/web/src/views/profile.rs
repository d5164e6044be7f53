//! Profile of the signed-in user, with name and phone editable.

use api::{ProfileUpdate, UserInfo};
use dioxus::prelude::*;
use ui::{use_auth, use_session, Alert, AlertKind, AuthState};

use crate::Route;

const MSG_SAVED: &str = "Profile updated";

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let profile = use_resource(move || {
        let session = session.clone();
        async move { session.profile().await }
    });

    let current = profile.read().clone();
    match current {
        None => rsx! {
            p { class: "loading", "Loading profile..." }
        },
        Some(Err(e)) => rsx! {
            Alert { kind: AlertKind::Error, message: e.user_message() }
            if e.needs_login() {
                Link { to: Route::Login {}, "Go to login" }
            }
        },
        Some(Ok(user)) => rsx! {
            ProfileForm { key: "{user.id}", user }
        },
    }
}

#[component]
fn ProfileForm(user: UserInfo) -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let mut name = use_signal(|| user.name.clone());
    let mut phone = use_signal(|| user.phone.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let updates = ProfileUpdate {
                name: Some(name().trim().to_string()).filter(|n| !n.is_empty()),
                phone: Some(phone().trim().to_string()).filter(|p| !p.is_empty()),
                resume_url: None,
            };

            saving.set(true);
            match session.update_profile(&updates).await {
                Ok(_) => {
                    auth.set(AuthState::from_session(&session));
                    success.set(Some(MSG_SAVED.to_string()));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    rsx! {
        section {
            class: "page-header",
            h1 { "My Profile" }
        }
        form {
            class: "form",
            onsubmit: handle_save,

            if let Some(err) = error() {
                Alert { kind: AlertKind::Error, message: err }
            }
            if let Some(msg) = success() {
                Alert { kind: AlertKind::Success, message: msg }
            }

            label { "Email" }
            input { r#type: "email", value: "{user.email}", disabled: true }
            label { "Role" }
            input { r#type: "text", value: "{user.role}", disabled: true }
            label { "Name" }
            input {
                r#type: "text",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            label { "Phone" }
            input {
                r#type: "tel",
                value: phone(),
                oninput: move |evt: FormEvent| phone.set(evt.value()),
            }

            button {
                class: "btn btn--primary",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save" }
            }
        }
    }
}
