//! Registration page view with email/password form.

use api::validate::validate_registration;
use api::{RegisterRequest, Role};
use dioxus::prelude::*;
use ui::{use_auth, use_session, Alert, AlertKind, AuthState};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::JobSeeker);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the landing page for the role
    use_effect(move || {
        let state = auth.peek();
        if let (Some(user), true) = (&state.user, state.authenticated) {
            nav.replace(Route::landing(&user.role));
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let profile = RegisterRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                role: role(),
                phone: phone().trim().to_string(),
            };
            if let Err(e) = validate_registration(&profile) {
                error.set(Some(e.user_message()));
                return;
            }

            loading.set(true);
            match session.register(&profile).await {
                Ok(user) => {
                    let landing = Route::landing(&user.role);
                    auth.set(AuthState::signed_in(user));
                    nav.replace(landing);
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Create Account" }
            p { class: "auth-subtitle", "Join as a job seeker or an employer" }

            form {
                class: "form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }

                input {
                    r#type: "text",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "tel",
                    placeholder: "Phone",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
                select {
                    value: role().as_str().to_string(),
                    onchange: move |evt: FormEvent| role.set(Role::from(evt.value())),
                    option { value: "jobseeker", "Job seeker" }
                    option { value: "employer", "Employer" }
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "auth-footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
