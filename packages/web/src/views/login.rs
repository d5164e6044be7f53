//! Login page with email and password.

use api::validate::validate_login;
use dioxus::prelude::*;
use ui::{pause, use_auth, use_session, Alert, AlertKind, AuthState};

use crate::Route;

const MSG_LOGGED_IN: &str = "Login successful! Redirecting...";

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the landing page for the role
    use_effect(move || {
        let state = auth.peek();
        if let (Some(user), true) = (&state.user, state.authenticated) {
            nav.replace(Route::landing(&user.role));
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);
            success.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(err) = validate_login(&e, &p) {
                error.set(Some(err.user_message()));
                return;
            }

            loading.set(true);
            match session.login(&e, &p).await {
                Ok(user) => {
                    success.set(Some(MSG_LOGGED_IN.to_string()));
                    email.set(String::new());
                    password.set(String::new());
                    let landing = Route::landing(&user.role);
                    auth.set(AuthState::signed_in(user));
                    pause(1000).await;
                    loading.set(false);
                    nav.replace(landing);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Welcome back" }
            p { class: "auth-subtitle", "Sign in to find or post jobs" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    Alert { kind: AlertKind::Error, message: err }
                }
                if let Some(msg) = success() {
                    Alert { kind: AlertKind::Success, message: msg }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Login" }
                }
            }

            p {
                class: "auth-footer",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
