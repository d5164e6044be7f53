use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Navbar over every page. Links depend on who is signed in.
#[component]
pub fn AppLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    let links = match (&state.user, state.authenticated) {
        (Some(user), true) => rsx! {
            if user.role.is_employer() {
                Link { to: Route::Employer {}, "My Jobs" }
                Link { to: Route::PostJob {}, "Post Job" }
            } else {
                Link { to: Route::AllJobs {}, "All Jobs" }
            }
            Link { to: Route::Profile {}, "Profile" }
            span { class: "navbar-user", "{user.display_name()} ({user.role})" }
            LogoutButton {
                class: "btn btn--ghost",
                onlogout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        },
        _ => rsx! {
            Link { to: Route::AllJobs {}, "All Jobs" }
            Link { to: Route::Login {}, "Login" }
            Link { to: Route::Register {}, "Sign up" }
        },
    };

    rsx! {
        Navbar { {links} }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
