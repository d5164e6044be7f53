//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod session;
pub use session::{use_auth, use_session, AuthState, LogoutButton, PlatformCookies, Session, SessionProvider};

mod navbar;
pub use navbar::Navbar;

mod alert;
pub use alert::{Alert, AlertKind};

mod drawer;
pub use drawer::Drawer;

mod job_card;
pub use job_card::JobCard;

mod apply_form;
pub use apply_form::ApplyForm;

mod applicants;
pub use applicants::ApplicantList;

/// Wait `ms` milliseconds before continuing, e.g. so a success message stays
/// visible before navigating away. Resolves immediately off the browser.
pub async fn pause(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ms;
}
