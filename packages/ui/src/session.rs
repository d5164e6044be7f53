//! Session context and hooks for the UI.

use api::{ClientConfig, SessionService, UserInfo};
use dioxus::prelude::*;

/// Cookie jar for the current platform: `document.cookie` in the browser,
/// an in-memory jar everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformCookies = store::DocumentCookies;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformCookies = store::MemoryCookies;

pub type Session = SessionService<PlatformCookies>;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// A token is persisted. It is never checked against the API.
    pub authenticated: bool,
}

impl AuthState {
    /// Snapshot of what the session currently has persisted.
    pub fn from_session(session: &Session) -> Self {
        Self {
            user: session.user(),
            authenticated: session.is_authenticated(),
        }
    }

    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
        }
    }

    pub fn is_employer(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.is_employer())
    }
}

/// The session service shared by every view.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provides the [`Session`] and its [`AuthState`] to the tree below.
///
/// State is read from the persisted cookies once on mount, so a reload keeps
/// the user signed in for as long as the cookies live.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_context_provider(|| {
        let config = ClientConfig::from_build_env();
        tracing::debug!(base_url = %config.api.base_url, "Session configured");
        Session::new(PlatformCookies::default(), config)
    });
    use_context_provider(|| Signal::new(AuthState::from_session(&session)));

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    onlogout: EventHandler<()>,
) -> Element {
    let session = use_session();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        session.logout();
        auth_state.set(AuthState::default());
        onlogout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
