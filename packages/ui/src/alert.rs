use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert--error",
            AlertKind::Success => "alert alert--success",
            AlertKind::Info => "alert alert--info",
        }
    }
}

/// Inline status message above a form or list.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> Element {
    rsx! {
        div {
            class: kind.class(),
            role: "alert",
            "{message}"
        }
    }
}
