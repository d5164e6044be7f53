use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-container",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Login {}, "Back to the start" }
        }
    }
}
