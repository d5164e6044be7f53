use dioxus::prelude::*;

use crate::icons::FaBriefcase;
use crate::Icon;

/// Top bar with the brand on the left and whatever links the caller passes.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span {
                class: "navbar-brand",
                Icon { icon: FaBriefcase, width: 18, height: 18 }
                "JobBoard"
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
