//! Side panel that slides over the page.

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Right-hand drawer. Clicking the backdrop or the close button calls
/// `onclose`; nothing is rendered while `open` is false.
#[component]
pub fn Drawer(open: bool, title: String, onclose: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| onclose.call(()),
        }
        aside {
            class: "drawer",
            div {
                class: "drawer-header",
                h2 { "{title}" }
                button {
                    class: "drawer-close",
                    title: "Close",
                    onclick: move |_| onclose.call(()),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
            div {
                class: "drawer-body",
                {children}
            }
        }
    }
}
