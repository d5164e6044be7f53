//! # `document.cookie` store: browser-side persistence
//!
//! [`DocumentCookies`] is the [`CookieStore`] used on the **web platform**. It
//! reads and assigns `document.cookie` through `web-sys`, writing every entry
//! with `path=/` and `SameSite=Lax` so all routes of the app share it.
//!
//! ## Error handling
//!
//! Failures are swallowed: a page without a document, or a browser that refuses
//! the assignment, behaves like an empty store. Reads return `None` and writes
//! log a warning and do nothing. The session layer treats absence as "not
//! logged in", which is the safe reading.

use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::codec;
use crate::cookie::CookieStore;

/// Zero-size handle to the page's cookie jar.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn assign(assignment: &str) {
        let Some(document) = Self::document() else {
            tracing::warn!("No HTML document available for cookie write");
            return;
        };
        if let Err(e) = document.set_cookie(assignment) {
            tracing::warn!("Cookie write rejected: {e:?}");
        }
    }
}

impl CookieStore for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        codec::find_cookie(&header, name)
    }

    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        let expires = codec::expiry_after_days(Utc::now(), ttl_days);
        Self::assign(&codec::set_cookie_string(name, value, expires));
    }

    fn delete(&self, name: &str) {
        Self::assign(&codec::expired_cookie_string(name));
    }
}
