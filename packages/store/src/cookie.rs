//! # Cookie store: page-wide key/value persistence with expiry
//!
//! [`CookieStore`] is the storage seam underneath the session layer. The running
//! page shares one logical scope: every clone of a store sees the same entries,
//! so a value written by the login view is visible to the navbar and to every
//! other view without any extra plumbing.
//!
//! ## Contract
//!
//! | Method | Behaviour |
//! |--------|-----------|
//! | [`set`](CookieStore::set) | Stores `value` under `name`, replacing any previous value. The entry expires `ttl_days` days from now; `0` or a negative count yields an entry that is already expired. |
//! | [`get`](CookieStore::get) | Returns the current value, or `None` when the name is unset, expired, or its stored bytes do not decode. A missing key is never an error. |
//! | [`delete`](CookieStore::delete) | Removes the entry immediately, regardless of its expiry. |
//!
//! Values are percent-encoded on write and decoded on read (see
//! [`crate::codec`]), so arbitrary text, JSON included, survives a round trip.
//!
//! ## Implementations
//!
//! - [`crate::MemoryCookies`]: in-process map, used on native targets and in tests.
//! - `DocumentCookies` (wasm32 + `web` feature): the browser's `document.cookie`.

/// Synchronous cookie persistence shared by the whole page.
pub trait CookieStore: Clone + 'static {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str, ttl_days: i64);
    fn delete(&self, name: &str);
}
