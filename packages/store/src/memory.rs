use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::codec;
use crate::cookie::CookieStore;

#[derive(Clone, Debug)]
struct Entry {
    encoded: String,
    expires: DateTime<Utc>,
}

/// In-memory CookieStore for testing and non-browser targets.
///
/// Clones share the same map, matching the single page-wide scope of
/// `document.cookie`.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Render the live entries the way `document.cookie` would.
    pub fn header(&self) -> String {
        let now = Utc::now();
        let mut pairs: Vec<String> = self
            .entries()
            .iter()
            .filter(|(_, entry)| entry.expires > now)
            .map(|(name, entry)| format!("{name}={}", entry.encoded))
            .collect();
        pairs.sort();
        pairs.join("; ")
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        let mut entries = self.entries();
        let entry = entries.get(name)?;
        if entry.expires <= Utc::now() {
            entries.remove(name);
            return None;
        }
        codec::decode_value(&entry.encoded)
    }

    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        let expires = codec::expiry_after_days(Utc::now(), ttl_days);
        self.entries().insert(
            name.to_string(),
            Entry {
                encoded: codec::encode_value(value),
                expires,
            },
        );
    }

    fn delete(&self, name: &str) {
        self.entries().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let cookies = MemoryCookies::new();
        assert!(cookies.get("auth_token").is_none());

        cookies.set("auth_token", "abc.def.ghi", 7);
        assert_eq!(cookies.get("auth_token").as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_set_overwrites() {
        let cookies = MemoryCookies::new();
        cookies.set("auth_user", "first", 7);
        cookies.set("auth_user", "second", 7);
        assert_eq!(cookies.get("auth_user").as_deref(), Some("second"));
    }

    #[test]
    fn test_json_round_trip() {
        let cookies = MemoryCookies::new();
        let json = r#"{"id":"u1","name":"Ann; O'Neil","email":"a@b.com","role":"jobseeker"}"#;
        cookies.set("auth_user", json, 7);
        assert_eq!(cookies.get("auth_user").as_deref(), Some(json));
    }

    #[test]
    fn test_zero_ttl_is_absent() {
        let cookies = MemoryCookies::new();
        cookies.set("auth_token", "t", 0);
        assert!(cookies.get("auth_token").is_none());
    }

    #[test]
    fn test_past_expiry_is_absent() {
        let cookies = MemoryCookies::new();
        cookies.set("auth_token", "t", -3);
        assert!(cookies.get("auth_token").is_none());
        assert_eq!(cookies.header(), "");
    }

    #[test]
    fn test_delete() {
        let cookies = MemoryCookies::new();
        cookies.set("auth_token", "t", 7);
        cookies.delete("auth_token");
        assert!(cookies.get("auth_token").is_none());

        // Deleting a missing key is a no-op.
        cookies.delete("never_set");
    }

    #[test]
    fn test_clones_share_scope() {
        let cookies = MemoryCookies::new();
        let other = cookies.clone();
        cookies.set("auth_token", "shared", 7);
        assert_eq!(other.get("auth_token").as_deref(), Some("shared"));

        other.delete("auth_token");
        assert!(cookies.get("auth_token").is_none());
    }

    #[test]
    fn test_header_is_decodable() {
        let cookies = MemoryCookies::new();
        cookies.set("auth_token", "tok en", 7);
        cookies.set("auth_user", r#"{"id":"1"}"#, 7);

        let header = cookies.header();
        assert_eq!(
            codec::find_cookie(&header, "auth_token").as_deref(),
            Some("tok en")
        );
        assert_eq!(
            codec::find_cookie(&header, "auth_user").as_deref(),
            Some(r#"{"id":"1"}"#)
        );
    }
}
