//! Cookie string encoding shared by every [`CookieStore`](crate::CookieStore) backend.
//!
//! Values use the same escaping as `encodeURIComponent`: ASCII letters, digits
//! and `-_.!~*'()` pass through, everything else becomes `%XX` over UTF-8.

use std::borrow::Cow;

use chrono::{DateTime, TimeDelta, Utc};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Percent-encode a cookie value.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

/// Reverse [`encode_value`]. Returns `None` when the bytes are not valid UTF-8.
pub fn decode_value(encoded: &str) -> Option<String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Absolute expiry `days` days after `now`. Saturates instead of overflowing.
pub fn expiry_after_days(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`) and decode it.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then_some(value)
        })
        .and_then(decode_value)
}

/// Assignment string for `document.cookie` that stores `value` until `expires`.
pub fn set_cookie_string(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{name}={}; expires={}; path=/; SameSite=Lax",
        encode_value(value),
        expires.format(EXPIRES_FORMAT)
    )
}

/// Assignment string that removes `name` by moving its expiry to the epoch.
pub fn expired_cookie_string(name: &str) -> String {
    set_cookie_string(name, "", DateTime::<Utc>::UNIX_EPOCH)
}
