//! # Token-derived identity
//!
//! The bearer token is a JWT minted by the API. The client never verifies it:
//! it only reads the payload segment to learn which user id to put into
//! request bodies (`postedBy`, `userid`) and URLs (`/jobs/user/:userId`).
//! Anything read here is a *claimed* identity and must never gate access on
//! its own; the server authorizes every privileged call.
//!
//! ## Decoding
//!
//! 1. The token must have exactly three dot-separated segments.
//! 2. The middle segment is base64-decoded. Both the URL-safe alphabet used by
//!    JWTs and the standard alphabet are accepted, with or without padding.
//! 3. The bytes must parse as a JSON object.
//!
//! ## User id precedence
//!
//! [`USER_ID_KEYS`] is the single lookup order used everywhere: `userId`, then
//! `id`, then `_id`. String and integer values are accepted; empty strings
//! are skipped.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde_json::{Map, Value};

/// Claim names tried, in order, when reading the user id.
pub const USER_ID_KEYS: [&str; 3] = ["userId", "id", "_id"];

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Unverified payload of a bearer token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaims(Map<String, Value>);

impl TokenClaims {
    /// Read the user id following [`USER_ID_KEYS`].
    pub fn user_id(&self) -> Option<String> {
        USER_ID_KEYS.iter().find_map(|key| match self.0.get(*key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Raw access to any other claim.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Decode the payload segment of `token` without checking its signature.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(map) => Some(TokenClaims(map)),
        _ => None,
    }
}

/// The claimed user id of `token`, or `None` if it cannot be read.
pub fn extract_user_id(token: &str) -> Option<String> {
    decode_claims(token)?.user_id()
}

#[cfg(test)]
pub(crate) fn fake_token(payload: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_user_id_claim() {
        assert_eq!(extract_user_id(&fake_token(r#"{"userId":"u1"}"#)).as_deref(), Some("u1"));
    }

    #[test]
    fn test_id_claim_when_user_id_missing() {
        assert_eq!(extract_user_id(&fake_token(r#"{"id":"u2"}"#)).as_deref(), Some("u2"));
    }

    #[test]
    fn test_underscore_id_claim() {
        assert_eq!(extract_user_id(&fake_token(r#"{"_id":"u3"}"#)).as_deref(), Some("u3"));
    }

    #[test]
    fn test_precedence_order() {
        let token = fake_token(r#"{"_id":"c","id":"b","userId":"a"}"#);
        assert_eq!(extract_user_id(&token).as_deref(), Some("a"));

        let token = fake_token(r#"{"_id":"c","id":"b"}"#);
        assert_eq!(extract_user_id(&token).as_deref(), Some("b"));

        // Empty values do not shadow later keys.
        let token = fake_token(r#"{"userId":"","id":"b"}"#);
        assert_eq!(extract_user_id(&token).as_deref(), Some("b"));
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(extract_user_id(&fake_token(r#"{"id":42}"#)).as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_payload_has_no_user() {
        assert!(decode_claims(&fake_token("{}")).is_some());
        assert_eq!(extract_user_id(&fake_token("{}")), None);
        assert_eq!(extract_user_id(&fake_token(r#"{"userId":null,"sub":"x"}"#)), None);
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims(""), None);
        assert_eq!(decode_claims("not-a-token"), None);
        assert_eq!(decode_claims("a.b"), None);
        assert_eq!(decode_claims("a.b.c.d"), None);
        assert_eq!(decode_claims("a.!!!.c"), None);
        // Valid base64 but not JSON.
        assert_eq!(decode_claims(&format!("h.{}.s", STANDARD.encode("hello"))), None);
        // JSON but not an object.
        assert_eq!(decode_claims(&fake_token(r#"["u1"]"#)), None);
    }

    #[test]
    fn test_standard_alphabet_with_padding() {
        // '?' and '>' force '/' and '+' in the standard alphabet.
        let payload = r#"{"userId":"??>>u1"}"#;
        let token = format!("h.{}.s", STANDARD.encode(payload));
        assert_eq!(extract_user_id(&token).as_deref(), Some("??>>u1"));
    }

    #[test]
    fn test_other_claims_are_readable() {
        let claims = decode_claims(&fake_token(r#"{"userId":"u1","role":"employer"}"#)).unwrap();
        assert_eq!(claims.get("role"), Some(&Value::String("employer".to_string())));
    }
}
