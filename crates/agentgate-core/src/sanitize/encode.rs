//! Inner encoding layer for forwarded query parameters.
//!
//! Forwarded keys and values are form-encoded once here and then a second
//! time when appended to the outbound query. The data plane strips the outer
//! layer and the backend agent strips this one.

use url::form_urlencoded;

/// `application/x-www-form-urlencoded` encoding of a single component
/// (space becomes `+`; only `*-._` and alphanumerics stay literal).
pub fn encode_parameter(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
