//! Connector base URL normalization.

use crate::error::GateError;
use std::borrow::Cow;
use url::Url;

/// Appends `/` unless the base already ends with one or carries a fragment.
///
/// Data plane public endpoints need the trailing slash before a sub-path is
/// concatenated; a `#` means the caller addresses a fragment we must not touch.
pub fn normalize_base(connector: &str) -> Cow<'_, str> {
    if connector.ends_with('/') || connector.contains('#') {
        Cow::Borrowed(connector)
    } else {
        Cow::Owned(format!("{connector}/"))
    }
}

/// Normalizes `connector`, appends a non-empty `sub_path` and parses the result.
pub fn target_url(connector: &str, sub_path: Option<&str>) -> Result<Url, GateError> {
    let mut raw = normalize_base(connector).into_owned();
    if let Some(sub) = sub_path.filter(|s| !s.is_empty()) {
        raw.push_str(sub);
    }
    Url::parse(&raw).map_err(|source| GateError::InvalidUrl { url: raw, source })
}
