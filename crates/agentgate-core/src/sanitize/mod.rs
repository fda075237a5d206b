//! Outbound URL sanitizing for data plane calls.
//!
//! Turns a connector base URL, an optional sub-path, the inbound query
//! parameters and the caller's acceptable media types into one outbound URL.
//! Two policies share the same interface:
//!
//! - `Passthrough` only normalizes the base URL; nothing is forwarded and
//!   asset references are never extracted.
//! - `Rewriting` forwards allow-listed parameters (re-encoded), extracts
//!   asset references and appends a `cx_accept` parameter describing the
//!   negotiated representation.

mod allow;
mod asset;
mod base;
mod encode;
mod params;
mod pattern;

pub use allow::{ParameterAllowRule, DEFAULT_KEY_ALLOW, DEFAULT_RESERVED_KEYS, DEFAULT_VALUE_ALLOW};
pub use asset::{AssetReferencePattern, ASSET_GROUP, DEFAULT_ASSET_REFERENCE_PATTERN};
pub use base::{normalize_base, target_url};
pub use encode::encode_parameter;
pub use params::QueryParams;

use crate::error::GateError;
use crate::media_type::{join_media_types, MediaType};
use crate::negotiate::{negotiate_types, Negotiation};
use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter carrying the negotiated representation downstream.
pub const CX_ACCEPT: &str = "cx_accept";

/// Which sanitizer variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizerPolicy {
    Passthrough,
    #[default]
    Rewriting,
}

/// Sanitizer chosen once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub enum UriSanitizer {
    Passthrough,
    Rewriting(RewritingSanitizer),
}

impl UriSanitizer {
    pub fn policy(&self) -> SanitizerPolicy {
        match self {
            UriSanitizer::Passthrough => SanitizerPolicy::Passthrough,
            UriSanitizer::Rewriting(_) => SanitizerPolicy::Rewriting,
        }
    }

    /// Extracts the asset token from a raw reference; always `None` for passthrough.
    pub fn sanitize_asset_id(&self, raw: &[u8]) -> Option<String> {
        match self {
            UriSanitizer::Passthrough => None,
            UriSanitizer::Rewriting(r) => r.sanitize_asset_id(raw),
        }
    }

    /// Composes the outbound URL. Inputs are not modified.
    pub fn build_url(
        &self,
        connector: &str,
        sub_path: Option<&str>,
        params: &QueryParams,
        acceptable: &[MediaType],
    ) -> Result<Url, GateError> {
        match self {
            UriSanitizer::Passthrough => target_url(connector, sub_path),
            UriSanitizer::Rewriting(r) => r.build_url(connector, sub_path, params, acceptable),
        }
    }
}

/// Allow-list based sanitizer.
#[derive(Debug, Clone)]
pub struct RewritingSanitizer {
    allow: ParameterAllowRule,
    asset: AssetReferencePattern,
    supported: Vec<MediaType>,
}

impl Default for RewritingSanitizer {
    fn default() -> Self {
        Self::new(
            ParameterAllowRule::default(),
            AssetReferencePattern::default(),
            vec![MediaType::application_json()],
        )
    }
}

impl RewritingSanitizer {
    /// `supported` is the ranked list of representations `cx_accept` may resolve to.
    pub fn new(
        allow: ParameterAllowRule,
        asset: AssetReferencePattern,
        supported: Vec<MediaType>,
    ) -> Self {
        Self {
            allow,
            asset,
            supported,
        }
    }

    pub fn sanitize_asset_id(&self, raw: &[u8]) -> Option<String> {
        self.asset.extract(raw)
    }

    pub fn build_url(
        &self,
        connector: &str,
        sub_path: Option<&str>,
        params: &QueryParams,
        acceptable: &[MediaType],
    ) -> Result<Url, GateError> {
        let mut url = target_url(connector, sub_path)?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params.iter() {
                if key == CX_ACCEPT {
                    tracing::debug!(key, "dropping inbound parameter shadowing cx_accept");
                    continue;
                }
                match (self.allow.admit_key(key), self.allow.admit_value(value)) {
                    (Some(k), Some(v)) => {
                        query.append_pair(&encode_parameter(k), &encode_parameter(v));
                    }
                    _ => tracing::debug!(key, "dropping query parameter rejected by allow-list"),
                }
            }

            let accept = match negotiate_types(acceptable, &self.supported) {
                Negotiation::Selected(m) => m.to_string(),
                Negotiation::Unacceptable => {
                    tracing::debug!("no supported representation; forwarding requested types");
                    // Canonical form of the requested types, not the raw header text.
                    join_media_types(acceptable)
                }
            };
            query.append_pair(CX_ACCEPT, &encode_parameter(&accept));
        }

        Ok(url)
    }
}
