//! Content negotiation over a small ranked set of result encodings.
//!
//! Entries are visited in header order and the first one compatible with any
//! supported type wins. Quality weights are not used for ordering.

use crate::error::GateError;
use crate::media_type::{parse_accept, MediaType};
use serde::Serialize;

/// Outcome of negotiating an `Accept` header against supported types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "media_type", rename_all = "lowercase")]
pub enum Negotiation {
    /// A supported representation (always one of the `supported` entries).
    Selected(MediaType),
    /// Nothing requested can be produced.
    Unacceptable,
}

impl Negotiation {
    /// Maps `Unacceptable` to [`GateError::UnsupportedRepresentation`].
    pub fn into_result(self, accept: Option<&str>) -> Result<MediaType, GateError> {
        match self {
            Negotiation::Selected(m) => Ok(m),
            Negotiation::Unacceptable => Err(GateError::UnsupportedRepresentation {
                accept: accept.unwrap_or_default().to_string(),
            }),
        }
    }
}

fn first_supported(wanted: &MediaType, supported: &[MediaType]) -> Option<MediaType> {
    supported.iter().find(|s| wanted.is_compatible(s)).cloned()
}

fn default_of(supported: &[MediaType]) -> Negotiation {
    supported
        .first()
        .cloned()
        .map(Negotiation::Selected)
        .unwrap_or(Negotiation::Unacceptable)
}

/// Media types of a raw `Accept` header in header order.
///
/// Entries that do not parse are logged and skipped; malformed parameters
/// only cost the parameters. Quality weights are removed.
fn accepted_types(header: &str) -> impl Iterator<Item = MediaType> + '_ {
    parse_accept(header)
        .into_iter()
        .zip(header.split(','))
        .filter_map(|(entry, raw)| match entry {
            Ok(e) => Some(e.media_type),
            Err(e) => {
                tracing::warn!(
                    entry = raw.trim(),
                    error = %e,
                    "ignoring unsupported accepted media type"
                );
                None
            }
        })
}

/// Negotiates a raw `Accept` header value.
///
/// A missing header selects the first supported type. Malformed entries are
/// logged and skipped.
pub fn negotiate(accept: Option<&str>, supported: &[MediaType]) -> Negotiation {
    let Some(header) = accept else {
        return default_of(supported);
    };

    for wanted in accepted_types(header) {
        if let Some(found) = first_supported(&wanted, supported) {
            tracing::debug!(wanted = %wanted, selected = %found, "negotiated representation");
            return Negotiation::Selected(found);
        }
    }

    tracing::debug!(accept = header, "no acceptable representation");
    Negotiation::Unacceptable
}

/// Parses an `Accept` header into its media types, dropping malformed entries.
///
/// Quality weights are stripped; header order is kept. A missing header gives
/// an empty list.
pub fn acceptable_media_types(accept: Option<&str>) -> Vec<MediaType> {
    accept.map(|h| accepted_types(h).collect()).unwrap_or_default()
}

/// Negotiates an already-parsed list of acceptable types.
///
/// An empty list means no explicit preference and selects the first supported type.
pub fn negotiate_types(acceptable: &[MediaType], supported: &[MediaType]) -> Negotiation {
    if acceptable.is_empty() {
        return default_of(supported);
    }
    acceptable
        .iter()
        .find_map(|wanted| first_supported(wanted, supported))
        .map(Negotiation::Selected)
        .unwrap_or(Negotiation::Unacceptable)
}
