//! `Accept` header entries.

use super::MediaType;
use crate::error::MediaTypeError;

/// One comma-separated unit of an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEntry {
    /// The media type with its `q` parameter removed.
    pub media_type: MediaType,
    /// Quality weight, 1.0 when absent or unparsable. Recorded, never used for ordering.
    pub quality: f32,
}

impl AcceptEntry {
    /// Parses one entry. Malformed parameters are dropped (with a warning)
    /// rather than invalidating the type they are attached to.
    pub fn parse(raw: &str) -> Result<Self, MediaTypeError> {
        let mut media_type = match MediaType::parse(raw) {
            Ok(m) => m,
            Err(MediaTypeError::InvalidParameter(param)) => {
                tracing::warn!(
                    entry = raw.trim(),
                    parameter = %param,
                    "ignoring malformed media type parameters"
                );
                let bare = raw.split(';').next().unwrap_or_default();
                MediaType::parse(bare)?
            }
            Err(e) => return Err(e),
        };
        let quality = media_type
            .take_param("q")
            .and_then(|q| q.parse::<f32>().ok())
            .filter(|q| q.is_finite())
            .map(|q| q.clamp(0.0, 1.0))
            .unwrap_or(1.0);
        Ok(Self {
            media_type,
            quality,
        })
    }
}

/// Splits an `Accept` header on `,` and parses each entry, keeping header order.
///
/// Empty segments (e.g. from a trailing comma) are reported as
/// [`MediaTypeError::Empty`] so callers can log and skip them like any other
/// malformed entry.
pub fn parse_accept(header: &str) -> Vec<Result<AcceptEntry, MediaTypeError>> {
    header.split(',').map(AcceptEntry::parse).collect()
}
