//! Error types surfaced to the calling agent.
//!
//! Negative results that are part of normal operation (no asset match, no
//! binding token, a dropped query parameter) are `Option`s or silent filters,
//! not errors.

/// Request-level failures. Each maps to a client-error HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Accept header names no representation we can produce.
    #[error("no supported representation for Accept header `{accept}`")]
    UnsupportedRepresentation { accept: String },
    /// Connector base plus sub-path does not parse as a URL.
    #[error("invalid connector url `{url}`")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Request body media type is missing or not one we accept.
    #[error("unsupported body type `{content_type}`")]
    UnsupportedBodyType { content_type: String },
    /// Skill registration without an asset name.
    #[error("skill registration requires a non-empty asset name")]
    EmptyAsset,
}

impl GateError {
    /// HTTP status the surrounding layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            GateError::UnsupportedRepresentation { .. } => 400,
            GateError::InvalidUrl { .. } => 400,
            GateError::UnsupportedBodyType { .. } => 400,
            GateError::EmptyAsset => 400,
        }
    }
}

/// A single media type string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaTypeError {
    #[error("empty media type")]
    Empty,
    #[error("media type `{0}` has no `/` separator")]
    MissingSlash(String),
    #[error("media type `{0}` has an invalid type or subtype token")]
    InvalidToken(String),
    #[error("media type parameter `{0}` is not of the form key=value")]
    InvalidParameter(String),
}

/// Configured patterns that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid {name} pattern `{pattern}`")]
    InvalidPattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("asset reference pattern `{0}` has no capture group named `asset`")]
    MissingAssetGroup(String),
    #[error("invalid media type `{value}` in {name}")]
    InvalidMediaType {
        name: &'static str,
        value: String,
        #[source]
        source: MediaTypeError,
    },
    #[error("{0} must list at least one media type")]
    EmptyMediaTypes(&'static str),
}
