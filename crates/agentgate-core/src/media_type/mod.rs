//! Media types and `Accept` header entries.
//!
//! Parsing lower-cases type, subtype and parameter names so that
//! compatibility checks are case-insensitive.

mod accept;
mod parse;

pub use accept::{parse_accept, AcceptEntry};

use crate::error::MediaTypeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const WILDCARD: &str = "*";
pub const APPLICATION_JSON: &str = "application/json";
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";
pub const SPARQL_RESULTS_XML: &str = "application/sparql-results+xml";
pub const SPARQL_QUERY: &str = "application/sparql-query";

/// A `type/subtype` identifier with optional `;key=value` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct MediaType {
    main_type: String,
    subtype: String,
    params: Vec<(String, String)>,
}

impl MediaType {
    /// Builds a parameterless media type; both segments are lower-cased.
    pub fn new(main_type: &str, subtype: &str) -> Self {
        Self {
            main_type: main_type.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            params: Vec::new(),
        }
    }

    /// `*/*`
    pub fn any() -> Self {
        Self::new(WILDCARD, WILDCARD)
    }

    pub fn application_json() -> Self {
        Self::new("application", "json")
    }

    pub fn sparql_results_json() -> Self {
        Self::new("application", "sparql-results+json")
    }

    pub fn sparql_results_xml() -> Self {
        Self::new("application", "sparql-results+xml")
    }

    pub fn sparql_query() -> Self {
        Self::new("application", "sparql-query")
    }

    /// Parses `type/subtype(;key=value)*`.
    pub fn parse(s: &str) -> Result<Self, MediaTypeError> {
        parse::parse_media_type(s)
    }

    pub fn main_type(&self) -> &str {
        &self.main_type
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn is_wildcard_type(&self) -> bool {
        self.main_type == WILDCARD
    }

    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD
    }

    /// Wildcard-aware comparison of type and subtype; parameters are ignored.
    ///
    /// A wildcard primary type on either side matches anything. Otherwise the
    /// primary types must agree and the subtypes must agree or one of them
    /// must be a wildcard. Suffixes such as `+json` are not expanded.
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        if self.is_wildcard_type() || other.is_wildcard_type() {
            return true;
        }
        if self.main_type != other.main_type {
            return false;
        }
        self.is_wildcard_subtype() || other.is_wildcard_subtype() || self.subtype == other.subtype
    }

    pub(crate) fn from_parts(
        main_type: String,
        subtype: String,
        params: Vec<(String, String)>,
    ) -> Self {
        Self {
            main_type,
            subtype,
            params,
        }
    }

    pub(crate) fn take_param(&mut self, name: &str) -> Option<String> {
        let idx = self
            .params
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))?;
        Some(self.params.remove(idx).1)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.main_type, self.subtype)?;
        for (k, v) in &self.params {
            write!(f, ";{}={}", k, v)?;
        }
        Ok(())
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<MediaType> for String {
    fn from(m: MediaType) -> Self {
        m.to_string()
    }
}

/// Joins media types the way the outbound `cx_accept` fallback expects: `a, b`.
///
/// Each entry is written in canonical form (lower-cased, no spaces around
/// `;`), so parsed `Accept` entries come out without their `q` weights and
/// without parameters that failed to parse. It is not the raw header text.
pub fn join_media_types(types: &[MediaType]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
