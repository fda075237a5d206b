//! Helpers shared by the integration tests.

#![allow(dead_code)]

use agentgate_core::media_type::MediaType;
use url::Url;

/// Query pairs with the outer (URL) encoding removed.
pub fn query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Strips the inner form encoding added to forwarded keys and values.
pub fn decode_parameter(encoded: &str) -> String {
    url::form_urlencoded::parse(encoded.as_bytes())
        .next()
        .map(|(k, _)| k.into_owned())
        .unwrap_or_default()
}

pub fn json() -> Vec<MediaType> {
    vec![MediaType::application_json()]
}

pub fn sparql_results() -> Vec<MediaType> {
    vec![
        MediaType::sparql_results_json(),
        MediaType::sparql_results_xml(),
    ]
}
