//! Behavioural properties of the URL sanitizer and content negotiator.

mod common;

use agentgate_core::binding::BindingPattern;
use agentgate_core::media_type::MediaType;
use agentgate_core::negotiate::{negotiate, Negotiation};
use agentgate_core::sanitize::{
    encode_parameter, AssetReferencePattern, QueryParams, RewritingSanitizer, UriSanitizer,
    CX_ACCEPT,
};
use agentgate_core::Gate;
use common::{decode_parameter, json, query_pairs, sparql_results};
use proptest::prelude::*;

fn rewriting() -> UriSanitizer {
    UriSanitizer::Rewriting(RewritingSanitizer::default())
}

#[test]
fn normalization_is_idempotent_on_its_own_output() {
    let s = rewriting();
    let first = s
        .build_url("http://host/api", None, &QueryParams::new(), &json())
        .unwrap();
    let second = s
        .build_url(first.as_str(), None, &QueryParams::new(), &json())
        .unwrap();
    assert_eq!(first.path(), "/api/");
    assert_eq!(second.path(), first.path());
    assert_eq!(second.host_str(), first.host_str());
}

#[test]
fn trailing_slash_rule() {
    let s = rewriting();
    let url = s
        .build_url("http://host/api", None, &QueryParams::new(), &json())
        .unwrap();
    assert_eq!(url.as_str(), "http://host/api/?cx_accept=application%252Fjson");

    let url = s
        .build_url("http://host/api#frag", None, &QueryParams::new(), &json())
        .unwrap();
    assert_eq!(url.path(), "/api");
    assert_eq!(url.fragment(), Some("frag"));
}

#[test]
fn exactly_one_cx_accept_is_last() {
    let s = rewriting();
    let params = QueryParams::from_query("vin=WBA&cx_accept=text%2Fhtml&troubleCode=P0745");
    let url = s
        .build_url("https://dp.example/api/public", Some("agent"), &params, &[])
        .unwrap();
    let pairs = query_pairs(&url);
    assert_eq!(pairs.iter().filter(|(k, _)| k == CX_ACCEPT).count(), 1);
    assert_eq!(pairs.last().map(|(k, _)| k.as_str()), Some(CX_ACCEPT));
    assert_eq!(pairs.len(), 3);
}

#[test]
fn negotiation_scenarios() {
    let supported = sparql_results();
    assert_eq!(
        negotiate(None, &supported),
        Negotiation::Selected(MediaType::sparql_results_json())
    );
    assert_eq!(negotiate(Some("text/plain"), &supported), Negotiation::Unacceptable);
    // The first header entry decides when it matches anything supported.
    assert_eq!(
        negotiate(
            Some("application/sparql-results+xml, application/sparql-results+json"),
            &supported
        ),
        Negotiation::Selected(MediaType::sparql_results_xml())
    );
    // A non-matching first entry falls through to the next one.
    assert_eq!(
        negotiate(Some("text/plain, application/sparql-results+json"), &supported),
        Negotiation::Selected(MediaType::sparql_results_json())
    );
}

#[test]
fn bad_accept_parameter_keeps_requested_type() {
    let gate = Gate::default();
    let cx_accept = |accept: &str| {
        let url = gate
            .outbound_url("http://dp/api", None, &QueryParams::new(), Some(accept))
            .unwrap();
        query_pairs(&url)
            .into_iter()
            .find(|(k, _)| k == CX_ACCEPT)
            .map(|(_, v)| v)
            .unwrap()
    };
    assert_eq!(cx_accept("text/csv"), "text%2Fcsv");
    assert_eq!(cx_accept("text/csv;header"), "text%2Fcsv");
    assert_eq!(cx_accept("text/csv;header, application/json"), "application%2Fjson");
}

#[test]
fn unacceptable_forwards_canonical_requested_types() {
    let gate = Gate::default();
    let url = gate
        .outbound_url(
            "http://dp/api",
            None,
            &QueryParams::new(),
            Some("Text/CSV;q=0.5, text/html"),
        )
        .unwrap();
    let pairs = query_pairs(&url);
    assert_eq!(pairs.len(), 1);
    assert_eq!(decode_parameter(&pairs[0].1), "text/csv, text/html");
}

#[test]
fn binding_extraction() {
    let p = BindingPattern::new();
    assert_eq!(
        p.extract(Some("SELECT ?binding0 WHERE { ?s ?p ?o }")).as_deref(),
        Some("binding0")
    );
    assert_eq!(p.extract(Some("SELECT ?x WHERE { ?x ?p ?o }")), None);
}

#[test]
fn asset_extraction_requires_full_match() {
    let p = AssetReferencePattern::new(r"^urn:cx:(?<asset>[A-Za-z0-9]+)#.*$").unwrap();
    assert_eq!(p.extract(b"urn:cx:Foo#bar").as_deref(), Some("Foo"));
    assert_eq!(p.extract(b"prefix urn:cx:Foo#bar suffix"), None);
}

fn forbidden_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("asset".to_string()),
        ("[a-z]{0,6}", prop::sample::select(vec!['&', '?', '=']), "[a-z]{0,6}")
            .prop_map(|(a, c, b)| format!("{a}{c}{b}")),
    ]
}

proptest! {
    #[test]
    fn forbidden_keys_never_reach_the_url(key in forbidden_key(), value in "[a-z0-9]{1,8}") {
        let s = rewriting();
        let params: QueryParams = vec![(key.clone(), value), ("vin".to_string(), "WBA".to_string())]
            .into_iter()
            .collect();
        let url = s
            .build_url("http://host/api", None, &params, &json())
            .unwrap();
        for (k, _) in query_pairs(&url) {
            prop_assert_ne!(decode_parameter(&k), key.clone());
            prop_assert_ne!(k, key.clone());
        }
    }

    #[test]
    fn values_with_ampersand_are_dropped(prefix in "[a-z]{0,6}", suffix in "[a-z=]{0,6}") {
        let s = rewriting();
        let value = format!("{prefix}&{suffix}");
        let params: QueryParams = vec![("vin".to_string(), value)].into_iter().collect();
        let url = s
            .build_url("http://host/api", None, &params, &json())
            .unwrap();
        let pairs = query_pairs(&url);
        prop_assert_eq!(pairs.len(), 1);
        prop_assert_eq!(pairs[0].0.as_str(), CX_ACCEPT);
    }

    #[test]
    fn allowed_pairs_appear_exactly_once(key in "[^&?=]{1,12}", value in "[^&]{1,16}") {
        prop_assume!(key != "asset" && key != CX_ACCEPT);
        let s = rewriting();
        let params: QueryParams = vec![(key.clone(), value.clone())].into_iter().collect();
        let url = s
            .build_url("http://host/api", Some("sub"), &params, &json())
            .unwrap();
        let pairs = query_pairs(&url);
        let expected = (encode_parameter(&key), encode_parameter(&value));
        prop_assert_eq!(pairs.iter().filter(|p| **p == expected).count(), 1);
        prop_assert_eq!(decode_parameter(&expected.0), key);
        prop_assert_eq!(decode_parameter(&expected.1), value);
    }

    #[test]
    fn negotiation_is_deterministic(header in "[a-z*/+;=, .0-9-]{0,40}") {
        let supported = sparql_results();
        prop_assert_eq!(
            negotiate(Some(header.as_str()), &supported),
            negotiate(Some(header.as_str()), &supported)
        );
    }
}
