//! The frozen set of components a request handler works with.

use crate::agent::{AgentPlanner, QueryPlan};
use crate::error::GateError;
use crate::negotiate::acceptable_media_types;
use crate::sanitize::{QueryParams, RewritingSanitizer, UriSanitizer};
use url::Url;

/// Sanitizer plus agent planner, compiled once from configuration and
/// shared read-only (e.g. behind an `Arc`) by all request handlers.
#[derive(Debug, Clone)]
pub struct Gate {
    sanitizer: UriSanitizer,
    planner: AgentPlanner,
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(
            UriSanitizer::Rewriting(RewritingSanitizer::default()),
            AgentPlanner::default(),
        )
    }
}

impl Gate {
    pub fn new(sanitizer: UriSanitizer, planner: AgentPlanner) -> Self {
        Self { sanitizer, planner }
    }

    pub fn sanitizer(&self) -> &UriSanitizer {
        &self.sanitizer
    }

    pub fn planner(&self) -> &AgentPlanner {
        &self.planner
    }

    /// Builds the outbound data plane URL from a raw inbound `Accept` header.
    pub fn outbound_url(
        &self,
        connector: &str,
        sub_path: Option<&str>,
        params: &QueryParams,
        accept: Option<&str>,
    ) -> Result<Url, GateError> {
        let acceptable = acceptable_media_types(accept);
        let url = self
            .sanitizer
            .build_url(connector, sub_path, params, &acceptable)?;
        tracing::debug!(policy = ?self.sanitizer.policy(), %url, "composed outbound url");
        Ok(url)
    }

    /// Plans a GET query.
    pub fn plan_query(
        &self,
        accept: Option<&str>,
        query: Option<&str>,
    ) -> Result<QueryPlan, GateError> {
        self.planner.plan_query(accept, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_type::MediaType;

    #[test]
    fn outbound_url_parses_accept_header() {
        let gate = Gate::default();
        let accept = Some("text/html, application/*");
        let url = gate
            .outbound_url("http://dp/api", None, &QueryParams::new(), accept)
            .unwrap();
        assert_eq!(url.as_str(), "http://dp/api/?cx_accept=application%252Fjson");
    }

    #[test]
    fn outbound_url_without_accept_defaults() {
        let gate = Gate::default();
        let url = gate
            .outbound_url("http://dp/api/", Some("x"), &QueryParams::new(), None)
            .unwrap();
        assert_eq!(url.as_str(), "http://dp/api/x?cx_accept=application%252Fjson");
    }

    #[test]
    fn plan_query_uses_planner() {
        let plan = Gate::default()
            .plan_query(None, Some("SELECT ?binding9 {}"))
            .unwrap();
        assert_eq!(plan.result_type, MediaType::sparql_results_json());
        assert_eq!(plan.binding.as_deref(), Some("binding9"));
    }
}
