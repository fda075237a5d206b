//! Request planning for the agent endpoints.
//!
//! Decides, before any result body is produced, which result encoding a
//! query is answered in and which binding variable it refers to, and checks
//! the media type of posted bodies.

use crate::binding::BindingPattern;
use crate::error::GateError;
use crate::media_type::MediaType;
use crate::negotiate::negotiate;
use serde::Serialize;

/// What a query request resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryPlan {
    pub result_type: MediaType,
    pub binding: Option<String>,
}

/// Negotiation and body-type rules shared by all agent requests.
#[derive(Debug, Clone)]
pub struct AgentPlanner {
    result_types: Vec<MediaType>,
    body_types: Vec<MediaType>,
    skill_type: MediaType,
    binding: BindingPattern,
}

impl Default for AgentPlanner {
    fn default() -> Self {
        Self::new(
            vec![
                MediaType::sparql_results_json(),
                MediaType::sparql_results_xml(),
            ],
            vec![
                MediaType::sparql_query(),
                MediaType::sparql_results_json(),
                MediaType::sparql_results_xml(),
            ],
        )
    }
}

impl AgentPlanner {
    /// `result_types` is ranked; the first is used when no `Accept` header is sent.
    pub fn new(result_types: Vec<MediaType>, body_types: Vec<MediaType>) -> Self {
        Self {
            result_types,
            body_types,
            skill_type: MediaType::sparql_query(),
            binding: BindingPattern::new(),
        }
    }

    pub fn result_types(&self) -> &[MediaType] {
        &self.result_types
    }

    pub fn binding_pattern(&self) -> &BindingPattern {
        &self.binding
    }

    /// Plans a query passed as a URL parameter (GET).
    pub fn plan_query(
        &self,
        accept: Option<&str>,
        query: Option<&str>,
    ) -> Result<QueryPlan, GateError> {
        let result_type = self.result_type(accept)?;
        Ok(QueryPlan {
            result_type,
            binding: self.binding.extract(query),
        })
    }

    /// Plans a query whose text may travel in the body (POST).
    ///
    /// The binding variable is looked up in `query` when present, otherwise
    /// in `body`.
    pub fn plan_query_with_body(
        &self,
        accept: Option<&str>,
        content_type: Option<&str>,
        query: Option<&str>,
        body: Option<&str>,
    ) -> Result<QueryPlan, GateError> {
        let result_type = self.result_type(accept)?;
        self.check_body_type(content_type, &self.body_types)?;
        let text = query.or(body);
        Ok(QueryPlan {
            result_type,
            binding: self.binding.extract(text),
        })
    }

    /// Validates a skill registration: a named asset and a non-empty query body.
    pub fn check_skill(
        &self,
        asset: &str,
        content_type: Option<&str>,
        body: Option<&str>,
    ) -> Result<(), GateError> {
        if asset.is_empty() {
            return Err(GateError::EmptyAsset);
        }
        self.check_body_type(content_type, std::slice::from_ref(&self.skill_type))?;
        if body.map_or(true, str::is_empty) {
            return Err(GateError::UnsupportedBodyType {
                content_type: content_type.unwrap_or_default().to_string(),
            });
        }
        Ok(())
    }

    fn result_type(&self, accept: Option<&str>) -> Result<MediaType, GateError> {
        negotiate(accept, &self.result_types).into_result(accept)
    }

    fn check_body_type(
        &self,
        content_type: Option<&str>,
        allowed: &[MediaType],
    ) -> Result<(), GateError> {
        let raw = content_type.unwrap_or_default();
        let unsupported = || GateError::UnsupportedBodyType {
            content_type: raw.to_string(),
        };
        let body_type = MediaType::parse(raw).map_err(|e| {
            tracing::debug!(content_type = raw, error = %e, "unparsable body type");
            unsupported()
        })?;
        if allowed.iter().any(|t| body_type.is_compatible(t)) {
            Ok(())
        } else {
            Err(unsupported())
        }
    }
}
