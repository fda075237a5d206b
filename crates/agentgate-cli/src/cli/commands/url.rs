//! `agentgate url <connector>` – build the sanitized outbound URL.

use super::Output;
use agentgate_core::sanitize::QueryParams;
use agentgate_core::Gate;
use anyhow::Result;

/// Inputs of the `url` command.
#[derive(Debug, Clone)]
pub struct UrlArgs {
    pub connector: String,
    pub sub_path: Option<String>,
    pub query: Option<String>,
    pub params: Vec<(String, String)>,
    pub accept: Option<String>,
}

impl UrlArgs {
    /// `--query` pairs first, then `--param` pairs, in command-line order.
    pub fn query_params(&self) -> QueryParams {
        let mut params = self
            .query
            .as_deref()
            .map(QueryParams::from_query)
            .unwrap_or_default();
        for (k, v) in &self.params {
            params.push(k.as_str(), v.as_str());
        }
        params
    }
}

pub fn run_url(gate: &Gate, args: &UrlArgs, out: Output) -> Result<()> {
    let params = args.query_params();
    let url = gate.outbound_url(
        &args.connector,
        args.sub_path.as_deref(),
        &params,
        args.accept.as_deref(),
    )?;
    out.emit(
        &url,
        serde_json::json!({
            "policy": gate.sanitizer().policy(),
            "url": url.as_str(),
        }),
    )
}
