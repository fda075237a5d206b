//! `agentgate negotiate` – pick a result encoding for an Accept header.

use super::Output;
use agentgate_core::media_type::MediaType;
use agentgate_core::negotiate::negotiate;
use agentgate_core::Gate;
use anyhow::{Context, Result};

pub fn run_negotiate(
    gate: &Gate,
    accept: Option<&str>,
    supported: &[String],
    out: Output,
) -> Result<()> {
    let supported = if supported.is_empty() {
        gate.planner().result_types().to_vec()
    } else {
        supported
            .iter()
            .map(|s| MediaType::parse(s).with_context(|| format!("--supported {s}")))
            .collect::<Result<Vec<_>>>()?
    };

    let outcome = negotiate(accept, &supported);
    if out.json {
        return out.emit("", serde_json::to_value(&outcome)?);
    }
    let selected = outcome.into_result(accept)?;
    out.emit(selected, serde_json::Value::Null)
}
