//! `agentgate binding` – find the ?bindingN variable in query text.

use super::{read_text, Output};
use agentgate_core::Gate;
use anyhow::{bail, Result};
use std::path::Path;

pub fn run_binding(
    gate: &Gate,
    text: Option<String>,
    file: Option<&Path>,
    out: Output,
) -> Result<()> {
    let text = match (text, file) {
        (Some(t), _) => t,
        (None, Some(path)) => read_text(path)?,
        (None, None) => bail!("pass the query text or --file"),
    };
    let binding = gate.planner().binding_pattern().extract(Some(&text));
    out.emit(
        binding.as_deref().unwrap_or("-"),
        serde_json::json!({ "binding": binding }),
    )
}
