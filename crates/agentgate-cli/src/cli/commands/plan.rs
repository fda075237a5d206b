//! `agentgate plan` and `agentgate skill` – check agent requests before answering them.

use super::{read_text, Output};
use agentgate_core::Gate;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Inputs of the `plan` command.
#[derive(Debug, Clone)]
pub struct PlanArgs {
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub query: Option<String>,
    pub body: Option<PathBuf>,
}

pub fn run_plan(gate: &Gate, args: &PlanArgs, out: Output) -> Result<()> {
    let planner = gate.planner();
    let plan = if args.content_type.is_some() || args.body.is_some() {
        let body = args.body.as_deref().map(read_text).transpose()?;
        planner.plan_query_with_body(
            args.accept.as_deref(),
            args.content_type.as_deref(),
            args.query.as_deref(),
            body.as_deref(),
        )?
    } else {
        planner.plan_query(args.accept.as_deref(), args.query.as_deref())?
    };
    let text = format!(
        "result_type={} binding={}",
        plan.result_type,
        plan.binding.as_deref().unwrap_or("-")
    );
    out.emit(text, serde_json::to_value(&plan)?)
}

pub fn run_skill(
    gate: &Gate,
    asset: &str,
    content_type: Option<&str>,
    body: Option<&Path>,
    out: Output,
) -> Result<()> {
    let body = body.map(read_text).transpose()?;
    gate.planner()
        .check_skill(asset, content_type, body.as_deref())?;
    out.emit(
        format!("skill {asset} accepted"),
        serde_json::json!({ "asset": asset, "accepted": true }),
    )
}
