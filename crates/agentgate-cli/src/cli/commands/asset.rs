//! `agentgate asset <reference>` – extract the asset name from a reference.

use super::Output;
use agentgate_core::Gate;
use anyhow::{bail, Result};

pub fn run_asset(gate: &Gate, reference: &str, out: Output) -> Result<()> {
    match gate.sanitizer().sanitize_asset_id(reference.as_bytes()) {
        Some(asset) => out.emit(&asset, serde_json::json!({ "asset": asset })),
        None => bail!("`{reference}` does not match the asset reference pattern"),
    }
}
