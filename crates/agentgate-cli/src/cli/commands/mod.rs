//! CLI command handlers. Each command is in its own file.

mod asset;
mod binding;
mod config;
mod negotiate;
mod plan;
mod url;

pub use asset::run_asset;
pub use binding::run_binding;
pub use config::run_config;
pub use negotiate::run_negotiate;
pub use plan::{run_plan, run_skill, PlanArgs};
pub use url::{run_url, UrlArgs};

use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Prints `text`, or `value` as pretty JSON when `--json` is set.
    pub fn emit(&self, text: impl Display, value: serde_json::Value) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{text}");
        }
        Ok(())
    }
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
