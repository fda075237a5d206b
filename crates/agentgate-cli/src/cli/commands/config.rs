//! `agentgate config` – show where the configuration lives and what is in effect.

use agentgate_core::config::{self, GateConfig};
use anyhow::Result;
use std::path::Path;

pub fn run_config(explicit: Option<&Path>, cfg: &GateConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
