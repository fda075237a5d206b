//! CLI for the agentgate sanitizer.

mod commands;

use agentgate_core::config::{self, GateConfig};
use agentgate_core::sanitize::SanitizerPolicy;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use commands::{
    run_asset, run_binding, run_config, run_negotiate, run_plan, run_skill, run_url, Output,
    PlanArgs, UrlArgs,
};

/// Top-level CLI for agentgate.
#[derive(Debug, Parser)]
#[command(name = "agentgate")]
#[command(
    about = "agentgate: request sanitization and content negotiation for data plane agents",
    long_about = None
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/agentgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to use instead of ~/.local/state/agentgate/agentgate.log.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Command-line spelling of [`SanitizerPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Passthrough,
    Rewriting,
}

impl From<PolicyArg> for SanitizerPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Passthrough => SanitizerPolicy::Passthrough,
            PolicyArg::Rewriting => SanitizerPolicy::Rewriting,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the sanitized outbound URL for a data plane call.
    Url {
        /// Connector (data plane) base URL.
        connector: String,
        /// Sub-path appended after the normalized base.
        #[arg(long)]
        sub_path: Option<String>,
        /// Inbound query string, e.g. "vin=WBA&troubleCode=P0745".
        #[arg(long, value_name = "QUERY")]
        query: Option<String>,
        /// Additional inbound parameter (repeatable).
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
        /// Inbound Accept header.
        #[arg(long)]
        accept: Option<String>,
        /// Override the configured sanitizer policy.
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },

    /// Negotiate a result encoding for an Accept header.
    Negotiate {
        /// Accept header value; omitted means no preference.
        #[arg(long)]
        accept: Option<String>,
        /// Supported type, in priority order (repeatable). Defaults to the configured result types.
        #[arg(long = "supported", value_name = "TYPE")]
        supported: Vec<String>,
    },

    /// Extract the first ?bindingN variable from query text.
    Binding {
        /// Query text; read from --file when omitted.
        text: Option<String>,
        /// File holding the query text.
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Extract the asset name from an asset reference.
    Asset {
        /// Raw asset reference, e.g. "urn:cx:GraphAsset#TestAsset".
        reference: String,
    },

    /// Plan an agent query: result encoding and binding variable.
    Plan {
        /// Accept header value.
        #[arg(long)]
        accept: Option<String>,
        /// Content-Type of the posted body; implies a POST request.
        #[arg(long)]
        content_type: Option<String>,
        /// Query passed as URL parameter.
        #[arg(long)]
        query: Option<String>,
        /// File holding the posted body; implies a POST request.
        #[arg(long, value_name = "PATH")]
        body: Option<PathBuf>,
    },

    /// Check a skill registration request.
    Skill {
        /// Asset name the skill is registered under.
        asset: String,
        /// Content-Type of the skill body.
        #[arg(long)]
        content_type: Option<String>,
        /// File holding the skill query.
        #[arg(long, value_name = "PATH")]
        body: Option<PathBuf>,
    },

    /// Show the config file location and the effective configuration.
    Config,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

fn load_config(path: Option<&Path>) -> Result<GateConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut cfg = load_config(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let out = Output { json: self.json };

        match self.command {
            CliCommand::Url {
                connector,
                sub_path,
                query,
                params,
                accept,
                policy,
            } => {
                if let Some(p) = policy {
                    cfg.policy = p.into();
                }
                let args = UrlArgs {
                    connector,
                    sub_path,
                    query,
                    params,
                    accept,
                };
                run_url(&cfg.compile()?, &args, out)?;
            }
            CliCommand::Negotiate { accept, supported } => {
                run_negotiate(&cfg.compile()?, accept.as_deref(), &supported, out)?;
            }
            CliCommand::Binding { text, file } => {
                run_binding(&cfg.compile()?, text, file.as_deref(), out)?;
            }
            CliCommand::Asset { reference } => run_asset(&cfg.compile()?, &reference, out)?,
            CliCommand::Plan {
                accept,
                content_type,
                query,
                body,
            } => {
                let args = PlanArgs {
                    accept,
                    content_type,
                    query,
                    body,
                };
                run_plan(&cfg.compile()?, &args, out)?;
            }
            CliCommand::Skill {
                asset,
                content_type,
                body,
            } => run_skill(&cfg.compile()?, &asset, content_type.as_deref(), body.as_deref(), out)?,
            CliCommand::Config => run_config(self.config.as_deref(), &cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
