use crate::agent::AgentPlanner;
use crate::error::RuleError;
use crate::gate::Gate;
use crate::media_type::{
    MediaType, APPLICATION_JSON, SPARQL_QUERY, SPARQL_RESULTS_JSON, SPARQL_RESULTS_XML,
};
use crate::sanitize::{
    AssetReferencePattern, ParameterAllowRule, RewritingSanitizer, SanitizerPolicy, UriSanitizer,
    DEFAULT_ASSET_REFERENCE_PATTERN, DEFAULT_KEY_ALLOW, DEFAULT_RESERVED_KEYS, DEFAULT_VALUE_ALLOW,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Query parameter allow-list (optional `[parameters]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterConfig {
    /// Pattern every forwarded key must match in full.
    pub key_allow: String,
    /// Pattern every forwarded value must match in full.
    pub value_allow: String,
    /// Keys that are never forwarded.
    pub reserved_keys: Vec<String>,
}

impl Default for ParameterConfig {
    fn default() -> Self {
        Self {
            key_allow: DEFAULT_KEY_ALLOW.to_string(),
            value_allow: DEFAULT_VALUE_ALLOW.to_string(),
            reserved_keys: DEFAULT_RESERVED_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// Media types offered during negotiation (optional `[negotiation]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// Ranked representations the rewriting sanitizer resolves `cx_accept` to.
    pub sanitizer_supported: Vec<String>,
    /// Ranked result encodings for agent queries; the first is the default.
    pub result_types: Vec<String>,
    /// Body types accepted on posted queries.
    pub body_types: Vec<String>,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            sanitizer_supported: vec![APPLICATION_JSON.to_string()],
            result_types: vec![SPARQL_RESULTS_JSON.to_string(), SPARQL_RESULTS_XML.to_string()],
            body_types: vec![
                SPARQL_QUERY.to_string(),
                SPARQL_RESULTS_JSON.to_string(),
                SPARQL_RESULTS_XML.to_string(),
            ],
        }
    }
}

/// Global configuration loaded from `~/.config/agentgate/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Sanitizer variant: "rewriting" (default) or "passthrough".
    pub policy: SanitizerPolicy,
    /// Pattern with an `asset` group, matched against the whole asset reference.
    pub asset_reference_pattern: String,
    pub parameters: ParameterConfig,
    pub negotiation: NegotiationConfig,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            policy: SanitizerPolicy::default(),
            asset_reference_pattern: DEFAULT_ASSET_REFERENCE_PATTERN.to_string(),
            parameters: ParameterConfig::default(),
            negotiation: NegotiationConfig::default(),
        }
    }
}

impl GateConfig {
    /// Compiles every pattern and media type list into a frozen [`Gate`].
    ///
    /// Patterns are compiled even under the passthrough policy so a bad file
    /// is rejected at startup whichever policy is selected.
    pub fn compile(&self) -> Result<Gate, RuleError> {
        let allow = ParameterAllowRule::new(
            &self.parameters.key_allow,
            &self.parameters.value_allow,
            self.parameters.reserved_keys.clone(),
        )?;
        let asset = AssetReferencePattern::new(&self.asset_reference_pattern)?;
        let supported = parse_media_types(
            "negotiation.sanitizer_supported",
            &self.negotiation.sanitizer_supported,
        )?;
        let result_types =
            parse_media_types("negotiation.result_types", &self.negotiation.result_types)?;
        let body_types = parse_media_types("negotiation.body_types", &self.negotiation.body_types)?;

        let sanitizer = match self.policy {
            SanitizerPolicy::Passthrough => UriSanitizer::Passthrough,
            SanitizerPolicy::Rewriting => {
                UriSanitizer::Rewriting(RewritingSanitizer::new(allow, asset, supported))
            }
        };
        Ok(Gate::new(sanitizer, AgentPlanner::new(result_types, body_types)))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn parse_media_types(name: &'static str, raw: &[String]) -> Result<Vec<MediaType>, RuleError> {
    if raw.is_empty() {
        return Err(RuleError::EmptyMediaTypes(name));
    }
    raw.iter()
        .map(|v| {
            MediaType::parse(v).map_err(|source| RuleError::InvalidMediaType {
                name,
                value: v.clone(),
                source,
            })
        })
        .collect()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("agentgate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GateConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GateConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<GateConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GateConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
