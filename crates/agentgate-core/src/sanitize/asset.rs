//! Asset reference extraction.

use super::pattern::compile_anchored;
use crate::error::RuleError;
use regex::Regex;

/// Name of the capture group holding the asset token.
pub const ASSET_GROUP: &str = "asset";

/// Default reference shape: an optional `<connector>#` prefix followed by an
/// asset name containing `Asset`, e.g. `urn:cx:GraphAsset#TestAsset`.
pub const DEFAULT_ASSET_REFERENCE_PATTERN: &str = r"((?P<url>[^#]+)#)?(?P<asset>.*Asset.*)";

/// A compiled reference pattern that declares an `asset` group.
#[derive(Debug, Clone)]
pub struct AssetReferencePattern {
    re: Regex,
}

impl Default for AssetReferencePattern {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_REFERENCE_PATTERN).expect("default asset pattern is valid")
    }
}

impl AssetReferencePattern {
    /// Compiles `pattern`; fails if it is invalid or lacks an `asset` group.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let re = compile_anchored("asset reference", pattern)?;
        if !re.capture_names().any(|n| n == Some(ASSET_GROUP)) {
            return Err(RuleError::MissingAssetGroup(pattern.to_string()));
        }
        Ok(Self { re })
    }

    /// The `asset` group when the whole input matches, else `None`.
    ///
    /// Input is decoded as UTF-8; invalid sequences become U+FFFD.
    pub fn extract(&self, raw: &[u8]) -> Option<String> {
        let text = String::from_utf8_lossy(raw);
        let caps = self.re.captures(&text)?;
        caps.name(ASSET_GROUP).map(|m| m.as_str().to_string())
    }
}
