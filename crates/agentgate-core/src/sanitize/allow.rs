//! Query parameter allow-listing.

use super::pattern::compile_anchored;
use crate::error::RuleError;
use regex::Regex;

/// Default key rule: no `&`, `?` or `=` anywhere in the key.
pub const DEFAULT_KEY_ALLOW: &str = r"(?P<param>[^&?=]+)";
/// Default value rule: no `&` anywhere in the value.
pub const DEFAULT_VALUE_ALLOW: &str = r"(?P<value>[^&]+)";
/// Keys that are never forwarded regardless of the key rule.
pub const DEFAULT_RESERVED_KEYS: &[&str] = &["asset"];

/// Key and value predicates a forwarded query parameter must both satisfy.
///
/// Both patterns must match the whole key (value). If a pattern declares a
/// `param` (`value`) group, only that group is forwarded.
#[derive(Debug, Clone)]
pub struct ParameterAllowRule {
    key_allow: Regex,
    value_allow: Regex,
    reserved_keys: Vec<String>,
}

impl Default for ParameterAllowRule {
    fn default() -> Self {
        let reserved = DEFAULT_RESERVED_KEYS
            .iter()
            .map(|k| k.to_string())
            .collect();
        Self::new(DEFAULT_KEY_ALLOW, DEFAULT_VALUE_ALLOW, reserved)
            .expect("default allow-list patterns are valid")
    }
}

impl ParameterAllowRule {
    pub fn new(
        key_allow: &str,
        value_allow: &str,
        reserved_keys: Vec<String>,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            key_allow: compile_anchored("parameter key allow", key_allow)?,
            value_allow: compile_anchored("parameter value allow", value_allow)?,
            reserved_keys,
        })
    }

    /// The forwardable part of `key`, or `None` if the key is rejected.
    pub fn admit_key<'k>(&self, key: &'k str) -> Option<&'k str> {
        if self.reserved_keys.iter().any(|r| r == key) {
            return None;
        }
        admit(&self.key_allow, "param", key)
    }

    /// The forwardable part of `value`, or `None` if the value is rejected.
    pub fn admit_value<'v>(&self, value: &'v str) -> Option<&'v str> {
        admit(&self.value_allow, "value", value)
    }
}

fn admit<'s>(re: &Regex, group: &str, subject: &'s str) -> Option<&'s str> {
    let caps = re.captures(subject)?;
    let m = caps.name(group).or_else(|| caps.get(0))?;
    Some(&subject[m.start()..m.end()])
}
