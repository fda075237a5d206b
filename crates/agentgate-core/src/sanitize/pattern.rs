//! Compiling configured patterns with whole-input match semantics.

use crate::error::RuleError;
use regex::Regex;

/// Compiles `pattern` so that it only matches the entire subject.
///
/// The pattern is validated on its own first so error messages point at the
/// configured text rather than the anchored wrapper.
pub(crate) fn compile_anchored(name: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    let invalid = |source: regex::Error| RuleError::InvalidPattern {
        name,
        pattern: pattern.to_string(),
        source,
    };
    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_unanchored_patterns() {
        let re = compile_anchored("test", "ab+").unwrap();
        assert!(re.is_match("abbb"));
        assert!(!re.is_match("xabbb"));
        assert!(!re.is_match("abbbx"));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let re = compile_anchored("test", "a|b").unwrap();
        assert!(re.is_match("a"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn invalid_pattern_reports_original_text() {
        let err = compile_anchored("key allow", "(unclosed").unwrap_err();
        match err {
            RuleError::InvalidPattern { name, pattern, .. } => {
                assert_eq!(name, "key allow");
                assert_eq!(pattern, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
