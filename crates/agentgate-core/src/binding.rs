//! Binding variable references (`?bindingN`) embedded in query text.

use regex::Regex;

const BINDING_PATTERN: &str = r"\?(binding[0-9]+)";

/// Compiled `?bindingN` matcher. Build once and share.
#[derive(Debug, Clone)]
pub struct BindingPattern {
    re: Regex,
}

impl Default for BindingPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingPattern {
    pub fn new() -> Self {
        Self {
            re: Regex::new(BINDING_PATTERN).expect("binding pattern is a valid regex"),
        }
    }

    /// Name of the first `?bindingN` variable in `text` (without the `?`).
    pub fn extract(&self, text: Option<&str>) -> Option<String> {
        let caps = self.re.captures(text?)?;
        caps.get(1).map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_binding_variable() {
        let p = BindingPattern::new();
        assert_eq!(
            p.extract(Some("SELECT ?binding0 WHERE { ?s ?p ?o }")).as_deref(),
            Some("binding0")
        );
    }

    #[test]
    fn no_binding_variable() {
        let p = BindingPattern::new();
        assert_eq!(p.extract(Some("SELECT ?x WHERE { ?x ?p ?o }")), None);
        assert_eq!(p.extract(None), None);
        assert_eq!(p.extract(Some("")), None);
    }

    #[test]
    fn only_first_occurrence_counts() {
        let p = BindingPattern::new();
        assert_eq!(
            p.extract(Some("SELECT ?binding12 ?binding3 WHERE {}")).as_deref(),
            Some("binding12")
        );
    }

    #[test]
    fn requires_question_mark_and_digits() {
        let p = BindingPattern::new();
        assert_eq!(p.extract(Some("binding1 ?bindingX $binding2")), None);
        assert_eq!(
            p.extract(Some("prefix?binding7suffix")).as_deref(),
            Some("binding7")
        );
    }
}
