//! Exclusion pattern matching for template traversal.
//! Rules are glob-lite: a literal name or a string containing `*`
//! wildcards. A rule excludes an entry when it matches the bare entry
//! name, the path relative to the traversal root, or any single segment
//! of that relative path.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// A compiled set of exclusion rules.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    rules: Vec<Regex>,
}

impl ExcludeSet {
    /// Compiles a list of glob-lite rules into anchored matchers.
    ///
    /// Every `*` becomes "match any sequence of characters"; the literal
    /// parts around it are matched character-for-character. Rules without
    /// a wildcard require exact string equality.
    ///
    /// # Errors
    /// * `Error::Pattern` if a rule does not compile, naming the rule
    pub fn compile<S: AsRef<str>>(rules: &[S]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let rule = rule.as_ref();
                let expression = rule
                    .split('*')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(".*");
                Regex::new(&format!("^{expression}$")).map_err(|e| Error::Pattern {
                    pattern: rule.to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Returns true when any rule matches any of the three candidate
    /// representations: entry name, full relative path, or a single path
    /// segment.
    pub fn is_excluded(&self, entry_name: &str, relative_path: &str) -> bool {
        self.rules.iter().any(|rule| {
            rule.is_match(entry_name)
                || rule.is_match(relative_path)
                || Path::new(relative_path)
                    .components()
                    .any(|segment| rule.is_match(&segment.as_os_str().to_string_lossy()))
        })
    }

    /// Number of compiled rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_anchoring() {
        let set = ExcludeSet::compile(&["package-*"]).unwrap();
        assert!(set.is_excluded("package-lock.json", "package-lock.json"));
        assert!(!set.is_excluded("my-package-lock", "my-package-lock"));
    }

    #[test]
    fn test_literal_dot_is_not_a_wildcard() {
        let set = ExcludeSet::compile(&["*.pyc"]).unwrap();
        assert!(set.is_excluded("module.pyc", "module.pyc"));
        assert!(!set.is_excluded("modulexpyc", "modulexpyc"));
    }
}
