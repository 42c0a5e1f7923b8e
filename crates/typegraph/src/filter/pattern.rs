//! Glob-style exclude patterns compiled into one anchored regex.

use crate::error::{GraphError, Result};
use log::debug;
use regex::Regex;
use std::time::{Duration, Instant};

/// Matches type names against a set of exclude globs.
///
/// Each glob is translated with `.` taken literally and `*` matching any run
/// of characters; other characters keep their regex meaning. The globs are
/// joined into one alternation that must match the whole name. Matching is
/// case-sensitive.
#[derive(Debug, Clone)]
pub struct ExcludeMatcher {
    regex: Option<Regex>,
    budget: Duration,
}

impl ExcludeMatcher {
    /// Compile `patterns` into a matcher.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidPattern`] for a malformed pattern and
    /// [`GraphError::PatternCompileTimeout`] if compilation uses up `budget`.
    pub fn compile<S: AsRef<str>>(patterns: &[S], budget: Duration) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self {
                regex: None,
                budget,
            });
        }

        let alternation = patterns
            .iter()
            .map(|p| format!("(?:{})", glob_to_regex(p.as_ref())))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("^(?:{alternation})$");
        debug!("Compiling exclude pattern: {pattern}");

        let started = Instant::now();
        let regex = Regex::new(&pattern).map_err(|source| GraphError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        if started.elapsed() >= budget {
            return Err(GraphError::pattern_compile_timeout(budget, pattern));
        }

        Ok(Self {
            regex: Some(regex),
            budget,
        })
    }

    /// Whether `name` matches any exclude pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::PatternTimeout`] if the match uses up the budget.
    pub fn is_excluded(&self, name: &str) -> Result<bool> {
        let Some(regex) = &self.regex else {
            return Ok(false);
        };

        let started = Instant::now();
        let matched = regex.is_match(name);
        if started.elapsed() >= self.budget {
            return Err(GraphError::pattern_timeout(self.budget, name));
        }
        Ok(matched)
    }

    /// Whether no patterns were supplied.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

fn glob_to_regex(glob: &str) -> String {
    glob.replace('.', r"\.").replace('*', ".*")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(patterns: &[&str]) -> ExcludeMatcher {
        ExcludeMatcher::compile(patterns, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_glob_translation() {
        assert_eq!(glob_to_regex("Foo.*"), r"Foo\..*");
        assert_eq!(glob_to_regex("*Test*"), ".*Test.*");
    }

    #[test]
    fn test_empty_excludes_nothing() {
        let m = matcher(&[]);
        assert!(m.is_empty());
        assert!(!m.is_excluded("App.Foo").unwrap());
        assert!(!m.is_excluded("").unwrap());
    }

    #[test]
    fn test_prefix_pattern_is_anchored() {
        let m = matcher(&["Foo.*"]);
        assert!(m.is_excluded("Foo.Bar").unwrap());
        assert!(m.is_excluded("Foo.").unwrap());
        assert!(!m.is_excluded("FooBar").unwrap());
        assert!(!m.is_excluded("App.Foo.Bar").unwrap());
    }

    #[test]
    fn test_dot_is_literal() {
        let m = matcher(&["App.Foo"]);
        assert!(m.is_excluded("App.Foo").unwrap());
        assert!(!m.is_excluded("AppxFoo").unwrap());
    }

    #[test]
    fn test_alternation_and_case_sensitivity() {
        let m = matcher(&["*Test*", "Generated.*"]);
        assert!(m.is_excluded("App.FooTest").unwrap());
        assert!(m.is_excluded("Generated.Client").unwrap());
        assert!(!m.is_excluded("App.Footest").unwrap());
        assert!(!m.is_excluded("App.Foo").unwrap());
    }

    #[test]
    fn test_star_matches_everything() {
        let m = matcher(&["*"]);
        assert!(m.is_excluded("App.Foo").unwrap());
        assert!(m.is_excluded("").unwrap());
    }

    #[test]
    fn test_malformed_pattern() {
        let err = ExcludeMatcher::compile(&["App.(Foo"], Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidPattern { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_compile_budget_names_pattern() {
        let err = ExcludeMatcher::compile(&["*Test*"], Duration::ZERO).unwrap_err();
        assert!(
            matches!(err, GraphError::PatternCompileTimeout { ref pattern, budget_ms: 0 } if pattern == "^(?:(?:.*Test.*))$")
        );
    }

    #[test]
    fn test_match_budget_names_input() {
        let m = ExcludeMatcher {
            budget: Duration::ZERO,
            ..matcher(&["*Test*"])
        };
        let err = m.is_excluded("App.FooTest").unwrap_err();
        assert!(matches!(err, GraphError::PatternTimeout { ref input, .. } if input == "App.FooTest"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_matcher_ignores_budget() {
        let m = ExcludeMatcher::compile::<&str>(&[], Duration::ZERO).unwrap();
        assert!(!m.is_excluded("App.FooTest").unwrap());
    }
}
