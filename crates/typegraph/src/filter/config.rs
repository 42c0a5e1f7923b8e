use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time budget for compiling and matching exclude patterns.
pub const DEFAULT_PATTERN_BUDGET: Duration = Duration::from_secs(1);

/// Configuration for projecting a [`TypeGraph`](crate::TypeGraph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Project allow-list, matched case-insensitively.
    /// Empty allows every project.
    #[serde(default)]
    pub projects: Vec<String>,

    /// Glob-style exclude patterns for type names (`*` matches any run of
    /// characters, `.` is literal). Empty excludes nothing.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Keep types that no surviving type reference touches
    #[serde(default)]
    pub include_orphans: bool,

    /// Budget for compiling the exclude pattern and for each match
    #[serde(default = "default_budget", with = "duration_millis")]
    pub pattern_budget: Duration,
}

fn default_budget() -> Duration {
    DEFAULT_PATTERN_BUDGET
}

// Helper module for serializing Duration as milliseconds
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Saturate rather than wrap for budgets beyond u64 milliseconds
        u64::try_from(duration.as_millis())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            exclude: Vec::new(),
            include_orphans: false,
            pattern_budget: DEFAULT_PATTERN_BUDGET,
        }
    }
}

impl FilterConfig {
    /// Create config that keeps everything, orphans included.
    pub fn unrestricted() -> Self {
        Self {
            include_orphans: true,
            ..Default::default()
        }
    }

    /// Set the project allow-list
    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    /// Set the type exclude patterns
    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Keep or prune orphaned types
    pub fn with_orphans(mut self, include_orphans: bool) -> Self {
        self.include_orphans = include_orphans;
        self
    }

    /// Set the exclude pattern time budget
    pub fn with_pattern_budget(mut self, budget: Duration) -> Self {
        self.pattern_budget = budget;
        self
    }
}
