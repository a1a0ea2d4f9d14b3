//! Entry filtering — which names never make it into the tree or the stats.
use std::collections::BTreeSet;

/// Names skipped at every depth: version control metadata, dependency
/// caches, virtualenvs, build output and test/type-check caches.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "coverage",
    ".pytest_cache",
    ".mypy_cache",
];

/// Leading character that marks a hidden entry.
pub const HIDDEN_MARKER: char = '.';

/// Name-based ignore rules applied uniformly to files and directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRules {
    names: BTreeSet<String>,
    skip_hidden: bool,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self {
            names: DEFAULT_IGNORED_NAMES.iter().map(|s| s.to_string()).collect(),
            skip_hidden: true,
        }
    }
}

impl IgnoreRules {
    /// Rules that ignore nothing.
    pub fn none() -> Self {
        Self {
            names: BTreeSet::new(),
            skip_hidden: false,
        }
    }

    /// Add an exact name to the ignore set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Toggle the hidden-entry rule.
    pub fn with_skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.skip_hidden = skip_hidden;
        self
    }

    /// `true` if an entry called `name` must be left out of the scan.
    pub fn is_ignored(&self, name: &str) -> bool {
        (self.skip_hidden && name.starts_with(HIDDEN_MARKER)) || self.names.contains(name)
    }
}
