//! Conversion configuration
//!
//! [`BalancerConfig`] carries everything the extractor and merger need to know
//! about the data layout: where the record files live, which subtree of each
//! record holds the balanced fields, and how modified files are written back.

use tracing::warn;

/// Glob pattern of the outfit data files, relative to the game data root
pub const DEFAULT_PATTERN: &str = "dat/outfits/**/*.xml";

/// Subtree of an outfit record holding its general stats
pub const DEFAULT_SUBTREE: &str = "general";

/// Layout and output settings for a conversion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancerConfig {
    /// Glob pattern locating every record file
    pub pattern: String,
    /// Name of the child element whose immediate children are the fields
    pub subtree: String,
    /// Indent rewritten XML files
    pub pretty: bool,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            subtree: DEFAULT_SUBTREE.to_string(),
            pretty: true,
        }
    }
}

impl BalancerConfig {
    /// Create a config with custom values
    ///
    /// Blank values fall back to the outfit defaults with a warning.
    pub fn new(pattern: impl Into<String>, subtree: impl Into<String>, pretty: bool) -> Self {
        Self::default()
            .with_pattern(pattern)
            .with_subtree(subtree)
            .with_pretty(pretty)
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            warn!(
                "Invalid pattern ({:?}), using default ({})",
                pattern, DEFAULT_PATTERN
            );
            self.pattern = DEFAULT_PATTERN.to_string();
        } else {
            self.pattern = pattern;
        }
        self
    }

    pub fn with_subtree(mut self, subtree: impl Into<String>) -> Self {
        let subtree = subtree.into();
        if subtree.trim().is_empty() {
            warn!(
                "Invalid subtree ({:?}), using default ({})",
                subtree, DEFAULT_SUBTREE
            );
            self.subtree = DEFAULT_SUBTREE.to_string();
        } else {
            self.subtree = subtree;
        }
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
