use std::collections::HashMap;

/// Read-only key to gloss lookup.
///
/// The analysis engine only ever asks for exact matches, so a full dataset,
/// a handful of test entries or nothing at all can stand behind it.
pub trait GlossSource: Send + Sync {
    /// Exact match lookup
    fn lookup(&self, key: &str) -> Option<String>;

    /// Number of entries, if known
    fn entry_count(&self) -> usize {
        0
    }

    /// Source metadata
    fn metadata(&self) -> GlossMetadata {
        GlossMetadata {
            name: "anonymous".to_string(),
            entry_count: self.entry_count(),
        }
    }
}

impl GlossSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// A source with no entries. Every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyGlossSource;

impl GlossSource for EmptyGlossSource {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossMetadata {
    pub name: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
