use std::collections::HashMap;

use ketav_core::dictionary::{GlossMetadata, GlossSource, LoadError};
use serde::Deserialize;

use crate::converter::{ScriptConverter, is_hebrew_letter};

/// Gloss shown for a whole analysis record when the dictionary has no entry
pub const RECORD_FALLBACK_GLOSS: &str = "Ancient Word Analysis";
/// Fallbacks used by word chips and error states in the UI
pub const WORD_FALLBACK_GLOSS: &str = "word";
pub const UNKNOWN_GLOSS: &str = "unknown";
pub const ERROR_GLOSS: &str = "error";

/// Article, conjunction and preposition prefixes: the, and, in, to, from, like
pub const PREFIXES: [char; 6] = ['ה', 'ו', 'ב', 'ל', 'מ', 'כ'];

/// One row of a Hebrew lexicon export
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconEntry {
    pub hebrew: String,
    pub gloss: String,
}

/// Paleo word → English gloss, exact match only
#[derive(Debug, Clone, Default)]
pub struct GlossMap {
    name: String,
    entries: HashMap<String, String>,
}

impl GlossMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Parse a JSON object of `{"<paleo word>": "<gloss>"}`
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, LoadError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;

        if let Some(key) = entries.keys().find(|k| k.trim().is_empty()) {
            return Err(LoadError::InvalidFormat(format!("empty gloss key {key:?}")));
        }

        Ok(Self {
            name: name.into(),
            entries,
        })
    }

    /// Build Paleo keys from Hebrew lexicon rows.
    ///
    /// Each word is also registered with every common one-letter prefix. The
    /// first gloss seen for a key is kept.
    pub fn from_lexicon<I, H, G>(name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (H, G)>,
        H: AsRef<str>,
        G: AsRef<str>,
    {
        let converter = ScriptConverter::new();
        let mut map = Self::new(name);

        for (hebrew, gloss) in rows {
            let letters: String = converter
                .consonantal(hebrew.as_ref())
                .chars()
                .filter(|&c| is_hebrew_letter(c))
                .collect();
            let gloss = gloss.as_ref().trim();
            if letters.is_empty() || gloss.is_empty() {
                continue;
            }

            map.insert_if_absent(converter.to_paleo(&letters), gloss);
            for prefix in PREFIXES {
                let prefixed = format!("{prefix}{letters}");
                map.insert_if_absent(converter.to_paleo(&prefixed), gloss);
            }
        }

        map
    }

    pub fn insert(&mut self, paleo: impl Into<String>, gloss: impl Into<String>) {
        self.entries.insert(paleo.into(), gloss.into());
    }

    fn insert_if_absent(&mut self, paleo: String, gloss: &str) {
        self.entries
            .entry(paleo)
            .or_insert_with(|| gloss.to_string());
    }

    /// Entries from `other` override existing ones
    pub fn merge(mut self, other: GlossMap) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, paleo: &str) -> Option<&str> {
        self.entries.get(paleo).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlossSource for GlossMap {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn metadata(&self) -> GlossMetadata {
        GlossMetadata {
            name: self.name.clone(),
            entry_count: self.len(),
        }
    }
}
