use std::path::Path;

use ketav_core::dictionary::LoadError;

use crate::gloss::{GlossMap, LexiconEntry};

pub struct GlossLoader;

impl GlossLoader {
    /// Load the gloss seed compiled into the crate
    pub fn load_embedded() -> Result<GlossMap, LoadError> {
        let json = include_str!("../data/paleo_english.json");
        tracing::info!("Loading embedded Paleo gloss dictionary...");
        let map = GlossMap::from_json("embedded", json)?;
        tracing::info!("Loaded {} gloss entries", map.len());
        Ok(map)
    }

    /// Load a `{"<paleo word>": "<gloss>"}` JSON file
    pub fn load_from_file(path: &Path) -> Result<GlossMap, LoadError> {
        tracing::info!("Loading gloss dictionary from file: {}", path.display());
        let json = read(path)?;
        let map = GlossMap::from_json(path.display().to_string(), &json)?;
        tracing::info!("Loaded {} gloss entries from file", map.len());
        Ok(map)
    }

    /// Load a `[{"hebrew": ..., "gloss": ...}]` lexicon and derive Paleo keys
    pub fn load_lexicon_file(path: &Path) -> Result<GlossMap, LoadError> {
        tracing::info!("Loading Hebrew lexicon from file: {}", path.display());
        let json = read(path)?;
        let rows: Vec<LexiconEntry> = serde_json::from_str(&json)?;
        let row_count = rows.len();
        let map = GlossMap::from_lexicon(
            path.display().to_string(),
            rows.into_iter().map(|row| (row.hebrew, row.gloss)),
        );
        tracing::info!("Derived {} gloss keys from {} lexicon rows", map.len(), row_count);
        Ok(map)
    }

    /// Merge two maps (later entries override earlier ones)
    pub fn merge(base: GlossMap, additional: GlossMap) -> GlossMap {
        base.merge(additional)
    }

    /// Build the gloss source the application runs with.
    ///
    /// Files that fail to load are logged and skipped.
    pub fn load_configured(embedded: bool, lexicons: &[String], additional: &[String]) -> GlossMap {
        let mut map = if embedded {
            Self::load_embedded().unwrap_or_else(|e| {
                tracing::error!("Failed to load embedded gloss dictionary: {}", e);
                tracing::warn!("Starting with empty gloss dictionary");
                GlossMap::new("empty")
            })
        } else {
            GlossMap::new("empty")
        };

        for path in lexicons {
            match Self::load_lexicon_file(Path::new(path)) {
                Ok(lexicon) => {
                    tracing::info!("Merging lexicon from: {}", path);
                    map = Self::merge(map, lexicon);
                }
                Err(e) => tracing::warn!("Failed to load lexicon from {}: {}", path, e),
            }
        }

        for path in additional {
            match Self::load_from_file(Path::new(path)) {
                Ok(extra) => {
                    tracing::info!("Merging additional gloss dictionary from: {}", path);
                    map = Self::merge(map, extra);
                }
                Err(e) => tracing::warn!("Failed to load gloss dictionary from {}: {}", path, e),
            }
        }

        map
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}
