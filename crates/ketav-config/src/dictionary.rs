use serde::{Deserialize, Serialize};

fn default_embedded() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Load the gloss seed compiled into the binary
    #[serde(default = "default_embedded")]
    pub embedded: bool,
    /// Extra Paleo to English gloss files (JSON objects), merged in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
    /// Hebrew lexicon files (`[{"hebrew", "gloss"}]`) expanded into Paleo keys
    #[serde(default)]
    pub lexicon_paths: Vec<String>,
    /// Optional `hebrew\tcount` usage file
    #[serde(default)]
    pub usage_path: Option<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            embedded: default_embedded(),
            additional_paths: vec![],
            lexicon_paths: vec![],
            usage_path: None,
        }
    }
}
