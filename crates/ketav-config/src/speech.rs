use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_rate() -> f32 {
    1.0
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// User speed setting, scaled per utterance kind
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Preferred voice language prefixes, first available wins
    pub preferred_languages: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            rate: default_rate(),
            preferred_languages: vec!["he".to_string(), "ar".to_string(), "en".to_string()],
        }
    }
}
