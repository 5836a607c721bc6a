use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::logging::LoggingConfig;
use self::speech::SpeechConfig;

pub mod dictionary;
pub mod logging;
pub mod speech;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub logging: LoggingConfig,
    pub speech: SpeechConfig,
}

impl Config {
    /// Defaults overridden by `KETAV_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(paths) = env::var("KETAV_GLOSS_PATHS") {
            self.dictionary.additional_paths = split_paths(&paths);
        }

        if let Ok(paths) = env::var("KETAV_LEXICON_PATHS") {
            self.dictionary.lexicon_paths = split_paths(&paths);
        }

        if let Ok(path) = env::var("KETAV_USAGE_PATH") {
            self.dictionary.usage_path = (!path.trim().is_empty()).then(|| path.trim().to_string());
        }

        if let Ok(filter) = env::var("KETAV_LOG") {
            self.logging.filter = filter;
        }

        if let Some(json) = env::var("KETAV_LOG_JSON").ok().and_then(|v| parse_bool(&v)) {
            self.logging.json = json;
        }

        if let Some(rate) = env::var("KETAV_TTS_RATE").ok().and_then(|v| v.parse().ok()) {
            self.speech.rate = rate;
        }
    }
}

fn split_paths(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
