use std::sync::Arc;

use ketav_config::Config;
use ketav_lang_hebrew::{GlossLoader, HebrewProcessor};

pub struct AppState {
    pub config: Config,
    pub processor: HebrewProcessor,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dictionary = &config.dictionary;
        let glosses = GlossLoader::load_configured(
            dictionary.embedded,
            &dictionary.lexicon_paths,
            &dictionary.additional_paths,
        );
        let usage = HebrewProcessor::load_usage(dictionary.usage_path.as_deref());
        let processor = HebrewProcessor::with_sources(Arc::new(glosses), Arc::new(usage));

        Self { config, processor }
    }
}
