use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use ketav_core::dictionary::GlossSource;
use ketav_core::language::{LanguageProcessor, LookupResult, Token};
use ketav_core::preprocess::{DefaultPreprocessor, Preprocessor};
use ketav_types::{AnnotatedVerse, VerseContext, WordAnalysisRecord};
use unicode_normalization::UnicodeNormalization;

use crate::analysis::WordAnalysisEngine;
use crate::annotator::InteractiveAnnotator;
use crate::converter::ScriptConverter;
use crate::loader::GlossLoader;
use crate::usage::UsageCounts;

const MAQAF: char = '\u{05BE}';

/// Hebrew language processor
pub struct HebrewProcessor {
    converter: ScriptConverter,
    engine: WordAnalysisEngine,
    annotator: InteractiveAnnotator,
    usage: Arc<UsageCounts>,
}

impl HebrewProcessor {
    /// Embedded gloss seed and built-in usage counts
    pub fn new() -> Self {
        Self::with_additional_dicts(&[])
    }

    /// Embedded gloss seed merged with additional gloss files
    pub fn with_additional_dicts(additional_paths: &[String]) -> Self {
        let glosses = GlossLoader::load_configured(true, &[], additional_paths);
        Self::with_sources(Arc::new(glosses), Arc::new(UsageCounts::with_defaults()))
    }

    pub fn with_sources(glosses: Arc<dyn GlossSource>, usage: Arc<UsageCounts>) -> Self {
        let metadata = glosses.metadata();
        tracing::info!(
            "Hebrew processor ready: {} glosses from {}, {} usage counts",
            metadata.entry_count,
            metadata.name,
            usage.len()
        );

        Self {
            converter: ScriptConverter::new(),
            engine: WordAnalysisEngine::new(glosses).with_usage(usage.clone()),
            annotator: InteractiveAnnotator::new(),
            usage,
        }
    }

    /// Usage counts from a TSV file, falling back to the built-in counts
    pub fn load_usage(path: Option<&str>) -> UsageCounts {
        let Some(path) = path else {
            return UsageCounts::with_defaults();
        };
        UsageCounts::load_from_file(Path::new(path)).unwrap_or_else(|e| {
            tracing::warn!("Failed to load usage counts from {}: {}", path, e);
            UsageCounts::with_defaults()
        })
    }

    pub fn analyze(&self, hebrew_word: &str) -> Option<WordAnalysisRecord> {
        self.engine.analyze(hebrew_word)
    }

    pub fn gloss(&self, paleo_word: &str) -> Option<String> {
        self.engine.gloss(paleo_word)
    }

    pub fn annotate(&self, ctx: &VerseContext) -> AnnotatedVerse {
        self.annotator.annotate(ctx)
    }

    pub fn converter(&self) -> &ScriptConverter {
        &self.converter
    }

    pub fn usage(&self) -> &UsageCounts {
        &self.usage
    }
}

impl Default for HebrewProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor for HebrewProcessor {
    fn language_code(&self) -> &str {
        "he"
    }

    fn normalize(&self, text: &str) -> String {
        let composed = DefaultPreprocessor.process(text);
        // maqaf joins words, so it separates tokens rather than vanishing
        let unjoined = composed.replace(MAQAF, " ");
        let stripped = self
            .converter
            .strip_punctuation(&self.converter.strip_diacritics(&unjoined));
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.nfc()
            .collect::<String>()
            .replace(MAQAF, " ")
            .split_whitespace()
            .filter_map(|surface| {
                let normalized = self.normalize(surface);
                (!normalized.is_empty()).then(|| (surface.to_string(), normalized))
            })
            .enumerate()
            .map(|(position, (surface, normalized))| Token {
                surface,
                normalized,
                position,
            })
            .collect()
    }

    fn lookup(&self, token: &Token) -> Vec<LookupResult> {
        let Some(record) = self.engine.analyze(&token.normalized) else {
            return Vec::new();
        };

        let mut metadata = HashMap::new();
        metadata.insert("paleo".to_string(), record.paleo_word.clone());
        metadata.insert("breakdown".to_string(), record.pictographic_breakdown.clone());
        metadata.insert("formation".to_string(), record.formation_explanation.clone());
        metadata.insert("summary".to_string(), record.concept_summary.clone());
        metadata.insert("usage".to_string(), record.usage_count.to_string());
        metadata.insert(
            "usage_level".to_string(),
            self.usage.get_level(&record.hebrew_word).as_str().to_string(),
        );

        vec![LookupResult {
            term: record.hebrew_word,
            readings: vec![record.transliteration],
            definitions: vec![record.english_gloss],
            metadata,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let processor = HebrewProcessor::new();
        assert_eq!(
            processor.normalize("  בְּרֵאשִׁית  בָּרָא\nאֱלֹהִים׃ "),
            "בראשית ברא אלהים"
        );
        assert_eq!(processor.normalize("עַל־פְּנֵי"), "על פני");
    }

    #[test]
    fn test_tokenize_keeps_surface() {
        let processor = HebrewProcessor::new();
        let tokens = processor.tokenize("בָּרָא ׃ אֱלֹהִים");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].surface, "בָּרָא".nfc().collect::<String>());
        assert_eq!(tokens[0].normalized, "ברא");
        assert_eq!(tokens[1].normalized, "אלהים");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_lookup() {
        let processor = HebrewProcessor::new();
        let token = Token {
            surface: "אֱלֹהִים".to_string(),
            normalized: "אלהים".to_string(),
            position: 0,
        };
        let results = processor.lookup(&token);

        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.term, "אלהים");
        assert_eq!(result.readings, vec!["elohim"]);
        assert_eq!(result.definitions, vec!["God"]);
        assert_eq!(result.metadata["paleo"], "𐤀𐤋𐤄𐤉𐤌");
        assert_eq!(result.metadata["usage"], "2570");
        assert_eq!(result.metadata["usage_level"], "Very Common");
    }

    #[test]
    fn test_lookup_non_hebrew() {
        let processor = HebrewProcessor::new();
        let token = Token {
            surface: "hello".to_string(),
            normalized: "hello".to_string(),
            position: 0,
        };
        assert!(processor.lookup(&token).is_empty());
    }

    #[test]
    fn test_missing_usage_file_falls_back() {
        let usage = HebrewProcessor::load_usage(Some("/nonexistent/usage.tsv"));
        assert_eq!(usage.get_count("ברא"), Some(54));
    }
}
