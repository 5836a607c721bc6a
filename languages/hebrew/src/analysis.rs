use std::sync::Arc;

use ketav_core::dictionary::{EmptyGlossSource, GlossSource};
use ketav_core::language::FrequencyProvider;
use ketav_types::WordAnalysisRecord;

use crate::converter::{ScriptConverter, is_base_consonant, is_hebrew_letter, is_paleo_char};
use crate::gloss::RECORD_FALLBACK_GLOSS;
use crate::letters::LetterSemanticsTable;
use crate::transliterator::Transliterator;

/// Fills concept summary slots the word has no letter for
pub const PLACEHOLDER_CONCEPT: &str = "essence";

/// Direct pictographic word analysis.
///
/// A word is decomposed into its Paleo letters and a meaning is composed from
/// the letter table alone, with fixed sentence templates. A reading aid, not a
/// translation model.
pub struct WordAnalysisEngine {
    converter: ScriptConverter,
    transliterator: Transliterator,
    letters: &'static LetterSemanticsTable,
    glosses: Arc<dyn GlossSource>,
    usage: Option<Arc<dyn FrequencyProvider>>,
}

impl WordAnalysisEngine {
    pub fn new(glosses: Arc<dyn GlossSource>) -> Self {
        Self {
            converter: ScriptConverter::new(),
            transliterator: Transliterator::new(),
            letters: LetterSemanticsTable::shared(),
            glosses,
            usage: None,
        }
    }

    /// Engine without a gloss dictionary; every record gets the fallback gloss
    pub fn without_glosses() -> Self {
        Self::new(Arc::new(EmptyGlossSource))
    }

    pub fn with_usage(mut self, usage: Arc<dyn FrequencyProvider>) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Gloss for a whole Paleo word, exact match only
    pub fn gloss(&self, paleo_word: &str) -> Option<String> {
        self.glosses.lookup(paleo_word)
    }

    /// Analyze one Hebrew word.
    ///
    /// Returns `None` when the word has no base consonants to read.
    pub fn analyze(&self, hebrew_word: &str) -> Option<WordAnalysisRecord> {
        let consonantal = self.converter.consonantal(hebrew_word);
        let letters: String = consonantal.chars().filter(|&c| is_hebrew_letter(c)).collect();
        let base: String = letters.chars().filter(|&c| is_base_consonant(c)).collect();

        if base.is_empty() {
            tracing::debug!("No base consonants in {:?}", hebrew_word);
            return None;
        }

        let mut pictographs = Vec::new();
        let mut concepts = Vec::new();
        for symbol in self.converter.to_paleo(&base).chars() {
            match self.letters.semantics(symbol) {
                Some(semantics) => {
                    pictographs.push(format!("{} ({})", symbol, semantics.pictograph_meaning));
                    concepts.push(semantics.concept);
                }
                None => tracing::debug!("Skipping letter without semantics: {}", symbol),
            }
        }

        if concepts.is_empty() {
            return None;
        }

        let paleo_word: String = self
            .converter
            .to_paleo(&letters)
            .chars()
            .filter(|&c| is_paleo_char(c))
            .collect();

        let english_gloss = self
            .glosses
            .lookup(&paleo_word)
            .unwrap_or_else(|| RECORD_FALLBACK_GLOSS.to_string());

        let usage_count = self
            .usage
            .as_ref()
            .map(|usage| usage.usage_or_zero(&letters))
            .unwrap_or(0);

        let record = WordAnalysisRecord {
            transliteration: self.transliterator.transliterate(&letters),
            hebrew_word: letters,
            paleo_word,
            english_gloss,
            pictographic_breakdown: pictographs.join(" + "),
            formation_explanation: formation_explanation(&concepts),
            concept_summary: concept_summary(&concepts),
            usage_count,
        };

        tracing::debug!(
            "Analyzed {} -> {} ({} letters)",
            record.hebrew_word,
            record.paleo_word,
            concepts.len()
        );

        Some(record)
    }
}

/// How the letters' concepts combine, by letter count
pub fn formation_explanation(concepts: &[&str]) -> String {
    match concepts {
        [] => String::new(),
        [only] => format!("relates to {only}"),
        [first, second] => format!("{first} connected to {second}"),
        [first, second, third, rest @ ..] => {
            let mut sentence = format!("{first} that {second} through {third}");
            if !rest.is_empty() {
                sentence.push_str(" and involves ");
                sentence.push_str(&rest.join(", "));
            }
            sentence
        }
    }
}

pub fn concept_summary(concepts: &[&str]) -> String {
    let slot = |i: usize| concepts.get(i).copied().unwrap_or(PLACEHOLDER_CONCEPT);
    format!("The {} with {} that brings {}", slot(0), slot(1), slot(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::usage::UsageCounts;

    fn engine_with(entries: &[(&str, &str)]) -> WordAnalysisEngine {
        let map: HashMap<String, String> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WordAnalysisEngine::new(Arc::new(map))
    }

    #[test]
    fn test_elohim() {
        let engine = engine_with(&[("𐤀𐤋𐤄𐤉𐤌", "God")]);
        let record = engine.analyze("אֱלֹהִים").unwrap();

        assert_eq!(record.hebrew_word, "אלהים");
        assert_eq!(record.paleo_word, "𐤀𐤋𐤄𐤉𐤌");
        assert_eq!(record.english_gloss, "God");
        assert_eq!(record.transliteration, "elohim");
        assert_eq!(
            record.pictographic_breakdown,
            "𐤀 (ox head) + 𐤋 (shepherd staff) + 𐤄 (raised arms) + 𐤉 (closed hand)"
        );
        assert_eq!(record.pictographic_breakdown.split(" + ").count(), 4);
        assert_eq!(
            record.formation_explanation,
            "strength that teaching through revelation and involves work"
        );
        assert_eq!(
            record.concept_summary,
            "The strength with teaching that brings revelation"
        );
        assert_eq!(record.usage_count, 0);
    }

    #[test]
    fn test_empty_and_unreadable() {
        let engine = WordAnalysisEngine::without_glosses();
        assert!(engine.analyze("").is_none());
        assert!(engine.analyze("hello 123").is_none());
        assert!(engine.analyze("\u{05B8}\u{05BE}").is_none());
        // final forms alone carry no base consonant
        assert!(engine.analyze("ם").is_none());
    }

    #[test]
    fn test_fallback_gloss_and_short_words() {
        let engine = WordAnalysisEngine::without_glosses();

        let one = engine.analyze("ב").unwrap();
        assert_eq!(one.english_gloss, RECORD_FALLBACK_GLOSS);
        assert_eq!(one.formation_explanation, "relates to family");
        assert_eq!(one.concept_summary, "The family with essence that brings essence");

        let two = engine.analyze("לב").unwrap();
        assert_eq!(two.formation_explanation, "teaching connected to family");
        assert_eq!(two.pictographic_breakdown, "𐤋 (shepherd staff) + 𐤁 (house)");
    }

    #[test]
    fn test_three_letters_have_no_tail() {
        let engine = WordAnalysisEngine::without_glosses();
        let record = engine.analyze("ברא").unwrap();
        assert_eq!(
            record.formation_explanation,
            "family that beginning through strength"
        );
        assert_eq!(record.transliteration, "bara");
    }

    #[test]
    fn test_usage_provider() {
        let engine = WordAnalysisEngine::without_glosses()
            .with_usage(Arc::new(UsageCounts::with_defaults()));

        assert_eq!(engine.analyze("בָּרָא").unwrap().usage_count, 54);
        assert_eq!(engine.analyze("זזז").unwrap().usage_count, 0);
    }

    #[test]
    fn test_order_is_preserved() {
        let engine = WordAnalysisEngine::without_glosses();
        let forward = engine.analyze("אב").unwrap();
        let backward = engine.analyze("בא").unwrap();
        assert_eq!(forward.formation_explanation, "strength connected to family");
        assert_eq!(backward.formation_explanation, "family connected to strength");
    }

    #[test]
    fn test_formation_templates() {
        assert_eq!(formation_explanation(&[]), "");
        assert_eq!(
            formation_explanation(&["a", "b", "c", "d", "e"]),
            "a that b through c and involves d, e"
        );
    }
}
