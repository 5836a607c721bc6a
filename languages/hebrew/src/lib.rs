pub mod analysis;
pub mod annotator;
pub mod converter;
pub mod gloss;
pub mod letters;
pub mod loader;
pub mod pronunciation;
pub mod processor;
pub mod transliterator;
pub mod usage;

pub use analysis::WordAnalysisEngine;
pub use annotator::InteractiveAnnotator;
pub use converter::ScriptConverter;
pub use gloss::GlossMap;
pub use letters::{ALPHABET, Letter, LetterSemantics, LetterSemanticsTable};
pub use loader::GlossLoader;
pub use pronunciation::{SpeechRequest, ancient_pronunciation, pronunciation_guide};
pub use processor::HebrewProcessor;
pub use transliterator::Transliterator;
pub use usage::{UsageCounts, UsageLevel};
