use serde::{Deserialize, Serialize};

/// Result of the pictographic analysis of one word.
///
/// Built on demand for a single interaction and dropped when the overlay
/// showing it closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysisRecord {
    pub hebrew_word: String,
    pub paleo_word: String,
    pub transliteration: String,
    pub english_gloss: String,
    /// `"{symbol} ({meaning})"` segments joined by `" + "`, in letter order
    pub pictographic_breakdown: String,
    pub formation_explanation: String,
    pub concept_summary: String,
    pub usage_count: u32,
}

/// Verse data owned by the caller and handed to the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseContext {
    pub verse_id: String,
    /// Rendered Paleo line, may contain markup tags
    pub paleo_text: String,
    /// Source Hebrew line
    pub hebrew_text: String,
}

impl VerseContext {
    pub fn new(
        verse_id: impl Into<String>,
        paleo_text: impl Into<String>,
        hebrew_text: impl Into<String>,
    ) -> Self {
        Self {
            verse_id: verse_id.into(),
            paleo_text: paleo_text.into(),
            hebrew_text: hebrew_text.into(),
        }
    }
}

/// A clickable Paleo word correlated with its Hebrew source word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveSpan {
    pub paleo_substring: String,
    pub matched_hebrew_substring: String,
    pub word_position_index: usize,
    pub parent_verse_id: String,
    /// The Hebrew correlate converts back to exactly this Paleo word
    pub aligned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// Whitespace, punctuation, markup or anything else left untouched
    Text(String),
    Word(InteractiveSpan),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Word(span) => &span.paleo_substring,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub paleo_words: usize,
    pub hebrew_words: usize,
    /// Word counts agree and every span is aligned
    pub consistent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedVerse {
    pub verse_id: String,
    pub segments: Vec<Segment>,
    pub alignment: Alignment,
}

impl AnnotatedVerse {
    /// Word spans in reading order
    pub fn spans(&self) -> impl Iterator<Item = &InteractiveSpan> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Word(span) => Some(span),
            Segment::Text(_) => None,
        })
    }

    /// Rebuild the verse text, passing each word through `wrap`
    pub fn render<F>(&self, mut wrap: F) -> String
    where
        F: FnMut(&InteractiveSpan) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Word(span) => out.push_str(&wrap(span)),
            }
        }
        out
    }
}
