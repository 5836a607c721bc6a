use std::collections::VecDeque;

use ketav_types::{Alignment, AnnotatedVerse, InteractiveSpan, Segment, VerseContext};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::converter::{ScriptConverter, is_hebrew_letter, is_paleo_char};

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Stands in for a markup tag while the text is split on whitespace
const TAG_PLACEHOLDER: char = '\u{FFFC}';

/// Marks up the Paleo words of a rendered verse.
///
/// Each Paleo word is paired with the Hebrew word at the same whitespace
/// position. When the two lines tokenize differently the pairing drifts;
/// spans and the verse carry an alignment flag, nothing is re-aligned.
pub struct InteractiveAnnotator {
    converter: ScriptConverter,
}

impl InteractiveAnnotator {
    pub fn new() -> Self {
        Self {
            converter: ScriptConverter::new(),
        }
    }

    pub fn annotate(&self, ctx: &VerseContext) -> AnnotatedVerse {
        let mut tags: VecDeque<&str> = MARKUP_TAG
            .find_iter(&ctx.paleo_text)
            .map(|m| m.as_str())
            .collect();
        let placeholder = TAG_PLACEHOLDER.to_string();
        let paleo = MARKUP_TAG.replace_all(&ctx.paleo_text, placeholder.as_str());
        let hebrew = MARKUP_TAG.replace_all(&ctx.hebrew_text, "");

        let paleo_tokens = split_keep_whitespace(&paleo);
        let hebrew_tokens = split_keep_whitespace(&hebrew);

        let mut segments = SegmentBuilder::default();
        let mut paleo_words = 0;

        for (index, token) in paleo_tokens.iter().enumerate() {
            // Separators sit at odd indices
            if index % 2 == 1 {
                segments.text(token);
                continue;
            }

            let mut has_word = false;
            for run in split_runs(token) {
                match run {
                    Run::Tag => match tags.pop_front() {
                        Some(tag) => segments.text(tag),
                        None => segments.text(&placeholder),
                    },
                    Run::Text(text) if is_paleo_word(text) => {
                        has_word = true;
                        segments.word(self.correlate(ctx, text, index, hebrew_tokens.get(index)));
                    }
                    Run::Text(text) => segments.text(text),
                }
            }
            if has_word {
                paleo_words += 1;
            }
        }

        let hebrew_words = hebrew_tokens
            .iter()
            .step_by(2)
            .filter(|token| token.chars().any(is_hebrew_letter))
            .count();

        let segments = segments.finish();
        let all_aligned = segments.iter().all(|segment| match segment {
            Segment::Word(span) => span.aligned,
            Segment::Text(_) => true,
        });
        let alignment = Alignment {
            paleo_words,
            hebrew_words,
            consistent: paleo_words == hebrew_words && all_aligned,
        };

        if !alignment.consistent {
            tracing::debug!(
                "Verse {} misaligned: {} Paleo words, {} Hebrew words",
                ctx.verse_id,
                paleo_words,
                hebrew_words
            );
        }

        AnnotatedVerse {
            verse_id: ctx.verse_id.clone(),
            segments,
            alignment,
        }
    }

    fn correlate(
        &self,
        ctx: &VerseContext,
        paleo_word: &str,
        token_index: usize,
        hebrew_token: Option<&&str>,
    ) -> InteractiveSpan {
        let letters = hebrew_token
            .map(|token| token.chars().filter(|&c| is_hebrew_letter(c)).collect::<String>())
            .filter(|letters| !letters.is_empty());

        // A missing or letterless token falls back to the Paleo text itself
        let (matched, aligned) = match letters {
            Some(letters) => {
                let aligned = self.converter.to_paleo(&letters) == paleo_word;
                (letters, aligned)
            }
            None => (paleo_word.to_string(), false),
        };

        InteractiveSpan {
            paleo_substring: paleo_word.to_string(),
            matched_hebrew_substring: matched,
            word_position_index: token_index / 2,
            parent_verse_id: ctx.verse_id.clone(),
            aligned,
        }
    }
}

impl Default for InteractiveAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

/// A word made only of Paleo-block code points
pub fn is_paleo_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_paleo_char)
}

/// Split on whitespace runs, keeping them: words at even indices, separators
/// at odd ones. A leading separator yields an empty first word.
pub fn split_keep_whitespace(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() != in_space {
            tokens.push(&text[start..i]);
            start = i;
            in_space = !in_space;
        }
    }
    tokens.push(&text[start..]);
    tokens
}

enum Run<'a> {
    Tag,
    Text(&'a str),
}

fn split_runs(token: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    for (i, part) in token.split(TAG_PLACEHOLDER).enumerate() {
        if i > 0 {
            runs.push(Run::Tag);
        }
        if !part.is_empty() {
            runs.push(Run::Text(part));
        }
    }
    runs
}

/// Collects segments, merging adjacent text
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(text.to_string()));
        }
    }

    fn word(&mut self, span: InteractiveSpan) {
        self.segments.push(Segment::Word(span));
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
    }
}
