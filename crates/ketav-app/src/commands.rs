use std::collections::BTreeMap;

use anyhow::{Context, bail};
use ketav_core::language::LanguageProcessor;
use ketav_lang_hebrew::Transliterator;
use ketav_lang_hebrew::gloss::{UNKNOWN_GLOSS, WORD_FALLBACK_GLOSS};
use ketav_lang_hebrew::letters::{Letter, LetterSemanticsTable};
use ketav_lang_hebrew::pronunciation::{SpeechRequest, ancient_pronunciation, pronunciation_guide};
use ketav_types::VerseContext;
use serde::Serialize;
use serde_json::{Value, json};

use crate::cli::{Command, SpeechKind};
use crate::state::AppState;

/// Command result in both output formats
pub struct Report {
    pub json: Value,
    pub plain: String,
}

impl Report {
    fn new(json: impl Serialize, plain: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            json: serde_json::to_value(json)?,
            plain: plain.into(),
        })
    }
}

#[derive(Serialize)]
struct LookupView {
    surface: String,
    normalized: String,
    position: usize,
    term: String,
    readings: Vec<String>,
    definitions: Vec<String>,
    metadata: BTreeMap<String, String>,
}

pub fn run(state: &AppState, command: Command) -> anyhow::Result<Report> {
    let processor = &state.processor;
    let converter = processor.converter();

    match command {
        Command::Convert { text } => {
            let paleo = converter.to_paleo(&text);
            Report::new(json!({ "hebrew": text, "paleo": paleo }), paleo)
        }

        Command::ToHebrew { text } => {
            let hebrew = converter.to_hebrew(&text);
            Report::new(json!({ "paleo": text, "hebrew": hebrew }), hebrew)
        }

        Command::Transliterate { text } => {
            let transliteration = Transliterator::new().transliterate_text(&text);
            Report::new(
                json!({ "hebrew": text, "transliteration": transliteration }),
                transliteration,
            )
        }

        Command::Analyze { word } => {
            let Some(record) = processor.analyze(&word) else {
                bail!("no Hebrew consonants to analyze in {word:?}");
            };
            let level = processor.usage().get_level(&record.hebrew_word);
            let plain = format!(
                "{} {} ({}) - {}\n{}\n{}\n{}\nUsage: {} {} {}",
                record.hebrew_word,
                record.paleo_word,
                record.transliteration,
                record.english_gloss,
                record.pictographic_breakdown,
                record.formation_explanation,
                record.concept_summary,
                record.usage_count,
                level.as_str(),
                level.stars(),
            );
            Report::new(&record, plain)
        }

        Command::Annotate {
            hebrew,
            paleo,
            verse_id,
        } => {
            // Sof pasuq and maqaf would glue onto the Paleo words otherwise
            let paleo =
                paleo.unwrap_or_else(|| converter.to_paleo(&converter.strip_punctuation(&hebrew)));
            let verse = processor.annotate(&VerseContext::new(verse_id, paleo, hebrew));
            let mut plain = verse.render(|span| {
                let gloss = processor
                    .gloss(&span.paleo_substring)
                    .unwrap_or_else(|| WORD_FALLBACK_GLOSS.to_string());
                format!(
                    "[{}|{}|{}]",
                    span.paleo_substring, span.matched_hebrew_substring, gloss
                )
            });
            if !verse.alignment.consistent {
                plain.push_str(&format!(
                    "\n(misaligned: {} Paleo words, {} Hebrew words)",
                    verse.alignment.paleo_words, verse.alignment.hebrew_words
                ));
            }
            Report::new(&verse, plain)
        }

        Command::Alphabet => {
            let letters = LetterSemanticsTable::shared().alphabet();
            let plain = letters
                .iter()
                .map(letter_line)
                .collect::<Vec<_>>()
                .join("\n");
            Report::new(letters, plain)
        }

        Command::Letter { query } => {
            let letter = find_letter(&query)?;
            let plain = format!(
                "{}\n{}\nMeanings: {}\nSound: {}, value: {}",
                letter_line(letter),
                letter.pictograph_description,
                letter.meanings.join(", "),
                letter.sound,
                letter.numerical_value
            );
            Report::new(letter, plain)
        }

        Command::Pronounce { text, kind } => {
            let speech = &state.config.speech;
            let request = match kind {
                SpeechKind::Verse => SpeechRequest::verse(&text, speech.rate),
                SpeechKind::Word => SpeechRequest::word(&text, speech.rate),
                SpeechKind::Letter => SpeechRequest::letter(find_letter(&text)?, speech.rate),
            };
            let guide = pronunciation_guide(&converter.to_hebrew(&text));
            let ancient = ancient_pronunciation(&text);
            let plain = format!("{guide}\n{ancient}");
            Report::new(
                json!({
                    "text": text,
                    "guide": guide,
                    "ancient": ancient,
                    "speech": speech.enabled.then_some(request),
                    "voices": speech.preferred_languages,
                }),
                plain,
            )
        }

        Command::Lookup { text } => {
            let mut views = Vec::new();
            for token in processor.tokenize(&text) {
                let results = processor.lookup(&token);
                if results.is_empty() {
                    views.push(LookupView {
                        term: token.normalized.clone(),
                        surface: token.surface,
                        normalized: token.normalized,
                        position: token.position,
                        readings: Vec::new(),
                        definitions: vec![UNKNOWN_GLOSS.to_string()],
                        metadata: BTreeMap::new(),
                    });
                    continue;
                }
                for result in results {
                    views.push(LookupView {
                        surface: token.surface.clone(),
                        normalized: token.normalized.clone(),
                        position: token.position,
                        term: result.term,
                        readings: result.readings,
                        definitions: result.definitions,
                        metadata: result.metadata.into_iter().collect(),
                    });
                }
            }
            let plain = views
                .iter()
                .map(|view| {
                    format!(
                        "{} [{}] {}",
                        view.term,
                        view.readings.join(", "),
                        view.definitions.join("; ")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            Report::new(&views, plain)
        }
    }
}

/// Letter by name, Hebrew letter (final forms included) or Paleo symbol
fn find_letter(query: &str) -> anyhow::Result<&'static Letter> {
    let table = LetterSemanticsTable::shared();
    let query = query.trim();
    let mut chars = query.chars();

    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => table.by_hebrew(c).or_else(|| table.by_paleo(c)),
        _ => table.by_name(query),
    };

    letter.with_context(|| format!("unknown letter {query:?}"))
}

fn letter_line(letter: &Letter) -> String {
    format!(
        "{:>2}. {} {} {} ({}) {}",
        letter.order,
        letter.paleo,
        letter.hebrew,
        letter.name,
        letter.semantics.pictograph_meaning,
        letter.semantics.concept
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ketav_config::Config;

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    #[test]
    fn test_convert_round_trip() {
        let state = state();
        let report = run(&state, Command::Convert { text: "שָׁלוֹם".into() }).unwrap();
        assert_eq!(report.plain, "𐤔𐤋𐤅𐤌");

        let report = run(&state, Command::ToHebrew { text: report.plain }).unwrap();
        assert_eq!(report.plain, "שלומ");
        assert_eq!(report.json["paleo"], "𐤔𐤋𐤅𐤌");
    }

    #[test]
    fn test_analyze() {
        let report = run(&state(), Command::Analyze { word: "אֱלֹהִים".into() }).unwrap();
        assert_eq!(report.json["english_gloss"], "God");
        assert_eq!(report.json["transliteration"], "elohim");
        assert_eq!(report.json["usage_count"], 2570);
    }

    #[test]
    fn test_analyze_plain_shows_usage_level() {
        let report = run(&state(), Command::Analyze { word: "אלהים".into() }).unwrap();
        assert!(report.plain.ends_with("Usage: 2570 Very Common ★★★★"));
    }

    #[test]
    fn test_analyze_rejects_non_hebrew() {
        assert!(run(&state(), Command::Analyze { word: "hello".into() }).is_err());
    }

    #[test]
    fn test_annotate_derives_paleo_line() {
        let report = run(
            &state(),
            Command::Annotate {
                hebrew: "בְּרֵאשִׁית בָּרָא".into(),
                paleo: None,
                verse_id: "gen-1-1".into(),
            },
        )
        .unwrap();

        assert_eq!(
            report.plain,
            "[𐤁𐤓𐤀𐤔𐤉𐤕|בראשית|beginning] [𐤁𐤓𐤀|ברא|created]"
        );
        assert_eq!(report.json["alignment"]["consistent"], true);
        assert_eq!(report.json["segments"][0]["kind"], "word");
    }

    #[test]
    fn test_annotate_drops_verse_punctuation() {
        let report = run(
            &state(),
            Command::Annotate {
                hebrew: "בָּרָא אֱלֹהִים׃".into(),
                paleo: None,
                verse_id: "gen-1-1".into(),
            },
        )
        .unwrap();

        assert_eq!(report.plain, "[𐤁𐤓𐤀|ברא|created] [𐤀𐤋𐤄𐤉𐤌|אלהים|God]");
        assert_eq!(report.json["alignment"]["paleo_words"], 2);
        assert_eq!(report.json["alignment"]["consistent"], true);

        // maqaf-joined words stay one word on both lines
        let report = run(
            &state(),
            Command::Annotate {
                hebrew: "עַל־פְּנֵי תְהוֹם׃".into(),
                paleo: None,
                verse_id: "gen-1-2".into(),
            },
        )
        .unwrap();
        assert_eq!(report.json["alignment"]["consistent"], true);
        assert_eq!(report.json["segments"][0]["value"]["matched_hebrew_substring"], "עלפני");
    }

    #[test]
    fn test_letter_queries() {
        assert_eq!(find_letter("Bet").unwrap().hebrew, 'ב');
        assert_eq!(find_letter("𐤌").unwrap().name, find_letter("ם").unwrap().name);
        assert!(find_letter("Omega").is_err());

        let report = run(&state(), Command::Alphabet).unwrap();
        assert_eq!(report.json.as_array().map(Vec::len), Some(22));
        assert_eq!(report.plain.lines().count(), 22);
    }

    #[test]
    fn test_pronounce() {
        let report = run(
            &state(),
            Command::Pronounce {
                text: "𐤃𐤅𐤃".into(),
                kind: SpeechKind::Verse,
            },
        )
        .unwrap();

        assert_eq!(report.json["guide"], "dvd");
        assert_eq!(report.json["ancient"], "dwd");
        assert_eq!(report.json["speech"]["text"], "dwd");
        assert_eq!(report.json["voices"][0], "he");
    }

    #[test]
    fn test_lookup() {
        let report = run(&state(), Command::Lookup { text: "בָּרָא אֱלֹהִים".into() }).unwrap();
        let views = report.json.as_array().unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0]["term"], "ברא");
        assert_eq!(views[0]["definitions"][0], "created");
        assert_eq!(views[1]["metadata"]["paleo"], "𐤀𐤋𐤄𐤉𐤌");
    }

    #[test]
    fn test_lookup_unknown_token() {
        let report = run(&state(), Command::Lookup { text: "abc".into() }).unwrap();
        assert_eq!(report.json[0]["definitions"][0], "unknown");
        assert_eq!(report.json[0]["term"], "abc");
    }
}
