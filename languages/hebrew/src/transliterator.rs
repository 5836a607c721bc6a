use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::converter::{base_form, is_hebrew_letter};

static REPEATED_A: Lazy<Regex> = Lazy::new(|| Regex::new(r"a{2,}").unwrap());
static REPEATED_E: Lazy<Regex> = Lazy::new(|| Regex::new(r"e{2,}").unwrap());
/// A synthetic "e" never sits next to the "a" of a guttural or first syllable
static E_BESIDE_A: Lazy<Regex> = Lazy::new(|| Regex::new(r"ea|ae").unwrap());

/// Whole-word romanizations of frequent Genesis vocabulary
const KNOWN_WORDS: &[(&str, &str)] = &[
    ("בראשית", "bereshit"),
    ("ברא", "bara"),
    ("אלהים", "elohim"),
    ("את", "et"),
    ("השמים", "hashamayim"),
    ("ואת", "veet"),
    ("הארץ", "haaretz"),
    ("והארץ", "vehaaretz"),
    ("היתה", "hayetah"),
    ("תהו", "tohu"),
    ("ובהו", "vavohu"),
    ("וחשך", "vechoshech"),
    ("על", "al"),
    ("פני", "pene"),
    ("תהום", "tehom"),
    ("ורוח", "veruach"),
    ("מרחפת", "merachefet"),
    ("ויאמר", "vayomer"),
    ("יהי", "yehi"),
    ("אור", "or"),
    ("וירא", "vayar"),
    ("כי", "ki"),
    ("טוב", "tov"),
    ("ויבדל", "vayavdel"),
    ("בין", "bein"),
    ("ויקרא", "vayikra"),
    ("לילה", "laylah"),
    ("ויהי", "vayehi"),
    ("ערב", "erev"),
    ("בקר", "boker"),
    ("יום", "yom"),
    ("אחד", "echad"),
    ("המים", "hamayim"),
    ("רקיע", "rakia"),
    ("מים", "mayim"),
    ("רוח", "ruach"),
    ("ארץ", "eretz"),
    ("שלום", "shalom"),
];

/// Latin consonant for a letter; final forms sound like their base letter
pub fn letter_sound(c: char) -> Option<&'static str> {
    let sound = match base_form(c) {
        'א' => "a",
        'ב' => "b",
        'ג' => "g",
        'ד' => "d",
        'ה' => "h",
        'ו' => "v",
        'ז' => "z",
        'ח' => "ch",
        'ט' => "t",
        'י' => "y",
        'כ' => "k",
        'ל' => "l",
        'מ' => "m",
        'נ' => "n",
        'ס' => "s",
        'ע' => "a",
        'פ' => "p",
        'צ' => "ts",
        'ק' => "q",
        'ר' => "r",
        'ש' => "sh",
        'ת' => "t",
        _ => return None,
    };
    Some(sound)
}

/// Romanizer for consonantal Hebrew words.
///
/// Known words come from a curated table. Anything else gets one synthetic
/// vowel per syllable: "a" after the first letter, "e" after interior letters,
/// nothing after the last. That is a guess at syllable shape, not phonology.
pub struct Transliterator {
    known: HashMap<&'static str, &'static str>,
}

impl Transliterator {
    pub fn new() -> Self {
        Self {
            known: KNOWN_WORDS.iter().copied().collect(),
        }
    }

    pub fn transliterate(&self, word: &str) -> String {
        let letters: String = word.chars().filter(|&c| is_hebrew_letter(c)).collect();
        if letters.is_empty() {
            return String::new();
        }

        if let Some(known) = self.known.get(letters.as_str()) {
            return (*known).to_string();
        }

        let generated = self.generate(&letters);
        tracing::trace!("Generated transliteration {} -> {}", letters, generated);
        generated
    }

    /// Transliterate each whitespace-separated word of a verse
    pub fn transliterate_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.transliterate(word))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn known_word_count(&self) -> usize {
        self.known.len()
    }

    fn generate(&self, letters: &str) -> String {
        let sounds: Vec<&str> = letters.chars().filter_map(letter_sound).collect();
        let last = sounds.len().saturating_sub(1);
        let mut out = String::new();

        for (i, sound) in sounds.iter().enumerate() {
            out.push_str(sound);
            if i == 0 {
                if *sound != "a" {
                    out.push('a');
                }
            } else if i < last {
                out.push('e');
            }
        }

        clean_vowels(&out.to_lowercase())
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_vowels(raw: &str) -> String {
    let collapsed = REPEATED_E.replace_all(&REPEATED_A.replace_all(raw, "a"), "e").into_owned();
    let mut merged = collapsed;
    // Each pass shortens the string, so this terminates
    while E_BESIDE_A.is_match(&merged) {
        merged = E_BESIDE_A.replace_all(&merged, "a").into_owned();
    }
    REPEATED_A.replace_all(&merged, "a").into_owned()
}
