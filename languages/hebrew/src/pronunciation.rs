use serde::Serialize;

use crate::converter::{ScriptConverter, base_form, hebrew_for, is_diacritic, is_paleo_char};
use crate::letters::Letter;

const SHIN: char = 'ש';
const SIN_DOT: char = '\u{05C2}';

/// Modern reading aid: silent aleph and ayin, vav as "v"
fn guide_sound(c: char) -> Option<&'static str> {
    let sound = match base_form(c) {
        'א' | 'ע' => "",
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

/// Reconstructed pre-exilic consonant values
fn ancient_sound(c: char) -> Option<&'static str> {
    let sound = match base_form(c) {
        'א' => "",
        'ב' => "b",
        'ג' => "g",
        'ד' => "d",
        'ה' => "h",
        'ו' => "w",
        'ז' => "z",
        'ח' => "kh",
        'ט' => "th",
        'י' => "y",
        'כ' => "k",
        'ל' => "l",
        'מ' => "m",
        'נ' => "n",
        'ס' => "s",
        'ע' => "ah",
        'פ' => "p",
        'צ' => "ts",
        'ק' => "kh",
        'ר' => "r",
        'ש' => "sh",
        'ת' => "t",
        _ => return None,
    };
    Some(sound)
}

fn ancient_paleo_sound(c: char) -> Option<&'static str> {
    // Paleo letters map one to one onto the base Hebrew consonants
    hebrew_for(c).and_then(ancient_sound)
}

/// Letter-by-letter reading guide for pointed or unpointed Hebrew.
///
/// Reads the consonantal text: points and Hebrew punctuation are dropped,
/// anything else that is not a Hebrew letter passes through.
pub fn pronunciation_guide(hebrew: &str) -> String {
    let consonantal = ScriptConverter::new().consonantal(hebrew);
    let mut out = String::with_capacity(consonantal.len());
    for c in consonantal.chars() {
        match guide_sound(c) {
            Some(sound) => out.push_str(sound),
            None => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Text to hand a speech engine for Hebrew or Paleo input.
///
/// Input containing any Paleo letter is read with the Paleo table. Hebrew
/// input honors the shin and sin dots; other points are dropped.
pub fn ancient_pronunciation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    if text.chars().any(is_paleo_char) {
        for c in text.chars() {
            match ancient_paleo_sound(c) {
                Some(sound) => out.push_str(sound),
                None => out.push(c),
            }
        }
    } else {
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if is_diacritic(c) {
                continue;
            }
            if c == SHIN {
                // NFC may place a vowel point before the shin or sin dot
                let sin = chars
                    .clone()
                    .take_while(|&d| is_diacritic(d))
                    .any(|d| d == SIN_DOT);
                out.push_str(if sin { "s" } else { "sh" });
                continue;
            }
            match ancient_sound(c) {
                Some(sound) => out.push_str(sound),
                None => out.push(c),
            }
        }
    }

    collapse_double_spaces(&out).trim().to_string()
}

fn collapse_double_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_space = false;
    for c in text.chars() {
        if c == ' ' && previous_space {
            continue;
        }
        previous_space = c == ' ';
        out.push(c);
    }
    out
}

/// What to voice and how.
///
/// Nothing here talks to a speech engine; the UI voices the request however
/// the platform allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    /// Whole verses are read a little slower than the base rate
    pub fn verse(text: &str, base_rate: f32) -> Self {
        Self {
            text: ancient_pronunciation(text),
            rate: base_rate * 0.9,
            pitch: 1.0,
        }
    }

    pub fn word(text: &str, base_rate: f32) -> Self {
        Self {
            text: ancient_pronunciation(text),
            rate: base_rate,
            pitch: 1.0,
        }
    }

    /// Letter name followed by its sound, slower and slightly higher
    pub fn letter(letter: &Letter, base_rate: f32) -> Self {
        Self {
            text: format!("{}. Sound: {}", letter.name, letter.sound),
            rate: base_rate * 0.8,
            pitch: 1.1,
        }
    }
}
