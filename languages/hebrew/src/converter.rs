/// First and last code points of the Phoenician / Paleo-Hebrew block
pub const PALEO_BLOCK: (u32, u32) = (0x10900, 0x1091F);

/// Vowel points and cantillation marks (nikud, te'amim)
const DIACRITIC_RANGES: &[(u32, u32)] = &[
    (0x0591, 0x05BD), // accents, vowel points through meteg
    (0x05BF, 0x05BF), // rafe
    (0x05C1, 0x05C2), // shin / sin dots
    (0x05C4, 0x05C5), // upper / lower dot
    (0x05C7, 0x05C7), // qamats qatan
];

/// Hebrew punctuation with no Paleo counterpart
const PUNCTUATION: &[char] = &[
    '\u{05BE}', // maqaf
    '\u{05C0}', // paseq
    '\u{05C3}', // sof pasuq
    '\u{05C6}', // nun hafukha
];

pub fn is_diacritic(c: char) -> bool {
    let code = c as u32;
    DIACRITIC_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

pub fn is_paleo_char(c: char) -> bool {
    (PALEO_BLOCK.0..=PALEO_BLOCK.1).contains(&(c as u32))
}

/// Any Hebrew letter, final forms included (U+05D0..=U+05EA)
pub fn is_hebrew_letter(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

pub fn is_final_form(c: char) -> bool {
    matches!(c, 'ך' | 'ם' | 'ן' | 'ף' | 'ץ')
}

/// One of the 22 base consonants; final forms are not base consonants
pub fn is_base_consonant(c: char) -> bool {
    is_hebrew_letter(c) && !is_final_form(c)
}

/// Base letter for a final form, identity for everything else
pub fn base_form(c: char) -> char {
    match c {
        'ך' => 'כ',
        'ם' => 'מ',
        'ן' => 'נ',
        'ף' => 'פ',
        'ץ' => 'צ',
        other => other,
    }
}

/// Paleo symbol for a Hebrew letter. Final forms share their base symbol.
pub fn paleo_for(c: char) -> Option<char> {
    let paleo = match base_form(c) {
        'א' => '𐤀',
        'ב' => '𐤁',
        'ג' => '𐤂',
        'ד' => '𐤃',
        'ה' => '𐤄',
        'ו' => '𐤅',
        'ז' => '𐤆',
        'ח' => '𐤇',
        'ט' => '𐤈',
        'י' => '𐤉',
        'כ' => '𐤊',
        'ל' => '𐤋',
        'מ' => '𐤌',
        'נ' => '𐤍',
        'ס' => '𐤎',
        'ע' => '𐤏',
        'פ' => '𐤐',
        'צ' => '𐤑',
        'ק' => '𐤒',
        'ר' => '𐤓',
        'ש' => '𐤔',
        'ת' => '𐤕',
        _ => return None,
    };
    Some(paleo)
}

/// Base Hebrew letter for a Paleo symbol
pub fn hebrew_for(c: char) -> Option<char> {
    let code = c as u32;
    if !(0x10900..=0x10915).contains(&code) {
        return None;
    }
    // The 22 Paleo letters follow alphabetical order, as do the base letters
    const BASE: [char; 22] = [
        'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ',
        'צ', 'ק', 'ר', 'ש', 'ת',
    ];
    Some(BASE[(code - 0x10900) as usize])
}

/// Character-level Hebrew ↔ Paleo-Hebrew converter.
///
/// Every method is total: characters without a mapping are passed through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptConverter;

impl ScriptConverter {
    pub fn new() -> Self {
        Self
    }

    /// Strip nikud and cantillation, then map every Hebrew letter to Paleo
    pub fn to_paleo(&self, hebrew: &str) -> String {
        self.strip_diacritics(hebrew)
            .chars()
            .map(|c| paleo_for(c).unwrap_or(c))
            .collect()
    }

    /// Map Paleo symbols back to base Hebrew letters
    pub fn to_hebrew(&self, paleo: &str) -> String {
        paleo.chars().map(|c| hebrew_for(c).unwrap_or(c)).collect()
    }

    pub fn strip_diacritics(&self, text: &str) -> String {
        text.chars().filter(|&c| !is_diacritic(c)).collect()
    }

    pub fn strip_punctuation(&self, text: &str) -> String {
        text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
    }

    /// Consonantal text: no marks and no Hebrew punctuation
    pub fn consonantal(&self, text: &str) -> String {
        self.strip_punctuation(&self.strip_diacritics(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('א', '𐤀')]
    #[case('ב', '𐤁')]
    #[case('ג', '𐤂')]
    #[case('ד', '𐤃')]
    #[case('ה', '𐤄')]
    #[case('ו', '𐤅')]
    #[case('ז', '𐤆')]
    #[case('ח', '𐤇')]
    #[case('ט', '𐤈')]
    #[case('י', '𐤉')]
    #[case('כ', '𐤊')]
    #[case('ל', '𐤋')]
    #[case('מ', '𐤌')]
    #[case('נ', '𐤍')]
    #[case('ס', '𐤎')]
    #[case('ע', '𐤏')]
    #[case('פ', '𐤐')]
    #[case('צ', '𐤑')]
    #[case('ק', '𐤒')]
    #[case('ר', '𐤓')]
    #[case('ש', '𐤔')]
    #[case('ת', '𐤕')]
    fn test_base_letters(#[case] hebrew: char, #[case] paleo: char) {
        let converter = ScriptConverter::new();
        assert_eq!(converter.to_paleo(&hebrew.to_string()), paleo.to_string());
        assert_eq!(hebrew_for(paleo), Some(hebrew));
    }

    #[rstest]
    #[case('ך', 'כ')]
    #[case('ם', 'מ')]
    #[case('ן', 'נ')]
    #[case('ף', 'פ')]
    #[case('ץ', 'צ')]
    fn test_final_forms_share_base_symbol(#[case] final_form: char, #[case] base: char) {
        assert_eq!(paleo_for(final_form), paleo_for(base));
        assert!(paleo_for(final_form).is_some());
        assert!(!is_base_consonant(final_form));
        assert!(is_hebrew_letter(final_form));
    }

    #[test]
    fn test_to_paleo_with_nikud_and_passthrough() {
        let converter = ScriptConverter::new();
        assert_eq!(
            converter.to_paleo("בְּרֵאשִׁית בָּרָא, 42"),
            "𐤁𐤓𐤀𐤔𐤉𐤕 𐤁𐤓𐤀, 42"
        );
    }

    #[test]
    fn test_to_paleo_idempotent_on_paleo() {
        let converter = ScriptConverter::new();
        let once = converter.to_paleo("אֱלֹהִים רוּחַ");
        assert_eq!(converter.to_paleo(&once), once);
    }

    #[test]
    fn test_strip_diacritics_leaves_other_scripts() {
        let converter = ScriptConverter::new();
        assert_eq!(converter.strip_diacritics("שָׁלוֹם abc 𐤔𐤋𐤅𐤌"), "שלום abc 𐤔𐤋𐤅𐤌");
        // meteg, rafe, shin dot, qamats qatan
        assert_eq!(converter.strip_diacritics("א\u{05BD}ב\u{05BF}ש\u{05C1}ג\u{05C7}"), "אבשג");
    }

    #[test]
    fn test_punctuation() {
        let converter = ScriptConverter::new();
        assert_eq!(converter.strip_diacritics("על־פני׃"), "על־פני׃");
        assert_eq!(converter.consonantal("עַל־פְּנֵי׃"), "עלפני");
    }

    #[test]
    fn test_to_hebrew() {
        let converter = ScriptConverter::new();
        assert_eq!(converter.to_hebrew("𐤀𐤋𐤄𐤉𐤌 x"), "אלהימ x");
        assert_eq!(hebrew_for('𐤖'), None);
    }

    #[test]
    fn test_classification() {
        assert!(is_paleo_char('𐤀'));
        assert!(is_paleo_char('\u{1091F}'));
        assert!(!is_paleo_char('א'));
        assert!(is_diacritic('\u{05B8}'));
        assert!(!is_diacritic('\u{05BE}'));
        assert_eq!(base_form('x'), 'x');
    }
}
