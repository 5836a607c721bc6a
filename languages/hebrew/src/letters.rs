use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::converter::base_form;

/// Pictographic reading of one Paleo letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterSemantics {
    pub name: &'static str,
    pub pictograph_meaning: &'static str,
    pub concept: &'static str,
}

/// Alphabet reference entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Letter {
    pub order: u8,
    pub hebrew: char,
    pub paleo: char,
    pub name: &'static str,
    pub meanings: &'static [&'static str],
    pub pictograph_description: &'static str,
    pub sound: &'static str,
    pub numerical_value: u16,
    pub semantics: LetterSemantics,
}

macro_rules! letter {
    (
        $order:expr, $hebrew:expr, $paleo:expr, $name:expr,
        [$($meaning:expr),+ $(,)?],
        $description:expr, $sound:expr, $value:expr,
        $pictograph:expr, $concept:expr $(,)?
    ) => {
        Letter {
            order: $order,
            hebrew: $hebrew,
            paleo: $paleo,
            name: $name,
            meanings: &[$($meaning),+],
            pictograph_description: $description,
            sound: $sound,
            numerical_value: $value,
            semantics: LetterSemantics {
                name: $name,
                pictograph_meaning: $pictograph,
                concept: $concept,
            },
        }
    };
}

pub static ALPHABET: [Letter; 22] = [
    letter!(1, 'א', '𐤀', "Aleph",
        ["Chief", "Leader", "Strong", "Strength", "Ox", "Bull"],
        "Bull or ox head - represents strength, leadership, and being first",
        "A, E (silent)", 1, "ox head", "strength"),
    letter!(2, 'ב', '𐤁', "Bet",
        ["House", "Household", "Family", "In", "Inside", "Within"],
        "Floor plan of a tent or house - represents dwelling, family structure",
        "B, V", 2, "house", "family"),
    letter!(3, 'ג', '𐤂', "Gimel",
        ["Lift", "Walk", "Camel", "Gather", "Benefit"],
        "Foot of a camel - represents walking, lifting, gathering",
        "G", 3, "camel foot", "gathering"),
    letter!(4, 'ד', '𐤃', "Dalet",
        ["Door", "Gate", "Move", "Movement", "Hang", "Dangle"],
        "Tent door or flap - represents entrance, pathway, movement",
        "D", 4, "tent door", "movement"),
    letter!(5, 'ה', '𐤄', "Hey",
        ["Look", "Lo", "Behold", "The", "This", "Reveal", "Window"],
        "Man with arms raised or window - represents revelation, showing",
        "H", 5, "raised arms", "revelation"),
    letter!(6, 'ו', '𐤅', "Vav",
        ["Nail", "Peg", "Hook", "Connect", "And", "Add"],
        "Tent peg or nail - represents connection, joining, adding",
        "V, W, O, U", 6, "tent peg", "connection"),
    letter!(7, 'ז', '𐤆', "Zayin",
        ["Weapon", "Sword", "Cut", "Remember", "Food"],
        "Weapon or tool for cutting - represents cutting, dividing, remembering",
        "Z", 7, "weapon", "cutting"),
    letter!(8, 'ח', '𐤇', "Chet",
        ["Wall", "Outside", "Divide", "Half", "Fence"],
        "Wall or fence - represents separation, protection, boundary",
        "Ch (guttural)", 8, "wall", "separation"),
    letter!(9, 'ט', '𐤈', "Tet",
        ["Snake", "Surround", "Basket", "Store", "Contain"],
        "Coiled snake or basket - represents surrounding, containing",
        "T (emphatic)", 9, "basket", "containment"),
    letter!(10, 'י', '𐤉', "Yod",
        ["Hand", "Work", "Deed", "Make", "Throw"],
        "Closed hand or arm - represents work, deed, action",
        "Y, I", 10, "closed hand", "work"),
    letter!(11, 'כ', '𐤊', "Kaf",
        ["Palm", "Open", "Cover", "Allow", "Tame"],
        "Open palm of hand - represents covering, allowing, opening",
        "K, Kh", 20, "open palm", "covering"),
    letter!(12, 'ל', '𐤋', "Lamed",
        ["Staff", "Teach", "Yoke", "Toward", "Bind"],
        "Shepherd staff or ox goad - represents teaching, leading, binding",
        "L", 30, "shepherd staff", "teaching"),
    letter!(13, 'מ', '𐤌', "Mem",
        ["Water", "Chaos", "Mighty", "Blood", "People"],
        "Waves of water - represents water, chaos, mighty power",
        "M", 40, "water", "might"),
    letter!(14, 'נ', '𐤍', "Nun",
        ["Fish", "Activity", "Life", "Heir", "Kingdom"],
        "Fish or seed - represents life, activity, continuance",
        "N", 50, "seed", "life"),
    letter!(15, 'ס', '𐤎', "Samekh",
        ["Thorn", "Grab", "Hate", "Protect", "Shield"],
        "Thorn or prop - represents support, protection, grabbing",
        "S", 60, "thorn", "protection"),
    letter!(16, 'ע', '𐤏', "Ayin",
        ["Eye", "See", "Watch", "Know", "Shade"],
        "Eye - represents seeing, watching, knowing, understanding",
        "Ayin (guttural)", 70, "eye", "understanding"),
    letter!(17, 'פ', '𐤐', "Pey",
        ["Mouth", "Blow", "Scatter", "Edge", "Speak"],
        "Mouth - represents speaking, blowing, scattering",
        "P, F", 80, "mouth", "speech"),
    letter!(18, 'צ', '𐤑', "Tsadey",
        ["Fish hook", "Desire", "Need", "Snare", "Hunt"],
        "Fish hook or snare - represents hunting, desire, need",
        "Ts", 90, "fish hook", "desire"),
    letter!(19, 'ק', '𐤒', "Qof",
        ["Back of head", "Behind", "Time", "Condense"],
        "Back of head - represents what is behind, time, condensing",
        "Q (emphatic K)", 100, "back of head", "time"),
    letter!(20, 'ר', '𐤓', "Resh",
        ["Head", "First", "Top", "Beginning", "Person"],
        "Head of a person - represents leadership, first, beginning",
        "R", 200, "head", "beginning"),
    letter!(21, 'ש', '𐤔', "Shin",
        ["Teeth", "Sharp", "Press", "Eat", "Two", "Again"],
        "Two front teeth - represents sharpness, pressing, eating",
        "Sh, S", 300, "teeth", "sharpness"),
    letter!(22, 'ת', '𐤕', "Tav",
        ["Sign", "Mark", "Signal", "Monument", "Covenant"],
        "Two crossed sticks (mark or sign) - represents signs, covenant, monument",
        "T", 400, "crossed sticks", "covenant"),
];

static SHARED: Lazy<LetterSemanticsTable> = Lazy::new(LetterSemanticsTable::with_defaults);

/// Paleo letter lookup table (22 entries, immutable)
pub struct LetterSemanticsTable {
    letters: &'static [Letter],
    by_paleo: HashMap<char, usize>,
    by_hebrew: HashMap<char, usize>,
}

impl LetterSemanticsTable {
    /// Table shared by the whole process
    pub fn shared() -> &'static LetterSemanticsTable {
        &SHARED
    }

    pub fn with_defaults() -> Self {
        let by_paleo = ALPHABET
            .iter()
            .enumerate()
            .map(|(i, letter)| (letter.paleo, i))
            .collect();
        let by_hebrew = ALPHABET
            .iter()
            .enumerate()
            .map(|(i, letter)| (letter.hebrew, i))
            .collect();

        Self {
            letters: &ALPHABET,
            by_paleo,
            by_hebrew,
        }
    }

    pub fn semantics(&self, paleo: char) -> Option<&LetterSemantics> {
        self.by_paleo(paleo).map(|letter| &letter.semantics)
    }

    pub fn by_paleo(&self, paleo: char) -> Option<&Letter> {
        self.by_paleo.get(&paleo).map(|&i| &self.letters[i])
    }

    /// Final forms resolve to their base letter
    pub fn by_hebrew(&self, hebrew: char) -> Option<&Letter> {
        self.by_hebrew
            .get(&base_form(hebrew))
            .map(|&i| &self.letters[i])
    }

    pub fn by_name(&self, name: &str) -> Option<&Letter> {
        let name = name.trim();
        self.letters
            .iter()
            .find(|letter| letter.name.eq_ignore_ascii_case(name))
    }

    /// Letters in alphabetical order
    pub fn alphabet(&self) -> &[Letter] {
        self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::paleo_for;

    #[test]
    fn test_table_covers_alphabet() {
        let table = LetterSemanticsTable::shared();
        assert_eq!(table.len(), 22);

        for (i, letter) in table.alphabet().iter().enumerate() {
            assert_eq!(letter.order as usize, i + 1);
            assert_eq!(paleo_for(letter.hebrew), Some(letter.paleo));
            assert_eq!(table.semantics(letter.paleo), Some(&letter.semantics));
            assert_eq!(letter.semantics.name, letter.name);
        }
    }

    #[test]
    fn test_lookups() {
        let table = LetterSemanticsTable::shared();

        assert_eq!(table.by_hebrew('ם').map(|l| l.name), Some("Mem"));
        assert_eq!(table.by_name("lamed").map(|l| l.paleo), Some('𐤋'));
        assert_eq!(table.semantics('𐤀').map(|s| s.concept), Some("strength"));
        assert!(table.semantics('a').is_none());
        assert_eq!(table.by_paleo('𐤕').map(|l| l.numerical_value), Some(400));
    }
}
