use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor: NFC keeps base letters and their marks composed
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        text = text.nfc().collect();

        // Verse text arrives with hard line breaks from the source files
        text = text.replace(['\n', '\r'], " ");
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            DefaultPreprocessor.process("  בראשית\n ברא\r\nאלהים "),
            "בראשית ברא אלהים"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }
}
