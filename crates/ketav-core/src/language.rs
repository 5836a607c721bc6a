use std::collections::HashMap;

/// Text processing and lookup interface for script implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "he", "ar", "el", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, marks, whitespace)
    fn normalize(&self, text: &str) -> String;

    /// Break text into processable tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Look up a token
    fn lookup(&self, token: &Token) -> Vec<LookupResult>;
}

/// Optional trait for word usage/frequency data
pub trait FrequencyProvider: Send + Sync {
    /// Number of recorded occurrences, None if the word is not in the list
    fn usage(&self, word: &str) -> Option<u32>;

    /// Occurrences or zero
    fn usage_or_zero(&self, word: &str) -> u32 {
        self.usage(word).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    /// Word index within the tokenized text
    pub position: usize,
}

#[derive(Debug, Clone)]
pub struct LookupResult {
    pub term: String,
    pub readings: Vec<String>,
    pub definitions: Vec<String>,
    pub metadata: HashMap<String, String>,
}
