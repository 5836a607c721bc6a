use std::collections::HashMap;
use std::path::Path;

use ketav_core::language::FrequencyProvider;

use crate::converter::{ScriptConverter, is_hebrew_letter};

/// Occurrence counts per consonantal Hebrew word
pub struct UsageCounts {
    counts: HashMap<String, u32>,
}

impl UsageCounts {
    /// Create empty usage database
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Create with occurrence counts of common concordance entries
    pub fn with_defaults() -> Self {
        let common_words = [
            ("יהוה", 6828), ("אמר", 5316), ("בן", 4906), ("עשה", 2632),
            ("בוא", 2592), ("אלהים", 2570), ("מלך", 2530), ("ארץ", 2505),
            ("יום", 2301), ("בית", 2047), ("נתן", 2014), ("עם", 1868),
            ("יד", 1627), ("ילך", 1554), ("דבר", 1440), ("ראה", 1311),
            ("שמע", 1165), ("ישב", 1088), ("יצא", 1076), ("הנה", 1061),
            ("את", 890), ("אשה", 781), ("משה", 766), ("קרא", 739),
            ("בת", 587), ("מים", 581), ("גוי", 559), ("גדול", 527),
            ("חי", 501), ("ילד", 497), ("שמר", 468), ("שמים", 421),
            ("שר", 421), ("רוח", 378), ("ברך", 330), ("גדל", 117),
            ("חשך", 80), ("ברא", 54),
        ];

        let counts = common_words
            .into_iter()
            .map(|(word, count)| (word.to_string(), count))
            .collect();

        Self { counts }
    }

    /// Load usage data from TSV file (hebrew\tcount format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let mut usage = Self::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() >= 2 {
                if let Ok(count) = parts[1].trim().parse::<u32>() {
                    let key = normalize_key(parts[0]);
                    if !key.is_empty() {
                        usage.counts.insert(key, count);
                    }
                }
            }
        }

        tracing::info!("Loaded {} usage counts from {}", usage.len(), path.display());
        Ok(usage)
    }

    pub fn get_count(&self, word: &str) -> Option<u32> {
        self.counts.get(&normalize_key(word)).copied()
    }

    pub fn get_level(&self, word: &str) -> UsageLevel {
        match self.get_count(word) {
            Some(count) if count >= 1000 => UsageLevel::VeryCommon,
            Some(count) if count >= 300 => UsageLevel::Common,
            Some(count) if count >= 50 => UsageLevel::Uncommon,
            Some(_) => UsageLevel::Rare,
            None => UsageLevel::Unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for UsageCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyProvider for UsageCounts {
    fn usage(&self, word: &str) -> Option<u32> {
        self.get_count(word)
    }
}

fn normalize_key(word: &str) -> String {
    ScriptConverter::new()
        .consonantal(word)
        .chars()
        .filter(|&c| is_hebrew_letter(c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    VeryCommon,
    Common,
    Uncommon,
    Rare,
    Unknown,
}

impl UsageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageLevel::VeryCommon => "Very Common",
            UsageLevel::Common => "Common",
            UsageLevel::Uncommon => "Uncommon",
            UsageLevel::Rare => "Rare",
            UsageLevel::Unknown => "Unknown",
        }
    }

    pub fn stars(&self) -> &'static str {
        match self {
            UsageLevel::VeryCommon => "★★★★",
            UsageLevel::Common => "★★★",
            UsageLevel::Uncommon => "★★",
            UsageLevel::Rare => "★",
            UsageLevel::Unknown => "",
        }
    }
}
