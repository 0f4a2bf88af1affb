//! Read-only reporting values for callers that wrap the engine

use serde::{Deserialize, Serialize};

/// Registry sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryInfo {
    pub total_words: usize,
    pub total_phrases: usize,
}

/// Length comparison between an input and its translation
///
/// Lengths are counted in `char`s, so a multi-codepoint emoji such as 👨‍🚒
/// counts for more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationStats {
    pub original_length: usize,
    pub translated_length: usize,
    pub character_difference: i64,
    pub estimated_emojis_added: usize,
}

impl TranslationStats {
    pub fn between(original: &str, translated: &str) -> Self {
        let original_length = original.chars().count();
        let translated_length = translated.chars().count();
        let character_difference = translated_length as i64 - original_length as i64;
        Self {
            original_length,
            translated_length,
            character_difference,
            estimated_emojis_added: character_difference.max(0) as usize,
        }
    }
}
