//! Pattern registry
//!
//! Holds the phrase table and the word → variants table. A registry is built
//! from the built-in tables, optionally extended by one custom mapping
//! document, and then handed to the engine, which owns it read-only.
//!
//! Merging is additive:
//! - a custom word appends its variants to an existing entry, or creates one
//! - a custom phrase inserts a new key or overwrites the emoji of an existing one
//!
//! Nothing is ever removed.

use crate::builtin;
use crate::error::TranslatorError;
use crate::loader::{CustomMapping, load_mapping_from_file};
use crate::stats::RegistryInfo;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// A multi-word idiom and the emoji that stands in for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePattern {
    /// Lowercase key, matched case-insensitively
    pub text: String,
    pub emoji: String,
}

/// A vocabulary word and its candidate emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Lowercase key
    pub word: String,
    /// Never empty
    pub variants: Vec<String>,
}

/// Outcome of a custom mapping merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub phrases_added: usize,
    pub phrases_replaced: usize,
    pub words_added: usize,
    pub variants_appended: usize,
    /// Entries with an empty key or no emoji
    pub entries_skipped: usize,
    /// Set when the document could not be loaded; the registry is unchanged
    pub error: Option<TranslatorError>,
}

impl MergeReport {
    pub fn is_applied(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Insertion order; the phrase matcher breaks length ties with it
    phrases: Vec<PhrasePattern>,
    phrase_index: HashMap<String, usize>,
    words: HashMap<String, WordEntry>,
}

impl Registry {
    /// A registry with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry seeded from the built-in phrase and word tables
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (text, emoji) in builtin::PHRASES {
            registry.add_phrase(text, emoji);
        }
        for (word, variants) in builtin::WORDS {
            registry.add_word_variants(word, variants.iter().map(|v| v.to_string()).collect());
        }
        registry
    }

    /// Insert a phrase or overwrite the emoji of an existing one
    ///
    /// Returns `true` when the phrase key is new. Keys are case-folded, so
    /// "Good Morning" and "good morning" are the same phrase.
    pub fn add_phrase(&mut self, text: &str, emoji: &str) -> bool {
        let key = text.trim().to_lowercase();
        match self.phrase_index.get(&key) {
            Some(&index) => {
                self.phrases[index].emoji = emoji.to_string();
                false
            }
            None => {
                self.phrase_index.insert(key.clone(), self.phrases.len());
                self.phrases.push(PhrasePattern {
                    text: key,
                    emoji: emoji.to_string(),
                });
                true
            }
        }
    }

    /// Append variants to a word, creating the entry if needed
    ///
    /// Returns the number of variants added. An empty `variants` list never
    /// creates an entry.
    pub fn add_word_variants(&mut self, word: &str, variants: Vec<String>) -> usize {
        let variants: Vec<String> = variants.into_iter().filter(|v| !v.is_empty()).collect();
        if variants.is_empty() {
            return 0;
        }
        let key = word.trim().to_lowercase();
        let added = variants.len();
        self.words
            .entry(key.clone())
            .or_insert_with(|| WordEntry {
                word: key,
                variants: Vec::new(),
            })
            .variants
            .extend(variants);
        added
    }

    /// Merge a parsed custom mapping document
    pub fn merge_custom(&mut self, mapping: CustomMapping) -> MergeReport {
        let mut report = MergeReport::default();

        for (word, emojis) in mapping.words {
            if word.trim().is_empty() {
                warn!("Skipping custom word with an empty key");
                report.entries_skipped += 1;
                continue;
            }
            let existed = self.words.contains_key(&word.trim().to_lowercase());
            let added = self.add_word_variants(&word, emojis.into_vec());
            if added == 0 {
                warn!("Custom word '{}' has no emoji, skipping", word);
                report.entries_skipped += 1;
            } else if existed {
                report.variants_appended += added;
            } else {
                report.words_added += 1;
            }
        }

        for (phrase, emoji) in mapping.phrases {
            if phrase.trim().is_empty() || emoji.is_empty() {
                warn!("Skipping custom phrase '{}' with an empty key or emoji", phrase);
                report.entries_skipped += 1;
                continue;
            }
            if self.add_phrase(&phrase, &emoji) {
                report.phrases_added += 1;
            } else {
                report.phrases_replaced += 1;
            }
        }

        debug!(
            "Merged custom mapping: {} words added, {} variants appended, {} phrases added, {} phrases replaced",
            report.words_added,
            report.variants_appended,
            report.phrases_added,
            report.phrases_replaced
        );
        report
    }

    /// Load and merge a custom mapping file
    ///
    /// A missing or malformed file is reported through a warning and the
    /// returned report; the registry keeps its prior state.
    pub fn merge_custom_file(&mut self, path: &Path) -> MergeReport {
        match load_mapping_from_file(path) {
            Ok(mapping) => self.merge_custom(mapping),
            Err(error) => {
                warn!(
                    "Could not load custom emojis from {}: {}",
                    path.display(),
                    error
                );
                MergeReport {
                    error: Some(error),
                    ..MergeReport::default()
                }
            }
        }
    }

    /// Phrases in insertion order
    pub fn phrases(&self) -> &[PhrasePattern] {
        &self.phrases
    }

    pub fn phrase(&self, text: &str) -> Option<&PhrasePattern> {
        self.phrase_index
            .get(&text.to_lowercase())
            .map(|&index| &self.phrases[index])
    }

    pub fn word(&self, word: &str) -> Option<&WordEntry> {
        self.words.get(&word.to_lowercase())
    }

    /// Phrase keys that occur anywhere in `text`, case-insensitively
    pub fn phrases_occurring_in(&self, text: &str) -> Vec<&str> {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .filter(|pattern| lowered.contains(&pattern.text))
            .map(|pattern| pattern.text.as_str())
            .collect()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn info(&self) -> RegistryInfo {
        RegistryInfo {
            total_words: self.word_count(),
            total_phrases: self.phrase_count(),
        }
    }
}
