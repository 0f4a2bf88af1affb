use crate::error::{TranslatorError, TranslatorResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Emoji value of a custom word entry: a single emoji or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EmojiList {
    One(String),
    Many(Vec<String>),
}

impl EmojiList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            EmojiList::One(emoji) => vec![emoji],
            EmojiList::Many(emojis) => emojis,
        }
    }
}

/// A user-supplied mapping document
///
/// The JSON file should have the following structure:
/// ```json
/// {
///     "words": { "coffee": ["☕", "🫘"], "rust": "🦀" },
///     "phrases": { "ship it": "🚀" }
/// }
/// ```
///
/// Both sections are optional and any other top-level key is ignored.
/// Entries are kept in key order, which is also the order new phrases are
/// registered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomMapping {
    #[serde(default)]
    pub words: BTreeMap<String, EmojiList>,
    #[serde(default)]
    pub phrases: BTreeMap<String, String>,
}

impl CustomMapping {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

/// Parse a mapping document from a JSON string
///
/// `source` only labels error messages.
///
/// # Errors
/// - Invalid JSON
/// - Root is not an object, or `words` / `phrases` have the wrong shape
pub fn parse_mapping(content: &str, source: &str) -> TranslatorResult<CustomMapping> {
    serde_json::from_str(content).map_err(|e| TranslatorError::MappingParse {
        path: source.to_string(),
        reason: e.to_string(),
    })
}

/// Load a mapping document from a JSON file
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Anything [`parse_mapping`] rejects
pub fn load_mapping_from_file(path: &Path) -> TranslatorResult<CustomMapping> {
    let content = fs::read_to_string(path).map_err(|e| TranslatorError::MappingRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_mapping(&content, &path.display().to_string())
}
