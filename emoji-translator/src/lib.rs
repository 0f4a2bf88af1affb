//! Emoji translation engine
//!
//! Decorates plain text with emoji using phrase idioms, a word vocabulary,
//! context narrowing, density and style tuning, and an optional sentiment
//! marker.
//!
//! # Workflow Example
//!
//! ```no_run
//! use emoji_translator::{EmojiTranslator, Mode, Registry, SeededRandom, Style, TranslationOptions};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // 1. Build the registry and merge user mappings (warns and keeps going on failure)
//! let mut registry = Registry::builtin();
//! registry.merge_custom_file(Path::new("custom_emojis.json"));
//!
//! // 2. Hand it to the engine with a randomness provider
//! let translator = EmojiTranslator::new(registry, Arc::new(SeededRandom::new(42)));
//!
//! // 3. Translate
//! let options = TranslationOptions::new()
//!     .with_mode(Mode::Replace)
//!     .with_style(Style::Meme)
//!     .with_sentiment(true);
//! println!("{}", translator.translate("I love coffee in the morning", &options));
//! ```

pub mod builtin;
pub mod engine;
pub mod error;
pub mod loader;
pub mod options;
pub mod phrase;
pub mod random;
pub mod registry;
pub mod sentiment;
pub mod stats;
pub mod text;
pub mod word;


// Re-export main types for convenient access
pub use engine::EmojiTranslator;
pub use error::{TranslatorError, TranslatorResult};
pub use loader::{CustomMapping, EmojiList, load_mapping_from_file, parse_mapping};
pub use options::{Density, Mode, Style, TranslationOptions};
pub use phrase::{PhraseMatcher, PhrasePass};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use registry::{MergeReport, PhrasePattern, Registry, WordEntry};
pub use sentiment::{Sentiment, SentimentBank, SentimentClassifier};
pub use stats::{RegistryInfo, TranslationStats};
pub use word::{OverlapPolicy, WordMatcher};
