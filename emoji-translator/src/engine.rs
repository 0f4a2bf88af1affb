//! Translation engine
//!
//! Orchestrates the three stages of a translation:
//!
//! 1. **Phrase pass** - idioms, longest first
//! 2. **Word pass** - individual vocabulary words in the remaining text
//! 3. **Sentiment suffix** - optional, classified from the original input
//!
//! # Example
//!
//! ```
//! use emoji_translator::{Density, EmojiTranslator, TranslationOptions};
//!
//! let translator = EmojiTranslator::builtin();
//! let options = TranslationOptions::new().with_density(Density::Heavy);
//! let result = translator.translate("Good morning!", &options);
//! assert_eq!(result, "Good morning🌅🌅!");
//! ```

use crate::options::TranslationOptions;
use crate::phrase::PhraseMatcher;
use crate::random::{RandomSource, ThreadRandom};
use crate::registry::Registry;
use crate::sentiment::{Sentiment, SentimentBank, SentimentClassifier};
use crate::stats::RegistryInfo;
use crate::text::SpanText;
use crate::word::{OverlapPolicy, WordMatcher};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// The emoji translation engine
///
/// Owns its registry; nothing mutates it after construction. The random
/// source is the only shared mutable state, so an engine can sit behind an
/// `Arc` and serve concurrent callers.
pub struct EmojiTranslator {
    registry: Registry,
    phrases: PhraseMatcher,
    words: WordMatcher,
    classifier: SentimentClassifier,
    bank: SentimentBank,
    random: Arc<dyn RandomSource>,
}

impl EmojiTranslator {
    /// Build an engine over `registry`, drawing from `random`
    pub fn new(registry: Registry, random: Arc<dyn RandomSource>) -> Self {
        let phrases = PhraseMatcher::new(&registry);
        Self {
            registry,
            phrases,
            words: WordMatcher::default(),
            classifier: SentimentClassifier::default(),
            bank: SentimentBank::default(),
            random,
        }
    }

    /// Built-in tables and a thread-local entropy source
    pub fn builtin() -> Self {
        Self::new(Registry::builtin(), Arc::new(ThreadRandom))
    }

    /// Built-in tables extended by an optional custom mapping file
    ///
    /// A missing or malformed file is logged and ignored.
    pub fn with_custom_emojis(custom: Option<&Path>, random: Arc<dyn RandomSource>) -> Self {
        let mut registry = Registry::builtin();
        if let Some(path) = custom {
            registry.merge_custom_file(path);
        }
        Self::new(registry, random)
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.words = WordMatcher::new(policy);
        self
    }

    /// Translate `text` into its emoji-decorated form
    ///
    /// Never fails. Empty input comes back unchanged, apart from the
    /// sentiment suffix when one is requested.
    pub fn translate(&self, text: &str, options: &TranslationOptions) -> String {
        self.translate_with(text, options, self.random.as_ref())
    }

    /// Translate with a caller-supplied random source instead of the shared one
    ///
    /// Lets one engine serve per-call or per-thread generators, e.g. a fresh
    /// seed per request or per test trial.
    pub fn translate_with(
        &self,
        text: &str,
        options: &TranslationOptions,
        random: &dyn RandomSource,
    ) -> String {
        let phrase_pass = self.phrases.apply(SpanText::new(text), options, random);
        debug!(
            "Phrase pass: {} replaced, {} skipped",
            phrase_pass.replaced.len(),
            phrase_pass.skipped.len()
        );

        let spans = self
            .words
            .apply(phrase_pass.text, &self.registry, text, options, random);
        let mut result = spans.render();

        if options.add_sentiment {
            let sentiment = self.classify(text);
            if let Some(emoji) = self.bank.pick(sentiment, random) {
                debug!("Appending {} sentiment emoji", sentiment);
                result.push(' ');
                result.push_str(emoji);
            }
        }

        result
    }

    /// Sentiment of `text` by keyword count
    pub fn classify(&self, text: &str) -> Sentiment {
        self.classifier.classify(text)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn info(&self) -> RegistryInfo {
        self.registry.info()
    }
}

impl Default for EmojiTranslator {
    fn default() -> Self {
        Self::builtin()
    }
}
