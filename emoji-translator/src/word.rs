//! Word matcher
//!
//! Works on the open spans left by the phrase pass. Each distinct word
//! (case-insensitive) is decided once per call, in order of first
//! appearance, and every occurrence of it shares that one decision and that
//! one emoji.
//!
//! Per distinct word, in draw order:
//! 1. phrase-overlap skip (see [`OverlapPolicy`])
//! 2. context narrowing of the candidate variants
//! 3. density draw: the word is kept when the draw is at most the density
//!    probability
//! 4. professional vocabulary filter
//! 5. uniform choice among the candidates
//! 6. meme repetition

use crate::builtin;
use crate::options::{Style, TranslationOptions};
use crate::random::RandomSource;
use crate::registry::Registry;
use crate::text::{SpanText, tokens};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Repetition range for meme style words
pub const MEME_WORD_REPEAT: (usize, usize) = (2, 3);

/// Which words count as already covered by a phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Skip a word when it is a substring of any phrase key that occurs in
    /// the input, whether or not that phrase was actually replaced. Coarse:
    /// "morning" is skipped everywhere in a text containing "good morning".
    #[default]
    PhraseVocabulary,
    /// Only text inside replaced phrase spans is off limits
    MatchedSpansOnly,
}

#[derive(Debug, Clone)]
pub struct WordMatcher {
    professional: HashSet<String>,
    policy: OverlapPolicy,
}

impl WordMatcher {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            professional: builtin::PROFESSIONAL_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            policy,
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn is_professional(&self, word: &str) -> bool {
        self.professional.contains(word)
    }

    /// Candidate emoji for `word`, narrowed by cues in `context`
    ///
    /// `context` must already be lowercase. Cues are plain substring checks,
    /// so "photo" counts as a "hot" cue.
    pub fn candidates(&self, word: &str, registry: &Registry, context: &str) -> Vec<String> {
        let Some(entry) = registry.word(word) else {
            return Vec::new();
        };

        let has_cue = |cues: &[&str]| cues.iter().any(|cue| context.contains(cue));
        let owned = |variants: &[&str]| -> Vec<String> {
            variants.iter().map(|v| v.to_string()).collect()
        };

        // Daytime cues take priority; night cues are not consulted then
        if has_cue(builtin::DAYTIME_CUES) {
            if matches!(word, "sun" | "light") {
                return owned(builtin::DAYTIME_VARIANTS);
            }
        } else if has_cue(builtin::NIGHTTIME_CUES) && matches!(word, "moon" | "light") {
            return owned(builtin::NIGHTTIME_VARIANTS);
        }

        if word == "fire" {
            if has_cue(builtin::LITERAL_FIRE_CUES) {
                return owned(builtin::LITERAL_FIRE_VARIANTS);
            }
            if has_cue(builtin::FIRE_SERVICE_CUES) {
                return owned(builtin::FIRE_SERVICE_VARIANTS);
            }
        }

        entry.variants.clone()
    }

    /// Decorate words in the open spans of `text`
    ///
    /// `original` is the input before the phrase pass; the overlap check
    /// looks for phrase keys there. Context cues are read from `text` itself.
    pub fn apply(
        &self,
        text: SpanText,
        registry: &Registry,
        original: &str,
        options: &TranslationOptions,
        random: &dyn RandomSource,
    ) -> SpanText {
        let context = text.render().to_lowercase();
        let phrase_keys = match self.policy {
            OverlapPolicy::PhraseVocabulary => registry.phrases_occurring_in(original),
            OverlapPolicy::MatchedSpansOnly => Vec::new(),
        };

        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for open in text.open_spans() {
            for token in tokens(open) {
                let lowered = token.as_str().to_lowercase();
                if seen.insert(lowered.clone()) {
                    distinct.push(lowered);
                }
            }
        }

        let mut chosen: HashMap<String, String> = HashMap::new();
        for word in distinct {
            if phrase_keys.iter().any(|key| key.contains(word.as_str())) {
                continue;
            }

            let candidates = self.candidates(&word, registry, &context);
            if candidates.is_empty() {
                continue;
            }

            if random.next_f64() > options.density.word_probability() {
                continue;
            }

            if options.style == Style::Professional && !self.is_professional(&word) {
                continue;
            }

            let Some(emoji) = random.choose(&candidates) else {
                continue;
            };
            let emoji = if options.style == Style::Meme {
                let (low, high) = MEME_WORD_REPEAT;
                emoji.repeat(random.range_inclusive(low, high))
            } else {
                emoji.clone()
            };

            chosen.insert(word, emoji);
        }

        if chosen.is_empty() {
            return text;
        }
        debug!("Decorating {} distinct words", chosen.len());

        text.rewrite_open(|open, out| {
            let mut last = 0;
            for token in tokens(open) {
                if let Some(emoji) = chosen.get(&token.as_str().to_lowercase()) {
                    out.push_open(&open[last..token.start()]);
                    out.push_consumed(options.mode.render(token.as_str(), emoji));
                    last = token.end();
                }
            }
            out.push_open(&open[last..]);
        })
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}
