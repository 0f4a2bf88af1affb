//! Phrase matcher
//!
//! Phrases are tried longest first (ties keep registry insertion order), so
//! "break the ice" wins over an embedded "ice". Each key scans the open spans
//! left by the keys before it; a replacement becomes a consumed span and is
//! never rescanned.
//!
//! Gates are drawn once per phrase key per call, only when the key actually
//! occurs. Every occurrence of the key then gets the same treatment.

use crate::options::{Density, Style, TranslationOptions};
use crate::random::RandomSource;
use crate::registry::Registry;
use crate::text::SpanText;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Chance that professional style leaves a matched phrase alone
pub const PROFESSIONAL_PHRASE_SKIP: f64 = 0.3;

/// Repetition range for meme style phrases
pub const MEME_PHRASE_REPEAT: (usize, usize) = (2, 4);

#[derive(Debug, Clone)]
struct PhraseRule {
    key: String,
    emoji: String,
    pattern: Regex,
}

/// Result of one phrase pass
#[derive(Debug, Clone)]
pub struct PhrasePass {
    pub text: SpanText,
    /// Keys that were replaced, in matching order
    pub replaced: Vec<String>,
    /// Keys that occurred but were skipped by a style or density gate
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    rules: Vec<PhraseRule>,
}

impl PhraseMatcher {
    pub fn new(registry: &Registry) -> Self {
        let mut rules: Vec<PhraseRule> = registry
            .phrases()
            .iter()
            .filter(|phrase| !phrase.text.is_empty())
            .filter_map(|phrase| {
                match RegexBuilder::new(&regex::escape(&phrase.text))
                    .case_insensitive(true)
                    .build()
                {
                    Ok(pattern) => Some(PhraseRule {
                        key: phrase.text.clone(),
                        emoji: phrase.emoji.clone(),
                        pattern,
                    }),
                    Err(e) => {
                        warn!("Skipping phrase '{}': {}", phrase.text, e);
                        None
                    }
                }
            })
            .collect();

        // sort_by is stable: equal lengths stay in insertion order
        rules.sort_by(|a, b| b.key.chars().count().cmp(&a.key.chars().count()));
        Self { rules }
    }

    /// Phrase keys in the order they are tried
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.key.as_str())
    }

    pub fn apply(
        &self,
        mut text: SpanText,
        options: &TranslationOptions,
        random: &dyn RandomSource,
    ) -> PhrasePass {
        let mut replaced = Vec::new();
        let mut skipped = Vec::new();

        for rule in &self.rules {
            if !text.open_spans().any(|open| rule.pattern.is_match(open)) {
                continue;
            }

            let Some(emoji) = decide(&rule.emoji, options, random) else {
                debug!("Phrase '{}' skipped by gate", rule.key);
                skipped.push(rule.key.clone());
                continue;
            };

            text = text.rewrite_open(|open, out| {
                let mut last = 0;
                for found in rule.pattern.find_iter(open) {
                    out.push_open(&open[last..found.start()]);
                    out.push_consumed(options.mode.render(found.as_str(), &emoji));
                    last = found.end();
                }
                out.push_open(&open[last..]);
            });
            replaced.push(rule.key.clone());
        }

        PhrasePass {
            text,
            replaced,
            skipped,
        }
    }
}

/// Run the style and density gates for one matched phrase
///
/// Draw order: meme repetition or professional skip, then the light density
/// skip. `None` leaves the phrase untouched.
fn decide(emoji: &str, options: &TranslationOptions, random: &dyn RandomSource) -> Option<String> {
    let mut emoji = emoji.to_string();

    match options.style {
        Style::Meme => {
            let (low, high) = MEME_PHRASE_REPEAT;
            emoji = emoji.repeat(random.range_inclusive(low, high));
        }
        Style::Professional => {
            if random.next_f64() < PROFESSIONAL_PHRASE_SKIP {
                return None;
            }
        }
        Style::Fun => {}
    }

    let skip = options.density.phrase_skip_probability();
    if skip > 0.0 && random.next_f64() < skip {
        return None;
    }

    // Meme style already repeats; heavy density doubles everything else
    if options.density == Density::Heavy && options.style != Style::Meme {
        emoji = emoji.repeat(2);
    }

    Some(emoji)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Mode;
    use crate::random::ScriptedRandom;

    fn registry(phrases: &[(&str, &str)]) -> Registry {
        let mut registry = Registry::empty();
        for (text, emoji) in phrases {
            registry.add_phrase(text, emoji);
        }
        registry
    }

    fn run(matcher: &PhraseMatcher, input: &str, options: TranslationOptions) -> String {
        let random = ScriptedRandom::constant(0.99);
        matcher.apply(SpanText::new(input), &options, &random).text.render()
    }

    #[test]
    fn test_longest_first_ordering() {
        let matcher = PhraseMatcher::new(&registry(&[
            ("ice", "🧊"),
            ("on fire", "🔥"),
            ("break the ice", "🧊🔨"),
            ("hot tea", "🍵"),
        ]));
        let keys: Vec<&str> = matcher.keys().collect();
        assert_eq!(keys, vec!["break the ice", "on fire", "hot tea", "ice"]);
    }

    // ========== Precedence Tests ==========

    #[test]
    fn test_longer_phrase_wins_in_replace_mode() {
        let matcher = PhraseMatcher::new(&registry(&[("ice", "🧊"), ("break the ice", "🔨")]));
        let options = TranslationOptions::new().with_mode(Mode::Replace);
        let random = ScriptedRandom::constant(0.99);
        let pass = matcher.apply(SpanText::new("Let's break the ice"), &options, &random);

        assert_eq!(pass.text.render(), "Let's 🔨");
        assert_eq!(pass.replaced, vec!["break the ice"]);
    }

    #[test]
    fn test_embedded_phrase_not_rematched_in_append_mode() {
        let matcher = PhraseMatcher::new(&registry(&[("ice", "🧊"), ("break the ice", "🔨")]));
        let output = run(&matcher, "Let's break the ice", TranslationOptions::new());
        assert_eq!(output, "Let's break the ice🔨");
    }

    #[test]
    fn test_shorter_phrase_still_matches_elsewhere() {
        let matcher = PhraseMatcher::new(&registry(&[("ice", "🧊"), ("break the ice", "🔨")]));
        let output = run(&matcher, "Break the ice, then ice the cake", TranslationOptions::new());
        assert_eq!(output, "Break the ice🔨, then ice🧊 the cake");
    }

    // ========== Mode and Case Tests ==========

    #[test]
    fn test_append_preserves_captured_case() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let output = run(&matcher, "GOOD MORNING everyone", TranslationOptions::new());
        assert_eq!(output, "GOOD MORNING🌅 everyone");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_mode(Mode::Replace);
        let output = run(&matcher, "On fire, totally on fire", options);
        assert_eq!(output, "🔥, totally 🔥");
    }

    #[test]
    fn test_heavy_doubles_emoji() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_density(Density::Heavy);
        assert_eq!(run(&matcher, "Good morning!", options), "Good morning🌅🌅!");
    }

    // ========== Gate Tests ==========

    #[test]
    fn test_light_density_skip_gate() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_density(Density::Light);

        let skip = ScriptedRandom::constant(0.2);
        let pass = matcher.apply(SpanText::new("piece of cake"), &options, &skip);
        assert_eq!(pass.text.render(), "piece of cake");
        assert_eq!(pass.skipped, vec!["piece of cake"]);

        let keep = ScriptedRandom::constant(0.7);
        let pass = matcher.apply(SpanText::new("piece of cake"), &options, &keep);
        assert_eq!(pass.text.render(), "piece of cake🍰");
    }

    #[test]
    fn test_professional_skip_gate() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_style(Style::Professional);

        let skip = ScriptedRandom::constant(0.29);
        let pass = matcher.apply(SpanText::new("let's touch base"), &options, &skip);
        assert_eq!(pass.text.render(), "let's touch base");

        let keep = ScriptedRandom::constant(0.3);
        let pass = matcher.apply(SpanText::new("let's touch base"), &options, &keep);
        assert_eq!(pass.text.render(), "let's touch base🤝");
    }

    #[test]
    fn test_meme_repeats_and_ignores_heavy_doubling() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new()
            .with_style(Style::Meme)
            .with_density(Density::Heavy)
            .with_mode(Mode::Replace);
        let random = ScriptedRandom::new(vec![0.99], vec![3]);
        let pass = matcher.apply(SpanText::new("on fire"), &options, &random);
        assert_eq!(pass.text.render(), "🔥🔥🔥");
    }

    #[test]
    fn test_gate_drawn_once_per_key() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_density(Density::Light);
        let random = ScriptedRandom::new(vec![0.7, 0.1], Vec::new());
        let pass = matcher.apply(SpanText::new("on fire and on fire"), &options, &random);

        assert_eq!(pass.text.render(), "on fire🔥 and on fire🔥");
        assert_eq!(random.floats_drawn(), 1);
    }

    #[test]
    fn test_empty_key_is_ignored() {
        let matcher = PhraseMatcher::new(&registry(&[("", "❓"), ("on fire", "🔥")]));
        assert_eq!(matcher.keys().collect::<Vec<_>>(), vec!["on fire"]);
        assert_eq!(run(&matcher, "calm", TranslationOptions::new()), "calm");
    }

    #[test]
    fn test_no_draws_without_matches() {
        let matcher = PhraseMatcher::new(&Registry::builtin());
        let options = TranslationOptions::new().with_density(Density::Light);
        let random = ScriptedRandom::constant(0.0);
        let pass = matcher.apply(SpanText::new("nothing idiomatic here"), &options, &random);

        assert_eq!(pass.text.render(), "nothing idiomatic here");
        assert_eq!(random.floats_drawn(), 0);
    }
}
