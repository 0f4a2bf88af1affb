//! Translation options
//!
//! Density, mode and style are closed sets. Parsing rejects anything outside
//! them, so `translate` itself never has to validate its options.

use crate::error::{TranslatorError, TranslatorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often an eligible match is actually decorated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Light, Density::Medium, Density::Heavy];

    /// Probability that an eligible word token is decorated
    pub fn word_probability(self) -> f64 {
        match self {
            Density::Light => 0.3,
            Density::Medium => 0.6,
            Density::Heavy => 0.9,
        }
    }

    /// Probability that a matched phrase is left untouched
    pub fn phrase_skip_probability(self) -> f64 {
        match self {
            Density::Light => 0.5,
            Density::Medium | Density::Heavy => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Density::Light => "light",
            Density::Medium => "medium",
            Density::Heavy => "heavy",
        }
    }
}

/// Whether the matched text survives next to its emoji
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// "coffee" → "coffee☕"
    #[default]
    Append,
    /// "coffee" → "☕"
    Replace,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Append, Mode::Replace];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Append => "append",
            Mode::Replace => "replace",
        }
    }

    /// Render a matched span according to the mode
    ///
    /// `matched` is the text exactly as it was captured from the input, so
    /// append mode keeps the caller's casing.
    pub fn render(self, matched: &str, emoji: &str) -> String {
        match self {
            Mode::Append => format!("{}{}", matched, emoji),
            Mode::Replace => emoji.to_string(),
        }
    }
}

/// Modifier set for vocabulary eligibility and repetition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Fun,
    /// Restricts words to a work vocabulary and skips some phrases
    Professional,
    /// Repeats every emoji a random number of times
    Meme,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Fun, Style::Professional, Style::Meme];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Fun => "fun",
            Style::Professional => "professional",
            Style::Meme => "meme",
        }
    }
}

macro_rules! impl_option_parsing {
    ($ty:ty, $kind:literal) => {
        impl FromStr for $ty {
            type Err = TranslatorError;

            fn from_str(value: &str) -> TranslatorResult<Self> {
                let normalized = value.trim().to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| TranslatorError::InvalidOption {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_option_parsing!(Density, "density");
impl_option_parsing!(Mode, "mode");
impl_option_parsing!(Style, "style");

/// Options for a single `translate` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOptions {
    #[serde(default)]
    pub density: Density,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub style: Style,
    /// Append one emoji for the detected sentiment of the input
    #[serde(default)]
    pub add_sentiment: bool,
}

impl TranslationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_sentiment(mut self, add_sentiment: bool) -> Self {
        self.add_sentiment = add_sentiment;
        self
    }
}
