//! Sentiment classification and the sentiment emoji bank
//!
//! The classifier is a keyword count: each positive and each negative keyword
//! found anywhere in the lowercased text scores one point for its side, so
//! inflections like "failed" or "lovely" count too. The larger side wins and a
//! tie, including zero to zero, is neutral. There is no negation handling and
//! no weighting.

use crate::builtin;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentClassifier {
    pub fn new(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|w| w.to_lowercase()).collect(),
            negative: negative.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// (positive, negative) keyword hits; each keyword counts at most once
    pub fn score(&self, text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        let hits = |keywords: &HashSet<String>| {
            keywords
                .iter()
                .filter(|k| lowered.contains(k.as_str()))
                .count()
        };
        let positive = hits(&self.positive);
        let negative = hits(&self.negative);
        (positive, negative)
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        let (positive, negative) = self.score(text);
        if positive > negative {
            Sentiment::Positive
        } else if negative > positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(builtin::POSITIVE_KEYWORDS, builtin::NEGATIVE_KEYWORDS)
    }
}

/// Candidate emoji per sentiment category, each non-empty
#[derive(Debug, Clone)]
pub struct SentimentBank {
    positive: Vec<String>,
    negative: Vec<String>,
    neutral: Vec<String>,
}

impl SentimentBank {
    pub fn emojis(&self, sentiment: Sentiment) -> &[String] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    pub fn pick(&self, sentiment: Sentiment, random: &dyn RandomSource) -> Option<&str> {
        random.choose(self.emojis(sentiment)).map(String::as_str)
    }
}

impl Default for SentimentBank {
    fn default() -> Self {
        let owned = |emojis: &[&str]| -> Vec<String> { emojis.iter().map(|e| e.to_string()).collect() };
        Self {
            positive: owned(builtin::POSITIVE_EMOJI),
            negative: owned(builtin::NEGATIVE_EMOJI),
            neutral: owned(builtin::NEUTRAL_EMOJI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;

    #[test]
    fn test_classify_positive() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("This is absolutely amazing and wonderful!"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_classify_negative() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("I'm frustrated and disappointed with this terrible situation."),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_classify_neutral_without_hits() {
        let classifier = SentimentClassifier::default();
        let text = "The weather is okay and the meeting is scheduled for tomorrow.";
        assert_eq!(classifier.score(text), (0, 0));
        assert_eq!(classifier.classify(text), Sentiment::Neutral);
    }

    #[test]
    fn test_classify_tie_is_neutral() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify("good but bad"), Sentiment::Neutral);
        assert_eq!(classifier.classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_keywords_count_once_and_ignore_case() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.score("GREAT great Great, but terrible"), (1, 1));
    }

    #[test]
    fn test_inflected_keywords_count() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("The build failed and there are problems everywhere"),
            Sentiment::Negative
        );
        assert_eq!(classifier.score("The build failed and there are problems everywhere"), (0, 2));
        assert_eq!(classifier.classify("What a lovely morning"), Sentiment::Positive);
        assert_eq!(classifier.classify("I hated it"), Sentiment::Negative);
    }

    #[test]
    fn test_no_negation_handling() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify("not good at all"), Sentiment::Positive);
    }

    #[test]
    fn test_bank_pick() {
        let bank = SentimentBank::default();
        let random = ScriptedRandom::new(Vec::new(), vec![1]);
        assert_eq!(bank.pick(Sentiment::Positive, &random), Some("😄"));
        for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
            assert!(!bank.emojis(sentiment).is_empty());
        }
    }
}
