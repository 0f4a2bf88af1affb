//! Span model shared by the matchers
//!
//! Text moves through the pipeline as a sequence of spans. A span is either
//! still open for matching or already consumed by a replacement. Matchers
//! only ever scan open spans and emit new buffers, so a later lookup can
//! never land inside text an earlier one produced.

use regex::Regex;
use std::sync::LazyLock;

/// Alphanumeric runs; everything between them is left as it is
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("token pattern is valid"));

/// Tokens of `text` with their byte ranges
pub fn tokens(text: &str) -> impl Iterator<Item = regex::Match<'_>> {
    TOKEN.find_iter(text)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    /// Consumed spans are emitted verbatim and never rescanned
    pub consumed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanText {
    spans: Vec<Span>,
}

impl SpanText {
    pub fn new(text: &str) -> Self {
        let mut spans = Self::default();
        spans.push_open(text);
        spans
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Open spans, in order
    pub fn open_spans(&self) -> impl Iterator<Item = &str> {
        self.spans
            .iter()
            .filter(|span| !span.consumed)
            .map(|span| span.text.as_str())
    }

    pub fn push_open(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if !last.consumed => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                consumed: false,
            }),
        }
    }

    pub fn push_consumed(&mut self, text: String) {
        self.spans.push(Span {
            text,
            consumed: true,
        });
    }

    /// Rebuild every open span through `rewrite`, keeping consumed spans as
    /// they are. `rewrite` receives one open span and the output buffer.
    pub fn rewrite_open(self, mut rewrite: impl FnMut(&str, &mut SpanText)) -> SpanText {
        let mut output = SpanText::default();
        for span in self.spans {
            if span.consumed {
                output.spans.push(span);
            } else {
                rewrite(&span.text, &mut output);
            }
        }
        output
    }

    pub fn render(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_alphanumeric_runs() {
        let found: Vec<&str> = tokens("It's 9am, café-time!").map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["It", "s", "9am", "café", "time"]);
    }

    #[test]
    fn test_open_spans_merge() {
        let mut text = SpanText::default();
        text.push_open("hello ");
        text.push_open("world");
        assert_eq!(text.spans().len(), 1);

        text.push_consumed("🌍".to_string());
        text.push_open("!");
        assert_eq!(text.spans().len(), 3);
        assert_eq!(text.render(), "hello world🌍!");
        assert_eq!(text.open_spans().collect::<Vec<_>>(), vec!["hello world", "!"]);
    }

    #[test]
    fn test_rewrite_skips_consumed() {
        let mut text = SpanText::new("a ");
        text.push_consumed("a".to_string());
        text.push_open(" a");

        let rewritten = text.rewrite_open(|open, out| out.push_open(&open.replace('a', "b")));
        assert_eq!(rewritten.render(), "b a b");
    }

    #[test]
    fn test_empty_text() {
        let text = SpanText::new("");
        assert!(text.spans().is_empty());
        assert_eq!(text.render(), "");
    }
}
