//! Text normalization for the classifier and keyword scanners.
//!
//! Raw complaint text is lowercased, stripped of punctuation, split on
//! whitespace, and filtered against the configured stopword list. Title
//! tokens are emitted twice so title words are at least as salient as body
//! words. Empty input yields an empty token list; the downstream stages
//! treat that as "insufficient signal" rather than an error.

use std::collections::HashSet;

/// Normalized complaint text: ordered tokens plus the joined form used for
/// multi-word keyword matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    tokens: Vec<String>,
    joined: String,
}

impl NormalizedText {
    /// The ordered token sequence.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Title and body token text, space-joined within each segment and
    /// newline-separated between them. Phrases never match across the
    /// segment boundary.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// True when normalization produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks whether a keyword occurs in this text.
    ///
    /// Single-word keywords match whole tokens (with a naive plural match),
    /// multi-word keywords match consecutive tokens. Substrings inside other
    /// words never match, so "bus" does not fire on "busy".
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        if keyword.contains(' ') {
            self.contains_phrase(keyword)
        } else {
            self.tokens
                .iter()
                .any(|t| t == keyword || t.strip_suffix('s') == Some(keyword))
        }
    }

    /// Number of keywords from the list present in this text.
    pub fn count_hits(&self, keywords: &[String]) -> usize {
        keywords
            .iter()
            .filter(|kw| self.contains_keyword(kw))
            .count()
    }

    fn contains_phrase(&self, phrase: &str) -> bool {
        self.joined.split('\n').any(|segment| {
            segment == phrase
                || segment.starts_with(&format!("{phrase} "))
                || segment.ends_with(&format!(" {phrase}"))
                || segment.contains(&format!(" {phrase} "))
        })
    }
}

/// Tokenizer configured with a stopword list.
pub struct TextNormalizer {
    stopwords: HashSet<String>,
}

impl TextNormalizer {
    /// Creates a normalizer from the configured stopword list.
    pub fn new(stopwords: &[String]) -> Self {
        Self {
            stopwords: stopwords.iter().cloned().collect(),
        }
    }

    /// Normalizes a complaint's title and description into tokens.
    ///
    /// Title tokens are emitted twice, ahead of body tokens. The joined form
    /// keeps the title and body as separate segments so a multi-word keyword
    /// cannot match across the title repetition or the title/body boundary.
    pub fn normalize(&self, title: &str, description: &str) -> NormalizedText {
        let title_tokens = self.tokenize(title);
        let body_tokens = self.tokenize(description);

        let joined = match (title_tokens.is_empty(), body_tokens.is_empty()) {
            (true, true) => String::new(),
            (false, true) => title_tokens.join(" "),
            (true, false) => body_tokens.join(" "),
            (false, false) => format!("{}\n{}", title_tokens.join(" "), body_tokens.join(" ")),
        };

        let mut tokens = Vec::with_capacity(title_tokens.len() * 2 + body_tokens.len());
        tokens.extend(title_tokens.iter().cloned());
        tokens.extend(title_tokens);
        tokens.extend(body_tokens);

        NormalizedText { tokens, joined }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty() && !self.stopwords.contains(*t))
            .map(str::to_string)
            .collect()
    }
}
