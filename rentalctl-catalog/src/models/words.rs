//! Title word search
//!
//! Words are matched as whole space-delimited tokens, ignoring case.
//! Each word is escaped, so regex metacharacters match literally.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::ValidationError;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace regex"));

/// Non-empty list of words to look for in film titles
#[derive(Debug, Clone)]
pub struct TitleWords {
    words: Vec<String>,
    pattern: String,
    matcher: Regex,
}

impl TitleWords {
    /// Validate the word list and build its search pattern.
    ///
    /// # Rules
    /// - At least one word
    /// - No blank words (surrounding whitespace is trimmed, inner runs collapse to one space)
    pub fn new<I, S>(words: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| WHITESPACE_RE.replace_all(w.as_ref().trim(), " ").into_owned())
            .collect();

        if words.is_empty() {
            return Err(ValidationError::Empty { field: "words" });
        }
        if words.iter().any(String::is_empty) {
            return Err(ValidationError::Empty { field: "word" });
        }

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("(?:^| )(?:{})+(?:$| )", alternation);

        let matcher = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ValidationError::InvalidPattern {
                reason: e.to_string(),
            })?;

        Ok(Self {
            words,
            pattern,
            matcher,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pattern sent to PostgreSQL's case-insensitive `~*` operator.
    ///
    /// Only escapes and constructs that mean the same thing in PostgreSQL
    /// advanced regular expressions are emitted.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Evaluate the pattern locally.
    ///
    /// Agrees with the database for ASCII titles. Non-ASCII letters are
    /// folded with Unicode case rules here, while `~*` folds them according
    /// to the server's `LC_CTYPE`, so `café` may match `CAFÉ` locally but not
    /// in PostgreSQL.
    pub fn matches(&self, title: &str) -> bool {
        self.matcher.is_match(title)
    }
}
