//! Input tokenization.
//!
//! Converts a raw command string into an ordered sequence of
//! (category, matched text) tokens via a single forward scan.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use hearth_lexicon::{Category, CompiledLexicon, Lexicon, LexiconError};

/// A recognized word or phrase span.
///
/// The text is the matched substring exactly as it appeared in the input;
/// case is preserved. Tokens are never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    /// The semantic category of the span.
    pub category: Category,
    /// The matched substring, verbatim from the input.
    pub text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, \"{}\")", self.category, self.text)
    }
}

/// Scans command text into tokens using a compiled lexicon.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    lexicon: CompiledLexicon,
}

impl Tokenizer {
    /// Creates a tokenizer from a lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the lexicon fails to compile.
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        Ok(Self {
            lexicon: lexicon.compile()?,
        })
    }

    /// Creates a tokenizer over the standard smart home vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if the built-in vocabulary fails to
    /// compile, which would be a packaging defect rather than a runtime
    /// condition.
    pub fn standard() -> Result<Self, LexiconError> {
        Self::new(&Lexicon::standard())
    }

    /// Tokenizes a command string.
    ///
    /// Scans left to right; at each position the earliest-declared category
    /// whose pattern matches wins, and the cursor advances past the matched
    /// text. Text that matches no pattern (whitespace, punctuation, unknown
    /// words) is skipped silently. Empty input yields an empty sequence.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.lexicon
            .regex()
            .captures_iter(text)
            .filter_map(|caps| {
                self.lexicon
                    .classify(&caps)
                    .map(|(category, m)| Token::new(category, m.as_str()))
            })
            .collect()
    }
}
