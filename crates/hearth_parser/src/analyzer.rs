//! Full analysis pipeline.
//!
//! Orchestrates tokenization, validation, and diagnostics for one command
//! string. The pipeline holds only read-only state after construction and
//! is safe to share across threads.

#[cfg(feature = "serde")]
use serde::Serialize;

use hearth_lexicon::Lexicon;

use crate::diagnostics::DiagnosticClassifier;
use crate::error::SetupError;
use crate::tokenizer::{Token, Tokenizer};
use crate::validator::{Validation, Validator};

/// The result of analyzing one command string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    /// The raw input.
    pub input: String,
    /// The token sequence in input order.
    pub tokens: Vec<Token>,
    /// The validation outcome.
    pub validation: Validation,
    /// The diagnostic explanation; present exactly when validation failed.
    pub diagnostic: Option<String>,
}

/// The full tokenize / validate / diagnose pipeline.
#[derive(Clone, Debug)]
pub struct CommandAnalyzer {
    tokenizer: Tokenizer,
    validator: Validator,
    diagnostics: DiagnosticClassifier,
}

impl CommandAnalyzer {
    /// Creates an analyzer over the standard vocabulary and grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, SetupError> {
        Self::with_lexicon(&Lexicon::standard())
    }

    /// Creates an analyzer over a caller-supplied lexicon.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the lexicon or a diagnostic pattern fails
    /// to compile.
    pub fn with_lexicon(lexicon: &Lexicon) -> Result<Self, SetupError> {
        Ok(Self {
            tokenizer: Tokenizer::new(lexicon)?,
            validator: Validator::standard(),
            diagnostics: DiagnosticClassifier::new()?,
        })
    }

    /// Returns the tokenizer.
    #[must_use]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenizes a command string without validating it.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.tokenizer.tokenize(input)
    }

    /// Runs the full pipeline over one command string.
    ///
    /// Tokenizes, validates, and, when validation fails, attaches the
    /// first applicable diagnostic. Each call is independent; no state
    /// carries over between commands.
    #[must_use]
    pub fn analyze(&self, input: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(input);
        let validation = self.validator.validate(&tokens);
        let diagnostic = if validation.valid {
            None
        } else {
            Some(self.diagnostics.diagnose(input, &tokens))
        };

        Analysis {
            input: input.to_string(),
            tokens,
            validation,
            diagnostic,
        }
    }
}
