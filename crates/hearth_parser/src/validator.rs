//! Syntax validation.
//!
//! Compares a token sequence against the grammar rule selected by the
//! command's leading word. Matching is exact-length, exact-order equality;
//! the validator reports pass/fail without localizing the failure.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::grammar::GrammarTable;
use crate::tokenizer::Token;

/// The outcome of syntax validation: a validity flag plus a message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Validation {
    /// Whether the command matched its grammar rule.
    pub valid: bool,
    /// Human-readable explanation of the outcome.
    pub message: String,
}

impl Validation {
    /// A passing validation.
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// A failing validation.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validates token sequences against the grammar table.
#[derive(Clone, Debug, Default)]
pub struct Validator {
    grammar: GrammarTable,
}

impl Validator {
    /// Creates a validator over the given grammar table.
    #[must_use]
    pub fn new(grammar: GrammarTable) -> Self {
        Self { grammar }
    }

    /// Creates a validator over the standard five-rule grammar.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GrammarTable::standard())
    }

    /// Validates a token sequence.
    ///
    /// An empty sequence fails with "Empty command." The literal text of
    /// the first token selects the grammar rule; unknown leading text fails
    /// with "Invalid command start." Otherwise the observed category
    /// sequence must equal the rule's expected sequence exactly.
    #[must_use]
    pub fn validate(&self, tokens: &[Token]) -> Validation {
        let Some(first) = tokens.first() else {
            return Validation::invalid("Empty command.");
        };

        let Some(rule) = self.grammar.rule_for(&first.text) else {
            return Validation::invalid("Invalid command start.");
        };

        let observed: Vec<_> = tokens.iter().map(|t| t.category).collect();
        if observed == rule.expected {
            Validation::valid("Valid command.")
        } else {
            Validation::invalid("Syntax error in command.")
        }
    }
}
