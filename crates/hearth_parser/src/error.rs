//! Error types for parser construction.
//!
//! Validation failures are ordinary return values, never errors; the only
//! fallible step is compiling the fixed patterns at startup.

use thiserror::Error;

use hearth_lexicon::LexiconError;

/// A fatal error while building the analysis pipeline.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The lexicon failed to compile.
    #[error("lexicon failed to compile: {0}")]
    Lexicon(#[from] LexiconError),

    /// A diagnostic heuristic's pattern failed to compile.
    #[error("diagnostic pattern failed to compile: {0}")]
    DiagnosticPattern(#[from] regex::Error),
}
