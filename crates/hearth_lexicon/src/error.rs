//! Error types for lexicon configuration.
//!
//! Uses `thiserror` for ergonomic error definition. These errors surface
//! only at startup, when the lexicon is compiled; scanning itself never
//! fails.

use thiserror::Error;

use crate::category::Category;

/// A fatal lexicon configuration error.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A recognition rule's pattern failed to compile.
    #[error("invalid recognition pattern for {category}: {source}")]
    BadPattern {
        /// The category whose pattern is malformed.
        category: Category,
        /// The underlying regex error.
        source: regex::Error,
    },

    /// The combined alternation failed to compile.
    #[error("combined lexicon regex failed to compile: {0}")]
    BadAlternation(#[from] regex::Error),
}
