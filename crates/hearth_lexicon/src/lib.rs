//! Semantic categories and recognition rules for Hearth commands.
//!
//! This crate provides:
//! - [`Category`] - The closed set of semantic tags a word span can carry
//! - [`Lexicon`] - The ordered list of recognition rules (category + pattern)
//! - [`CompiledLexicon`] - The combined, order-preserving scan regex
//! - [`LexiconError`] - Startup-time configuration errors
//!
//! Category declaration order is load-bearing: when several patterns could
//! match at the same scan position, the first-declared category wins. See
//! [`Category::ALL`] for the canonical order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod lexicon;

pub use category::Category;
pub use error::LexiconError;
pub use lexicon::{CompiledLexicon, Lexicon, RecognitionRule};
