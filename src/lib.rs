//! Hearth - Smart home command engine
//!
//! This crate re-exports all layers of the Hearth system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: hearth_runtime — REPL, CLI, rendering
//! Layer 1: hearth_parser  — Tokenizer, grammar, validation, diagnostics
//! Layer 0: hearth_lexicon — Categories, recognition rules, scan regex
//! ```

pub use hearth_lexicon as lexicon;
pub use hearth_parser as parser;
pub use hearth_runtime as runtime;
