//! Integration tests for the hearth_parser crate.
//!
//! Tests for the command analysis pipeline:
//! - Tokenization
//! - Grammar validation
//! - Diagnostic heuristics and their priority order
//! - Full pipeline behavior
//! - Property-based invariants

mod analyzer_tests;
mod tokenizer_tests;
mod validator_tests;
