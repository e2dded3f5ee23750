//! Tokenizer, grammar validation, and diagnostics for Hearth commands.
//!
//! This crate turns a smart home sentence like "on motion detected then
//! turn on lights" into a token sequence, checks that sequence against one
//! of five rigid command shapes, and explains failures.
//!
//! # Architecture
//!
//! ```text
//! "if temperature > 30 then turn on AC"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [EVENT "if", SENSOR "temperature", OPERATOR ">", ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → leading word "if" selects the conditional shape:
//! │ SELECTION       │    EVENT SENSOR OPERATOR NUMBER THEN OPERATION DEVICE
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VALIDATION      │  → exact-order, exact-length category comparison
//! └─────────────────┘
//!          │ (invalid only)
//!          ▼
//! ┌─────────────────┐
//! │ DIAGNOSTICS     │  → first applicable heuristic explains the mistake
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to a token sequence
//! - [`grammar`] - The five command kinds and their expected shapes
//! - [`validator`] - Exact-sequence syntax validation
//! - [`diagnostics`] - Ordered heuristic checklist for invalid commands
//! - [`analyzer`] - Full pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod grammar;
pub mod tokenizer;
pub mod validator;

pub use analyzer::{Analysis, CommandAnalyzer};
pub use diagnostics::DiagnosticClassifier;
pub use error::SetupError;
pub use grammar::{CommandKind, GrammarRule, GrammarTable};
pub use tokenizer::{Token, Tokenizer};
pub use validator::{Validation, Validator};
