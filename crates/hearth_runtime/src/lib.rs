//! REPL and CLI for the Hearth command engine.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-analyze-print loop
//! - [`render`] - Text and JSON rendering of analyses
//! - [`demo`] - The canonical example commands
//! - CLI argument parsing and batch execution (see the `hearth` binary)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod demo;
pub mod editor;
pub mod error;
pub mod render;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use error::{Result, RuntimeError};
pub use repl::Repl;
