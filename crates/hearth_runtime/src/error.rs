//! Error types for the runtime surface.

use thiserror::Error;

use hearth_parser::SetupError;

/// Convenience alias for runtime results.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// A fatal runtime error.
///
/// Invalid commands are not errors; they flow through the analysis result.
/// This type covers startup failures and terminal/file I/O only.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The analysis pipeline failed to build.
    #[error("failed to build analyzer: {0}")]
    Setup(#[from] SetupError),

    /// Reading a command file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(#[from] rustyline::error::ReadlineError),

    /// Serializing an analysis to JSON failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
