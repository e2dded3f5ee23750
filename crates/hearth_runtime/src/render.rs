//! Rendering analyses for terminal and machine consumption.

use std::fmt::Write as _;

use hearth_parser::Analysis;

use crate::error::Result;

/// Renders an analysis as human-readable text.
///
/// Mirrors the shape of the batch driver's output: the command, its token
/// sequence, the diagnostic when the command is invalid, and the verdict.
/// With `color` set, the verdict line is ANSI-colored.
#[must_use]
pub fn render_text(analysis: &Analysis, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Command: {}", analysis.input);

    let tokens = analysis
        .tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "Tokens: [{tokens}]");

    if analysis.validation.valid {
        if color {
            let _ = writeln!(out, "Validation: \x1b[32m{}\x1b[0m", analysis.validation.message);
        } else {
            let _ = writeln!(out, "Validation: {}", analysis.validation.message);
        }
    } else {
        if let Some(diagnostic) = &analysis.diagnostic {
            let _ = writeln!(out, "{diagnostic}");
        }
        if color {
            let _ = writeln!(out, "Validation: \x1b[31mInvalid command.\x1b[0m");
        } else {
            let _ = writeln!(out, "Validation: Invalid command.");
        }
    }

    out
}

/// Renders an analysis as a single JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string(analysis)?)
}
