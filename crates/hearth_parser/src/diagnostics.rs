//! Diagnostic heuristics for invalid commands.
//!
//! When validation fails, an ordered checklist of known mistakes runs
//! against the raw text and token sequence. Only the first applicable
//! message is returned; the order is a priority list, not independent
//! rules. Some checks read the raw string and some read tokens; this mix
//! is deliberate and behaviorally load-bearing for the priority order.

use regex::Regex;

use hearth_lexicon::Category;

use crate::error::SetupError;
use crate::tokenizer::Token;

/// Explains why an invalid command failed, via a fixed priority checklist.
#[derive(Clone, Debug)]
pub struct DiagnosticClassifier {
    /// Any H:MM or HH:MM followed by "PM", anywhere in the text.
    loose_pm: Regex,
    /// The stricter form requiring minutes in 00-59, anchored at the start
    /// of the whole string. Checked against the full raw text, not the
    /// matched time substring.
    strict_pm: Regex,
}

impl DiagnosticClassifier {
    /// Creates the classifier, compiling its time-format patterns.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if a pattern fails to compile. This is a
    /// startup-time condition.
    pub fn new() -> Result<Self, SetupError> {
        Ok(Self {
            loose_pm: Regex::new(r"\d{1,2}:\d{2} PM")?,
            strict_pm: Regex::new(r"^(\d{1,2}):([0-5][0-9]) PM")?,
        })
    }

    /// Returns the first applicable explanation for an invalid command.
    ///
    /// The checklist runs in declaration order and stops at the first hit,
    /// even when several conditions hold simultaneously. Falls back to a
    /// generic message when nothing fires.
    #[must_use]
    pub fn diagnose(&self, raw: &str, tokens: &[Token]) -> String {
        // "when" used in place of "on".
        if raw.contains("when") {
            return "Error: 'when' is not a valid keyword. Correct syntax: \
                    'on motion detected then turn on lights'."
                .to_string();
        }

        // Conditional without a "then" clause.
        if raw.contains("if") && !tokens.iter().any(|t| t.category == Category::Then) {
            return "Error: The 'then' keyword is required before 'start AC'.".to_string();
        }

        // "open" applied to a lights device.
        let opens = tokens
            .iter()
            .any(|t| t.category == Category::Operation && t.text.eq_ignore_ascii_case("open"));
        let lights = tokens.iter().any(|t| {
            t.category == Category::Device && t.text.to_ascii_lowercase().contains("light")
        });
        if opens && lights {
            return "Error: 'open lights' is not a valid action. The correct operation is \
                    'turn on lights'."
                .to_string();
        }

        // PM time whose minutes fall outside 00-59. The strict form is
        // anchored at the start of the whole string, not scoped to the
        // time substring.
        if raw.contains("PM") && self.loose_pm.is_match(raw) && !self.strict_pm.is_match(raw) {
            return "Error: Minutes must be between 00-59.".to_string();
        }

        // Mode activation without its "from"/"to" window.
        if !raw.contains("from") || !raw.contains("to") {
            return "Error: The 'from' and 'to' keywords are missing. Correct syntax: \
                    'activate silent mode from 10 PM to 6 AM'."
                .to_string();
        }

        "Error: Invalid command.".to_string()
    }
}
