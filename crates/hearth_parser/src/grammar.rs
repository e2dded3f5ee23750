//! Command kinds and their expected shapes.
//!
//! The grammar is a closed set of five rigid templates, one per command
//! kind. Each kind is keyed by the literal leading keyword of the command
//! and maps to the exact category sequence a valid command must produce.
//! There are no optional elements and no repetition.

use std::fmt;

use hearth_lexicon::Category;

/// One of the five supported command kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// "on SENSOR detected then OPERATION DEVICE"
    EventTrigger,
    /// "schedule OPERATION DEVICE at TIME"
    ScheduledAction,
    /// "if SENSOR OPERATOR NUMBER then OPERATION DEVICE"
    Conditional,
    /// "repeat OPERATION SENSOR every TIME_INTERVAL"
    PeriodicLoop,
    /// "activate MODE from TIME to TIME"
    ModeWindow,
}

impl CommandKind {
    /// All command kinds in declaration order.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::EventTrigger,
        CommandKind::ScheduledAction,
        CommandKind::Conditional,
        CommandKind::PeriodicLoop,
        CommandKind::ModeWindow,
    ];

    /// The literal leading keyword that selects this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            CommandKind::EventTrigger => "on",
            CommandKind::ScheduledAction => "schedule",
            CommandKind::Conditional => "if",
            CommandKind::PeriodicLoop => "repeat",
            CommandKind::ModeWindow => "activate",
        }
    }

    /// The exact category sequence a valid command of this kind produces.
    #[must_use]
    pub const fn expected(self) -> &'static [Category] {
        match self {
            CommandKind::EventTrigger => &[
                Category::Event,
                Category::Sensor,
                Category::Detected,
                Category::Then,
                Category::Operation,
                Category::Device,
            ],
            CommandKind::ScheduledAction => &[
                Category::Event,
                Category::Operation,
                Category::Device,
                Category::At,
                Category::Time,
            ],
            CommandKind::Conditional => &[
                Category::Event,
                Category::Sensor,
                Category::Operator,
                Category::Number,
                Category::Then,
                Category::Operation,
                Category::Device,
            ],
            CommandKind::PeriodicLoop => &[
                Category::Event,
                Category::Operation,
                Category::Sensor,
                Category::Every,
                Category::TimeInterval,
            ],
            CommandKind::ModeWindow => &[
                Category::Event,
                Category::Mode,
                Category::FromTo,
                Category::Time,
                Category::FromTo,
                Category::Time,
            ],
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A grammar rule: a command kind and its required category sequence.
#[derive(Clone, Copy, Debug)]
pub struct GrammarRule {
    /// The command kind this rule covers.
    pub kind: CommandKind,
    /// The required category sequence.
    pub expected: &'static [Category],
}

/// The ordered table of grammar rules, one per command kind.
#[derive(Clone, Debug)]
pub struct GrammarTable {
    rules: Vec<GrammarRule>,
}

impl GrammarTable {
    /// The standard table covering all five command kinds.
    #[must_use]
    pub fn standard() -> Self {
        let rules = CommandKind::ALL
            .iter()
            .map(|&kind| GrammarRule {
                kind,
                expected: kind.expected(),
            })
            .collect();
        Self { rules }
    }

    /// Returns the rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// Selects the rule for a command's literal leading word.
    ///
    /// The comparison is case-sensitive: the tokenizer preserves input
    /// case, and only the exact lowercase keywords select a rule.
    #[must_use]
    pub fn rule_for(&self, leading: &str) -> Option<&GrammarRule> {
        self.rules.iter().find(|rule| rule.kind.keyword() == leading)
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        Self::standard()
    }
}
