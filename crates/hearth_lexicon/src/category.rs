//! Semantic categories for command words.
//!
//! A category is a tag assigned to a recognized word or phrase span, such as
//! a sensor name or a clock time. The set is closed and fixed for the
//! lifetime of the process.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A semantic tag for a recognized word or phrase.
///
/// Variant order here is the canonical declaration order used by the
/// scanner to break ties between overlapping vocabulary. `Time` must stay
/// ahead of `Number` so that clock text like "6:00" is not shredded into
/// bare digits, and `Sensor` must stay ahead of `Device` so that "door"
/// reads as a sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Category {
    /// Command-leading keyword ("on", "schedule", "if", "repeat", "activate").
    Event,
    /// Sensor name ("motion", "temperature", ...).
    Sensor,
    /// Device name ("lights", "AC", ...).
    Device,
    /// Action verb ("turn on", "open", ...).
    Operation,
    /// Named mode ("night mode", ...).
    Mode,
    /// Clock time ("6:00 AM").
    Time,
    /// Duration ("10 minutes").
    TimeInterval,
    /// Bare number.
    Number,
    /// Comparison operator.
    Operator,
    /// The "then" keyword.
    Then,
    /// The "from" / "to" keywords.
    FromTo,
    /// The "detected" keyword.
    Detected,
    /// The "at" keyword.
    At,
    /// The "every" keyword.
    Every,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 14] = [
        Category::Event,
        Category::Sensor,
        Category::Device,
        Category::Operation,
        Category::Mode,
        Category::Time,
        Category::TimeInterval,
        Category::Number,
        Category::Operator,
        Category::Then,
        Category::FromTo,
        Category::Detected,
        Category::At,
        Category::Every,
    ];

    /// Returns the canonical uppercase name of this category.
    ///
    /// Also used as the named capture group for this category in the
    /// compiled scan regex, so every name must be a valid regex group
    /// identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Event => "EVENT",
            Category::Sensor => "SENSOR",
            Category::Device => "DEVICE",
            Category::Operation => "OPERATION",
            Category::Mode => "MODE",
            Category::Time => "TIME",
            Category::TimeInterval => "TIME_INTERVAL",
            Category::Number => "NUMBER",
            Category::Operator => "OPERATOR",
            Category::Then => "THEN",
            Category::FromTo => "FROM_TO",
            Category::Detected => "DETECTED",
            Category::At => "AT",
            Category::Every => "EVERY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
