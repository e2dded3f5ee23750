//! Recognition rules and the combined scan regex.
//!
//! A [`Lexicon`] is an ordered list of (category, pattern) pairs. Compiling
//! it produces a single case-insensitive alternation with one named capture
//! group per category. Because the `regex` crate resolves alternations
//! leftmost-first, a pattern declared earlier always beats a later pattern
//! that matches at the same position.

use regex::{Captures, Match, Regex, RegexBuilder};

use crate::category::Category;
use crate::error::LexiconError;

/// One recognition rule: a category and the regex fragment matching it.
#[derive(Clone, Debug)]
pub struct RecognitionRule {
    /// The category this rule recognizes.
    pub category: Category,
    /// Unanchored regex fragment, matched case-insensitively.
    pub pattern: String,
}

impl RecognitionRule {
    /// Creates a new recognition rule.
    pub fn new(category: Category, pattern: impl Into<String>) -> Self {
        Self {
            category,
            pattern: pattern.into(),
        }
    }
}

/// The ordered set of recognition rules for the command vocabulary.
#[derive(Clone, Debug)]
pub struct Lexicon {
    rules: Vec<RecognitionRule>,
}

impl Lexicon {
    /// The standard smart home vocabulary, in declaration order.
    ///
    /// TIME sits ahead of NUMBER so that "6:00" never tokenizes as bare
    /// digits, and SENSOR sits ahead of DEVICE so that "door" reads as a
    /// sensor.
    #[must_use]
    pub fn standard() -> Self {
        let rules = vec![
            RecognitionRule::new(Category::Event, r"on|schedule|if|repeat|activate"),
            RecognitionRule::new(Category::Sensor, r"motion|temperature|humidity|door|sound"),
            RecognitionRule::new(
                Category::Device,
                r"lights|AC|fan|door|alarm|sprinkler|watering",
            ),
            RecognitionRule::new(
                Category::Operation,
                r"turn on|turn off|increase|decrease|open|close|start|check",
            ),
            RecognitionRule::new(Category::Mode, r"night mode|vacation mode|silent mode"),
            RecognitionRule::new(Category::Time, r"\d{1,2}:\d{2} (?:AM|PM)"),
            RecognitionRule::new(Category::TimeInterval, r"\d+ (?:seconds|minutes|hours)"),
            RecognitionRule::new(Category::Number, r"\d+"),
            RecognitionRule::new(Category::Operator, r">|<|>=|<=|=="),
            RecognitionRule::new(Category::Then, r"then"),
            RecognitionRule::new(Category::FromTo, r"from|to"),
            RecognitionRule::new(Category::Detected, r"detected"),
            RecognitionRule::new(Category::At, r"at"),
            RecognitionRule::new(Category::Every, r"every"),
        ];
        Self { rules }
    }

    /// Creates a lexicon from an explicit rule list.
    ///
    /// Rule order is preserved and determines scan precedence.
    #[must_use]
    pub fn from_rules(rules: Vec<RecognitionRule>) -> Self {
        Self { rules }
    }

    /// Returns the recognition rules exactly as declared.
    #[must_use]
    pub fn categories(&self) -> &[RecognitionRule] {
        &self.rules
    }

    /// Compiles the rules into a single order-preserving scan regex.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError`] if any pattern is malformed. This is a
    /// startup-time fatal condition; a compiled lexicon never fails during
    /// scanning.
    pub fn compile(&self) -> Result<CompiledLexicon, LexiconError> {
        // Compile each fragment alone first so the error names the rule.
        for rule in &self.rules {
            Regex::new(&rule.pattern).map_err(|source| LexiconError::BadPattern {
                category: rule.category,
                source,
            })?;
        }

        let alternation = self
            .rules
            .iter()
            .map(|rule| format!("(?P<{}>{})", rule.category.name(), rule.pattern))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;
        let order = self.rules.iter().map(|rule| rule.category).collect();

        Ok(CompiledLexicon { regex, order })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

/// A compiled lexicon: the combined regex plus declaration order.
#[derive(Clone, Debug)]
pub struct CompiledLexicon {
    regex: Regex,
    order: Vec<Category>,
}

impl CompiledLexicon {
    /// Returns the combined scan regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Resolves a capture set to the earliest-declared category that
    /// participated in the match, along with its matched span.
    #[must_use]
    pub fn classify<'t>(&self, caps: &Captures<'t>) -> Option<(Category, Match<'t>)> {
        self.order
            .iter()
            .find_map(|&category| caps.name(category.name()).map(|m| (category, m)))
    }
}
