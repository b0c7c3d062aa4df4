//! Conditional formatting
//!
//! Rules pair a predicate with a style. Styles are never stored on the
//! cells themselves: callers ask [`RuleSet::style_for`] for the computed
//! style of a coordinate whenever they repaint, so rule edits and cell
//! edits take effect with no invalidation step.
//!
//! ## Example
//!
//! ```rust
//! use gridbook_core::{CellStorage, ConditionalRule, RuleSet};
//! use gridbook_core::style::{CellStyle, Color};
//!
//! let mut storage = CellStorage::new();
//! storage.set(0, 0, "150");
//!
//! let mut rules = RuleSet::new();
//! rules.add(
//!     ConditionalRule::greater_than("100")
//!         .with_style(CellStyle::new(Color::rgb(255, 199, 206), Color::BLACK)),
//! );
//!
//! let style = rules.style_for(&storage, 0, 0);
//! assert_eq!(style.background, Some(Color::rgb(255, 199, 206)));
//! ```

use crate::cell::CellStorage;
use crate::style::{CellStyle, ComputedStyle};

/// The condition a rule tests against a cell's raw text
///
/// Thresholds stay string-encoded and are parsed at match time; a numeric
/// predicate simply never matches a cell whose text does not parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Numeric: cell value strictly greater than the threshold
    GreaterThan(String),
    /// Numeric: cell value strictly less than the threshold
    LessThan(String),
    /// Numeric: cell value equal to the threshold
    EqualTo(String),
    /// Numeric: inclusive on both ends
    Between(String, String),
    /// Substring match on the raw text
    TextContains(String),
    /// The same raw text occurs in at least one other cell
    DuplicateValues,
}

impl Predicate {
    /// Test the predicate against a cell's raw text
    ///
    /// `storage` is consulted only by `DuplicateValues`.
    fn matches(&self, text: &str, storage: &CellStorage) -> bool {
        let number = text.trim().parse::<f64>().ok();
        match self {
            Predicate::GreaterThan(threshold) => match (number, threshold.trim().parse::<f64>()) {
                (Some(n), Ok(t)) => n > t,
                _ => false,
            },
            Predicate::LessThan(threshold) => match (number, threshold.trim().parse::<f64>()) {
                (Some(n), Ok(t)) => n < t,
                _ => false,
            },
            Predicate::EqualTo(target) => match (number, target.trim().parse::<f64>()) {
                (Some(n), Ok(t)) => n == t,
                _ => false,
            },
            Predicate::Between(low, high) => {
                match (number, low.trim().parse::<f64>(), high.trim().parse::<f64>()) {
                    (Some(n), Ok(lo), Ok(hi)) => n >= lo && n <= hi,
                    _ => false,
                }
            }
            Predicate::TextContains(needle) => text.contains(needle.as_str()),
            Predicate::DuplicateValues => {
                let mut seen = false;
                for (_, _, other) in storage.iter() {
                    if other.as_str() == text {
                        if seen {
                            return true;
                        }
                        seen = true;
                    }
                }
                false
            }
        }
    }
}

/// A conditional formatting rule
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRule {
    /// The condition to test
    pub predicate: Predicate,
    /// The style applied when the condition matches
    pub style: CellStyle,
}

impl ConditionalRule {
    /// Create a rule with the default highlight style
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            style: CellStyle::default(),
        }
    }

    /// Highlight cells greater than a value
    pub fn greater_than(value: impl Into<String>) -> Self {
        Self::new(Predicate::GreaterThan(value.into()))
    }

    /// Highlight cells less than a value
    pub fn less_than(value: impl Into<String>) -> Self {
        Self::new(Predicate::LessThan(value.into()))
    }

    /// Highlight cells equal to a value
    pub fn equal_to(value: impl Into<String>) -> Self {
        Self::new(Predicate::EqualTo(value.into()))
    }

    /// Highlight cells between two values (inclusive)
    pub fn between(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self::new(Predicate::Between(low.into(), high.into()))
    }

    /// Highlight cells whose text contains a substring
    pub fn contains_text(needle: impl Into<String>) -> Self {
        Self::new(Predicate::TextContains(needle.into()))
    }

    /// Highlight cells whose text appears more than once in the grid
    pub fn duplicate_values() -> Self {
        Self::new(Predicate::DuplicateValues)
    }

    /// Set the style applied on match
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// An ordered collection of conditional formatting rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<ConditionalRule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; rules evaluate in insertion order
    pub fn add(&mut self, rule: ConditionalRule) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[ConditionalRule] {
        &self.rules
    }

    /// Remove all rules
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Check if the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compute the style for a cell by folding all matching rules
    ///
    /// Empty cells never match; rules later in the list overwrite the
    /// style of earlier matches field by field.
    pub fn style_for(&self, storage: &CellStorage, row: u32, col: u32) -> ComputedStyle {
        let mut computed = ComputedStyle::default();

        let Some(text) = storage.get_text(row, col) else {
            return computed;
        };

        for rule in &self.rules {
            if rule.predicate.matches(text.as_str(), storage) {
                computed.apply(&rule.style);
            }
        }

        computed
    }
}
