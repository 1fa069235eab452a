//! Ordered decision tables.
//!
//! A table is a slice of rules evaluated top to bottom; the first rule whose
//! condition holds decides the outcome. Keeping the tables as `static` data
//! makes the priority order visible in one place and testable on its own.

use crate::analytics::Thresholds;
use crate::models::Recommendation;

/// One row of a decision table over a subject of type `C`.
pub struct DecisionRule<C> {
    /// Stable identifier for the rule, used in logs and tests.
    pub tag: &'static str,
    pub condition: fn(&C, &Thresholds) -> bool,
    /// Recommendation emitted when the rule fires. `None` means the rule
    /// matches but intentionally produces nothing.
    pub action: fn(&C, &Thresholds) -> Option<Recommendation>,
}

/// Find the first rule whose condition holds for `subject`.
pub fn first_match<'t, C>(
    table: &'t [DecisionRule<C>],
    subject: &C,
    thresholds: &Thresholds,
) -> Option<&'t DecisionRule<C>> {
    table
        .iter()
        .find(|rule| (rule.condition)(subject, thresholds))
}

/// Evaluate a table, returning the matching rule's tag and its output.
pub fn evaluate<C>(
    table: &[DecisionRule<C>],
    subject: &C,
    thresholds: &Thresholds,
) -> Option<(&'static str, Option<Recommendation>)> {
    first_match(table, subject, thresholds).map(|rule| {
        tracing::debug!(rule = rule.tag, "decision rule matched");
        (rule.tag, (rule.action)(subject, thresholds))
    })
}

/// Condition that always holds; used for fallback rows.
pub fn always<C>(_: &C, _: &Thresholds) -> bool {
    true
}

/// Action that emits nothing.
pub fn nothing<C>(_: &C, _: &Thresholds) -> Option<Recommendation> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[DecisionRule<i32>] = &[
        DecisionRule {
            tag: "negative",
            condition: |n, _| *n < 0,
            action: |_, _| Some(Recommendation::warning("Negative", "below zero")),
        },
        DecisionRule {
            tag: "small",
            condition: |n, _| *n < 10,
            action: |_, _| Some(Recommendation::normal("Small", "under ten")),
        },
        DecisionRule {
            tag: "fallback",
            condition: always,
            action: nothing,
        },
    ];

    #[test]
    fn test_first_match_wins() {
        // -5 satisfies both "negative" and "small"; order decides.
        let (tag, rec) = evaluate(TABLE, &-5, &Thresholds::default()).unwrap();
        assert_eq!(tag, "negative");
        assert_eq!(rec.unwrap().title, "Negative");
    }

    #[test]
    fn test_fallback_produces_nothing() {
        let (tag, rec) = evaluate(TABLE, &42, &Thresholds::default()).unwrap();
        assert_eq!(tag, "fallback");
        assert!(rec.is_none());
    }

    #[test]
    fn test_empty_table() {
        let empty: &[DecisionRule<i32>] = &[];
        assert!(first_match(empty, &1, &Thresholds::default()).is_none());
    }
}
