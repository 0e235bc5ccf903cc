//! Sentence assembly: fixed-schema validation and rendering.
//!
//! A [`Sentence`] is one complete query. Its clauses always follow the slot
//! schema
//!
//! ```text
//! [WITH?] SELECT [FROM [JOIN...]]? [WHERE]? [GROUP BY]? [HAVING]? [WINDOW]?
//! [ORDER BY]? [LIMIT]? [OFFSET]? [UNION]? [INTERSECT]? [EXCEPT]?
//! ```
//!
//! Sentences are built either through the staged builder in `presql-query`,
//! which enforces the schema at compile time, or from a positional list of
//! optional clauses via [`Sentence::try_from_clauses`], which checks it at
//! runtime.

use crate::clause::{Clause, ClauseKind, Slot};
use crate::error::{Result, SentenceError, SentenceErrorKind};
use serde::Serialize;
use std::fmt;

/// An ordered, validated collection of clauses forming one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sentence {
    clauses: Vec<Clause>,
}

impl Sentence {
    /// Validate a positional list of optional clauses.
    ///
    /// `None` entries stand for absent slots and are skipped. Clauses are
    /// checked, never re-sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use presql_core::{Clause, ClauseKind, Sentence};
    ///
    /// let sentence = Sentence::try_from_clauses([
    ///     Some(Clause::new(ClauseKind::Head, "SELECT a, b")),
    ///     Some(Clause::new(ClauseKind::Foot, "FROM t")),
    ///     None,
    /// ])
    /// .unwrap();
    /// assert_eq!(sentence.render(), "SELECT a, b FROM t");
    /// ```
    #[tracing::instrument(level = "trace", skip(slots))]
    pub fn try_from_clauses<I>(slots: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Option<Clause>>,
    {
        let mut clauses: Vec<Clause> = Vec::new();
        let mut seen = [false; Slot::ALL.len()];
        let mut last: Option<Slot> = None;
        let mut from_rendered = false;

        for (position, item) in slots.into_iter().enumerate() {
            let Some(clause) = item.into() else {
                continue;
            };
            let kind = clause.kind();
            let Some(slot) = kind.slot() else {
                return Err(reject(SentenceError::misplaced(kind, position)));
            };

            if kind == ClauseKind::Join {
                // An all-omitted FROM renders nothing, so a JOIN cannot attach to it.
                if last != Some(Slot::Foot) || (!from_rendered && !clause.is_empty()) {
                    return Err(reject(SentenceError {
                        kind: SentenceErrorKind::OrderViolation,
                        clause: Some(kind),
                        position: Some(position),
                        message: "JOIN requires a preceding FROM".to_string(),
                    }));
                }
            } else if seen[slot.index()] {
                return Err(reject(SentenceError::duplicate(slot, kind, position)));
            } else if let Some(prev) = last.filter(|prev| slot < *prev) {
                return Err(reject(SentenceError::out_of_order(kind, prev, position)));
            }

            if kind == ClauseKind::Foot {
                from_rendered = !clause.is_empty();
            }
            seen[slot.index()] = true;
            last = Some(slot);
            clauses.push(clause);
        }

        if !seen[Slot::Head.index()] {
            return Err(reject(SentenceError::missing_head()));
        }

        Ok(Self { clauses })
    }

    /// Wrap clauses that are already known to follow the schema.
    ///
    /// Used by the staged builder, whose stage types guarantee ordering.
    #[doc(hidden)]
    pub fn from_validated(clauses: Vec<Clause>) -> Self {
        debug_assert!(
            Self::try_from_clauses(clauses.iter().cloned().map(Some)).is_ok(),
            "clauses violate the sentence schema"
        );
        Self { clauses }
    }

    /// Render the sentence: present, non-empty clauses joined by one space.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render(&self) -> String {
        let sql = self
            .clauses
            .iter()
            .filter(|c| !c.is_empty())
            .map(Clause::render)
            .collect::<Vec<_>>()
            .join(" ");
        tracing::trace!(sql = %sql, clauses = self.clauses.len(), "Rendered sentence");
        sql
    }

    /// All clauses in rendering order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The first clause occupying `slot`, if present.
    pub fn get(&self, slot: Slot) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.slot() == Some(slot))
    }

    /// Whether `slot` is filled.
    pub fn has(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn reject(err: SentenceError) -> crate::Error {
    tracing::debug!(
        kind = ?err.kind,
        clause = ?err.clause,
        position = ?err.position,
        "Rejected sentence: {}",
        err.message
    );
    err.into()
}

/// Validate and render a positional list of optional clauses in one step.
///
/// ```
/// use presql_core::{Clause, ClauseKind, q};
///
/// let sql = q([
///     Some(Clause::new(ClauseKind::Head, "SELECT 1")),
///     None,
///     Some(Clause::new(ClauseKind::Limit, "LIMIT 1")),
/// ])
/// .unwrap();
/// assert_eq!(sql, "SELECT 1 LIMIT 1");
/// ```
pub fn q<I>(slots: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Option<Clause>>,
{
    Sentence::try_from_clauses(slots).map(|s| s.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SentenceErrorKind};

    fn c(kind: ClauseKind, text: &str) -> Clause {
        Clause::new(kind, text)
    }

    fn err_kind(result: Result<Sentence>) -> SentenceErrorKind {
        match result {
            Err(Error::Sentence(e)) => e.kind,
            other => panic!("expected sentence error, got {other:?}"),
        }
    }

    #[test]
    fn renders_present_slots_only() {
        let sentence = Sentence::try_from_clauses([
            Some(c(ClauseKind::Head, "SELECT a")),
            None,
            None,
            Some(c(ClauseKind::Limit, "LIMIT 5")),
        ])
        .unwrap();
        assert_eq!(sentence.render(), "SELECT a LIMIT 5");
    }

    #[test]
    fn empty_clauses_leave_no_gap() {
        let sentence = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
            c(ClauseKind::Conditional, ""),
            c(ClauseKind::Order, "ORDER BY a"),
        ])
        .unwrap();
        assert_eq!(sentence.render(), "SELECT a FROM t ORDER BY a");
    }

    #[test]
    fn full_schema_order() {
        let clauses = vec![
            c(ClauseKind::With, "WITH x AS (SELECT 1)"),
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
            c(ClauseKind::Join, "LEFT JOIN u ON t.id = u.id"),
            c(ClauseKind::Conditional, "WHERE a > 1"),
            c(ClauseKind::GroupBy, "GROUP BY a"),
            c(ClauseKind::Having, "HAVING COUNT(a) > 1"),
            c(ClauseKind::Window, "WINDOW w AS (ORDER BY a)"),
            c(ClauseKind::Order, "ORDER BY a"),
            c(ClauseKind::Limit, "LIMIT 1"),
            c(ClauseKind::Offset, "OFFSET 2"),
            c(ClauseKind::Union, "UNION SELECT 1"),
            c(ClauseKind::Intersect, "INTERSECT SELECT 1"),
            c(ClauseKind::Except, "EXCEPT SELECT 2"),
        ];
        let expected = clauses
            .iter()
            .map(|c| c.render().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let sentence = Sentence::try_from_clauses(clauses).unwrap();
        assert_eq!(sentence.render(), expected);
        assert!(!sentence.render().contains("  "));
    }

    #[test]
    fn missing_head() {
        let result = Sentence::try_from_clauses([c(ClauseKind::Foot, "FROM t")]);
        assert_eq!(err_kind(result), SentenceErrorKind::MissingMandatoryClause);
    }

    #[test]
    fn empty_input_is_missing_head() {
        let result = Sentence::try_from_clauses(Vec::<Clause>::new());
        assert_eq!(err_kind(result), SentenceErrorKind::MissingMandatoryClause);
    }

    #[test]
    fn duplicate_slot() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Conditional, "WHERE a = 1"),
            c(ClauseKind::Conditional, "WHERE b = 2"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::DuplicateClauseKind);
    }

    #[test]
    fn duplicate_reported_over_order() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Conditional, "WHERE a = 1"),
            c(ClauseKind::GroupBy, "GROUP BY a"),
            c(ClauseKind::Conditional, "WHERE b = 2"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::DuplicateClauseKind);
    }

    #[test]
    fn order_violation() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Limit, "LIMIT 1"),
            c(ClauseKind::Conditional, "WHERE a = 1"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::OrderViolation);
    }

    #[test]
    fn with_after_select_is_order_violation() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::With, "WITH x AS (SELECT 1)"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::OrderViolation);
    }

    #[test]
    fn join_without_from() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Join, "INNER JOIN u ON true"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::OrderViolation);
    }

    #[test]
    fn join_after_empty_from_is_order_violation() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, ""),
            c(ClauseKind::Join, "INNER JOIN u ON t.id = u.id"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::OrderViolation);
    }

    #[test]
    fn empty_join_after_empty_from_is_skipped() {
        let sentence = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, ""),
            c(ClauseKind::Join, ""),
        ])
        .unwrap();
        assert_eq!(sentence.render(), "SELECT a");
    }

    #[test]
    fn multiple_joins_follow_from() {
        let sentence = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
            c(ClauseKind::Join, "INNER JOIN u ON t.id = u.id"),
            c(ClauseKind::Join, "CROSS JOIN v"),
        ])
        .unwrap();
        assert_eq!(
            sentence.render(),
            "SELECT a FROM t INNER JOIN u ON t.id = u.id CROSS JOIN v"
        );
    }

    #[test]
    fn second_from_after_join_is_duplicate() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
            c(ClauseKind::Join, "CROSS JOIN v"),
            c(ClauseKind::Foot, "FROM w"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::DuplicateClauseKind);
    }

    #[test]
    fn inline_fragment_is_misplaced() {
        let result = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::When, "WHEN a THEN b"),
        ]);
        assert_eq!(err_kind(result), SentenceErrorKind::MisplacedClause);
    }

    #[test]
    fn error_reports_position() {
        let result = Sentence::try_from_clauses([
            Some(c(ClauseKind::Head, "SELECT a")),
            None,
            Some(c(ClauseKind::Offset, "OFFSET 1")),
            Some(c(ClauseKind::Limit, "LIMIT 1")),
        ]);
        match result {
            Err(Error::Sentence(e)) => {
                assert_eq!(e.position, Some(3));
                assert_eq!(e.clause, Some(ClauseKind::Limit));
            }
            other => panic!("expected sentence error, got {other:?}"),
        }
    }

    #[test]
    fn render_is_repeatable() {
        let sentence = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
        ])
        .unwrap();
        assert_eq!(sentence.render(), sentence.render());
        assert_eq!(sentence.to_string(), sentence.render());
    }

    #[test]
    fn slot_lookup() {
        let sentence = Sentence::try_from_clauses([
            c(ClauseKind::Head, "SELECT a"),
            c(ClauseKind::Foot, "FROM t"),
            c(ClauseKind::Join, "CROSS JOIN u"),
        ])
        .unwrap();
        assert!(sentence.has(Slot::Foot));
        assert!(!sentence.has(Slot::Limit));
        assert_eq!(sentence.get(Slot::Foot).map(Clause::render), Some("FROM t"));
        assert_eq!(sentence.clauses().len(), 3);
    }
}
