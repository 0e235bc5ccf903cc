//! Clause constructors (SELECT, FROM, WHERE, GROUP BY, ...).
//!
//! List-valued clauses join their arguments with `", "`. Predicate clauses
//! (WHERE, HAVING) join with a single space so callers compose conditions
//! themselves:
//!
//! ```
//! use presql_query::where_;
//!
//! let w = where_(["id = 1", "AND name = 'x'"]);
//! assert_eq!(w.render(), "WHERE id = 1 AND name = 'x'");
//! ```

use presql_core::{Clause, ClauseKind, Fragment, join_fragments};
use std::fmt;

fn list<I>(kind: ClauseKind, args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    Clause::keyword(kind, &join_fragments(args, ", "))
}

fn predicate<I>(kind: ClauseKind, args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    Clause::keyword(kind, &join_fragments(args, " "))
}

/// SELECT clause. With no active arguments this selects `*`.
pub fn select<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let joined = join_fragments(args, ", ");
    if joined.is_empty() {
        Clause::keyword(ClauseKind::Head, "*")
    } else {
        Clause::keyword(ClauseKind::Head, &joined)
    }
}

/// FROM clause.
pub fn from<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    list(ClauseKind::Foot, args)
}

/// WHERE clause.
pub fn where_<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    predicate(ClauseKind::Conditional, args)
}

/// GROUP BY clause.
pub fn group_by<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    list(ClauseKind::GroupBy, args)
}

/// HAVING clause.
pub fn having<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    predicate(ClauseKind::Having, args)
}

/// ORDER BY clause.
pub fn order_by<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    list(ClauseKind::Order, args)
}

/// PARTITION BY fragment, for WINDOW definitions and OVER.
pub fn partition_by<I>(args: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    list(ClauseKind::PartitionBy, args)
}

/// LIMIT clause.
pub fn limit(arg: impl Into<Fragment>) -> Clause {
    Clause::keyword(ClauseKind::Limit, &join_fragments([arg], ""))
}

/// OFFSET clause.
pub fn offset(arg: impl Into<Fragment>) -> Clause {
    Clause::keyword(ClauseKind::Offset, &join_fragments([arg], ""))
}

/// One ORDER BY term with direction and NULLS placement.
///
/// ```
/// use presql_query::{order_by, OrderTerm};
///
/// let clause = order_by([OrderTerm::desc("created_at").nulls_last(), OrderTerm::asc("id")]);
/// assert_eq!(clause.render(), "ORDER BY created_at DESC NULLS LAST, id ASC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerm {
    expr: String,
    direction: OrderDirection,
    nulls: Option<NullsOrder>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// NULLS FIRST/LAST ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

impl OrderTerm {
    /// Ascending order on `expr`.
    pub fn asc(expr: impl Into<Fragment>) -> Self {
        Self {
            expr: expr.into().to_string(),
            direction: OrderDirection::Asc,
            nulls: None,
        }
    }

    /// Descending order on `expr`.
    pub fn desc(expr: impl Into<Fragment>) -> Self {
        Self {
            expr: expr.into().to_string(),
            direction: OrderDirection::Desc,
            nulls: None,
        }
    }

    /// Set NULLS FIRST.
    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    /// Set NULLS LAST.
    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }
}

impl fmt::Display for OrderTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)?;
        f.write_str(match self.direction {
            OrderDirection::Asc => " ASC",
            OrderDirection::Desc => " DESC",
        })?;
        if let Some(nulls) = self.nulls {
            f.write_str(match nulls {
                NullsOrder::First => " NULLS FIRST",
                NullsOrder::Last => " NULLS LAST",
            })?;
        }
        Ok(())
    }
}

impl From<OrderTerm> for Fragment {
    fn from(term: OrderTerm) -> Self {
        Fragment::Text(term.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_joins_with_comma() {
        assert_eq!(select(["a", "b"]).render(), "SELECT a, b");
        assert_eq!(select(["a", "b"]).kind(), ClauseKind::Head);
    }

    #[test]
    fn select_nothing_is_star() {
        assert_eq!(select(Vec::<&str>::new()).render(), "SELECT *");
        assert_eq!(
            select([Fragment::active("a", false)]).render(),
            "SELECT *"
        );
    }

    #[test]
    fn from_multiple_tables() {
        let clause = from(["users u", "teams t"]);
        assert_eq!(clause.render(), "FROM users u, teams t");
        assert_eq!(clause.kind(), ClauseKind::Foot);
    }

    #[test]
    fn where_joins_with_space() {
        let clause = where_(["id = 1", "name='hello'"]);
        assert_eq!(clause.render(), "WHERE id = 1 name='hello'");
        assert_eq!(clause.kind(), ClauseKind::Conditional);
    }

    #[test]
    fn where_skips_inactive_conditions() {
        let clause = where_([
            Fragment::from("active = true"),
            Fragment::active("AND role = 'admin'", false),
            Fragment::active("AND age > 18", true),
        ]);
        assert_eq!(clause.render(), "WHERE active = true AND age > 18");
    }

    #[test]
    fn where_all_inactive_is_empty() {
        let clause = where_([Fragment::active("a = 1", false)]);
        assert!(clause.is_empty());
    }

    #[test]
    fn group_by_and_having() {
        assert_eq!(group_by(["name", "team"]).render(), "GROUP BY name, team");
        assert_eq!(
            having(["COUNT(id) > 1", "AND SUM(x) < 10"]).render(),
            "HAVING COUNT(id) > 1 AND SUM(x) < 10"
        );
    }

    #[test]
    fn order_by_plain_strings() {
        assert_eq!(order_by(["id DESC", "name"]).render(), "ORDER BY id DESC, name");
    }

    #[test]
    fn order_terms() {
        let clause = order_by([
            OrderTerm::asc("a"),
            OrderTerm::desc("b").nulls_first(),
        ]);
        assert_eq!(clause.render(), "ORDER BY a ASC, b DESC NULLS FIRST");
    }

    #[test]
    fn limit_and_offset_numbers() {
        assert_eq!(limit(1).render(), "LIMIT 1");
        assert_eq!(offset(20_u64).render(), "OFFSET 20");
        assert_eq!(limit("ALL").render(), "LIMIT ALL");
        assert_eq!(limit(1).kind(), ClauseKind::Limit);
        assert_eq!(offset(1).kind(), ClauseKind::Offset);
    }

    #[test]
    fn limit_omitted() {
        assert!(limit(None::<i64>).is_empty());
    }

    #[test]
    fn partition_by_fragment() {
        let clause = partition_by(["dept", "region"]);
        assert_eq!(clause.render(), "PARTITION BY dept, region");
        assert_eq!(clause.slot(), None);
    }

    #[test]
    fn mixed_arguments() {
        let clause = select([Fragment::from("a"), Fragment::from(1), Fragment::from(true)]);
        assert_eq!(clause.render(), "SELECT a, 1, true");
    }
}
