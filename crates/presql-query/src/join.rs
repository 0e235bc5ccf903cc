//! JOIN clause constructors.
//!
//! A JOIN clause shares the FROM slot of a sentence and must follow a FROM
//! clause (or another JOIN).

use presql_core::{Clause, ClauseKind, Fragment, join_fragments};

/// Types of SQL joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
}

impl JoinType {
    /// Get the SQL keyword for this join type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
            JoinType::Cross => "CROSS JOIN",
        }
    }
}

/// How the join condition is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMethod {
    /// `ON <predicate>`; arguments joined by a single space
    On,
    /// `USING (<columns>)`; arguments joined by `", "`
    Using,
}

impl JoinMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JoinMethod::On => "ON",
            JoinMethod::Using => "USING",
        }
    }
}

/// Build a JOIN clause: `<TYPE> JOIN <table> <method> <args...>`.
///
/// CROSS JOIN takes no condition; any method and arguments are ignored.
///
/// ```
/// use presql_query::{JoinMethod, JoinType, join};
///
/// let j = join(JoinType::Left, "teams t", JoinMethod::On, ["t.id = h.team_id"]);
/// assert_eq!(j.render(), "LEFT JOIN teams t ON t.id = h.team_id");
///
/// let j = join(JoinType::Inner, "teams", JoinMethod::Using, ["team_id", "org_id"]);
/// assert_eq!(j.render(), "INNER JOIN teams USING (team_id, org_id)");
/// ```
pub fn join<I>(
    join_type: JoinType,
    table: impl Into<Fragment>,
    method: JoinMethod,
    args: I,
) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let table = table.into();
    if join_type == JoinType::Cross {
        let ignored = join_fragments(args, " ");
        if !ignored.is_empty() {
            tracing::warn!(
                condition = %ignored,
                "CROSS JOIN does not take a condition; ignoring it"
            );
        }
        return cross_join(table);
    }

    let condition = match method {
        JoinMethod::On => join_fragments(args, " "),
        JoinMethod::Using => {
            let cols = join_fragments(args, ", ");
            if cols.is_empty() { cols } else { format!("({cols})") }
        }
    };

    let mut sql = format!("{} {}", join_type.as_str(), table);
    if !condition.is_empty() {
        sql.push(' ');
        sql.push_str(method.as_str());
        sql.push(' ');
        sql.push_str(&condition);
    }
    Clause::new(ClauseKind::Join, sql)
}

/// `CROSS JOIN <table>`.
pub fn cross_join(table: impl Into<Fragment>) -> Clause {
    Clause::new(
        ClauseKind::Join,
        format!("{} {}", JoinType::Cross.as_str(), table.into()),
    )
}

/// `INNER JOIN <table> ON <args...>`.
pub fn inner_join<I>(table: impl Into<Fragment>, on: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join(JoinType::Inner, table, JoinMethod::On, on)
}

/// `LEFT JOIN <table> ON <args...>`.
pub fn left_join<I>(table: impl Into<Fragment>, on: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join(JoinType::Left, table, JoinMethod::On, on)
}

/// `RIGHT JOIN <table> ON <args...>`.
pub fn right_join<I>(table: impl Into<Fragment>, on: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join(JoinType::Right, table, JoinMethod::On, on)
}

/// `FULL JOIN <table> ON <args...>`.
pub fn full_join<I>(table: impl Into<Fragment>, on: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    join(JoinType::Full, table, JoinMethod::On, on)
}
