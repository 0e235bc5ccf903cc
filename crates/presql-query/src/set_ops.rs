//! Set operations: UNION, INTERSECT, EXCEPT and their ALL forms.
//!
//! Each constructor renders the operator before every sibling query, so the
//! clause can be appended directly after the main query:
//!
//! ```
//! use presql_query::{SentenceBuilder, union};
//!
//! let admins = SentenceBuilder::select(["id"]).from(["admins"]).build();
//! let owners = SentenceBuilder::select(["id"]).from(["owners"]).build();
//! assert_eq!(
//!     union([admins, owners]).render(),
//!     "UNION SELECT id FROM admins UNION SELECT id FROM owners"
//! );
//! ```

use presql_core::{Clause, ClauseKind, Fragment, join_fragments};

/// Type of set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOpType {
    /// UNION - combines results, removes duplicates
    Union,
    /// UNION ALL - combines results, keeps duplicates
    UnionAll,
    /// INTERSECT - returns common rows, removes duplicates
    Intersect,
    /// INTERSECT ALL - returns common rows, keeps duplicates
    IntersectAll,
    /// EXCEPT - returns rows in first query not in second, removes duplicates
    Except,
    /// EXCEPT ALL - returns rows in first query not in second, keeps duplicates
    ExceptAll,
}

impl SetOpType {
    /// Get the SQL keyword for this set operation.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            SetOpType::Union => "UNION",
            SetOpType::UnionAll => "UNION ALL",
            SetOpType::Intersect => "INTERSECT",
            SetOpType::IntersectAll => "INTERSECT ALL",
            SetOpType::Except => "EXCEPT",
            SetOpType::ExceptAll => "EXCEPT ALL",
        }
    }

    /// The clause kind (and therefore sentence slot) of this operation.
    pub const fn kind(&self) -> ClauseKind {
        match self {
            SetOpType::Union | SetOpType::UnionAll => ClauseKind::Union,
            SetOpType::Intersect | SetOpType::IntersectAll => ClauseKind::Intersect,
            SetOpType::Except | SetOpType::ExceptAll => ClauseKind::Except,
        }
    }
}

/// Build a set-operation clause of the given type.
pub fn set_operation<I>(op: SetOpType, queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let sep = format!(" {} ", op.as_sql());
    let body = join_fragments(queries, &sep);
    if body.is_empty() {
        Clause::new(op.kind(), String::new())
    } else {
        Clause::new(op.kind(), format!("{} {}", op.as_sql(), body))
    }
}

/// UNION of the sibling queries.
pub fn union<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::Union, queries)
}

/// UNION ALL of the sibling queries.
pub fn union_all<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::UnionAll, queries)
}

/// INTERSECT of the sibling queries.
pub fn intersect<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::Intersect, queries)
}

/// INTERSECT ALL of the sibling queries.
pub fn intersect_all<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::IntersectAll, queries)
}

/// EXCEPT of the sibling queries.
pub fn except<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::Except, queries)
}

/// EXCEPT ALL of the sibling queries.
pub fn except_all<I>(queries: I) -> Clause
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    set_operation(SetOpType::ExceptAll, queries)
}
