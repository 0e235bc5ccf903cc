//! Staged sentence builder.
//!
//! Every method moves the builder to the stage of the clause it adds, and
//! a method is only available while the current stage precedes that
//! clause's slot. Out-of-order and repeated clauses are compile errors:
//!
//! ```
//! use presql_query::{SentenceBuilder, count};
//!
//! let sql = SentenceBuilder::select(["name", "email"])
//!     .from(["users"])
//!     .where_(["id = 1", "AND name = 'hello'"])
//!     .group_by(["name"])
//!     .having([count("id", None) + " > 1"])
//!     .order_by(["id DESC"])
//!     .limit(1)
//!     .offset(1)
//!     .render();
//! assert_eq!(
//!     sql,
//!     "SELECT name, email FROM users WHERE id = 1 AND name = 'hello' \
//!      GROUP BY name HAVING COUNT(id) > 1 ORDER BY id DESC LIMIT 1 OFFSET 1"
//! );
//! ```
//!
//! ```compile_fail
//! use presql_query::SentenceBuilder;
//!
//! // WHERE cannot follow LIMIT.
//! let _ = SentenceBuilder::select(["a"]).limit(1).where_(["a = 1"]);
//! ```
//!
//! ```compile_fail
//! use presql_query::SentenceBuilder;
//!
//! // Only one ORDER BY.
//! let _ = SentenceBuilder::select(["a"]).order_by(["a"]).order_by(["b"]);
//! ```

use crate::cte::{self, WithEntry};
use crate::join::{self, JoinMethod, JoinType};
use crate::window::{self, WindowSpec};
use crate::{clause, set_ops};
use presql_core::{Clause, ClauseKind, Fragment, Sentence};
use std::marker::PhantomData;

/// Stage markers, one per sentence slot after WITH.
pub mod stage {
    #[derive(Debug, Clone, Copy)]
    pub struct Head;
    #[derive(Debug, Clone, Copy)]
    pub struct Foot;
    #[derive(Debug, Clone, Copy)]
    pub struct Conditional;
    #[derive(Debug, Clone, Copy)]
    pub struct GroupBy;
    #[derive(Debug, Clone, Copy)]
    pub struct Having;
    #[derive(Debug, Clone, Copy)]
    pub struct Window;
    #[derive(Debug, Clone, Copy)]
    pub struct Order;
    #[derive(Debug, Clone, Copy)]
    pub struct Limit;
    #[derive(Debug, Clone, Copy)]
    pub struct Offset;
    #[derive(Debug, Clone, Copy)]
    pub struct Union;
    #[derive(Debug, Clone, Copy)]
    pub struct Intersect;
    #[derive(Debug, Clone, Copy)]
    pub struct Except;
}

/// Implemented for every stage that comes strictly before `T`.
pub trait Precedes<T> {}

macro_rules! precedes {
    () => {};
    ($first:ident $(, $rest:ident)*) => {
        $( impl Precedes<stage::$rest> for stage::$first {} )*
        precedes!($($rest),*);
    };
}

precedes!(
    Head,
    Foot,
    Conditional,
    GroupBy,
    Having,
    Window,
    Order,
    Limit,
    Offset,
    Union,
    Intersect,
    Except
);

/// A sentence under construction, currently at stage `S`.
#[derive(Debug, Clone)]
pub struct SentenceBuilder<S> {
    clauses: Vec<Clause>,
    _stage: PhantomData<S>,
}

/// A WITH clause waiting for its SELECT.
#[derive(Debug, Clone)]
pub struct WithPrologue {
    with: Clause,
}

impl WithPrologue {
    /// Add the SELECT clause that the common table expressions feed.
    pub fn select<I>(self, args: I) -> SentenceBuilder<stage::Head>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        SentenceBuilder {
            clauses: vec![self.with, clause::select(args)],
            _stage: PhantomData,
        }
    }
}

impl SentenceBuilder<stage::Head> {
    /// Start a sentence with its SELECT clause.
    pub fn select<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        Self {
            clauses: vec![clause::select(args)],
            _stage: PhantomData,
        }
    }

    /// Start a sentence with a WITH prologue.
    pub fn with(entries: impl IntoIterator<Item = impl Into<WithEntry>>) -> WithPrologue {
        WithPrologue {
            with: cte::with(entries),
        }
    }

    /// Start a sentence with a WITH RECURSIVE prologue.
    pub fn with_recursive(
        entries: impl IntoIterator<Item = impl Into<WithEntry>>,
    ) -> WithPrologue {
        WithPrologue {
            with: cte::with_recursive(entries),
        }
    }
}

impl<S> SentenceBuilder<S> {
    fn push<T>(mut self, clause: Clause) -> SentenceBuilder<T> {
        self.clauses.push(clause);
        SentenceBuilder {
            clauses: self.clauses,
            _stage: PhantomData,
        }
    }

    /// Add the FROM clause.
    pub fn from<I>(self, args: I) -> SentenceBuilder<stage::Foot>
    where
        S: Precedes<stage::Foot>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(clause::from(args))
    }

    /// Add the WHERE clause.
    pub fn where_<I>(self, args: I) -> SentenceBuilder<stage::Conditional>
    where
        S: Precedes<stage::Conditional>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(clause::where_(args))
    }

    /// Add the GROUP BY clause.
    pub fn group_by<I>(self, args: I) -> SentenceBuilder<stage::GroupBy>
    where
        S: Precedes<stage::GroupBy>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(clause::group_by(args))
    }

    /// Add the HAVING clause.
    pub fn having<I>(self, args: I) -> SentenceBuilder<stage::Having>
    where
        S: Precedes<stage::Having>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(clause::having(args))
    }

    /// Add a WINDOW clause with a single named window.
    pub fn window(
        self,
        name: impl Into<String>,
        partition: Option<Clause>,
        order: Option<Clause>,
    ) -> SentenceBuilder<stage::Window>
    where
        S: Precedes<stage::Window>,
    {
        self.push(window::window(name, partition, order))
    }

    /// Add a WINDOW clause with several named windows.
    pub fn windows(
        self,
        specs: impl IntoIterator<Item = WindowSpec>,
    ) -> SentenceBuilder<stage::Window>
    where
        S: Precedes<stage::Window>,
    {
        self.push(window::windows(specs))
    }

    /// Add the ORDER BY clause.
    pub fn order_by<I>(self, args: I) -> SentenceBuilder<stage::Order>
    where
        S: Precedes<stage::Order>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(clause::order_by(args))
    }

    /// Add the LIMIT clause.
    pub fn limit(self, arg: impl Into<Fragment>) -> SentenceBuilder<stage::Limit>
    where
        S: Precedes<stage::Limit>,
    {
        self.push(clause::limit(arg))
    }

    /// Add the OFFSET clause.
    pub fn offset(self, arg: impl Into<Fragment>) -> SentenceBuilder<stage::Offset>
    where
        S: Precedes<stage::Offset>,
    {
        self.push(clause::offset(arg))
    }

    /// Append `UNION <query> UNION <query> ...`.
    pub fn union<I>(self, queries: I) -> SentenceBuilder<stage::Union>
    where
        S: Precedes<stage::Union>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::union(queries))
    }

    /// Append `UNION ALL <query> ...`.
    pub fn union_all<I>(self, queries: I) -> SentenceBuilder<stage::Union>
    where
        S: Precedes<stage::Union>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::union_all(queries))
    }

    /// Append `INTERSECT <query> ...`.
    pub fn intersect<I>(self, queries: I) -> SentenceBuilder<stage::Intersect>
    where
        S: Precedes<stage::Intersect>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::intersect(queries))
    }

    /// Append `INTERSECT ALL <query> ...`.
    pub fn intersect_all<I>(self, queries: I) -> SentenceBuilder<stage::Intersect>
    where
        S: Precedes<stage::Intersect>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::intersect_all(queries))
    }

    /// Append `EXCEPT <query> ...`.
    pub fn except<I>(self, queries: I) -> SentenceBuilder<stage::Except>
    where
        S: Precedes<stage::Except>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::except(queries))
    }

    /// Append `EXCEPT ALL <query> ...`.
    pub fn except_all<I>(self, queries: I) -> SentenceBuilder<stage::Except>
    where
        S: Precedes<stage::Except>,
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push(set_ops::except_all(queries))
    }

    /// Finish the sentence.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn build(self) -> Sentence {
        tracing::trace!(clauses = self.clauses.len(), "Building staged sentence");
        Sentence::from_validated(self.clauses)
    }

    /// Render the sentence built so far.
    pub fn render(&self) -> String {
        Sentence::from_validated(self.clauses.clone()).render()
    }
}

impl SentenceBuilder<stage::Foot> {
    /// JOINs attach to the FROM clause; when every FROM argument was
    /// omitted there is nothing to join onto and the JOIN is dropped.
    fn push_join(mut self, clause: Clause) -> Self {
        let from_empty = self
            .clauses
            .iter()
            .rev()
            .find(|c| c.kind() == ClauseKind::Foot)
            .is_some_and(Clause::is_empty);
        if from_empty && !clause.is_empty() {
            tracing::warn!(join = %clause, "Dropping JOIN after an empty FROM clause");
            return self;
        }
        self.clauses.push(clause);
        self
    }

    /// Add a JOIN after FROM (or after another JOIN).
    pub fn join<I>(
        self,
        join_type: JoinType,
        table: impl Into<Fragment>,
        method: JoinMethod,
        args: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push_join(join::join(join_type, table, method, args))
    }

    /// `INNER JOIN <table> ON <args...>`.
    pub fn inner_join<I>(self, table: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push_join(join::inner_join(table, on))
    }

    /// `LEFT JOIN <table> ON <args...>`.
    pub fn left_join<I>(self, table: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push_join(join::left_join(table, on))
    }

    /// `RIGHT JOIN <table> ON <args...>`.
    pub fn right_join<I>(self, table: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push_join(join::right_join(table, on))
    }

    /// `FULL JOIN <table> ON <args...>`.
    pub fn full_join<I>(self, table: impl Into<Fragment>, on: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        self.push_join(join::full_join(table, on))
    }

    /// `CROSS JOIN <table>`.
    pub fn cross_join(self, table: impl Into<Fragment>) -> Self {
        self.push_join(join::cross_join(table))
    }
}

impl<S> From<SentenceBuilder<S>> for Sentence {
    fn from(builder: SentenceBuilder<S>) -> Self {
        builder.build()
    }
}

impl<S> From<SentenceBuilder<S>> for Fragment {
    fn from(builder: SentenceBuilder<S>) -> Self {
        Fragment::from(builder.build())
    }
}
