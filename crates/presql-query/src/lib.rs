//! Clause constructors and builders for PreSQL.
//!
//! `presql-query` is the **construction layer** on top of `presql-core`:
//!
//! - **Clause constructors**: `select`, `from`, `where_`, `group_by`, ...
//!   each return a [`Clause`] tagged with its kind.
//! - **Expression helpers**: `count`, `sum`, `coalesce`, `cast`, ... return
//!   plain text for use as clause arguments.
//! - **CASE**: `case`/`when`/`otherwise` and [`CaseBuilder`].
//! - **Staged builder**: [`SentenceBuilder`] enforces the clause order at
//!   compile time.
//!
//! Positional clause lists are validated at runtime with [`q`] or
//! [`Sentence::try_from_clauses`].

pub mod builder;
pub mod case;
pub mod clause;
pub mod cte;
pub mod expr;
pub mod join;
pub mod set_ops;
pub mod window;

pub use builder::{Precedes, SentenceBuilder, WithPrologue, stage};
pub use case::{CaseBuilder, case, otherwise, when};
pub use clause::{
    NullsOrder, OrderDirection, OrderTerm, from, group_by, having, limit, offset, order_by,
    partition_by, select, where_,
};
pub use cte::{WithEntry, with, with_recursive};
pub use expr::{
    alias, avg, cast, cast_with, coalesce, count, distinct, func, func_with_filter, ident, max,
    min, over, sub, sum,
};
pub use join::{
    JoinMethod, JoinType, cross_join, full_join, inner_join, join, left_join, right_join,
};
pub use set_ops::{
    SetOpType, except, except_all, intersect, intersect_all, set_operation, union, union_all,
};
pub use window::{WindowSpec, window, windows};

pub use presql_core::{Clause, ClauseKind, Dialect, Fragment, Sentence, Slot, q};
