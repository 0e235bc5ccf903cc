//! PreSQL - compose SQL query text from small clause functions.
//!
//! Each function renders one SQL clause; a sentence puts them together in
//! the one order SQL accepts:
//!
//! ```text
//! WITH, SELECT, FROM/JOIN, WHERE, GROUP BY, HAVING, WINDOW, ORDER BY,
//! LIMIT, OFFSET, UNION, INTERSECT, EXCEPT
//! ```
//!
//! # Quick Start
//!
//! ```
//! use presql::prelude::*;
//!
//! // Positional form, checked at runtime.
//! let sql = q([
//!     Some(with([(
//!         "t1",
//!         SentenceBuilder::select(["name"]).from(["users"]).where_(["id = 1"]).build(),
//!     )])),
//!     Some(select(["name", "email"])),
//!     Some(from(["users"])),
//!     Some(where_(["id = 1", "AND name = 'hello'"])),
//!     None,
//!     Some(limit(1)),
//! ])
//! .unwrap();
//! assert_eq!(
//!     sql,
//!     "WITH t1 AS (SELECT name FROM users WHERE id = 1) \
//!      SELECT name, email FROM users WHERE id = 1 AND name = 'hello' LIMIT 1"
//! );
//!
//! // Staged form, checked at compile time.
//! let sql = SentenceBuilder::select(["a", "b"]).from(["t"]).render();
//! assert_eq!(sql, "SELECT a, b FROM t");
//! ```
//!
//! The produced text is handed to a database driver as-is. PreSQL never
//! parses, escapes or executes it.

pub use presql_core::{
    CaseError, CaseErrorKind, Clause, ClauseKind, ConfigError, Dialect, Error, Fragment, Result,
    Sentence, SentenceError, SentenceErrorKind, Slot, join_fragments, q,
};
pub use presql_query::*;

/// Build a `Vec<Fragment>` from heterogeneous arguments.
///
/// ```
/// use presql::{args, select};
///
/// let clause = select(args!["name", 42, true, None::<&str>]);
/// assert_eq!(clause.render(), "SELECT name, 42, true");
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        ::std::vec![$($crate::Fragment::from($arg)),*]
    };
}

/// Prelude module for convenient imports.
///
/// ```ignore
/// use presql::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args;
    pub use presql_core::{Clause, ClauseKind, Dialect, Error, Fragment, Result, Sentence, Slot, q};
    pub use presql_query::{
        CaseBuilder, JoinMethod, JoinType, OrderTerm, SentenceBuilder, WindowSpec, WithEntry,
        alias, avg, case, cast, cast_with, coalesce, count, cross_join, distinct, except,
        except_all, from, func, func_with_filter, full_join, group_by, having, ident, inner_join,
        intersect, intersect_all, join, left_join, limit, max, min, offset, order_by, otherwise,
        over, partition_by, right_join, select, sub, sum, union, union_all, when, where_, window,
        windows, with, with_recursive,
    };
}
