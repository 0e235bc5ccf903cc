//! Expression helpers.
//!
//! These produce inline text fragments, not clauses. Use them as arguments
//! to clause constructors:
//!
//! ```
//! use presql_query::{count, having, where_};
//!
//! let filter = where_(["name = 'test'"]);
//! let h = having([count("id", Some(&filter)) + " > 1"]);
//! assert_eq!(h.render(), "HAVING COUNT(id) FILTER(WHERE name = 'test') > 1");
//! ```

use presql_core::{Clause, ClauseKind, Dialect, Fragment, Sentence, join_fragments};

/// Generic function call: `name(arg1, arg2, ...)`.
pub fn func<I>(name: &str, args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    format!("{}({})", name, join_fragments(args, ", "))
}

/// Single-argument function call with an optional aggregate FILTER.
///
/// The filter is expected to be a WHERE clause; it is rendered as
/// `FILTER(<filter>)`. An empty filter (every condition omitted) adds nothing.
pub fn func_with_filter(
    name: &str,
    arg: impl Into<Fragment>,
    filter: Option<&Clause>,
) -> String {
    let mut sql = func(name, [arg]);
    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        if filter.kind() != ClauseKind::Conditional {
            tracing::warn!(
                function = name,
                kind = ?filter.kind(),
                "Aggregate FILTER expects a WHERE clause"
            );
        }
        sql.push_str(" FILTER(");
        sql.push_str(filter.render());
        sql.push(')');
    }
    sql
}

/// `COUNT(arg)`, optionally with `FILTER(WHERE ...)`.
pub fn count(arg: impl Into<Fragment>, filter: Option<&Clause>) -> String {
    func_with_filter("COUNT", arg, filter)
}

/// `SUM(arg)`, optionally with `FILTER(WHERE ...)`.
pub fn sum(arg: impl Into<Fragment>, filter: Option<&Clause>) -> String {
    func_with_filter("SUM", arg, filter)
}

/// `AVG(arg)`, optionally with `FILTER(WHERE ...)`.
pub fn avg(arg: impl Into<Fragment>, filter: Option<&Clause>) -> String {
    func_with_filter("AVG", arg, filter)
}

/// `MIN(arg)`, optionally with `FILTER(WHERE ...)`.
pub fn min(arg: impl Into<Fragment>, filter: Option<&Clause>) -> String {
    func_with_filter("MIN", arg, filter)
}

/// `MAX(arg)`, optionally with `FILTER(WHERE ...)`.
pub fn max(arg: impl Into<Fragment>, filter: Option<&Clause>) -> String {
    func_with_filter("MAX", arg, filter)
}

/// `COALESCE(arg1, arg2, ...)`.
pub fn coalesce<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    func("COALESCE", args)
}

/// `expr AS alias`.
pub fn alias(expr: impl Into<Fragment>, alias: &str) -> String {
    format!("{} AS {}", expr.into(), alias)
}

/// Type cast in the default dialect (`expr::type`).
pub fn cast(expr: impl Into<Fragment>, type_name: &str) -> String {
    cast_with(Dialect::default(), expr, type_name)
}

/// Type cast in the given dialect.
pub fn cast_with(dialect: Dialect, expr: impl Into<Fragment>, type_name: &str) -> String {
    dialect.cast(&expr.into().to_string(), type_name)
}

/// `DISTINCT expr`, for use inside aggregates.
pub fn distinct(expr: impl Into<Fragment>) -> String {
    format!("DISTINCT {}", expr.into())
}

/// `expr OVER window`, where `window` is a window name or a parenthesised
/// definition (see [`crate::WindowSpec::definition`]).
pub fn over(expr: impl Into<Fragment>, window: impl Into<Fragment>) -> String {
    format!("{} OVER {}", expr.into(), window.into())
}

/// Parenthesised subquery: `(<rendered sentence>)`.
pub fn sub(sentence: &Sentence) -> String {
    format!("({})", sentence.render())
}

/// Quote an identifier for the given dialect.
pub fn ident(dialect: Dialect, name: &str) -> String {
    dialect.quote_identifier(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{from, partition_by, select, where_};
    use crate::window::WindowSpec;

    #[test]
    fn count_without_filter() {
        assert_eq!(count("x", None), "COUNT(x)");
    }

    #[test]
    fn count_with_filter() {
        let filter = where_(["y=1"]);
        assert_eq!(count("x", Some(&filter)), "COUNT(x) FILTER(WHERE y=1)");
    }

    #[test]
    fn empty_filter_is_dropped() {
        let filter = where_([Fragment::active("y = 1", false)]);
        assert_eq!(count("x", Some(&filter)), "COUNT(x)");
        assert_eq!(max("x", Some(&where_([None::<&str>]))), "MAX(x)");
    }

    #[test]
    fn aggregates() {
        assert_eq!(sum("amount", None), "SUM(amount)");
        assert_eq!(avg("age", None), "AVG(age)");
        assert_eq!(min("price", None), "MIN(price)");
        assert_eq!(max("price", None), "MAX(price)");
        let filter = where_(["paid"]);
        assert_eq!(sum("amount", Some(&filter)), "SUM(amount) FILTER(WHERE paid)");
    }

    #[test]
    fn generic_function() {
        assert_eq!(func("UPPER", ["name"]), "UPPER(name)");
        assert_eq!(func("ROUND", [Fragment::from("x"), Fragment::from(2)]), "ROUND(x, 2)");
        assert_eq!(func("NOW", Vec::<&str>::new()), "NOW()");
    }

    #[test]
    fn coalesce_args() {
        assert_eq!(
            coalesce([Fragment::from("nickname"), Fragment::from("'anon'")]),
            "COALESCE(nickname, 'anon')"
        );
    }

    #[test]
    fn alias_and_cast() {
        assert_eq!(alias(count("*", None), "total"), "COUNT(*) AS total");
        assert_eq!(cast("age", "text"), "age::text");
        assert_eq!(cast_with(Dialect::Sqlite, "age", "TEXT"), "CAST(age AS TEXT)");
    }

    #[test]
    fn distinct_inside_count() {
        assert_eq!(count(distinct("user_id"), None), "COUNT(DISTINCT user_id)");
    }

    #[test]
    fn over_named_and_inline() {
        assert_eq!(over("ROW_NUMBER()", "w"), "ROW_NUMBER() OVER w");
        let spec = WindowSpec::new("w").partition_by(partition_by(["dept"]));
        assert_eq!(
            over(sum("salary", None), spec.definition()),
            "SUM(salary) OVER (PARTITION BY dept)"
        );
    }

    #[test]
    fn subquery_parenthesised() {
        let inner = Sentence::try_from_clauses([select(["id"]), from(["banned"])]).unwrap();
        assert_eq!(sub(&inner), "(SELECT id FROM banned)");
        let outer = where_([format!("id NOT IN {}", sub(&inner))]);
        assert_eq!(outer.render(), "WHERE id NOT IN (SELECT id FROM banned)");
    }

    #[test]
    fn quoting() {
        assert_eq!(ident(Dialect::Postgres, "order"), "\"order\"");
        assert_eq!(ident(Dialect::Mysql, "order"), "`order`");
    }
}
