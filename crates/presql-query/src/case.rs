//! CASE expressions.
//!
//! Two ways to build one:
//!
//! - [`case`] takes WHEN/ELSE fragments built with [`when`] and
//!   [`otherwise`] and validates their order at runtime.
//! - [`CaseBuilder`] chains `.and_when(...)` calls and ends with `.otherwise(...)`
//!   or `.end()`, so a misordered CASE cannot be written.

use presql_core::{CaseError, Clause, ClauseKind, Fragment, Result};

/// `WHEN cond THEN result`.
///
/// An omitted condition or result omits the whole branch: the clause is
/// empty and [`case`] skips it.
pub fn when(cond: impl Into<Fragment>, result: impl Into<Fragment>) -> Clause {
    match (cond.into().render(), result.into().render()) {
        (Some(cond), Some(result)) => {
            Clause::new(ClauseKind::When, format!("WHEN {cond} THEN {result}"))
        }
        _ => Clause::new(ClauseKind::When, String::new()),
    }
}

/// `ELSE result`. An omitted result yields an empty clause.
pub fn otherwise(result: impl Into<Fragment>) -> Clause {
    Clause::keyword(ClauseKind::Else, &result.into().render().unwrap_or_default())
}

/// Assemble `CASE <parts> END`.
///
/// Requires one or more WHEN fragments followed by at most one ELSE.
/// Empty (omitted) branches are skipped before these rules apply.
///
/// ```
/// use presql_query::{case, otherwise, when};
///
/// let sql = case([when("a=1", "x"), otherwise("y")]).unwrap();
/// assert_eq!(sql, "CASE WHEN a=1 THEN x ELSE y END");
/// ```
pub fn case(parts: impl IntoIterator<Item = Clause>) -> Result<String> {
    let mut rendered = Vec::new();
    let mut whens = 0usize;
    let mut else_at: Option<usize> = None;

    for (position, part) in parts.into_iter().enumerate() {
        if part.is_empty() && matches!(part.kind(), ClauseKind::When | ClauseKind::Else) {
            continue;
        }
        match part.kind() {
            ClauseKind::When => {
                if let Some(at) = else_at {
                    return Err(malformed(
                        position,
                        format!("WHEN at position {position} follows ELSE at position {at}"),
                    ));
                }
                whens += 1;
            }
            ClauseKind::Else => {
                if let Some(at) = else_at {
                    return Err(malformed(
                        position,
                        format!("second ELSE at position {position}; first at {at}"),
                    ));
                }
                else_at = Some(position);
            }
            other => {
                let err = CaseError::not_case_fragment(other, position);
                tracing::debug!(position, kind = ?other, "Rejected CASE fragment");
                return Err(err.into());
            }
        }
        rendered.push(part.into_text());
    }

    if whens == 0 {
        return Err(malformed(0, "CASE requires at least one WHEN".to_string()));
    }

    Ok(format!("CASE {} END", rendered.join(" ")))
}

fn malformed(position: usize, message: String) -> presql_core::Error {
    tracing::debug!(position, "Malformed CASE sequence: {}", message);
    CaseError::malformed(Some(position), message).into()
}

/// Statically ordered CASE builder.
///
/// ```
/// use presql_query::CaseBuilder;
///
/// let sql = CaseBuilder::when("score >= 90", "'A'")
///     .and_when("score >= 80", "'B'")
///     .otherwise("'C'");
/// assert_eq!(sql, "CASE WHEN score >= 90 THEN 'A' WHEN score >= 80 THEN 'B' ELSE 'C' END");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBuilder {
    when_clauses: Vec<Clause>,
}

impl CaseBuilder {
    /// Start a CASE with its first WHEN branch.
    pub fn when(cond: impl Into<Fragment>, result: impl Into<Fragment>) -> Self {
        Self {
            when_clauses: vec![when(cond, result)],
        }
    }

    /// Add another WHEN branch.
    pub fn and_when(mut self, cond: impl Into<Fragment>, result: impl Into<Fragment>) -> Self {
        self.when_clauses.push(when(cond, result));
        self
    }

    /// Finish with an ELSE branch.
    pub fn otherwise(self, result: impl Into<Fragment>) -> String {
        self.finish(Some(otherwise(result)))
    }

    /// Finish without an ELSE branch.
    pub fn end(self) -> String {
        self.finish(None)
    }

    /// Omitted branches are skipped; with no WHEN left the CASE renders
    /// empty, which clause constructors then skip as an argument.
    fn finish(self, else_part: Option<Clause>) -> String {
        let whens = self
            .when_clauses
            .iter()
            .filter(|c| !c.is_empty())
            .map(Clause::render)
            .collect::<Vec<_>>();
        if whens.is_empty() {
            tracing::debug!("CASE without active WHEN branches renders empty");
            return String::new();
        }
        let mut parts = whens.join(" ");
        if let Some(else_part) = else_part.filter(|c| !c.is_empty()) {
            parts.push(' ');
            parts.push_str(else_part.render());
        }
        format!("CASE {parts} END")
    }
}
