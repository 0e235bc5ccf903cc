//! WINDOW clause.

use presql_core::{Clause, ClauseKind};
use std::fmt;

/// A named window: `name AS ([PARTITION BY ...] [ORDER BY ...])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    name: String,
    partition_by: Option<Clause>,
    order_by: Option<Clause>,
}

impl WindowSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partition_by: None,
            order_by: None,
        }
    }

    /// Set the PARTITION BY fragment (see [`crate::partition_by`]).
    pub fn partition_by(mut self, clause: Clause) -> Self {
        self.partition_by = Some(clause);
        self
    }

    /// Set the ORDER BY fragment (see [`crate::order_by`]).
    pub fn order_by(mut self, clause: Clause) -> Self {
        self.order_by = Some(clause);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parenthesised definition, without the name.
    pub fn definition(&self) -> String {
        let parts = [&self.partition_by, &self.order_by]
            .into_iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .map(Clause::render)
            .collect::<Vec<_>>();
        format!("({})", parts.join(" "))
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AS {}", self.name, self.definition())
    }
}

/// `WINDOW name AS (...)` with whichever of PARTITION BY / ORDER BY is given.
///
/// ```
/// use presql_query::{order_by, partition_by, window};
///
/// let w = window("w", Some(partition_by(["dept"])), Some(order_by(["salary DESC"])));
/// assert_eq!(w.render(), "WINDOW w AS (PARTITION BY dept ORDER BY salary DESC)");
/// ```
pub fn window(
    name: impl Into<String>,
    partition: Option<Clause>,
    order: Option<Clause>,
) -> Clause {
    let mut spec = WindowSpec::new(name);
    spec.partition_by = partition;
    spec.order_by = order;
    windows([spec])
}

/// `WINDOW w1 AS (...), w2 AS (...)`.
pub fn windows(specs: impl IntoIterator<Item = WindowSpec>) -> Clause {
    let body = specs
        .into_iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Clause::keyword(ClauseKind::Window, &body)
}
