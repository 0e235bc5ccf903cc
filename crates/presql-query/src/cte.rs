//! WITH clause (common table expressions).

use presql_core::{Clause, ClauseKind, Sentence};

/// A named subquery inside a WITH clause: `name AS (<sentence>)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithEntry {
    pub name: String,
    pub sentence: Sentence,
}

impl WithEntry {
    pub fn new(name: impl Into<String>, sentence: Sentence) -> Self {
        Self {
            name: name.into(),
            sentence,
        }
    }

    fn render(&self) -> String {
        format!("{} AS ({})", self.name, self.sentence.render())
    }
}

impl<S: Into<String>> From<(S, Sentence)> for WithEntry {
    fn from((name, sentence): (S, Sentence)) -> Self {
        Self::new(name, sentence)
    }
}

fn build(prefix: &str, entries: impl IntoIterator<Item = impl Into<WithEntry>>) -> Clause {
    let body = entries
        .into_iter()
        .map(|e| e.into().render())
        .collect::<Vec<_>>()
        .join(", ");
    if body.is_empty() {
        tracing::trace!("{} without entries renders nothing", prefix);
        Clause::new(ClauseKind::With, String::new())
    } else {
        Clause::new(ClauseKind::With, format!("{prefix} {body}"))
    }
}

/// WITH clause; each nested sentence is rendered recursively.
///
/// ```
/// use presql_query::{SentenceBuilder, with};
///
/// let t1 = SentenceBuilder::select(["name"]).from(["users"]).build();
/// let clause = with([("t1", t1)]);
/// assert_eq!(clause.render(), "WITH t1 AS (SELECT name FROM users)");
/// ```
pub fn with(entries: impl IntoIterator<Item = impl Into<WithEntry>>) -> Clause {
    build("WITH", entries)
}

/// WITH RECURSIVE clause.
pub fn with_recursive(entries: impl IntoIterator<Item = impl Into<WithEntry>>) -> Clause {
    build("WITH RECURSIVE", entries)
}
