//! The clause model: one rendered SQL fragment tagged with its kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a clause is.
///
/// Most kinds map one-to-one onto a [`Slot`] of the sentence schema.
/// `Join` shares the FROM slot, and `PartitionBy`, `When` and `Else` are
/// inline fragments that never appear at sentence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseKind {
    /// WITH (common table expressions)
    With,
    /// SELECT
    Head,
    /// FROM
    Foot,
    /// LEFT/RIGHT/INNER/FULL/CROSS JOIN
    Join,
    /// WHERE
    Conditional,
    /// GROUP BY
    GroupBy,
    /// HAVING
    Having,
    /// WINDOW
    Window,
    /// ORDER BY
    Order,
    /// LIMIT
    Limit,
    /// OFFSET
    Offset,
    /// UNION
    Union,
    /// INTERSECT
    Intersect,
    /// EXCEPT
    Except,
    /// PARTITION BY (inside WINDOW or OVER)
    PartitionBy,
    /// WHEN ... THEN ... (inside CASE)
    When,
    /// ELSE ... (inside CASE)
    Else,
}

impl ClauseKind {
    /// The sentence slot this kind occupies, or `None` for inline fragments.
    pub const fn slot(self) -> Option<Slot> {
        match self {
            ClauseKind::With => Some(Slot::With),
            ClauseKind::Head => Some(Slot::Head),
            ClauseKind::Foot | ClauseKind::Join => Some(Slot::Foot),
            ClauseKind::Conditional => Some(Slot::Conditional),
            ClauseKind::GroupBy => Some(Slot::GroupBy),
            ClauseKind::Having => Some(Slot::Having),
            ClauseKind::Window => Some(Slot::Window),
            ClauseKind::Order => Some(Slot::Order),
            ClauseKind::Limit => Some(Slot::Limit),
            ClauseKind::Offset => Some(Slot::Offset),
            ClauseKind::Union => Some(Slot::Union),
            ClauseKind::Intersect => Some(Slot::Intersect),
            ClauseKind::Except => Some(Slot::Except),
            ClauseKind::PartitionBy | ClauseKind::When | ClauseKind::Else => None,
        }
    }

    /// The leading SQL keyword for this kind.
    pub const fn keyword(self) -> &'static str {
        match self {
            ClauseKind::With => "WITH",
            ClauseKind::Head => "SELECT",
            ClauseKind::Foot => "FROM",
            ClauseKind::Join => "JOIN",
            ClauseKind::Conditional => "WHERE",
            ClauseKind::GroupBy => "GROUP BY",
            ClauseKind::Having => "HAVING",
            ClauseKind::Window => "WINDOW",
            ClauseKind::Order => "ORDER BY",
            ClauseKind::Limit => "LIMIT",
            ClauseKind::Offset => "OFFSET",
            ClauseKind::Union => "UNION",
            ClauseKind::Intersect => "INTERSECT",
            ClauseKind::Except => "EXCEPT",
            ClauseKind::PartitionBy => "PARTITION BY",
            ClauseKind::When => "WHEN",
            ClauseKind::Else => "ELSE",
        }
    }
}

/// Position in the fixed sentence schema.
///
/// Declaration order is rendering order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Slot {
    With,
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
    Except,
}

impl Slot {
    /// All slots in rendering order.
    pub const ALL: [Slot; 13] = [
        Slot::With,
        Slot::Head,
        Slot::Foot,
        Slot::Conditional,
        Slot::GroupBy,
        Slot::Having,
        Slot::Window,
        Slot::Order,
        Slot::Limit,
        Slot::Offset,
        Slot::Union,
        Slot::Intersect,
        Slot::Except,
    ];

    /// Human-readable slot name, used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::With => "WITH",
            Slot::Head => "SELECT",
            Slot::Foot => "FROM",
            Slot::Conditional => "WHERE",
            Slot::GroupBy => "GROUP BY",
            Slot::Having => "HAVING",
            Slot::Window => "WINDOW",
            Slot::Order => "ORDER BY",
            Slot::Limit => "LIMIT",
            Slot::Offset => "OFFSET",
            Slot::Union => "UNION",
            Slot::Intersect => "INTERSECT",
            Slot::Except => "EXCEPT",
        }
    }

    /// Index of this slot in [`Slot::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One rendered SQL clause.
///
/// The text is fixed at construction; the clause carries no validation of
/// its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    kind: ClauseKind,
    text: String,
}

impl Clause {
    /// Create a clause from a kind and its fully rendered text.
    pub fn new(kind: ClauseKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a clause from a keyword prefix and already-joined arguments.
    ///
    /// Empty `joined` text yields an empty clause, which the assembler skips.
    pub fn keyword(kind: ClauseKind, joined: &str) -> Self {
        if joined.is_empty() {
            Self::new(kind, String::new())
        } else {
            Self::new(kind, format!("{} {}", kind.keyword(), joined))
        }
    }

    pub const fn kind(&self) -> ClauseKind {
        self.kind
    }

    /// The sentence slot of this clause, if any.
    pub const fn slot(&self) -> Option<Slot> {
        self.kind.slot()
    }

    /// The rendered text, unchanged.
    pub fn render(&self) -> &str {
        &self.text
    }

    /// True if every argument was omitted and the clause renders nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the clause and return its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
