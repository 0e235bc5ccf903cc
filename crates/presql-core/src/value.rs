//! Clause arguments.

use crate::clause::Clause;
use crate::sentence::Sentence;
use std::fmt;

/// A single argument passed to a clause constructor or expression helper.
///
/// Arguments are emitted verbatim; nothing is quoted or escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Raw SQL text
    Text(String),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal (`true` / `false`)
    Bool(bool),
    /// Nested sentence, rendered without parentheses
    Sentence(Box<Sentence>),
    /// Argument switched off; skipped when joining
    Omitted,
}

impl Fragment {
    /// Keep `value` only when `active` is true.
    ///
    /// ```
    /// use presql_core::Fragment;
    ///
    /// assert_eq!(Fragment::active("a = 1", true), Fragment::from("a = 1"));
    /// assert!(Fragment::active("a = 1", false).is_omitted());
    /// ```
    pub fn active(value: impl Into<Fragment>, active: bool) -> Self {
        if active { value.into() } else { Fragment::Omitted }
    }

    pub const fn is_omitted(&self) -> bool {
        matches!(self, Fragment::Omitted)
    }

    /// Render this argument, or `None` if it was omitted or renders empty.
    pub fn render(&self) -> Option<String> {
        match self {
            Fragment::Omitted => None,
            Fragment::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(s) => f.write_str(s),
            Fragment::Int(n) => write!(f, "{n}"),
            Fragment::Float(n) => write!(f, "{n}"),
            Fragment::Bool(b) => write!(f, "{b}"),
            Fragment::Sentence(s) => f.write_str(&s.render()),
            Fragment::Omitted => Ok(()),
        }
    }
}

/// Join the arguments with `sep`, skipping omitted and empty ones.
pub fn join_fragments<I>(args: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let mut out = String::new();
    for arg in args {
        let Some(text) = arg.into().render() else {
            continue;
        };
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(&text);
    }
    out
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Fragment::Text(s.to_string())
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::Text(s)
    }
}

impl From<&String> for Fragment {
    fn from(s: &String) -> Self {
        Fragment::Text(s.clone())
    }
}

impl From<bool> for Fragment {
    fn from(b: bool) -> Self {
        Fragment::Bool(b)
    }
}

macro_rules! int_fragment {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fragment {
                fn from(n: $t) -> Self {
                    Fragment::Int(i64::from(n))
                }
            }
        )*
    };
}

int_fragment!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Fragment {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(v) => Fragment::Int(v),
            Err(_) => Fragment::Text(n.to_string()),
        }
    }
}

impl From<u64> for Fragment {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(v) => Fragment::Int(v),
            Err(_) => Fragment::Text(n.to_string()),
        }
    }
}

impl From<f32> for Fragment {
    fn from(n: f32) -> Self {
        Fragment::Float(f64::from(n))
    }
}

impl From<f64> for Fragment {
    fn from(n: f64) -> Self {
        Fragment::Float(n)
    }
}

impl From<Sentence> for Fragment {
    fn from(s: Sentence) -> Self {
        Fragment::Sentence(Box::new(s))
    }
}

impl From<&Sentence> for Fragment {
    fn from(s: &Sentence) -> Self {
        Fragment::Sentence(Box::new(s.clone()))
    }
}

impl From<Clause> for Fragment {
    fn from(c: Clause) -> Self {
        if c.is_empty() {
            Fragment::Omitted
        } else {
            Fragment::Text(c.into_text())
        }
    }
}

impl From<&Clause> for Fragment {
    fn from(c: &Clause) -> Self {
        if c.is_empty() {
            Fragment::Omitted
        } else {
            Fragment::Text(c.render().to_string())
        }
    }
}

impl<T: Into<Fragment>> From<Option<T>> for Fragment {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Fragment::Omitted,
        }
    }
}
