//! Error types for PreSQL operations.

use crate::clause::{ClauseKind, Slot};
use std::fmt;

/// The primary error type for all PreSQL operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sentence assembly errors (slot order, duplicates, missing SELECT)
    Sentence(SentenceError),
    /// CASE expression errors
    Case(CaseError),
    /// Configuration errors
    Config(ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceError {
    pub kind: SentenceErrorKind,
    /// The clause kind that triggered the error, if any
    pub clause: Option<ClauseKind>,
    /// Zero-based position of the offending clause in the input
    pub position: Option<usize>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceErrorKind {
    /// The same slot was filled twice
    DuplicateClauseKind,
    /// No SELECT clause was supplied
    MissingMandatoryClause,
    /// A clause appeared after a clause belonging to a later slot
    OrderViolation,
    /// A clause with no sentence slot (PARTITION BY, WHEN, ELSE) was supplied
    MisplacedClause,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseError {
    pub kind: CaseErrorKind,
    /// Zero-based position of the offending fragment
    pub position: Option<usize>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseErrorKind {
    /// ELSE followed by WHEN, more than one ELSE, or no WHEN at all
    MalformedCaseSequence,
    /// A fragment that is neither WHEN nor ELSE
    NotCaseFragment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

impl SentenceError {
    pub(crate) fn duplicate(slot: Slot, kind: ClauseKind, position: usize) -> Self {
        Self {
            kind: SentenceErrorKind::DuplicateClauseKind,
            clause: Some(kind),
            position: Some(position),
            message: format!("{} slot supplied more than once", slot.name()),
        }
    }

    pub(crate) fn missing_head() -> Self {
        Self {
            kind: SentenceErrorKind::MissingMandatoryClause,
            clause: Some(ClauseKind::Head),
            position: None,
            message: "a sentence requires a SELECT clause".to_string(),
        }
    }

    pub(crate) fn out_of_order(kind: ClauseKind, after: Slot, position: usize) -> Self {
        Self {
            kind: SentenceErrorKind::OrderViolation,
            clause: Some(kind),
            position: Some(position),
            message: format!("{} cannot follow {}", kind.keyword(), after.name()),
        }
    }

    pub(crate) fn misplaced(kind: ClauseKind, position: usize) -> Self {
        Self {
            kind: SentenceErrorKind::MisplacedClause,
            clause: Some(kind),
            position: Some(position),
            message: format!("{} is not a sentence-level clause", kind.keyword()),
        }
    }
}

impl CaseError {
    /// Create a malformed-sequence error at the given fragment position.
    pub fn malformed(position: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind: CaseErrorKind::MalformedCaseSequence,
            position,
            message: message.into(),
        }
    }

    /// Create an error for a fragment that is not WHEN/ELSE.
    pub fn not_case_fragment(kind: ClauseKind, position: usize) -> Self {
        Self {
            kind: CaseErrorKind::NotCaseFragment,
            position: Some(position),
            message: format!("{} cannot appear inside CASE", kind.keyword()),
        }
    }
}

impl Error {
    /// The sentence error kind, if this is a sentence error.
    pub fn sentence_kind(&self) -> Option<SentenceErrorKind> {
        match self {
            Error::Sentence(e) => Some(e.kind),
            _ => None,
        }
    }

    /// The CASE error kind, if this is a CASE error.
    pub fn case_kind(&self) -> Option<CaseErrorKind> {
        match self {
            Error::Case(e) => Some(e.kind),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sentence(e) => match e.position {
                Some(pos) => write!(f, "Sentence error at clause {}: {}", pos, e.message),
                None => write!(f, "Sentence error: {}", e.message),
            },
            Error::Case(e) => write!(f, "CASE error: {}", e.message),
            Error::Config(e) => write!(f, "Configuration error: {}", e.message),
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for SentenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SentenceError {}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CaseError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<SentenceError> for Error {
    fn from(err: SentenceError) -> Self {
        Error::Sentence(err)
    }
}

impl From<CaseError> for Error {
    fn from(err: CaseError) -> Self {
        Error::Case(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

/// Result type alias for PreSQL operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = Error::from(SentenceError::duplicate(Slot::Conditional, ClauseKind::Conditional, 3));
        assert_eq!(
            err.to_string(),
            "Sentence error at clause 3: WHERE slot supplied more than once"
        );
        assert_eq!(err.sentence_kind(), Some(SentenceErrorKind::DuplicateClauseKind));
        assert_eq!(err.case_kind(), None);
    }

    #[test]
    fn missing_head_has_no_position() {
        let err = Error::from(SentenceError::missing_head());
        assert_eq!(err.to_string(), "Sentence error: a sentence requires a SELECT clause");
    }

    #[test]
    fn order_violation_names_both_clauses() {
        let err = SentenceError::out_of_order(ClauseKind::Conditional, Slot::Order, 2);
        assert_eq!(err.message, "WHERE cannot follow ORDER BY");
    }

    #[test]
    fn case_error_conversion() {
        let err: Error = CaseError::malformed(Some(1), "ELSE must be last").into();
        assert_eq!(err.case_kind(), Some(CaseErrorKind::MalformedCaseSequence));
        assert_eq!(err.to_string(), "CASE error: ELSE must be last");
    }
}
