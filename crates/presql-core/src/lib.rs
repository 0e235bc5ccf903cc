//! Core types for PreSQL.
//!
//! This crate provides the clause-ordering and rendering model:
//!
//! - `Clause` / `ClauseKind` for one rendered SQL clause and what it is
//! - `Slot` for the fixed position of each clause kind in a query
//! - `Sentence` for a validated, ordered set of clauses and its rendering
//! - `Fragment` for the arguments clause constructors accept
//! - `Dialect` for the few fragments whose spelling is dialect-specific

pub mod clause;
pub mod dialect;
pub mod error;
pub mod sentence;
pub mod value;

pub use clause::{Clause, ClauseKind, Slot};
pub use dialect::Dialect;
pub use error::{
    CaseError, CaseErrorKind, ConfigError, Error, Result, SentenceError, SentenceErrorKind,
};
pub use sentence::{Sentence, q};
pub use value::{Fragment, join_fragments};
