//! Warning taxonomy for relation resolution and graph building
//!
//! The engine has no fatal errors: every anomaly degrades to "omit the
//! affected node/edge". The strict entry points (`resolve_chain`,
//! `build_with_report`) collect one [`RelationWarning`] per omission so
//! callers can surface them; the lenient entry points discard them.

use crate::relation::EmployeeId;
use thiserror::Error;

/// A non-fatal anomaly encountered while resolving relations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationWarning {
    /// The requested employee has no relation record. The build still
    /// returns an empty chain or empty graph.
    #[error("employee {0} has no relation record")]
    NotFound(EmployeeId),

    /// A superior reference could not be matched against any record.
    #[error("superior reference {raw:?} does not match any record")]
    UnresolvedReference { raw: String },

    /// A superior reference matched more than one record by name.
    /// The reference is skipped rather than resolved to an arbitrary
    /// first match.
    #[error("superior reference {raw:?} matches {matches} records")]
    AmbiguousReference { raw: String, matches: usize },

    /// An input entry is missing its id or name and was skipped.
    #[error("{context} entry at index {index} is missing an id or name")]
    MalformedEntry {
        context: &'static str,
        index: usize,
    },
}
