//! Relation data model
//!
//! The read-only input contract supplied by the external relation
//! source: per-employee records with raw superior references, and the
//! pre-grouped bundle consumed by the network graph builder.

pub mod record;
pub mod types;

// Re-export main types
pub use record::{NetworkInput, RelationRecord};
pub use types::{Collaborator, EmployeeId, PersonRef};
