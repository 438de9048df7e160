//! Core type definitions for the relation data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    pub fn new(id: u64) -> Self {
        EmployeeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmployeeId({})", self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        EmployeeId(id)
    }
}

/// A reference to a person as supplied by the upstream data source.
///
/// Upstream entries arrive over a JSON contract and may be partial; an
/// entry missing either `id` or `name` is malformed and is skipped by
/// the builders rather than raising.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PersonRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        PersonRef {
            id: Some(EmployeeId::new(id)),
            name: Some(name.into()),
        }
    }

    /// Both fields, or `None` if the entry is malformed.
    pub fn parts(&self) -> Option<(EmployeeId, &str)> {
        match (self.id, self.name.as_deref()) {
            (Some(id), Some(name)) => Some((id, name)),
            _ => None,
        }
    }
}

/// A project collaborator: a person reference annotated with the
/// project they collaborate on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

impl Collaborator {
    pub fn new(id: u64, name: impl Into<String>, project: impl Into<String>) -> Self {
        Collaborator {
            id: Some(EmployeeId::new(id)),
            name: Some(name.into()),
            project_name: Some(project.into()),
        }
    }

    pub fn parts(&self) -> Option<(EmployeeId, &str)> {
        match (self.id, self.name.as_deref()) {
            (Some(id), Some(name)) => Some((id, name)),
            _ => None,
        }
    }
}
