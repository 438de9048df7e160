//! Input records supplied by the external relation source
//!
//! The engine never fetches or groups this data itself: the chain
//! resolver receives the full record set already in memory, and the
//! network builder receives one employee's relations already grouped
//! by level, colleagues, and project collaborators.

use super::types::{Collaborator, EmployeeId, PersonRef};
use serde::{Deserialize, Serialize};

/// One employee's relation record.
///
/// Each entry in `superior_refs` is a raw string encoding a superior's
/// name, possibly followed by trailing annotation text, e.g.
/// `"Jane (VP)"`. Only the text before the first whitespace character
/// is the name; the rest is discarded during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationRecord {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub superior_refs: Vec<String>,
}

impl RelationRecord {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        RelationRecord {
            id: EmployeeId::new(id),
            name: name.into(),
            superior_refs: Vec::new(),
        }
    }

    pub fn with_superiors<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.superior_refs = refs.into_iter().map(Into::into).collect();
        self
    }
}

/// One employee's pre-grouped relation bundle, the input to the
/// network graph builder.
///
/// `management_levels[0]` is the employee themself; `management_levels[i]`
/// (i >= 1) holds the superiors at vertical distance i. Level indices
/// are positional: an empty level emits nothing but still counts
/// toward the vertical distance of the levels above it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInput {
    #[serde(default)]
    pub employee: Option<PersonRef>,
    #[serde(default)]
    pub management_levels: Vec<Vec<PersonRef>>,
    #[serde(default)]
    pub colleagues: Vec<PersonRef>,
    #[serde(default)]
    pub collaborators: Vec<Collaborator>,
}

impl NetworkInput {
    /// A bundle containing only the employee, no relations.
    pub fn for_employee(id: u64, name: impl Into<String>) -> Self {
        let employee = PersonRef::new(id, name);
        NetworkInput {
            employee: Some(employee.clone()),
            management_levels: vec![vec![employee]],
            colleagues: Vec::new(),
            collaborators: Vec::new(),
        }
    }
}
