//! Management-chain resolution
//!
//! Flattens one employee's relation record into the ordered
//! "self -> superiors" sequence used for breadcrumb-style display.
//! Traversal is hard-capped at two superior levels above the employee
//! and deliberately performs no deduplication and no cycle guard: a
//! manager reachable through two different direct superiors appears
//! twice, and callers render the chain as-is.

use crate::relation::{EmployeeId, RelationRecord};
use crate::warning::RelationWarning;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Vertical position of a chain entry relative to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainLevel {
    #[serde(rename = "self")]
    Current,
    #[serde(rename = "direct-superior")]
    DirectSuperior,
    #[serde(rename = "senior-leadership")]
    SeniorLeadership,
}

/// One entry of the resolved management chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainEntry {
    pub id: EmployeeId,
    pub name: String,
    pub level: ChainLevel,
}

impl ChainEntry {
    fn from_record(record: &RelationRecord, level: ChainLevel) -> Self {
        ChainEntry {
            id: record.id,
            name: record.name.clone(),
            level,
        }
    }
}

/// Result of the strict resolver: the chain plus every omission that
/// the lenient resolver would have discarded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainResolution {
    pub entries: Vec<ChainEntry>,
    pub warnings: Vec<RelationWarning>,
}

/// Extract the candidate manager name from a raw superior reference:
/// the substring before the first whitespace character. Trailing
/// annotation text such as `"(VP)"` is discarded.
fn superior_name(raw: &str) -> Option<&str> {
    raw.split_whitespace().next()
}

fn find_by_id(records: &[RelationRecord], id: EmployeeId) -> Option<&RelationRecord> {
    records.iter().find(|r| r.id == id)
}

fn find_by_name<'a>(records: &'a [RelationRecord], name: &str) -> Option<&'a RelationRecord> {
    records.iter().find(|r| r.name == name)
}

/// Build the management chain for `employee_id`.
///
/// Superiors are resolved by name equality against `records`; an
/// unresolved or empty reference is skipped silently. An employee with
/// no record produces an empty chain. Ambiguous names resolve to the
/// first matching record; use [`resolve_chain`] to detect ambiguity
/// instead.
pub fn build_chain(employee_id: EmployeeId, records: &[RelationRecord]) -> Vec<ChainEntry> {
    let Some(record) = find_by_id(records, employee_id) else {
        debug!(%employee_id, "no relation record, returning empty chain");
        return Vec::new();
    };

    let mut chain = vec![ChainEntry::from_record(record, ChainLevel::Current)];

    for raw in &record.superior_refs {
        let Some(name) = superior_name(raw) else {
            trace!(%raw, "empty superior reference skipped");
            continue;
        };
        let Some(superior) = find_by_name(records, name) else {
            trace!(%raw, "unresolved superior reference skipped");
            continue;
        };
        chain.push(ChainEntry::from_record(superior, ChainLevel::DirectSuperior));

        // One further level only; never deeper.
        for raw in &superior.superior_refs {
            let Some(name) = superior_name(raw) else {
                continue;
            };
            if let Some(senior) = find_by_name(records, name) {
                chain.push(ChainEntry::from_record(senior, ChainLevel::SeniorLeadership));
            }
        }
    }

    debug!(%employee_id, entries = chain.len(), "management chain resolved");
    chain
}

/// Strict variant of [`build_chain`]: identical traversal, but every
/// omission is collected as a warning, and a name matching more than
/// one record is reported as ambiguous and skipped rather than
/// resolved to the first match.
pub fn resolve_chain(employee_id: EmployeeId, records: &[RelationRecord]) -> ChainResolution {
    let mut resolution = ChainResolution::default();

    let Some(record) = find_by_id(records, employee_id) else {
        resolution
            .warnings
            .push(RelationWarning::NotFound(employee_id));
        return resolution;
    };

    resolution
        .entries
        .push(ChainEntry::from_record(record, ChainLevel::Current));

    for raw in &record.superior_refs {
        if let Some(superior) = resolve_ref(raw, records, &mut resolution.warnings) {
            resolution
                .entries
                .push(ChainEntry::from_record(superior, ChainLevel::DirectSuperior));

            for raw in &superior.superior_refs {
                if let Some(senior) = resolve_ref(raw, records, &mut resolution.warnings) {
                    resolution
                        .entries
                        .push(ChainEntry::from_record(senior, ChainLevel::SeniorLeadership));
                }
            }
        }
    }

    resolution
}

fn resolve_ref<'a>(
    raw: &str,
    records: &'a [RelationRecord],
    warnings: &mut Vec<RelationWarning>,
) -> Option<&'a RelationRecord> {
    let Some(name) = superior_name(raw) else {
        warnings.push(RelationWarning::UnresolvedReference {
            raw: raw.to_string(),
        });
        return None;
    };

    let mut matches = records.iter().filter(|r| r.name == name);
    let first = matches.next();
    let extra = matches.count();

    match first {
        None => {
            warnings.push(RelationWarning::UnresolvedReference {
                raw: raw.to_string(),
            });
            None
        }
        Some(_) if extra > 0 => {
            warnings.push(RelationWarning::AmbiguousReference {
                raw: raw.to_string(),
                matches: extra + 1,
            });
            None
        }
        Some(record) => Some(record),
    }
}
