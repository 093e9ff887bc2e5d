//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use cyphergen_core::EntityId;

use crate::records::RecordTree;

impl RecordTree {
    pub(crate) fn ensure_name(&self, entity: EntityId) -> &str {
        self.name_of(entity).unwrap_or_else(|| {
            panic!(
                "RecordTree: entity {entity} has no record name \
                 (the naming pass must reach every collected field type)"
            )
        })
    }
}
