//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{Entity, EntityId, SchemaGraph};

impl SchemaGraph {
    pub(crate) fn ensure_entity_mut(&mut self, id: EntityId) -> &mut Entity {
        self.get_mut(id).unwrap_or_else(|| {
            panic!(
                "SchemaGraph: entity {id} not found \
                 (ids must come from `declare`/`root` on the same graph)"
            )
        })
    }
}
