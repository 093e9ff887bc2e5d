//! The canonical, read-only schema produced by merge.

use indexmap::IndexMap;

use cyphergen_core::{Entity, EntityGraph, EntityId, SchemaGraph};

/// A schema in which every entity name denotes exactly one entity.
///
/// Entity ids are registry positions: `entity_models_by_name()[i]` is
/// `EntityId(i)`. There is no mutable access; reopen it into a
/// [`SchemaGraph`] with `SchemaGraph::from` to edit and merge again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedSchema {
    entities: Vec<Entity>,
    entity_models_by_name: IndexMap<String, EntityId>,
    roots: Vec<EntityId>,
}

impl MergedSchema {
    pub(super) fn new(entities: Vec<Entity>, roots: Vec<EntityId>) -> Self {
        let entity_models_by_name = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name().to_string(), EntityId::from_raw(i as u32)))
            .collect();
        Self {
            entities,
            entity_models_by_name,
            roots,
        }
    }

    /// Registry of canonical entities, in registration order.
    pub fn entity_models_by_name(&self) -> &IndexMap<String, EntityId> {
        &self.entity_models_by_name
    }

    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.entity_models_by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Entity> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Canonical entities, indexed by their id.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl EntityGraph for MergedSchema {
    fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    fn len(&self) -> usize {
        self.entities.len()
    }
}

impl From<MergedSchema> for SchemaGraph {
    fn from(schema: MergedSchema) -> Self {
        SchemaGraph::from_parts(schema.entities, schema.roots)
    }
}
