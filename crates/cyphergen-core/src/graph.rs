//! Entity arenas.
//!
//! [`SchemaGraph`] is the authoring-side arena: entities are declared first
//! (yielding ids) and defined afterwards, which is what lets a schema refer to
//! itself. Several entities in one graph may share a name until merge
//! collapses them.
//!
//! [`EntityGraph`] is the read-only view every emitter works against.

use crate::model::{
    Attribute, Direction, EndpointOfRelationship, Entity, EntityId, Multiplicity,
    NodeViaRelationship, Property, RelationshipHolder, Role, ValueType,
};

/// Read-only access to an arena of entities.
pub trait EntityGraph {
    /// Entity stored under `id`, if the id belongs to this graph.
    fn get(&self, id: EntityId) -> Option<&Entity>;

    /// Entry points in declaration order.
    fn roots(&self) -> &[EntityId];

    /// Number of entities in the arena.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all entities with their ids.
    fn iter(&self) -> Box<dyn Iterator<Item = (EntityId, &Entity)> + '_> {
        Box::new((0..self.len()).filter_map(move |i| {
            let id = EntityId::from_raw(i as u32);
            self.get(id).map(|entity| (id, entity))
        }))
    }
}

/// Unmerged schema: every declared entity, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaGraph {
    entities: Vec<Entity>,
    roots: Vec<EntityId>,
}

impl SchemaGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from already-built parts.
    ///
    /// Ids inside `entities` are not checked here; merge reports dangling ones.
    pub fn from_parts(entities: Vec<Entity>, roots: Vec<EntityId>) -> Self {
        Self { entities, roots }
    }

    pub fn into_parts(self) -> (Vec<Entity>, Vec<EntityId>) {
        (self.entities, self.roots)
    }

    /// Declare an empty entity. Define its attributes later with [`Self::define`].
    pub fn declare(&mut self, name: impl Into<String>) -> EntityId {
        self.insert(Entity::new(name))
    }

    /// Declare an entity and mark it as a root.
    pub fn root(&mut self, name: impl Into<String>) -> EntityId {
        let id = self.declare(name);
        self.roots.push(id);
        id
    }

    /// Add a fully built entity.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::from_raw(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Fluent attribute builder for a declared entity.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    pub fn define(&mut self, id: EntityId) -> EntityBuilder<'_> {
        EntityBuilder {
            entity: self.ensure_entity_mut(id),
        }
    }
}

impl EntityGraph for SchemaGraph {
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

/// Chained attribute declarations for one entity.
pub struct EntityBuilder<'g> {
    entity: &'g mut Entity,
}

impl EntityBuilder<'_> {
    pub fn property(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.attribute(Attribute::Property(Property::new(name, value_type)))
    }

    pub fn nullable_property(self, name: impl Into<String>, value_type: ValueType) -> Self {
        self.attribute(Attribute::Property(Property::nullable(name, value_type)))
    }

    /// Node reached over an outgoing `relationship_type` relationship.
    pub fn outgoing(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        node: EntityId,
    ) -> Self {
        self.node(name, relationship_type, multiplicity, node, Direction::Outgoing)
    }

    /// Node reached over an incoming `relationship_type` relationship.
    pub fn incoming(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        node: EntityId,
    ) -> Self {
        self.node(name, relationship_type, multiplicity, node, Direction::Incoming)
    }

    pub fn outgoing_relationship(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        relationship: EntityId,
    ) -> Self {
        self.relationship(
            name,
            relationship_type,
            multiplicity,
            relationship,
            Direction::Outgoing,
        )
    }

    pub fn incoming_relationship(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        relationship: EntityId,
    ) -> Self {
        self.relationship(
            name,
            relationship_type,
            multiplicity,
            relationship,
            Direction::Incoming,
        )
    }

    /// Start node of a relationship entity.
    pub fn start(self, name: impl Into<String>, node: EntityId) -> Self {
        self.endpoint(name, node, Role::Start)
    }

    /// End node of a relationship entity.
    pub fn end(self, name: impl Into<String>, node: EntityId) -> Self {
        self.endpoint(name, node, Role::End)
    }

    pub fn attribute(self, attribute: Attribute) -> Self {
        self.entity.push(attribute);
        self
    }

    fn node(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        node: EntityId,
        direction: Direction,
    ) -> Self {
        self.attribute(Attribute::Node(NodeViaRelationship {
            name: name.into(),
            relationship_type: relationship_type.into(),
            multiplicity,
            direction,
            node,
        }))
    }

    fn relationship(
        self,
        name: impl Into<String>,
        relationship_type: impl Into<String>,
        multiplicity: Multiplicity,
        relationship: EntityId,
        direction: Direction,
    ) -> Self {
        self.attribute(Attribute::Relationship(RelationshipHolder {
            name: name.into(),
            relationship_type: relationship_type.into(),
            multiplicity,
            direction,
            relationship,
        }))
    }

    fn endpoint(self, name: impl Into<String>, node: EntityId, role: Role) -> Self {
        self.attribute(Attribute::Endpoint(EndpointOfRelationship {
            name: name.into(),
            role,
            node,
        }))
    }
}
