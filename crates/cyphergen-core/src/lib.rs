#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for cyphergen graph schemas.
//!
//! - `model` - entities, attributes and their record type expressions
//! - `graph` - the authoring arena ([`SchemaGraph`]) and the read-only
//!   [`EntityGraph`] view emitters consume
//! - `indented` - indentation-aware text buffer shared by the emitters

mod graph;
mod indented;
mod invariants;
mod model;


pub use graph::{EntityBuilder, EntityGraph, SchemaGraph};
pub use indented::IndentedString;
pub use model::{
    Attribute, Direction, EndpointOfRelationship, Entity, EntityId, Multiplicity,
    NodeViaRelationship, Property, RelationshipHolder, Role, TypeExpr, ValueType,
};
