//! cyphergen compiler: schema merge and text emitters.
//!
//! This crate turns an authored [`SchemaGraph`] into generated text:
//! - `merge` - canonicalizes entities by name into a [`MergedSchema`]
//! - `records` - record type declarations with disambiguated names
//! - `fragment` - Cypher map projections with pattern comprehensions
//! - `dump` - indented debug view of an entity tree

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dump;
pub mod fragment;
mod invariants;
pub mod merge;
pub mod records;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
pub mod test_utils;

pub use cyphergen_core::{EntityGraph, EntityId, SchemaGraph};
pub use merge::{MergedSchema, merge};

use std::collections::HashSet;
use std::fmt;

use cyphergen_core::Entity;

/// Attribute kinds a fragment cannot be generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Construct {
    /// `start`/`end` attribute of a relationship entity.
    EndpointOfRelationship,
    /// Holder whose target is already projected by an enclosing level.
    RecursiveTraversal,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOfRelationship => f.write_str("endpoint-of-relationship attribute"),
            Self::RecursiveTraversal => f.write_str("recursive traversal"),
        }
    }
}

/// Errors raised while merging or emitting a schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported construct in `{entity}.{attribute}`: {construct}")]
    Unsupported {
        construct: Construct,
        entity: String,
        attribute: String,
    },

    /// Two different entities resolved to the same record name.
    #[error("record name `{name}` is claimed by both `{first}` and `{second}`")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    #[error("attribute `{attribute}` is declared more than once on `{entity}`")]
    DuplicateAttribute { entity: String, attribute: String },

    /// An id that does not belong to the graph it was looked up in.
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),
}

/// Result type for merge and emission.
pub type Result<T> = std::result::Result<T, Error>;

/// Look up an entity, turning a dangling id into [`Error::UnknownEntity`].
pub(crate) fn lookup<G: EntityGraph + ?Sized>(
    graph: &G,
    id: EntityId,
) -> Result<&Entity> {
    graph.get(id).ok_or(Error::UnknownEntity(id))
}

/// Reject an entity that declares the same attribute name twice.
///
/// Merge checks canonical entities; the emitters check every entity they
/// reach, since they also accept unmerged graphs.
pub(crate) fn ensure_unique_attributes(entity: &Entity) -> Result<()> {
    let mut seen = HashSet::new();
    for attribute in entity.attributes() {
        if !seen.insert(attribute.name()) {
            return Err(Error::DuplicateAttribute {
                entity: entity.name().to_string(),
                attribute: attribute.name().to_string(),
            });
        }
    }
    Ok(())
}
