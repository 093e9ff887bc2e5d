//! Cypher query fragment emission.
//!
//! Renders an entity as a map projection over a bound variable. Properties
//! become field accesses; relationships become pattern comprehensions that
//! bind a fresh variable and project the reached entity recursively:
//!
//! ```text
//! {`name`:v0.name,`actedIn`:[(v0)-[:ACTED_IN]->(v1)|{`title`:v1.title}]}
//! ```
//!
//! A relationship holder binds the relationship to `vR` and projects the
//! relationship entity's own properties over it. The node at the far end is
//! bound to `vN` but never projected: a relationship entity that declares its
//! `start`/`end` endpoints fails with [`Construct::EndpointOfRelationship`],
//! so only endpoint-free relationship entities produce a fragment.
//!
//! [`Construct::EndpointOfRelationship`]: crate::Construct::EndpointOfRelationship

mod config;
mod emitter;


pub use config::Config;
pub use emitter::FragmentEmitter;

use cyphergen_core::{EntityGraph, EntityId};

use crate::Result;

/// Emit the fragment for `root`, bound to the first fresh variable (`v0`).
pub fn emit<G: EntityGraph + ?Sized>(graph: &G, root: EntityId) -> Result<String> {
    FragmentEmitter::new(graph, Config::default()).emit(root)
}

/// Emit the fragment for `root` bound to a caller-chosen variable.
pub fn emit_bound<G: EntityGraph + ?Sized>(
    graph: &G,
    root: EntityId,
    variable: &str,
) -> Result<String> {
    FragmentEmitter::new(graph, Config::default()).emit_bound(root, variable)
}

/// Emit the fragment for `root` with custom config.
pub fn emit_with_config<G: EntityGraph + ?Sized>(
    graph: &G,
    root: EntityId,
    config: Config,
) -> Result<String> {
    FragmentEmitter::new(graph, config).emit(root)
}
