//! Record type generation.
//!
//! Walks an entity tree and produces one record declaration per distinct
//! entity. Record names are the entity names, except where an entity's name
//! already occurs among its ancestors: then the shortest trailing run of
//! ancestor names that tells the occurrences apart is prepended (see
//! [`disambiguate`]).
//!
//! # Example
//!
//! ```ignore
//! let schema = cyphergen_compiler::merge(graph)?;
//! let text = cyphergen_compiler::records::emit_schema(&schema)?;
//! ```

mod colors;
mod config;
mod emitter;
mod naming;
mod render;
mod tree;

#[cfg(test)]
mod records_tests;

pub use colors::RecordColors;
pub use config::Config;
pub use emitter::RecordEmitter;
pub use naming::disambiguate;
pub use tree::{Record, RecordTree};

use cyphergen_core::{EntityGraph, EntityId};

use crate::Result;

/// Emit records for `root` and everything it reaches.
pub fn emit<G: EntityGraph + ?Sized>(graph: &G, root: EntityId) -> Result<String> {
    emit_with_config(graph, root, Config::default())
}

/// Emit records for `root` with custom config.
pub fn emit_with_config<G: EntityGraph + ?Sized>(
    graph: &G,
    root: EntityId,
    config: Config,
) -> Result<String> {
    RecordEmitter::new(graph, config).emit(&[root])
}

/// Emit records for every root of the graph in one pass.
pub fn emit_schema<G: EntityGraph + ?Sized>(graph: &G) -> Result<String> {
    RecordEmitter::new(graph, Config::default()).emit(graph.roots())
}

/// Build the record tree without rendering it.
pub fn build<G: EntityGraph + ?Sized>(graph: &G, roots: &[EntityId]) -> Result<RecordTree> {
    RecordEmitter::new(graph, Config::default()).build(roots)
}
