//! Core emitter struct and record collection.

use std::collections::HashMap;

use cyphergen_core::{EntityGraph, EntityId};

use super::{Config, Record, RecordTree};
use crate::{Result, ensure_unique_attributes, lookup};

/// Record emitter over any entity graph.
pub struct RecordEmitter<'g, G: EntityGraph + ?Sized> {
    pub(super) graph: &'g G,
    pub(super) config: Config,

    /// Entity -> assigned record name
    pub(super) names: HashMap<EntityId, String>,
    /// Record name -> (owning entity, attribute path it was first reached by)
    pub(super) owners: HashMap<String, (EntityId, String)>,
}

impl<'g, G: EntityGraph + ?Sized> RecordEmitter<'g, G> {
    pub fn new(graph: &'g G, config: Config) -> Self {
        Self {
            graph,
            config,
            names: HashMap::new(),
            owners: HashMap::new(),
        }
    }

    /// Name and collect the records reachable from `roots`.
    ///
    /// All names are assigned before any record is collected, so the tree
    /// never holds a record whose name a later root would have changed.
    pub fn build(mut self, roots: &[EntityId]) -> Result<RecordTree> {
        for &root in roots {
            self.assign_names(root)?;
        }

        let mut tree = RecordTree::default();
        for &root in roots {
            self.collect(root, &mut tree)?;
        }
        tree.names = self.names;

        log::debug!(
            "generated {} records from {} roots",
            tree.records.len(),
            roots.len()
        );
        Ok(tree)
    }

    /// Build and render the records reachable from `roots`.
    pub fn emit(self, roots: &[EntityId]) -> Result<String> {
        let config = self.config.clone();
        let tree = self.build(roots)?;
        Ok(tree.render(&config))
    }

    /// Pre-order, first occurrence wins.
    fn collect(&self, id: EntityId, tree: &mut RecordTree) -> Result<()> {
        if tree.index.contains_key(&id) {
            return Ok(());
        }

        let entity = lookup(self.graph, id)?;
        ensure_unique_attributes(entity)?;
        let name = self.names.get(&id).cloned().unwrap_or_else(|| entity.name().to_string());
        let fields = entity
            .attributes()
            .iter()
            .map(|a| (a.name().to_string(), a.type_expr()))
            .collect();
        tree.push(Record {
            name,
            entity: id,
            fields,
        });

        for target in entity.attributes().iter().filter_map(|a| a.target()) {
            self.collect(target, tree)?;
        }
        Ok(())
    }
}
