//! Registry construction and holder rewiring.

use std::collections::VecDeque;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

use cyphergen_core::{Entity, EntityId, SchemaGraph};

use super::MergedSchema;
use crate::{Error, Result, ensure_unique_attributes};

/// Merge an authored graph into its canonical form.
///
/// Roots are registered before anything else, so a root always wins over a
/// nested declaration of the same name; among roots, the first one wins.
/// Each canonical root is then walked breadth-first. A holder whose target
/// name is already registered is redirected there and not descended into.
pub fn merge(graph: SchemaGraph) -> Result<MergedSchema> {
    let (entities, roots) = graph.into_parts();

    let plan = {
        let mut merger = Merger::new(&entities);
        merger.register_roots(&roots)?;
        for &root in &roots {
            merger.traverse(root)?;
        }
        merger.into_plan()
    };

    log::debug!(
        "merged {} declared entities into {} canonical ({} roots)",
        entities.len(),
        plan.canonical.len(),
        roots.len()
    );

    plan.apply(entities, &roots)
}

struct Merger<'a> {
    entities: &'a [Entity],
    /// Name -> id of the canonical declaration in the source arena.
    registry: IndexMap<&'a str, EntityId>,
}

impl<'a> Merger<'a> {
    fn new(entities: &'a [Entity]) -> Self {
        Self {
            entities,
            registry: IndexMap::new(),
        }
    }

    fn entity(&self, id: EntityId) -> Result<&'a Entity> {
        self.entities.get(id.index()).ok_or(Error::UnknownEntity(id))
    }

    fn register_roots(&mut self, roots: &[EntityId]) -> Result<()> {
        for &root in roots {
            let entity = self.entity(root)?;
            match self.registry.entry(entity.name()) {
                Entry::Vacant(e) => {
                    log::trace!("registered root `{}` ({root})", entity.name());
                    e.insert(root);
                }
                Entry::Occupied(e) => {
                    log::trace!(
                        "root `{}` ({root}) shadowed by {}",
                        entity.name(),
                        e.get()
                    );
                }
            }
        }
        Ok(())
    }

    fn traverse(&mut self, root: EntityId) -> Result<()> {
        let name = self.entity(root)?.name();
        if self.registry.get(name) != Some(&root) {
            return Ok(());
        }

        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let entity = self.entity(id)?;
            for target in entity.attributes().iter().filter_map(|a| a.target()) {
                let target_name = self.entity(target)?.name();
                match self.registry.entry(target_name) {
                    Entry::Occupied(e) => {
                        if *e.get() != target {
                            log::trace!(
                                "`{}`: {target} merged into canonical {}",
                                target_name,
                                e.get()
                            );
                        }
                    }
                    Entry::Vacant(e) => {
                        log::trace!("registered `{target_name}` ({target}) via `{}`", entity.name());
                        e.insert(target);
                        queue.push_back(target);
                    }
                }
            }
        }
        Ok(())
    }

    fn into_plan(self) -> MergePlan {
        let canonical = self.registry.values().copied().collect();
        let remap = self
            .entities
            .iter()
            .map(|e| {
                self.registry
                    .get_index_of(e.name())
                    .map(|i| EntityId::from_raw(i as u32))
            })
            .collect();
        MergePlan { canonical, remap }
    }
}

/// Owned outcome of the traversal, applied once the source arena is free.
struct MergePlan {
    /// Source ids of canonical entities, in registry order.
    canonical: Vec<EntityId>,
    /// Source id -> merged id of the entity registered under the same name.
    remap: Vec<Option<EntityId>>,
}

impl MergePlan {
    fn resolve(&self, source: EntityId) -> Result<EntityId> {
        self.remap
            .get(source.index())
            .copied()
            .flatten()
            .ok_or(Error::UnknownEntity(source))
    }

    fn apply(self, entities: Vec<Entity>, roots: &[EntityId]) -> Result<MergedSchema> {
        let mut slots: Vec<Option<Entity>> = entities.into_iter().map(Some).collect();
        let mut merged = Vec::with_capacity(self.canonical.len());

        for &source in &self.canonical {
            let mut entity = slots
                .get_mut(source.index())
                .and_then(Option::take)
                .ok_or(Error::UnknownEntity(source))?;
            ensure_unique_attributes(&entity)?;
            for attribute in entity.attributes_mut() {
                if let Some(target) = attribute.target_mut() {
                    *target = self.resolve(*target)?;
                }
            }
            merged.push(entity);
        }

        let roots = roots
            .iter()
            .map(|&root| self.resolve(root))
            .collect::<Result<IndexSet<_>>>()?;

        Ok(MergedSchema::new(merged, roots.into_iter().collect()))
    }
}
