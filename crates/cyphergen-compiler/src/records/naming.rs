//! Record name assignment.

use std::collections::HashMap;

use cyphergen_core::{EntityGraph, EntityId};

use super::RecordEmitter;
use crate::{Error, Result, lookup};

/// Shortest trailing run of `path` that still contains the first occurrence
/// of every distinct name in it, concatenated.
///
/// `path` runs from the root to the entity being named. A path without
/// repeats yields its last element unchanged.
///
/// # Examples
/// ```
/// use cyphergen_compiler::records::disambiguate;
/// assert_eq!(disambiguate(&["A", "B", "C"]), "C");
/// assert_eq!(disambiguate(&["A", "B", "A"]), "BA");
/// ```
pub fn disambiguate<S: AsRef<str>>(path: &[S]) -> String {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, name) in path.iter().enumerate() {
        first_seen.entry(name.as_ref()).or_insert(i);
    }

    let cut = first_seen.values().copied().max().unwrap_or(0);
    path[cut..].iter().map(|name| name.as_ref()).collect()
}

/// Position of an entity occurrence while walking the tree.
struct Walk {
    /// Assigned names from the root down to the current entity.
    path: Vec<String>,
    /// Entities currently being walked (cycle detection).
    ancestors: Vec<EntityId>,
}

impl<G: EntityGraph + ?Sized> RecordEmitter<'_, G> {
    /// Naming pass: give every entity reachable from `root` a record name.
    ///
    /// Names assigned higher up are what deeper levels see in their path.
    /// An entity already named through an earlier path keeps that name.
    pub(super) fn assign_names(&mut self, root: EntityId) -> Result<()> {
        let site = lookup(self.graph, root)?.name().to_string();
        let mut walk = Walk {
            path: Vec::new(),
            ancestors: Vec::new(),
        };
        self.assign_name(root, &site, &mut walk)
    }

    fn assign_name(&mut self, id: EntityId, site: &str, walk: &mut Walk) -> Result<()> {
        if walk.ancestors.contains(&id) || self.names.contains_key(&id) {
            return Ok(());
        }

        let graph = self.graph;
        let entity = lookup(graph, id)?;

        walk.path.push(entity.name().to_string());
        let name = disambiguate(&walk.path);
        if name != entity.name() {
            log::trace!("record for `{site}` renamed to `{name}`");
        }
        self.claim(&name, id, site)?;
        if let Some(last) = walk.path.last_mut() {
            last.clone_from(&name);
        }
        self.names.insert(id, name);

        walk.ancestors.push(id);
        for attribute in entity.attributes() {
            if let Some(target) = attribute.target() {
                let child_site = format!("{site}.{}", attribute.name());
                self.assign_name(target, &child_site, walk)?;
            }
        }
        walk.ancestors.pop();
        walk.path.pop();
        Ok(())
    }

    fn claim(&mut self, name: &str, id: EntityId, site: &str) -> Result<()> {
        match self.owners.get(name) {
            Some((owner, first)) if *owner != id => Err(Error::NameCollision {
                name: name.to_string(),
                first: first.clone(),
                second: site.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.owners
                    .insert(name.to_string(), (id, site.to_string()));
                Ok(())
            }
        }
    }
}
