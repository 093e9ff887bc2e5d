//! Map projection emitter with fresh-variable allocation.

use cyphergen_core::{Attribute, Direction, Entity, EntityGraph, EntityId};

use super::Config;
use crate::{Construct, Error, Result, ensure_unique_attributes, lookup};

/// Fragment emitter for one emission call.
///
/// Consumed by [`FragmentEmitter::emit`], so its variable counter is never
/// shared between calls.
pub struct FragmentEmitter<'g, G: EntityGraph + ?Sized> {
    graph: &'g G,
    config: Config,

    /// Number of the next fresh variable
    next_variable: u32,
    /// Entities projected by enclosing levels
    stack: Vec<EntityId>,
    /// Output buffer
    output: String,
}

impl<'g, G: EntityGraph + ?Sized> FragmentEmitter<'g, G> {
    pub fn new(graph: &'g G, config: Config) -> Self {
        Self {
            graph,
            config,
            next_variable: 0,
            stack: Vec::new(),
            output: String::new(),
        }
    }

    /// Allocate a fresh variable name.
    pub fn variable(&mut self) -> String {
        let name = format!("{}{}", self.config.variable_prefix, self.next_variable);
        self.next_variable += 1;
        name
    }

    /// Emit `root` bound to a fresh variable.
    pub fn emit(mut self, root: EntityId) -> Result<String> {
        let variable = self.variable();
        self.emit_bound(root, &variable)
    }

    /// Emit `root` bound to `variable`.
    pub fn emit_bound(mut self, root: EntityId, variable: &str) -> Result<String> {
        self.entity(root, variable)?;
        log::trace!(
            "fragment for {root} used {} variables",
            self.next_variable
        );
        Ok(self.output)
    }

    fn entity(&mut self, id: EntityId, variable: &str) -> Result<()> {
        let graph = self.graph;
        let entity = lookup(graph, id)?;
        ensure_unique_attributes(entity)?;

        self.stack.push(id);
        self.output.push('{');
        for (i, attribute) in entity.attributes().iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.attribute(entity, attribute, variable)?;
        }
        self.output.push('}');
        self.stack.pop();
        Ok(())
    }

    fn attribute(&mut self, owner: &Entity, attribute: &Attribute, variable: &str) -> Result<()> {
        match attribute {
            Attribute::Property(p) => {
                self.output
                    .push_str(&format!("`{}`:{}.{}", p.name, variable, p.name));
            }
            Attribute::Node(n) => {
                self.ensure_not_projected(owner, attribute, n.node)?;
                let node_variable = self.variable();
                self.output.push_str(&format!("`{}`:[", n.name));
                self.pattern(variable, "", &n.relationship_type, n.direction, &node_variable);
                self.output.push('|');
                self.entity(n.node, &node_variable)?;
                self.output.push(']');
            }
            Attribute::Relationship(r) => {
                self.ensure_not_projected(owner, attribute, r.relationship)?;
                let rel_variable = self.variable();
                let node_variable = self.variable();
                self.output.push_str(&format!("`{}`:[", r.name));
                self.pattern(
                    variable,
                    &rel_variable,
                    &r.relationship_type,
                    r.direction,
                    &node_variable,
                );
                self.output.push('|');
                self.entity(r.relationship, &rel_variable)?;
                self.output.push(']');
            }
            Attribute::Endpoint(e) => {
                return Err(unsupported(
                    Construct::EndpointOfRelationship,
                    owner,
                    &e.name,
                ));
            }
        }
        Ok(())
    }

    /// `(from)-[rel:TYPE]->(to)`, arrows flipped for incoming relationships.
    fn pattern(&mut self, from: &str, rel: &str, rel_type: &str, direction: Direction, to: &str) {
        self.output.push_str(&format!(
            "({from}){}{rel}:{rel_type}{}({to})",
            direction.arrow_start(),
            direction.arrow_end()
        ));
    }

    fn ensure_not_projected(
        &self,
        owner: &Entity,
        attribute: &Attribute,
        target: EntityId,
    ) -> Result<()> {
        if self.stack.contains(&target) {
            return Err(unsupported(
                Construct::RecursiveTraversal,
                owner,
                attribute.name(),
            ));
        }
        Ok(())
    }
}

fn unsupported(construct: Construct, owner: &Entity, attribute: &str) -> Error {
    Error::Unsupported {
        construct,
        entity: owner.name().to_string(),
        attribute: attribute.to_string(),
    }
}
