//! Debug view of the entity tree reachable from a root.
//!
//! One attribute per line, reached entities indented below their holder:
//!
//! ```text
//! Person
//!   p name: String
//!   n actedIn: -[:ACTED_IN]-> List<Movie>
//!     p title: String
//!   n follows: -[:FOLLOWS]-> List<Person> (recursive)
//! ```
//!
//! Attribute kinds: `p` property, `n` node, `r` relationship, `s`/`e`
//! start/end endpoint.

use cyphergen_core::{Attribute, Entity, EntityGraph, EntityId, IndentedString, Role};

use crate::{Result, lookup};

/// Dump the tree reachable from `root`.
pub fn dump<G: EntityGraph + ?Sized>(graph: &G, root: EntityId) -> Result<String> {
    let mut out = IndentedString::default();
    Dumper::new(graph).entity(root, &mut out)?;
    out.push_char('\n');
    Ok(out.finish())
}

/// Dump every root of `graph`, separated by blank lines.
pub fn dump_schema<G: EntityGraph + ?Sized>(graph: &G) -> Result<String> {
    let mut out = IndentedString::default();
    for (i, &root) in graph.roots().iter().enumerate() {
        if i > 0 {
            out.newline();
            out.newline();
        }
        Dumper::new(graph).entity(root, &mut out)?;
    }
    if !out.is_empty() {
        out.push_char('\n');
    }
    Ok(out.finish())
}

struct Dumper<'g, G: EntityGraph + ?Sized> {
    graph: &'g G,
    /// Entities expanded on the current line of descent
    ancestors: Vec<EntityId>,
}

impl<'g, G: EntityGraph + ?Sized> Dumper<'g, G> {
    fn new(graph: &'g G) -> Self {
        Self {
            graph,
            ancestors: Vec::new(),
        }
    }

    fn entity(&mut self, id: EntityId, out: &mut IndentedString) -> Result<()> {
        let entity = lookup(self.graph, id)?;
        out.push(entity.name());
        self.body(id, entity, out)
    }

    fn body(&mut self, id: EntityId, entity: &'g Entity, out: &mut IndentedString) -> Result<()> {
        self.ancestors.push(id);
        let mut result = Ok(());
        out.indented(|out| {
            result = entity
                .attributes()
                .iter()
                .try_for_each(|attribute| self.attribute(attribute, out));
        });
        self.ancestors.pop();
        result
    }

    fn attribute(&mut self, attribute: &'g Attribute, out: &mut IndentedString) -> Result<()> {
        let graph = self.graph;
        let target = match attribute.target() {
            Some(id) => Some((id, lookup(graph, id)?)),
            None => None,
        };
        let ty = attribute
            .type_expr()
            .render(&|id| graph.get(id).map_or("", Entity::name));

        out.newline();
        out.push(&format!("{} {}: ", kind(attribute), attribute.name()));
        match attribute {
            Attribute::Node(n) => out.push(&format!(
                "{}:{}{} ",
                n.direction.arrow_start(),
                n.relationship_type,
                n.direction.arrow_end()
            )),
            Attribute::Relationship(r) => out.push(&format!(
                "{}:{}{} ",
                r.direction.arrow_start(),
                r.relationship_type,
                r.direction.arrow_end()
            )),
            Attribute::Property(_) | Attribute::Endpoint(_) => {}
        }
        out.push(&ty);

        let Some((id, entity)) = target else {
            return Ok(());
        };
        if self.ancestors.contains(&id) {
            out.push(" (recursive)");
            return Ok(());
        }
        self.body(id, entity, out)
    }
}

fn kind(attribute: &Attribute) -> char {
    match attribute {
        Attribute::Property(_) => 'p',
        Attribute::Node(_) => 'n',
        Attribute::Relationship(_) => 'r',
        Attribute::Endpoint(e) => match e.role {
            Role::Start => 's',
            Role::End => 'e',
        },
    }
}
