//! Shared schema fixtures.

use cyphergen_core::{EntityId, Multiplicity, SchemaGraph, ValueType};

use crate::{MergedSchema, merge};

/// Movie schema as an author would write it: `Movie` and `Person` are
/// declared again wherever they are reached from.
///
/// ```text
/// Person (root)            Movie (root)
///   name, born?              title, tagline?
///   actedIn -> [Movie]       director <- Person?
///     title                    name
///   follows -> [Person]
/// ```
pub fn movie_graph() -> SchemaGraph {
    let mut graph = SchemaGraph::new();
    let person = graph.root("Person");
    let nested_movie = graph.declare("Movie");
    let movie = graph.root("Movie");
    let director = graph.declare("Person");

    graph
        .define(person)
        .property("name", ValueType::String)
        .nullable_property("born", ValueType::Int)
        .outgoing("actedIn", "ACTED_IN", Multiplicity::Many, nested_movie)
        .outgoing("follows", "FOLLOWS", Multiplicity::Many, person);
    graph.define(nested_movie).property("title", ValueType::String);
    graph
        .define(movie)
        .property("title", ValueType::String)
        .nullable_property("tagline", ValueType::String)
        .incoming("director", "DIRECTED", Multiplicity::OneOrZero, director);
    graph.define(director).property("name", ValueType::String);
    graph
}

pub fn merged_movies() -> MergedSchema {
    merge(movie_graph()).expect("movie fixture merges")
}

/// `A -> B -> C`, all names distinct.
pub fn chain_graph() -> (SchemaGraph, EntityId) {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b = graph.declare("B");
    let c = graph.declare("C");
    graph
        .define(a)
        .property("id", ValueType::Long)
        .outgoing("b", "HAS", Multiplicity::One, b);
    graph
        .define(b)
        .outgoing("c", "HAS", Multiplicity::OneOrZero, c);
    graph.define(c).property("label", ValueType::String);
    (graph, a)
}

/// Projection tree `A -> B -> A'` where `A'` is a separate, narrower
/// declaration of `A`.
pub fn repeated_name_graph() -> (SchemaGraph, EntityId) {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b = graph.declare("B");
    let inner_a = graph.declare("A");
    graph
        .define(a)
        .property("id", ValueType::Long)
        .outgoing("b", "TO", Multiplicity::Many, b);
    graph
        .define(b)
        .property("weight", ValueType::Double)
        .outgoing("a", "TO", Multiplicity::One, inner_a);
    graph.define(inner_a).property("id", ValueType::Long);
    (graph, a)
}

/// Acyclic projection of the movie schema, as a query would select it.
///
/// ```text
/// Person (root)
///   name
///   actedIn -> [Movie]
///     title
///     director <- Person?
///       name
/// ```
pub fn projection_graph() -> (SchemaGraph, EntityId) {
    let mut graph = SchemaGraph::new();
    let person = graph.root("Person");
    let movie = graph.declare("Movie");
    let director = graph.declare("Person");
    graph
        .define(person)
        .property("name", ValueType::String)
        .outgoing("actedIn", "ACTED_IN", Multiplicity::Many, movie);
    graph
        .define(movie)
        .property("title", ValueType::String)
        .incoming("director", "DIRECTED", Multiplicity::OneOrZero, director);
    graph.define(director).property("name", ValueType::String);
    (graph, person)
}
