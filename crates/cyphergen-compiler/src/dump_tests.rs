use cyphergen_core::{EntityId, Multiplicity, SchemaGraph, ValueType};

use crate::Error;
use crate::dump::{dump, dump_schema};
use crate::test_utils::{merged_movies, movie_graph, projection_graph};

#[test]
fn projection_tree() {
    let (graph, root) = projection_graph();

    let res = dump(&graph, root).unwrap();

    insta::assert_snapshot!(res, @r"
    Person
      p name: String
      n actedIn: -[:ACTED_IN]-> List<Movie>
        p title: String
        n director: <-[:DIRECTED]- Person?
          p name: String
    ");
}

#[test]
fn back_references_are_not_expanded() {
    let schema = merged_movies();
    let person = schema.id_of("Person").unwrap();

    let res = dump(&schema, person).unwrap();

    insta::assert_snapshot!(res, @r"
    Person
      p name: String
      p born: Int?
      n actedIn: -[:ACTED_IN]-> List<Movie>
        p title: String
        p tagline: String?
        n director: <-[:DIRECTED]- Person? (recursive)
      n follows: -[:FOLLOWS]-> List<Person> (recursive)
    ");
}

#[test]
fn relationship_entity_with_endpoints() {
    let mut graph = SchemaGraph::new();
    let person = graph.root("Person");
    let rated = graph.declare("Rated");
    let movie = graph.declare("Movie");
    graph
        .define(person)
        .outgoing_relationship("ratings", "RATED", Multiplicity::Many, rated);
    graph
        .define(rated)
        .property("stars", ValueType::Int)
        .start("person", person)
        .end("movie", movie);
    graph.define(movie).property("title", ValueType::String);

    let res = dump(&graph, person).unwrap();

    insta::assert_snapshot!(res, @r"
    Person
      r ratings: -[:RATED]-> List<Rated>
        p stars: Int
        s person: Person (recursive)
        e movie: Movie
          p title: String
    ");
}

#[test]
fn schema_dump_lists_every_root() {
    let res = dump_schema(&movie_graph()).unwrap();

    insta::assert_snapshot!(res, @r"
    Person
      p name: String
      p born: Int?
      n actedIn: -[:ACTED_IN]-> List<Movie>
        p title: String
      n follows: -[:FOLLOWS]-> List<Person> (recursive)

    Movie
      p title: String
      p tagline: String?
      n director: <-[:DIRECTED]- Person?
        p name: String
    ");
}

#[test]
fn empty_schema_dumps_to_empty_text() {
    assert_eq!(dump_schema(&SchemaGraph::new()).unwrap(), "");
}

#[test]
fn unknown_root_is_reported() {
    let graph = SchemaGraph::new();

    let err = dump(&graph, EntityId::from_raw(3)).unwrap_err();

    assert_eq!(err, Error::UnknownEntity(EntityId::from_raw(3)));
}
