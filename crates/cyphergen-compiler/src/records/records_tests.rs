use cyphergen_core::{Multiplicity, SchemaGraph, TypeExpr, ValueType};
use indoc::indoc;

use super::{Config, build, emit, emit_schema, emit_with_config};
use crate::test_utils::{chain_graph, merged_movies, movie_graph, repeated_name_graph};
use crate::{Error, merge};

#[test]
fn distinct_names_stay_unprefixed() {
    let (graph, root) = chain_graph();

    let tree = build(&graph, &[root]).unwrap();

    let names: Vec<_> = tree.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn chain_renders_one_block_per_entity() {
    let (graph, root) = chain_graph();

    let res = emit(&graph, root).unwrap();

    insta::assert_snapshot!(res, @r"
    A(
      id: Long,
      b: B,
    )

    B(
      c: C?,
    )

    C(
      label: String,
    )
    ");
}

#[test]
fn repeated_name_is_prefixed_with_ancestor() {
    let (graph, root) = repeated_name_graph();

    let res = emit(&graph, root).unwrap();

    insta::assert_snapshot!(res, @r"
    A(
      id: Long,
      b: List<B>,
    )

    B(
      weight: Double,
      a: BA,
    )

    BA(
      id: Long,
    )
    ");
}

#[test]
fn alternating_names_grow_prefix() {
    // A -> B -> A' -> B', each a separate declaration
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b = graph.declare("B");
    let a2 = graph.declare("A");
    let b2 = graph.declare("B");
    graph.define(a).outgoing("b", "TO", Multiplicity::One, b);
    graph.define(b).outgoing("a", "TO", Multiplicity::One, a2);
    graph.define(a2).outgoing("b", "TO", Multiplicity::One, b2);
    graph.define(b2).property("x", ValueType::Int);

    let res = emit(&graph, a).unwrap();

    assert_eq!(
        res,
        indoc! {"
            A(
              b: B,
            )

            B(
              a: BA,
            )

            BA(
              b: BAB,
            )

            BAB(
              x: Int,
            )
        "}
    );
}

#[test]
fn rename_does_not_touch_first_occurrence() {
    let (graph, root) = repeated_name_graph();

    let tree = build(&graph, &[root]).unwrap();

    assert_eq!(tree.name_of(root), Some("A"));
    assert!(tree.by_name("BA").is_some());
    assert_eq!(tree.len(), 3);
}

#[test]
fn merged_schema_emits_every_root_once() {
    let schema = merged_movies();

    let res = emit_schema(&schema).unwrap();

    insta::assert_snapshot!(res, @r"
    Person(
      name: String,
      born: Int?,
      actedIn: List<Movie>,
      follows: List<Person>,
    )

    Movie(
      title: String,
      tagline: String?,
      director: Person?,
    )
    ");
}

#[test]
fn recursive_reference_points_back_to_ancestor() {
    let schema = merged_movies();
    let person = schema.id_of("Person").unwrap();

    let tree = build(&schema, &[person]).unwrap();

    let record = tree.get(person).unwrap();
    assert_eq!(record.name, "Person");
    assert_eq!(
        record.fields["follows"],
        TypeExpr::Entity(person).with_multiplicity(Multiplicity::Many)
    );
    assert_eq!(tree.len(), 2);
}

#[test]
fn shared_entity_keeps_first_name() {
    // A -> B, A -> C -> B (same B)
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b = graph.declare("B");
    let c = graph.declare("C");
    graph
        .define(a)
        .outgoing("b", "TO", Multiplicity::One, b)
        .outgoing("c", "TO", Multiplicity::One, c);
    graph.define(b).property("x", ValueType::Int);
    graph.define(c).incoming("b", "TO", Multiplicity::Many, b);

    let res = emit(&graph, a).unwrap();

    insta::assert_snapshot!(res, @r"
    A(
      b: B,
      c: C,
    )

    B(
      x: Int,
    )

    C(
      b: List<B>,
    )
    ");
}

#[test]
fn fields_follow_declaration_order() {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b = graph.declare("B");
    graph
        .define(a)
        .property("first", ValueType::String)
        .outgoing("second", "TO", Multiplicity::OneOrZero, b)
        .nullable_property("third", ValueType::DateTime);

    let tree = build(&graph, &[a]).unwrap();

    let fields: Vec<_> = tree.get(a).unwrap().fields.keys().cloned().collect();
    assert_eq!(fields, ["first", "second", "third"]);
}

#[test]
fn sibling_declarations_with_same_name_collide() {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    let b1 = graph.declare("B");
    let b2 = graph.declare("B");
    graph
        .define(a)
        .outgoing("x", "TO", Multiplicity::One, b1)
        .outgoing("y", "TO", Multiplicity::One, b2);

    let err = emit(&graph, a).unwrap_err();

    assert_eq!(
        err,
        Error::NameCollision {
            name: "B".to_string(),
            first: "A.x".to_string(),
            second: "A.y".to_string(),
        }
    );
}

#[test]
fn unmerged_roots_collide_until_merged() {
    let graph = movie_graph();

    let err = emit_schema(&graph).unwrap_err();
    assert!(matches!(err, Error::NameCollision { ref name, .. } if name == "Movie"));

    let schema = merge(graph).unwrap();
    assert!(emit_schema(&schema).is_ok());
}

#[test]
fn kotlin_config() {
    let (graph, root) = chain_graph();

    let res = emit_with_config(&graph, root, Config::kotlin().indent("    ")).unwrap();

    insta::assert_snapshot!(res, @r"
    data class A(
        val id: Long,
        val b: B,
    )

    data class B(
        val c: C?,
    )

    data class C(
        val label: String,
    )
    ");
}

#[test]
fn colored_output_wraps_names() {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    graph.define(a).property("x", ValueType::Int);

    let res = emit_with_config(&graph, a, Config::new().colored(true)).unwrap();

    assert_eq!(
        res,
        "\x1b[34mA\x1b[0m\x1b[2m(\x1b[0m\n  x\x1b[2m:\x1b[0m \x1b[32mInt\x1b[0m\x1b[2m,\x1b[0m\n\x1b[2m)\x1b[0m\n"
    );
}

#[test]
fn entity_without_attributes() {
    let mut graph = SchemaGraph::new();
    let a = graph.root("Empty");

    assert_eq!(emit(&graph, a).unwrap(), "Empty(\n)\n");
}

#[test]
fn no_roots_yields_empty_text() {
    let graph = SchemaGraph::new();

    assert_eq!(emit_schema(&graph).unwrap(), "");
}

#[test]
fn duplicate_attribute_on_unmerged_graph_is_rejected() {
    let mut graph = SchemaGraph::new();
    let a = graph.root("A");
    graph
        .define(a)
        .property("x", ValueType::Int)
        .nullable_property("x", ValueType::String);

    let err = emit(&graph, a).unwrap_err();

    assert_eq!(
        err,
        Error::DuplicateAttribute {
            entity: "A".to_string(),
            attribute: "x".to_string(),
        }
    );
}

#[test]
fn colored_entity_field_type_is_unstyled() {
    let (graph, root) = chain_graph();

    let res = emit_with_config(&graph, root, Config::new().colored(true)).unwrap();

    assert!(res.contains("  b\x1b[2m:\x1b[0m B\x1b[2m,\x1b[0m\n"));
    assert!(res.contains("  id\x1b[2m:\x1b[0m \x1b[32mLong\x1b[0m\x1b[2m,\x1b[0m\n"));
}
