//! Graph decoding and re-encoding tests.

use oxsem::{reasoner, ClassKind, Fact, Ontology, PropertyKind, RestrictionConstraint};
use oxterm::vocab::{owl, rdf, rdfs, xsd};
use oxterm::{Graph, Literal, Resource, Term, Triple};

fn example(name: &str) -> Resource {
    Resource::new_unchecked(format!("http://example.com/{name}"))
}

fn spo(subject: &Resource, predicate: &Resource, object: &Resource) -> Triple {
    Triple::new(subject.clone(), predicate.clone(), object.clone())
}

fn spl(subject: &Resource, predicate: &Resource, literal: Literal) -> Triple {
    Triple::new(subject.clone(), predicate.clone(), literal)
}

/// A small zoo ontology covering classes, properties, facts and assertions.
fn zoo_graph() -> Graph {
    let onto = example("zoo");
    let animal = example("Animal");
    let dog = example("Dog");
    let cat = example("Cat");
    let has_pet = example("hasPet");
    let age = example("age");
    let alice = example("alice");
    let rex = example("rex");

    let mut graph = Graph::new();
    graph.insert(spo(&onto, &rdf::TYPE, &owl::ONTOLOGY));
    graph.insert(spl(&onto, &owl::VERSION_INFO, Literal::new_simple_literal("1.0")));

    graph.insert(spo(&animal, &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&dog, &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&cat, &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&dog, &rdfs::SUB_CLASS_OF, &animal));
    graph.insert(spo(&cat, &rdfs::SUB_CLASS_OF, &animal));
    graph.insert(spo(&dog, &owl::DISJOINT_WITH, &cat));
    graph.insert(spl(
        &animal,
        &rdfs::COMMENT,
        Literal::new_simple_literal("a living creature"),
    ));

    graph.insert(spo(&has_pet, &rdf::TYPE, &owl::OBJECT_PROPERTY));
    graph.insert(spo(&age, &rdf::TYPE, &owl::DATATYPE_PROPERTY));

    graph.insert(spo(&rex, &rdf::TYPE, &dog));
    graph.insert(spo(&alice, &has_pet, &rex));
    graph.insert(spl(
        &rex,
        &age,
        Literal::new_typed_literal("3", xsd::INTEGER.clone()),
    ));

    graph
}

#[test]
fn decoding_builds_the_expected_model() {
    let ontology = Ontology::from_graph(&zoo_graph()).unwrap();

    assert_eq!(ontology.name(), &example("zoo"));
    assert_eq!(ontology.class_model().classes_count(), 3);
    assert_eq!(ontology.property_model().properties_count(), 2);

    let dog = ontology.class_model().class(&example("Dog")).unwrap();
    assert!(matches!(dog.kind(), ClassKind::Owl));

    let has_pet = ontology.property_model().property(&example("hasPet")).unwrap();
    assert_eq!(has_pet.kind(), PropertyKind::Object);

    // alice and rex were auto-created as facts
    assert!(ontology.data().fact(&example("alice")).is_some());
    assert!(ontology.data().fact(&example("rex")).is_some());
    assert_eq!(ontology.data().assertions().len(), 2);

    // ontology and class annotations were collected
    assert_eq!(ontology.annotations().len(), 1);
    assert_eq!(ontology.class_model().annotations().len(), 1);
}

#[test]
fn decoding_is_closed_by_encoding() {
    let graph = zoo_graph();
    let ontology = Ontology::from_graph(&graph).unwrap();
    let encoded = ontology.to_graph(false);

    assert_eq!(encoded.name(), Some(&example("zoo")));
    assert_eq!(encoded, graph);
}

#[test]
fn subclass_closure_after_decoding() {
    let ontology = Ontology::from_graph(&zoo_graph()).unwrap();
    let animal = ontology.class_model().class(&example("Animal")).unwrap();
    let dog = ontology.class_model().class(&example("Dog")).unwrap();

    let subs = reasoner::sub_classes_of(animal, ontology.class_model());
    assert!(subs.contains_class(dog));

    let members = reasoner::members_of(animal, &ontology);
    assert!(members.contains_fact(&Fact::new(example("rex"))));
}

#[test]
fn restriction_refinement_from_graph() {
    let mut graph = zoo_graph();
    let r = example("PetLover");
    graph.insert(spo(&r, &rdf::TYPE, &owl::RESTRICTION));
    graph.insert(spo(&r, &owl::ON_PROPERTY, &example("hasPet")));
    graph.insert(spl(
        &r,
        &owl::MIN_CARDINALITY,
        Literal::new_typed_literal("1", xsd::NON_NEGATIVE_INTEGER.clone()),
    ));

    let ontology = Ontology::from_graph(&graph).unwrap();
    let restriction = ontology
        .class_model()
        .class(&r)
        .and_then(|class| class.restriction())
        .unwrap();
    assert_eq!(
        restriction.constraint(),
        Some(&RestrictionConstraint::Cardinality { min: 1, max: 0 })
    );

    let class = ontology.class_model().class(&r).unwrap();
    let members = reasoner::members_of(class, &ontology);
    assert!(members.contains_fact(&Fact::new(example("alice"))));
}

#[test]
fn restrictions_on_annotation_properties_are_skipped() {
    let mut graph = zoo_graph();
    let note = example("note");
    graph.insert(spo(&note, &rdf::TYPE, &owl::ANNOTATION_PROPERTY));
    let r = example("Broken");
    graph.insert(spo(&r, &rdf::TYPE, &owl::RESTRICTION));
    graph.insert(spo(&r, &owl::ON_PROPERTY, &note));

    let ontology = Ontology::from_graph(&graph).unwrap();
    assert!(ontology.class_model().class(&r).is_none());
}

#[test]
fn restrictions_on_reserved_properties_are_skipped() {
    let mut graph = zoo_graph();
    let r = example("Broken");
    graph.insert(spo(&r, &rdf::TYPE, &owl::RESTRICTION));
    graph.insert(spo(&r, &owl::ON_PROPERTY, &rdfs::SUB_CLASS_OF));

    let ontology = Ontology::from_graph(&graph).unwrap();
    assert!(ontology.class_model().class(&r).is_none());
}

#[test]
fn non_integer_cardinalities_leave_the_restriction_unrefined() {
    let mut graph = zoo_graph();
    let r = example("Odd");
    graph.insert(spo(&r, &rdf::TYPE, &owl::RESTRICTION));
    graph.insert(spo(&r, &owl::ON_PROPERTY, &example("hasPet")));
    graph.insert(spl(
        &r,
        &owl::CARDINALITY,
        Literal::new_simple_literal("many"),
    ));

    let ontology = Ontology::from_graph(&graph).unwrap();
    let restriction = ontology
        .class_model()
        .class(&r)
        .and_then(|class| class.restriction())
        .unwrap();
    assert!(restriction.constraint().is_none());
}

#[test]
fn union_classes_round_trip_through_lists() {
    let mut graph = zoo_graph();
    let u = example("Pet");
    let l1 = Resource::new_blank();
    let l2 = Resource::new_blank();
    graph.insert(spo(&u, &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&u, &owl::UNION_OF, &l1));
    graph.insert(spo(&l1, &rdf::FIRST, &example("Dog")));
    graph.insert(spo(&l1, &rdf::REST, &l2));
    graph.insert(spo(&l2, &rdf::FIRST, &example("Cat")));
    graph.insert(Triple::new(l2.clone(), rdf::REST.clone(), rdf::NIL.clone()));
    graph.insert(spo(&example("felix"), &rdf::TYPE, &example("Cat")));

    let ontology = Ontology::from_graph(&graph).unwrap();
    let union = ontology.class_model().class(&u).unwrap();
    assert!(matches!(union.kind(), ClassKind::Union));

    let members = reasoner::members_of(union, &ontology);
    assert!(members.contains_fact(&Fact::new(example("rex"))));
    assert!(members.contains_fact(&Fact::new(example("felix"))));

    // re-encoding rebuilds an equivalent list under fresh blank nodes
    let encoded = ontology.to_graph(false);
    let reparsed = Ontology::from_graph(&encoded).unwrap();
    let union = reparsed.class_model().class(&u).unwrap();
    assert!(matches!(union.kind(), ClassKind::Union));
    let members = reasoner::members_of(union, &reparsed);
    assert!(members.contains_fact(&Fact::new(example("felix"))));
}

#[test]
fn one_of_literals_build_a_datarange() {
    let mut graph = Graph::new();
    let colors = example("Color");
    let l1 = Resource::new_blank();
    graph.insert(spo(&colors, &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&colors, &owl::ONE_OF, &l1));
    graph.insert(spl(&l1, &rdf::FIRST, Literal::new_simple_literal("red")));
    graph.insert(Triple::new(l1.clone(), rdf::REST.clone(), rdf::NIL.clone()));

    let ontology = Ontology::from_graph(&graph).unwrap();
    let colors_class = ontology.class_model().class(&colors).unwrap();
    assert!(matches!(colors_class.kind(), ClassKind::DataRange));

    let members = reasoner::members_of(colors_class, &ontology);
    assert!(members
        .iter_literals()
        .any(|literal| literal.value() == "red"));
}

#[test]
fn characteristics_promote_properties() {
    let mut graph = Graph::new();
    let knows = example("knows");
    // typed only as symmetric, never declared an object property
    graph.insert(spo(&knows, &rdf::TYPE, &owl::SYMMETRIC_PROPERTY));

    let ontology = Ontology::from_graph(&graph).unwrap();
    let property = ontology.property_model().property(&knows).unwrap();
    assert_eq!(property.kind(), PropertyKind::Object);
    assert!(property.is_symmetric());
}

#[test]
fn mismatched_assertions_are_dropped() {
    let mut graph = Graph::new();
    let has_pet = example("hasPet");
    let age = example("age");
    graph.insert(spo(&has_pet, &rdf::TYPE, &owl::OBJECT_PROPERTY));
    graph.insert(spo(&age, &rdf::TYPE, &owl::DATATYPE_PROPERTY));
    // an object property with a literal object, and a datatype property with
    // a resource object
    graph.insert(spl(
        &example("a"),
        &has_pet,
        Literal::new_simple_literal("rex"),
    ));
    graph.insert(spo(&example("a"), &age, &example("b")));

    let ontology = Ontology::from_graph(&graph).unwrap();
    assert!(ontology.data().assertions().is_empty());
}

#[test]
fn same_as_auto_creates_facts() {
    let mut graph = Graph::new();
    graph.insert(spo(&example("a"), &owl::SAME_AS, &example("b")));

    let ontology = Ontology::from_graph(&graph).unwrap();
    assert_eq!(ontology.data().facts_count(), 2);
    let same = reasoner::same_facts_as(&Fact::new(example("a")), ontology.data());
    assert!(same.contains_fact(&Fact::new(example("b"))));
}

#[test]
fn undefined_class_relations_are_dropped() {
    let mut graph = Graph::new();
    graph.insert(spo(&example("Known"), &rdf::TYPE, &owl::CLASS));
    graph.insert(spo(&example("Known"), &rdfs::SUB_CLASS_OF, &example("Unknown")));

    let ontology = Ontology::from_graph(&graph).unwrap();
    assert!(ontology.class_model().sub_class_of().is_empty());
}

#[test]
fn built_ins_are_unexpanded() {
    let ontology = Ontology::from_graph(&zoo_graph()).unwrap();
    assert!(ontology.class_model().class(&rdfs::LITERAL).is_none());
    assert!(ontology.property_model().property(&rdfs::COMMENT).is_none());
    assert!(ontology
        .class_model()
        .iter()
        .all(|class| !oxterm::vocab::is_reserved(class.resource())));
}

#[test]
fn encoder_filters_inferred_entries() {
    let mut graph = zoo_graph();
    let ancestor = example("ancestorOf");
    graph.insert(spo(&ancestor, &rdf::TYPE, &owl::OBJECT_PROPERTY));
    graph.insert(spo(&ancestor, &rdf::TYPE, &owl::TRANSITIVE_PROPERTY));
    graph.insert(spo(&example("a"), &ancestor, &example("b")));
    graph.insert(spo(&example("b"), &ancestor, &example("c")));

    let mut ontology = Ontology::from_graph(&graph).unwrap();
    let property = ontology
        .property_model()
        .property(&ancestor)
        .cloned()
        .unwrap();
    let a = Fact::new(example("a"));
    let derived: Vec<Fact> = reasoner::transitive_assertions_of(&a, &property, ontology.data())
        .iter_facts()
        .cloned()
        .collect();
    for target in derived {
        ontology
            .data_mut()
            .add_inferred_assertion(&a, &property, &target);
    }

    let closed = Triple::new(example("a"), ancestor.clone(), Term::from(example("c")));
    assert!(!ontology.to_graph(false).contains(&closed));
    assert!(ontology.to_graph(true).contains(&closed));
}
