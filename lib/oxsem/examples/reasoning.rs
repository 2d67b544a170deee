//! Reasoning example over a small family ontology.
//!
//! This example shows:
//! - Building a class and property model programmatically
//! - Taxonomic closures: subclasses, equivalences, disjointness
//! - Transitive object-property reachability
//! - Restriction membership
//!
//! Run with: cargo run -p oxsem --example reasoning

use oxsem::{
    reasoner, ClassKind, Fact, Ontology, OntologyClass, OntologyProperty, Restriction,
    RestrictionConstraint,
};
use oxterm::Resource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ontology = Ontology::with_iri("http://example.org/family")?;

    // Classes
    let person = OntologyClass::new(Resource::new("http://example.org/Person")?);
    let parent = OntologyClass::new(Resource::new("http://example.org/Parent")?);
    let child = OntologyClass::new(Resource::new("http://example.org/Child")?);
    let robot = OntologyClass::new(Resource::new("http://example.org/Robot")?);
    {
        let model = ontology.class_model_mut();
        for class in [&person, &parent, &child, &robot] {
            model.add_class(class.clone());
        }
        model.add_sub_class_of(&parent, &person);
        model.add_sub_class_of(&child, &person);
        model.add_disjoint_with(&person, &robot);
    }

    // Properties
    let ancestor_of = {
        let mut property = OntologyProperty::new_object(Resource::new("http://example.org/ancestorOf")?);
        property.set_transitive(true);
        property
    };
    let parent_of = OntologyProperty::new_object(Resource::new("http://example.org/parentOf")?);
    {
        let model = ontology.property_model_mut();
        model.add_property(ancestor_of.clone());
        model.add_property(parent_of.clone());
        model.add_sub_property_of(&parent_of, &ancestor_of);
    }

    // Facts
    let alice = Fact::new(Resource::new("http://example.org/alice")?);
    let bob = Fact::new(Resource::new("http://example.org/bob")?);
    let carol = Fact::new(Resource::new("http://example.org/carol")?);
    {
        let data = ontology.data_mut();
        for fact in [&alice, &bob, &carol] {
            data.add_fact(fact.clone());
        }
        data.add_class_type(&alice, &parent);
        data.add_assertion(&alice, &ancestor_of, &bob);
        data.add_assertion(&bob, &ancestor_of, &carol);
    }

    // Subclass closure
    let subs = reasoner::sub_classes_of(&person, ontology.class_model());
    println!("specializations of Person:");
    for class in subs.iter() {
        println!("  {class}");
    }

    // Disjointness propagates to specializations of Person
    let disjoints = reasoner::disjoint_classes_of(&robot, ontology.class_model());
    println!("classes disjoint with Robot:");
    for class in disjoints.iter() {
        println!("  {class}");
    }

    // Transitive reachability through ancestorOf
    let reachable = reasoner::transitive_assertions_of(&alice, &ancestor_of, ontology.data());
    println!("facts alice is an ancestor of:");
    for fact in reachable.iter_facts() {
        println!("  {fact}");
    }

    // A restriction: things with at least one ancestorOf assertion
    let mut restriction = Restriction::new(ancestor_of.resource().clone());
    restriction.refine(RestrictionConstraint::Cardinality { min: 1, max: 0 });
    let ancestors = OntologyClass::with_kind(
        Resource::new("http://example.org/Ancestor")?,
        ClassKind::Restriction(restriction),
    );
    ontology.class_model_mut().add_class(ancestors.clone());
    let members = reasoner::members_of(&ancestors, &ontology);
    println!("members of the min-cardinality restriction:");
    for fact in members.iter_facts() {
        println!("  {fact}");
    }

    // Round-trip through a triple graph
    let graph = ontology.to_graph(false);
    let reparsed = Ontology::from_graph(&graph)?;
    println!(
        "round-tripped {} triples into {reparsed}",
        graph.len()
    );

    Ok(())
}
