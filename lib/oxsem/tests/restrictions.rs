//! Restriction membership tests.

use oxsem::{
    reasoner, ClassKind, Fact, Ontology, OntologyClass, OntologyProperty, Restriction,
    RestrictionConstraint,
};
use oxterm::{vocab::xsd, Literal, Resource};

fn example(name: &str) -> Resource {
    Resource::new_unchecked(format!("http://example.com/{name}"))
}

fn ontology() -> Ontology {
    Ontology::new(example("onto"))
}

fn restriction(name: &str, on_property: &str, constraint: RestrictionConstraint) -> OntologyClass {
    let mut restriction = Restriction::new(example(on_property));
    assert!(restriction.refine(constraint));
    OntologyClass::with_kind(example(name), ClassKind::Restriction(restriction))
}

#[test]
fn min_cardinality_counts_assertions() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    ontology.property_model_mut().add_property(p.clone());
    let r = restriction(
        "R",
        "p",
        RestrictionConstraint::Cardinality { min: 2, max: 0 },
    );
    ontology.class_model_mut().add_class(r.clone());

    let f1 = Fact::new(example("f1"));
    let f2 = Fact::new(example("f2"));
    let v1 = Fact::new(example("v1"));
    let v2 = Fact::new(example("v2"));
    {
        let data = ontology.data_mut();
        data.add_fact(f1.clone());
        data.add_fact(f2.clone());
        data.add_fact(v1.clone());
        data.add_fact(v2.clone());
        data.add_assertion(&f1, &p, &v1);
        data.add_assertion(&f1, &p, &v2);
        data.add_assertion(&f2, &p, &v1);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&f1));
    assert!(!members.contains_fact(&f2));
    assert_eq!(members.facts_count(), 1);
}

#[test]
fn max_cardinality_excludes_busy_subjects() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    ontology.property_model_mut().add_property(p.clone());
    let r = restriction(
        "R",
        "p",
        RestrictionConstraint::Cardinality { min: 0, max: 1 },
    );
    ontology.class_model_mut().add_class(r.clone());

    let f1 = Fact::new(example("f1"));
    let f2 = Fact::new(example("f2"));
    let v1 = Fact::new(example("v1"));
    let v2 = Fact::new(example("v2"));
    {
        let data = ontology.data_mut();
        data.add_fact(f1.clone());
        data.add_fact(f2.clone());
        data.add_fact(v1.clone());
        data.add_fact(v2.clone());
        data.add_assertion(&f1, &p, &v1);
        data.add_assertion(&f2, &p, &v1);
        data.add_assertion(&f2, &p, &v2);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&f1));
    assert!(!members.contains_fact(&f2));
}

#[test]
fn subjects_without_assertions_are_never_members() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    ontology.property_model_mut().add_property(p.clone());
    let r = restriction(
        "R",
        "p",
        RestrictionConstraint::Cardinality { min: 0, max: 5 },
    );
    ontology.class_model_mut().add_class(r.clone());
    ontology.data_mut().add_fact(Fact::new(example("idle")));

    let members = reasoner::members_of(&r, &ontology);
    assert_eq!(members.facts_count(), 0);
}

#[test]
fn cardinality_counts_sub_property_assertions() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    let q = OntologyProperty::new_object(example("q"));
    {
        let model = ontology.property_model_mut();
        model.add_property(p.clone());
        model.add_property(q.clone());
        model.add_sub_property_of(&q, &p);
    }
    let r = restriction(
        "R",
        "p",
        RestrictionConstraint::Cardinality { min: 2, max: 0 },
    );
    ontology.class_model_mut().add_class(r.clone());

    let f = Fact::new(example("f"));
    let v = Fact::new(example("v"));
    {
        let data = ontology.data_mut();
        data.add_fact(f.clone());
        data.add_fact(v.clone());
        // the same value asserted through p and its subproperty q counts twice
        data.add_assertion(&f, &p, &v);
        data.add_assertion(&f, &q, &v);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&f));
}

#[test]
fn all_values_from_requires_every_object_compatible() {
    let mut ontology = ontology();
    let has_pet = OntologyProperty::new_object(example("hasPet"));
    ontology.property_model_mut().add_property(has_pet.clone());
    let animal = OntologyClass::new(example("Animal"));
    let dog = OntologyClass::new(example("Dog"));
    let rock = OntologyClass::new(example("Rock"));
    {
        let model = ontology.class_model_mut();
        model.add_class(animal.clone());
        model.add_class(dog.clone());
        model.add_class(rock.clone());
        model.add_sub_class_of(&dog, &animal);
    }
    let r = restriction(
        "R",
        "hasPet",
        RestrictionConstraint::AllValuesFrom(example("Animal")),
    );
    ontology.class_model_mut().add_class(r.clone());

    let a = Fact::new(example("a"));
    let b = Fact::new(example("b"));
    let d1 = Fact::new(example("d1"));
    let d2 = Fact::new(example("d2"));
    let x = Fact::new(example("x"));
    {
        let data = ontology.data_mut();
        for fact in [&a, &b, &d1, &d2, &x] {
            data.add_fact((*fact).clone());
        }
        data.add_class_type(&d1, &dog);
        data.add_class_type(&d2, &dog);
        data.add_class_type(&x, &rock);
        data.add_assertion(&a, &has_pet, &d1);
        data.add_assertion(&a, &has_pet, &d2);
        data.add_assertion(&b, &has_pet, &d1);
        data.add_assertion(&b, &has_pet, &x);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&a));
    assert!(!members.contains_fact(&b));
    assert_eq!(members.facts_count(), 1);
}

#[test]
fn some_values_from_requires_one_compatible_object() {
    let mut ontology = ontology();
    let has_pet = OntologyProperty::new_object(example("hasPet"));
    ontology.property_model_mut().add_property(has_pet.clone());
    let animal = OntologyClass::new(example("Animal"));
    let rock = OntologyClass::new(example("Rock"));
    {
        let model = ontology.class_model_mut();
        model.add_class(animal.clone());
        model.add_class(rock.clone());
    }
    let r = restriction(
        "R",
        "hasPet",
        RestrictionConstraint::SomeValuesFrom(example("Animal")),
    );
    ontology.class_model_mut().add_class(r.clone());

    let b = Fact::new(example("b"));
    let c = Fact::new(example("c"));
    let d1 = Fact::new(example("d1"));
    let x = Fact::new(example("x"));
    {
        let data = ontology.data_mut();
        for fact in [&b, &c, &d1, &x] {
            data.add_fact((*fact).clone());
        }
        data.add_class_type(&d1, &animal);
        data.add_class_type(&x, &rock);
        data.add_assertion(&b, &has_pet, &d1);
        data.add_assertion(&b, &has_pet, &x);
        data.add_assertion(&c, &has_pet, &x);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&b));
    assert!(!members.contains_fact(&c));
}

#[test]
fn has_value_matches_same_facts() {
    let mut ontology = ontology();
    let owner = OntologyProperty::new_object(example("ownedBy"));
    ontology.property_model_mut().add_property(owner.clone());
    let r = restriction(
        "R",
        "ownedBy",
        RestrictionConstraint::HasValue(example("alice").into()),
    );
    ontology.class_model_mut().add_class(r.clone());

    let rex = Fact::new(example("rex"));
    let fido = Fact::new(example("fido"));
    let alice = Fact::new(example("alice"));
    let alicia = Fact::new(example("alicia"));
    let bob = Fact::new(example("bob"));
    {
        let data = ontology.data_mut();
        for fact in [&rex, &fido, &alice, &alicia, &bob] {
            data.add_fact((*fact).clone());
        }
        data.add_same_as(&alice, &alicia);
        data.add_assertion(&rex, &owner, &alicia);
        data.add_assertion(&fido, &owner, &bob);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&rex), "sameAs(alice) contains alicia");
    assert!(!members.contains_fact(&fido));
}

#[test]
fn has_value_compares_literals_numerically() {
    let mut ontology = ontology();
    let age = OntologyProperty::new_datatype(example("age"));
    ontology.property_model_mut().add_property(age.clone());
    let r = restriction(
        "R",
        "age",
        RestrictionConstraint::HasValue(
            Literal::new_typed_literal("42", xsd::INTEGER.clone()).into(),
        ),
    );
    ontology.class_model_mut().add_class(r.clone());

    let matching = Fact::new(example("matching"));
    let other = Fact::new(example("other"));
    let broken = Fact::new(example("broken"));
    {
        let data = ontology.data_mut();
        for fact in [&matching, &other, &broken] {
            data.add_fact((*fact).clone());
        }
        // 42.0 compares numerically equal to 42
        data.add_literal_assertion(
            &matching,
            &age,
            Literal::new_typed_literal("42.0", xsd::DOUBLE.clone()),
        );
        data.add_literal_assertion(
            &other,
            &age,
            Literal::new_typed_literal("41", xsd::INTEGER.clone()),
        );
        // an unparsable number is silently not a match
        data.add_literal_assertion(
            &broken,
            &age,
            Literal::new_typed_literal("not a number", xsd::INTEGER.clone()),
        );
    }

    let members = reasoner::members_of(&r, &ontology);
    assert!(members.contains_fact(&matching));
    assert!(!members.contains_fact(&other));
    assert!(!members.contains_fact(&broken));
}

#[test]
fn unrefined_restrictions_have_no_members() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    ontology.property_model_mut().add_property(p.clone());
    let r = OntologyClass::new_restriction(example("R"), example("p"));
    ontology.class_model_mut().add_class(r.clone());

    let f = Fact::new(example("f"));
    let v = Fact::new(example("v"));
    {
        let data = ontology.data_mut();
        data.add_fact(f.clone());
        data.add_fact(v.clone());
        data.add_assertion(&f, &p, &v);
    }

    let members = reasoner::members_of(&r, &ontology);
    assert_eq!(members.facts_count(), 0);
}

#[test]
fn restriction_membership_is_monotone() {
    let mut ontology = ontology();
    let p = OntologyProperty::new_object(example("p"));
    ontology.property_model_mut().add_property(p.clone());
    let r = restriction(
        "R",
        "p",
        RestrictionConstraint::Cardinality { min: 1, max: 0 },
    );
    ontology.class_model_mut().add_class(r.clone());

    let f = Fact::new(example("f"));
    let v1 = Fact::new(example("v1"));
    let v2 = Fact::new(example("v2"));
    {
        let data = ontology.data_mut();
        data.add_fact(f.clone());
        data.add_fact(v1.clone());
        data.add_fact(v2.clone());
        data.add_assertion(&f, &p, &v1);
    }
    assert!(reasoner::members_of(&r, &ontology).contains_fact(&f));

    ontology.data_mut().add_assertion(&f, &p, &v2);
    assert!(
        reasoner::members_of(&r, &ontology).contains_fact(&f),
        "adding a satisfying assertion never removes a member"
    );
}
