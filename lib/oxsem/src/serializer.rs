//! Ontology encoder to RDF graphs.

use crate::class_model::ClassModel;
use crate::entity::{ClassKind, PropertyKind, RestrictionConstraint};
use crate::ontology::Ontology;
use crate::taxonomy::Taxonomy;
use oxterm::vocab::{owl, rdf, rdfs, xsd};
use oxterm::{Graph, Literal, Resource, Term, Triple};

pub(crate) struct OntologySerializer {
    include_inferences: bool,
}

impl OntologySerializer {
    pub fn new(include_inferences: bool) -> Self {
        Self { include_inferences }
    }

    /// Projects an ontology onto RDF triples. The output graph's context is
    /// the ontology name.
    pub fn serialize(&self, ontology: &Ontology) -> Graph {
        let mut graph = Graph::with_name(ontology.name().clone());
        graph.insert(Triple::new(
            ontology.name().clone(),
            rdf::TYPE.clone(),
            owl::ONTOLOGY.clone(),
        ));
        self.project_taxonomy(ontology.annotations(), &mut graph);
        self.serialize_classes(ontology.class_model(), &mut graph);
        self.serialize_properties(ontology, &mut graph);
        self.serialize_data(ontology, &mut graph);
        graph
    }

    fn project_taxonomy(&self, taxonomy: &Taxonomy, graph: &mut Graph) {
        for entry in taxonomy.iter() {
            if entry.is_inferred() && !self.include_inferences {
                continue;
            }
            graph.insert(Triple::new(
                entry.subject().clone(),
                entry.predicate().clone(),
                entry.object().clone(),
            ));
        }
    }

    fn serialize_classes(&self, model: &ClassModel, graph: &mut Graph) {
        for class in model.iter() {
            let subject = class.resource().clone();
            match class.kind() {
                ClassKind::Owl => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::CLASS.clone(),
                    ));
                }
                ClassKind::Rdfs => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        rdfs::CLASS.clone(),
                    ));
                }
                ClassKind::Restriction(restriction) => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::RESTRICTION.clone(),
                    ));
                    graph.insert(Triple::new(
                        subject.clone(),
                        owl::ON_PROPERTY.clone(),
                        restriction.on_property().clone(),
                    ));
                    match restriction.constraint() {
                        Some(RestrictionConstraint::Cardinality { min, max }) => {
                            if min == max && *min > 0 {
                                graph.insert(Triple::new(
                                    subject.clone(),
                                    owl::CARDINALITY.clone(),
                                    cardinality_literal(*min),
                                ));
                            } else {
                                if *min > 0 {
                                    graph.insert(Triple::new(
                                        subject.clone(),
                                        owl::MIN_CARDINALITY.clone(),
                                        cardinality_literal(*min),
                                    ));
                                }
                                if *max > 0 {
                                    graph.insert(Triple::new(
                                        subject.clone(),
                                        owl::MAX_CARDINALITY.clone(),
                                        cardinality_literal(*max),
                                    ));
                                }
                            }
                        }
                        Some(RestrictionConstraint::AllValuesFrom(target)) => {
                            graph.insert(Triple::new(
                                subject.clone(),
                                owl::ALL_VALUES_FROM.clone(),
                                target.clone(),
                            ));
                        }
                        Some(RestrictionConstraint::SomeValuesFrom(target)) => {
                            graph.insert(Triple::new(
                                subject.clone(),
                                owl::SOME_VALUES_FROM.clone(),
                                target.clone(),
                            ));
                        }
                        Some(RestrictionConstraint::HasValue(value)) => {
                            graph.insert(Triple::new(
                                subject.clone(),
                                owl::HAS_VALUE.clone(),
                                value.clone(),
                            ));
                        }
                        None => (),
                    }
                }
                ClassKind::Enumerate => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::CLASS.clone(),
                    ));
                    self.serialize_list(&subject, &owl::ONE_OF, model.one_of(), graph);
                }
                ClassKind::DataRange => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::DATA_RANGE.clone(),
                    ));
                    self.serialize_list(&subject, &owl::ONE_OF, model.one_of(), graph);
                }
                ClassKind::Union => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::CLASS.clone(),
                    ));
                    self.serialize_list(&subject, &owl::UNION_OF, model.union_of(), graph);
                }
                ClassKind::Intersection => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::CLASS.clone(),
                    ));
                    self.serialize_list(
                        &subject,
                        &owl::INTERSECTION_OF,
                        model.intersection_of(),
                        graph,
                    );
                }
                ClassKind::Complement { of } => {
                    graph.insert(Triple::new(
                        subject.clone(),
                        rdf::TYPE.clone(),
                        owl::CLASS.clone(),
                    ));
                    graph.insert(Triple::new(
                        subject.clone(),
                        owl::COMPLEMENT_OF.clone(),
                        of.clone(),
                    ));
                }
            }
            if class.is_deprecated() {
                graph.insert(Triple::new(
                    subject,
                    rdf::TYPE.clone(),
                    owl::DEPRECATED_CLASS.clone(),
                ));
            }
        }
        self.project_taxonomy(model.sub_class_of(), graph);
        self.project_taxonomy(model.equivalent_class(), graph);
        self.project_taxonomy(model.disjoint_with(), graph);
        self.project_taxonomy(model.annotations(), graph);
    }

    /// Rebuilds the rdf:first/rdf:rest member list of a composite or
    /// enumerated class through fresh blank nodes.
    fn serialize_list(
        &self,
        subject: &Resource,
        predicate: &Resource,
        members: &Taxonomy,
        graph: &mut Graph,
    ) {
        let items: Vec<Term> = members
            .entries_by_subject(subject)
            .filter(|entry| self.include_inferences || !entry.is_inferred())
            .map(|entry| entry.object().clone())
            .collect();
        if items.is_empty() {
            return;
        }
        let nodes: Vec<Resource> = items.iter().map(|_| Resource::new_blank()).collect();
        graph.insert(Triple::new(
            subject.clone(),
            predicate.clone(),
            nodes[0].clone(),
        ));
        for (position, item) in items.into_iter().enumerate() {
            graph.insert(Triple::new(
                nodes[position].clone(),
                rdf::FIRST.clone(),
                item,
            ));
            let rest: Term = match nodes.get(position + 1) {
                Some(next) => next.clone().into(),
                None => rdf::NIL.clone().into(),
            };
            graph.insert(Triple::new(nodes[position].clone(), rdf::REST.clone(), rest));
        }
    }

    fn serialize_properties(&self, ontology: &Ontology, graph: &mut Graph) {
        let model = ontology.property_model();
        for property in model.iter() {
            let subject = property.resource().clone();
            let declaration = match property.kind() {
                PropertyKind::Annotation => owl::ANNOTATION_PROPERTY.clone(),
                PropertyKind::Datatype => owl::DATATYPE_PROPERTY.clone(),
                PropertyKind::Object => owl::OBJECT_PROPERTY.clone(),
            };
            graph.insert(Triple::new(subject.clone(), rdf::TYPE.clone(), declaration));
            if property.is_functional() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdf::TYPE.clone(),
                    owl::FUNCTIONAL_PROPERTY.clone(),
                ));
            }
            if property.is_symmetric() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdf::TYPE.clone(),
                    owl::SYMMETRIC_PROPERTY.clone(),
                ));
            }
            if property.is_transitive() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdf::TYPE.clone(),
                    owl::TRANSITIVE_PROPERTY.clone(),
                ));
            }
            if property.is_inverse_functional() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdf::TYPE.clone(),
                    owl::INVERSE_FUNCTIONAL_PROPERTY.clone(),
                ));
            }
            if property.is_deprecated() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdf::TYPE.clone(),
                    owl::DEPRECATED_PROPERTY.clone(),
                ));
            }
            if let Some(domain) = property.domain() {
                graph.insert(Triple::new(
                    subject.clone(),
                    rdfs::DOMAIN.clone(),
                    domain.clone(),
                ));
            }
            if let Some(range) = property.range() {
                graph.insert(Triple::new(subject, rdfs::RANGE.clone(), range.clone()));
            }
        }
        self.project_taxonomy(model.sub_property_of(), graph);
        self.project_taxonomy(model.equivalent_property(), graph);
        self.project_taxonomy(model.inverse_of(), graph);
        self.project_taxonomy(model.annotations(), graph);
    }

    fn serialize_data(&self, ontology: &Ontology, graph: &mut Graph) {
        let data = ontology.data();
        self.project_taxonomy(data.class_type(), graph);
        self.project_taxonomy(data.same_as(), graph);
        self.project_taxonomy(data.different_from(), graph);
        self.project_taxonomy(data.assertions(), graph);
        self.project_taxonomy(data.annotations(), graph);
    }
}

fn cardinality_literal(bound: u64) -> Literal {
    Literal::new_typed_literal(bound.to_string(), xsd::NON_NEGATIVE_INTEGER.clone())
}
