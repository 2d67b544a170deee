use crate::resource::Resource;
use crate::triple::{Term, Triple};
use rustc_hash::FxHashMap;
use std::fmt;

/// An in-memory [RDF graph](https://www.w3.org/TR/rdf11-concepts/#dfn-graph)
/// indexed by subject, predicate and object fingerprints.
///
/// Insertion is idempotent. The optional graph name carries the context IRI
/// the triples were read from or are destined to.
///
/// Usage example:
/// ```
/// use oxterm::{Graph, Resource, Triple, vocab::rdf};
///
/// let rex = Resource::new("http://example.com/rex")?;
/// let dog = Resource::new("http://example.com/Dog")?;
///
/// let mut graph = Graph::new();
/// graph.insert(Triple::new(rex.clone(), rdf::TYPE.clone(), dog.clone()));
/// graph.insert(Triple::new(rex.clone(), rdf::TYPE.clone(), dog.clone()));
///
/// assert_eq!(1, graph.len());
/// assert_eq!(1, graph.triples_for_subject(&rex).count());
/// # Result::<_, oxterm::IriParseError>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Graph {
    name: Option<Resource>,
    triples: Vec<Triple>,
    index: FxHashMap<(u64, u64, u64), usize>,
    by_subject: FxHashMap<u64, Vec<usize>>,
    by_predicate: FxHashMap<u64, Vec<usize>>,
    by_object: FxHashMap<u64, Vec<usize>>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with the given context name.
    pub fn with_name(name: Resource) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// The context name of this graph, if any.
    #[inline]
    pub fn name(&self) -> Option<&Resource> {
        self.name.as_ref()
    }

    /// Sets the context name of this graph.
    #[inline]
    pub fn set_name(&mut self, name: Resource) {
        self.name = Some(name);
    }

    /// The number of triples in this graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if this graph contains no triple.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Checks if this graph contains the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains_key(&Self::key(triple))
    }

    /// Inserts a triple. Returns `true` if it was not already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        let key = Self::key(&triple);
        if self.index.contains_key(&key) {
            return false;
        }
        let position = self.triples.len();
        self.index.insert(key, position);
        self.by_subject.entry(key.0).or_default().push(position);
        self.by_predicate.entry(key.1).or_default().push(position);
        self.by_object.entry(key.2).or_default().push(position);
        self.triples.push(triple);
        true
    }

    /// Returns all the triples contained by the graph.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Returns the triples with the given subject.
    pub fn triples_for_subject(&self, subject: &Resource) -> impl Iterator<Item = &Triple> {
        self.select(&self.by_subject, subject.fingerprint())
    }

    /// Returns the triples with the given predicate.
    pub fn triples_for_predicate(&self, predicate: &Resource) -> impl Iterator<Item = &Triple> {
        self.select(&self.by_predicate, predicate.fingerprint())
    }

    /// Returns the triples with the given object.
    pub fn triples_for_object(&self, object: &Term) -> impl Iterator<Item = &Triple> {
        self.select(&self.by_object, object.fingerprint())
    }

    /// Returns the objects of the triples with the given subject and predicate.
    pub fn objects_for_subject_predicate(
        &self,
        subject: &Resource,
        predicate: &Resource,
    ) -> impl Iterator<Item = &Term> {
        let predicate = predicate.fingerprint();
        self.triples_for_subject(subject)
            .filter(move |t| t.predicate.fingerprint() == predicate)
            .map(|t| &t.object)
    }

    /// Returns an object of a triple with the given subject and predicate,
    /// if any exists.
    pub fn object_for_subject_predicate(
        &self,
        subject: &Resource,
        predicate: &Resource,
    ) -> Option<&Term> {
        self.objects_for_subject_predicate(subject, predicate).next()
    }

    fn select<'a>(
        &'a self,
        index: &'a FxHashMap<u64, Vec<usize>>,
        fingerprint: u64,
    ) -> impl Iterator<Item = &'a Triple> {
        index
            .get(&fingerprint)
            .into_iter()
            .flatten()
            .map(|&position| &self.triples[position])
    }

    fn key(triple: &Triple) -> (u64, u64, u64) {
        (
            triple.subject.fingerprint(),
            triple.predicate.fingerprint(),
            triple.object.fingerprint(),
        )
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for Graph {}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for triple in &self.triples {
            writeln!(f, "{triple}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::rdf;

    fn example(name: &str) -> Resource {
        Resource::new_unchecked(format!("http://example.com/{name}"))
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut graph = Graph::new();
        let triple = Triple::new(example("s"), rdf::TYPE.clone(), example("o"));
        assert!(graph.insert(triple.clone()));
        assert!(!graph.insert(triple));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn selectors_use_every_index() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(example("a"), example("p"), example("b")));
        graph.insert(Triple::new(example("a"), example("q"), example("c")));
        graph.insert(Triple::new(example("d"), example("p"), example("b")));

        assert_eq!(graph.triples_for_subject(&example("a")).count(), 2);
        assert_eq!(graph.triples_for_predicate(&example("p")).count(), 2);
        assert_eq!(
            graph.triples_for_object(&example("b").into()).count(),
            2
        );
        assert_eq!(
            graph
                .object_for_subject_predicate(&example("a"), &example("q"))
                .cloned(),
            Some(example("c").into())
        );
        assert!(graph
            .object_for_subject_predicate(&example("d"), &example("q"))
            .is_none());
    }

    #[test]
    fn graph_equality_ignores_insertion_order() {
        let a = Triple::new(example("a"), example("p"), example("b"));
        let b = Triple::new(example("c"), example("p"), example("d"));
        let left: Graph = vec![a.clone(), b.clone()].into_iter().collect();
        let right: Graph = vec![b, a].into_iter().collect();
        assert_eq!(left, right);
    }
}
