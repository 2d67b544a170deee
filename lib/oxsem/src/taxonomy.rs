//! Indexed sets of labeled binary relations between ontology resources.

use oxterm::{Resource, Term};
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A labeled binary relation between two ontology resources.
///
/// The `inferred` flag marks entries materialized by reasoning rather than
/// asserted by the source graph. Two entries differing only in `inferred`
/// are equal.
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    subject: Resource,
    predicate: Resource,
    object: Term,
    inferred: bool,
}

impl TaxonomyEntry {
    /// Builds an asserted entry.
    #[inline]
    pub fn new(subject: Resource, predicate: Resource, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
            inferred: false,
        }
    }

    /// Builds an entry materialized by reasoning.
    #[inline]
    pub fn new_inferred(subject: Resource, predicate: Resource, object: impl Into<Term>) -> Self {
        Self {
            inferred: true,
            ..Self::new(subject, predicate, object)
        }
    }

    /// The subject of this entry.
    #[inline]
    pub fn subject(&self) -> &Resource {
        &self.subject
    }

    /// The predicate of this entry.
    #[inline]
    pub fn predicate(&self) -> &Resource {
        &self.predicate
    }

    /// The object of this entry.
    #[inline]
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Returns `true` if this entry was materialized by reasoning.
    #[inline]
    pub fn is_inferred(&self) -> bool {
        self.inferred
    }

    fn key(&self) -> (u64, u64, u64) {
        (
            self.subject.fingerprint(),
            self.predicate.fingerprint(),
            self.object.fingerprint(),
        )
    }
}

impl PartialEq for TaxonomyEntry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TaxonomyEntry {}

impl Hash for TaxonomyEntry {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl fmt::Display for TaxonomyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

/// A set of [`TaxonomyEntry`] indexed by subject and by object fingerprints.
///
/// Insertion is idempotent; when an already-present entry is re-added and the
/// stored copy is inferred while the new one is asserted, the asserted one
/// wins.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entries: Vec<TaxonomyEntry>,
    index: FxHashMap<(u64, u64, u64), usize>,
    by_subject: FxHashMap<u64, Vec<usize>>,
    by_object: FxHashMap<u64, Vec<usize>>,
}

impl Taxonomy {
    /// Creates a new empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in this taxonomy.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if this taxonomy contains no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if this taxonomy contains the given entry, ignoring `inferred`.
    pub fn contains(&self, entry: &TaxonomyEntry) -> bool {
        self.index.contains_key(&entry.key())
    }

    /// Adds an entry. Returns `true` if it was not already present.
    pub fn add_entry(&mut self, entry: TaxonomyEntry) -> bool {
        let key = entry.key();
        if let Some(&position) = self.index.get(&key) {
            if !entry.inferred {
                self.entries[position].inferred = false;
            }
            return false;
        }
        let position = self.entries.len();
        self.index.insert(key, position);
        self.by_subject.entry(key.0).or_default().push(position);
        self.by_object.entry(key.2).or_default().push(position);
        self.entries.push(entry);
        true
    }

    /// Returns all the entries of this taxonomy.
    pub fn iter(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.iter()
    }

    /// Returns the entries with the given subject.
    pub fn entries_by_subject(&self, subject: &Resource) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries_by_subject_fingerprint(subject.fingerprint())
    }

    /// Returns the entries whose subject has the given fingerprint.
    pub fn entries_by_subject_fingerprint(
        &self,
        fingerprint: u64,
    ) -> impl Iterator<Item = &TaxonomyEntry> {
        self.select(&self.by_subject, fingerprint)
    }

    /// Returns the entries with the given object.
    pub fn entries_by_object(&self, object: &Term) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries_by_object_fingerprint(object.fingerprint())
    }

    /// Returns the entries whose object has the given fingerprint.
    pub fn entries_by_object_fingerprint(
        &self,
        fingerprint: u64,
    ) -> impl Iterator<Item = &TaxonomyEntry> {
        self.select(&self.by_object, fingerprint)
    }

    /// Returns a fresh taxonomy with the entries with the given subject.
    pub fn select_by_subject(&self, subject: &Resource) -> Self {
        self.entries_by_subject(subject).cloned().collect()
    }

    /// Returns a fresh taxonomy with the entries with the given predicate.
    pub fn select_by_predicate(&self, predicate: &Resource) -> Self {
        self.iter()
            .filter(|e| e.predicate == *predicate)
            .cloned()
            .collect()
    }

    /// Returns a fresh taxonomy with the entries with the given object.
    pub fn select_by_object(&self, object: &Term) -> Self {
        self.entries_by_object(object).cloned().collect()
    }

    /// Returns a fresh taxonomy with the entries of both taxonomies.
    pub fn union_with(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for entry in self.iter().chain(other.iter()) {
            result.add_entry(entry.clone());
        }
        result
    }

    /// Returns a fresh taxonomy with the entries present in both taxonomies.
    pub fn intersection_with(&self, other: &Self) -> Self {
        self.iter()
            .filter(|e| other.contains(e))
            .cloned()
            .collect()
    }

    /// Returns a fresh taxonomy with the entries of this taxonomy that are
    /// not present in `other`.
    ///
    /// The result is first built as the union of an empty taxonomy with this
    /// one, then the entries of `other` are removed from it.
    pub fn difference_with(&self, other: &Self) -> Self {
        let mut result = Self::new().union_with(self);
        result.retain(|e| !other.contains(e));
        result
    }

    fn retain(&mut self, predicate: impl Fn(&TaxonomyEntry) -> bool) {
        let entries = std::mem::take(&mut self.entries);
        self.index.clear();
        self.by_subject.clear();
        self.by_object.clear();
        for entry in entries {
            if predicate(&entry) {
                self.add_entry(entry);
            }
        }
    }

    fn select<'a>(
        &'a self,
        index: &'a FxHashMap<u64, Vec<usize>>,
        fingerprint: u64,
    ) -> impl Iterator<Item = &'a TaxonomyEntry> {
        index
            .get(&fingerprint)
            .into_iter()
            .flatten()
            .map(|&position| &self.entries[position])
    }
}

impl FromIterator<TaxonomyEntry> for Taxonomy {
    fn from_iter<I: IntoIterator<Item = TaxonomyEntry>>(iter: I) -> Self {
        let mut taxonomy = Self::new();
        for entry in iter {
            taxonomy.add_entry(entry);
        }
        taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(name: &str) -> Resource {
        Resource::new_unchecked(format!("http://example.com/{name}"))
    }

    fn entry(s: &str, p: &str, o: &str) -> TaxonomyEntry {
        TaxonomyEntry::new(example(s), example(p), example(o))
    }

    #[test]
    fn insertion_is_idempotent() {
        let mut taxonomy = Taxonomy::new();
        assert!(taxonomy.add_entry(entry("a", "p", "b")));
        assert!(!taxonomy.add_entry(entry("a", "p", "b")));
        assert_eq!(taxonomy.len(), 1);
    }

    #[test]
    fn asserted_wins_over_inferred() {
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_entry(TaxonomyEntry::new_inferred(
            example("a"),
            example("p"),
            example("b"),
        ));
        assert!(taxonomy.iter().all(TaxonomyEntry::is_inferred));
        taxonomy.add_entry(entry("a", "p", "b"));
        assert_eq!(taxonomy.len(), 1);
        assert!(taxonomy.iter().all(|e| !e.is_inferred()));
    }

    #[test]
    fn equality_ignores_inferred() {
        let asserted = entry("a", "p", "b");
        let inferred = TaxonomyEntry::new_inferred(example("a"), example("p"), example("b"));
        assert_eq!(asserted, inferred);
    }

    #[test]
    fn selectors() {
        let mut taxonomy = Taxonomy::new();
        taxonomy.add_entry(entry("a", "p", "b"));
        taxonomy.add_entry(entry("a", "q", "c"));
        taxonomy.add_entry(entry("d", "p", "b"));

        assert_eq!(taxonomy.select_by_subject(&example("a")).len(), 2);
        assert_eq!(taxonomy.select_by_predicate(&example("p")).len(), 2);
        assert_eq!(
            taxonomy.select_by_object(&example("b").into()).len(),
            2
        );
    }

    #[test]
    fn set_operations_are_idempotent() {
        let mut a = Taxonomy::new();
        a.add_entry(entry("a", "p", "b"));
        a.add_entry(entry("c", "p", "d"));

        assert_eq!(a.union_with(&a).len(), a.len());
        assert_eq!(a.intersection_with(&a).len(), a.len());
        assert!(a.difference_with(&a).is_empty());
    }

    #[test]
    fn difference_keeps_unshared_entries() {
        let mut a = Taxonomy::new();
        a.add_entry(entry("a", "p", "b"));
        a.add_entry(entry("c", "p", "d"));
        let mut b = Taxonomy::new();
        b.add_entry(entry("c", "p", "d"));

        let difference = a.difference_with(&b);
        assert_eq!(difference.len(), 1);
        assert!(difference.contains(&entry("a", "p", "b")));
    }
}
