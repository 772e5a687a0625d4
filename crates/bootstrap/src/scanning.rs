//! Candidate discovery.
//!
//! Types opt in with `#[derive(Administration)]`, which submits a [`TypeRegistration`] into a
//! link-time collection. Scanners select the registrations directly under a namespace and hand
//! them out as [`CandidateType`]s; [`scan_namespaces`] merges several namespaces into one ordered,
//! duplicate-free [`CandidateTypeSet`].

use fxhash::FxHashSet;
use ladmin_domain::{DomainTypeId, Markers, TypeMetadata};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

/// Implemented by `#[derive(Administration)]`.
pub trait Administered {
    const NAMESPACE: &'static str;
    const NAME: &'static str;

    fn type_metadata() -> TypeMetadata;
}

/// Link-time record of one declared type.
#[derive(Clone, Copy)]
pub struct TypeRegistration {
    namespace: &'static str,
    name: &'static str,
    markers: Markers,
    describe: fn() -> TypeMetadata,
}

impl TypeRegistration {
    #[must_use]
    pub const fn new(
        namespace: &'static str,
        name: &'static str,
        markers: Markers,
        describe: fn() -> TypeMetadata,
    ) -> Self {
        Self { namespace, name, markers, describe }
    }

    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn markers(&self) -> Markers {
        self.markers
    }

    #[must_use]
    pub fn to_candidate(&self) -> CandidateType {
        CandidateType::new(self.namespace, self.name, self.markers, (self.describe)())
    }
}

impl fmt::Debug for TypeRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistration")
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

inventory::collect!(TypeRegistration);

/// Immutable handle to a discovered type. Identity is the fully-qualified name.
#[derive(Debug, Clone)]
pub struct CandidateType {
    id: DomainTypeId,
    namespace: Cow<'static, str>,
    markers: Markers,
    metadata: Arc<TypeMetadata>,
}

impl CandidateType {
    #[must_use]
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        name: &str,
        markers: Markers,
        metadata: TypeMetadata,
    ) -> Self {
        let namespace = namespace.into();
        Self {
            id: DomainTypeId::qualified(&namespace, name),
            namespace,
            markers,
            metadata: Arc::new(metadata),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &DomainTypeId {
        &self.id
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub const fn markers(&self) -> Markers {
        self.markers
    }

    #[must_use]
    pub fn metadata(&self) -> &TypeMetadata {
        &self.metadata
    }
}

impl PartialEq for CandidateType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CandidateType {}

impl Hash for CandidateType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Insertion-ordered, duplicate-free set of candidates.
#[derive(Debug, Clone, Default)]
pub struct CandidateTypeSet {
    order: Vec<CandidateType>,
    seen: FxHashSet<DomainTypeId>,
}

impl CandidateTypeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `candidate` unless one with the same identity is already present.
    /// Returns `true` when it was added.
    pub fn insert(&mut self, candidate: CandidateType) -> bool {
        if !self.seen.insert(candidate.id.clone()) {
            return false;
        }
        self.order.push(candidate);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateType> {
        self.order.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Extend<CandidateType> for CandidateTypeSet {
    fn extend<I: IntoIterator<Item = CandidateType>>(&mut self, iter: I) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

impl FromIterator<CandidateType> for CandidateTypeSet {
    fn from_iter<I: IntoIterator<Item = CandidateType>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CandidateTypeSet {
    type Item = &'a CandidateType;
    type IntoIter = std::slice::Iter<'a, CandidateType>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl IntoIterator for CandidateTypeSet {
    type Item = CandidateType;
    type IntoIter = std::vec::IntoIter<CandidateType>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

/// The "is administratively declared" test a scanner applies to what it finds.
pub type DeclarationPredicate = fn(Markers) -> bool;

/// Finds candidate types directly under one namespace.
///
/// Implementations are pure producers: scanning never mutates anything and the same
/// namespace yields the same candidates in the same order.
pub trait ClassScanner: Send + Sync {
    fn scan(&self, namespace: &str) -> Vec<CandidateType>;
}

impl<S: ClassScanner + ?Sized> ClassScanner for Box<S> {
    fn scan(&self, namespace: &str) -> Vec<CandidateType> {
        (**self).scan(namespace)
    }
}

impl<S: ClassScanner + ?Sized> ClassScanner for &S {
    fn scan(&self, namespace: &str) -> Vec<CandidateType> {
        (**self).scan(namespace)
    }
}

/// Scans the registrations submitted by `#[derive(Administration)]`.
///
/// Only exact namespace matches count; sub-namespaces are not descended into. Within one
/// namespace candidates come out sorted by fully-qualified name, independent of link order.
#[derive(Debug, Clone, Copy)]
pub struct AdministrationClassScanner {
    predicate: DeclarationPredicate,
}

impl Default for AdministrationClassScanner {
    fn default() -> Self {
        Self { predicate: Markers::is_administration }
    }
}

impl AdministrationClassScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_predicate(predicate: DeclarationPredicate) -> Self {
        Self { predicate }
    }
}

impl ClassScanner for AdministrationClassScanner {
    fn scan(&self, namespace: &str) -> Vec<CandidateType> {
        let mut found: Vec<CandidateType> = inventory::iter::<TypeRegistration>
            .into_iter()
            .filter(|registration| registration.namespace == namespace)
            .filter(|registration| (self.predicate)(registration.markers))
            .map(TypeRegistration::to_candidate)
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}

/// Scanner over an explicit list of candidates, kept in the order they were added.
#[derive(Debug, Clone)]
pub struct StaticClassScanner {
    candidates: Vec<CandidateType>,
    predicate: DeclarationPredicate,
}

impl Default for StaticClassScanner {
    fn default() -> Self {
        Self { candidates: Vec::new(), predicate: Markers::is_administration }
    }
}

impl StaticClassScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, candidate: CandidateType) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Shorthand for an administration-marked candidate.
    #[must_use]
    pub fn declare(self, namespace: &'static str, name: &str, metadata: TypeMetadata) -> Self {
        self.with(CandidateType::new(namespace, name, Markers::ADMINISTRATION, metadata))
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: DeclarationPredicate) -> Self {
        self.predicate = predicate;
        self
    }
}

impl FromIterator<CandidateType> for StaticClassScanner {
    fn from_iter<I: IntoIterator<Item = CandidateType>>(iter: I) -> Self {
        Self { candidates: iter.into_iter().collect(), ..Self::default() }
    }
}

impl ClassScanner for StaticClassScanner {
    fn scan(&self, namespace: &str) -> Vec<CandidateType> {
        self.candidates
            .iter()
            .filter(|candidate| candidate.namespace() == namespace)
            .filter(|candidate| (self.predicate)(candidate.markers))
            .cloned()
            .collect()
    }
}

/// Scans every namespace in order and unions the results.
///
/// A type found under several namespaces keeps the position of its first discovery.
pub fn scan_namespaces<S, I>(scanner: &S, namespaces: I) -> CandidateTypeSet
where
    S: ClassScanner + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut candidates = CandidateTypeSet::new();
    for namespace in namespaces {
        let namespace = namespace.as_ref();
        let found = scanner.scan(namespace);
        debug!(namespace, found = found.len(), "Scanned namespace");
        candidates.extend(found);
    }
    candidates
}
