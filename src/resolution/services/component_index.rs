use crate::resolution::domain::{
    component_type_id, ComponentIdentifier, SoftwareArtifact, SoftwareComponent,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;

/// Lookup key mirroring the component equality contract
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    type_id: TypeId,
    id: ComponentIdentifier,
}

impl ComponentKey {
    pub fn of<A, C>(component: &C) -> Self
    where
        A: SoftwareArtifact,
        C: SoftwareComponent<A> + ?Sized,
    {
        Self {
            type_id: component_type_id::<A, C>(component),
            id: component.id().clone(),
        }
    }

    pub fn id(&self) -> &ComponentIdentifier {
        &self.id
    }
}

/// ComponentIndex - identity index over resolved components
///
/// Holds at most one component per equality class. Inserts and lookups may
/// run concurrently from any number of threads.
pub struct ComponentIndex<A: SoftwareArtifact> {
    components: DashMap<ComponentKey, Arc<dyn SoftwareComponent<A>>>,
}

impl<A: SoftwareArtifact> ComponentIndex<A> {
    pub fn new() -> Self {
        Self {
            components: DashMap::new(),
        }
    }

    /// Builds an index from `components`, keeping the first of every group
    /// of equal components.
    ///
    /// # Returns
    /// The index and the number of components dropped as duplicates
    pub fn from_components<I>(components: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Arc<dyn SoftwareComponent<A>>>,
    {
        let index = Self::new();
        let duplicates = components
            .into_iter()
            .filter(|component| !index.insert(Arc::clone(component)))
            .count();
        (index, duplicates)
    }

    /// Inserts `component` unless an equal one is already indexed.
    ///
    /// # Returns
    /// `true` if the component was added, `false` if it was a duplicate
    pub fn insert(&self, component: Arc<dyn SoftwareComponent<A>>) -> bool {
        match self.components.entry(ComponentKey::of::<A, _>(&*component)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(component);
                true
            }
        }
    }

    pub fn contains(&self, component: &dyn SoftwareComponent<A>) -> bool {
        self.components
            .contains_key(&ComponentKey::of::<A, _>(component))
    }

    /// Returns the indexed component equal to `component`, if any
    pub fn get(&self, component: &dyn SoftwareComponent<A>) -> Option<Arc<dyn SoftwareComponent<A>>> {
        self.components
            .get(&ComponentKey::of::<A, _>(component))
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Returns every indexed component carrying `id`, whatever its variant
    pub fn find_by_id(&self, id: &ComponentIdentifier) -> Vec<Arc<dyn SoftwareComponent<A>>> {
        self.components
            .iter()
            .filter(|entry| entry.key().id() == id)
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Snapshot of the indexed components ordered by identifier
    pub fn sorted_components(&self) -> Vec<Arc<dyn SoftwareComponent<A>>> {
        let mut components: Vec<Arc<dyn SoftwareComponent<A>>> = self
            .components
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        components.sort_by(|a, b| a.id().cmp(b.id()));
        components
    }
}

impl<A: SoftwareArtifact> Default for ComponentIndex<A> {
    fn default() -> Self {
        Self::new()
    }
}
