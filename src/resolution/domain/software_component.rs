use super::{ComponentIdentifier, SoftwareArtifact};
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Exposes a value as `&dyn Any` so its concrete type survives type erasure.
///
/// Blanket-implemented for every sized `'static` type; trait objects reach
/// the implementation of the concrete type through their vtable.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A software component with resolved artifacts.
///
/// Every implementation follows the same equality contract: two components
/// are equal if and only if they are of the same concrete type and their
/// identifiers are equal. Artifacts never take part in equality. Use
/// [`same_component`] and [`hash_component`] to implement `PartialEq` and
/// `Hash`, so that concrete values and trait objects agree.
///
/// The identifier returned by [`SoftwareComponent::id`] must not change for
/// the lifetime of the instance.
///
/// Handles such as `Arc<dyn SoftwareComponent<A>>` are compared through the
/// pointee (`*a == *b`); comparing the handles directly moves the right-hand
/// side.
pub trait SoftwareComponent<A: SoftwareArtifact>: AsAny + fmt::Debug + Send + Sync {
    /// The identity of this component
    fn id(&self) -> &ComponentIdentifier;

    /// The artifacts this component owns, resolved or not
    fn artifacts(&self) -> &[A];
}

/// Returns the `TypeId` of the concrete type behind `component`.
pub fn component_type_id<A, C>(component: &C) -> TypeId
where
    A: SoftwareArtifact,
    C: SoftwareComponent<A> + ?Sized,
{
    Any::type_id(component.as_any())
}

/// The equality contract shared by every component variant.
pub fn same_component<A, L, R>(left: &L, right: &R) -> bool
where
    A: SoftwareArtifact,
    L: SoftwareComponent<A> + ?Sized,
    R: SoftwareComponent<A> + ?Sized,
{
    component_type_id::<A, L>(left) == component_type_id::<A, R>(right) && left.id() == right.id()
}

/// Hashes the fields that take part in [`same_component`].
pub fn hash_component<A, C, H>(component: &C, state: &mut H)
where
    A: SoftwareArtifact,
    C: SoftwareComponent<A> + ?Sized,
    H: Hasher,
{
    component_type_id::<A, C>(component).hash(state);
    component.id().hash(state);
}

impl<A: SoftwareArtifact> PartialEq for dyn SoftwareComponent<A> {
    fn eq(&self, other: &Self) -> bool {
        same_component::<A, Self, Self>(self, other)
    }
}

impl<A: SoftwareArtifact> Eq for dyn SoftwareComponent<A> {}

impl<A: SoftwareArtifact> Hash for dyn SoftwareComponent<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_component::<A, Self, H>(self, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolution::domain::{ArtifactResolveError, JvmArtifactKind, JvmLibraryArtifact};
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct Library {
        id: ComponentIdentifier,
        artifacts: Vec<JvmLibraryArtifact>,
    }

    impl SoftwareComponent<JvmLibraryArtifact> for Library {
        fn id(&self) -> &ComponentIdentifier {
            &self.id
        }

        fn artifacts(&self) -> &[JvmLibraryArtifact] {
            &self.artifacts
        }
    }

    #[derive(Debug)]
    struct Plugin {
        id: ComponentIdentifier,
    }

    impl SoftwareComponent<JvmLibraryArtifact> for Plugin {
        fn id(&self) -> &ComponentIdentifier {
            &self.id
        }

        fn artifacts(&self) -> &[JvmLibraryArtifact] {
            &[]
        }
    }

    fn id(coordinates: &str) -> ComponentIdentifier {
        coordinates.parse().unwrap()
    }

    fn library(coordinates: &str) -> Box<dyn SoftwareComponent<JvmLibraryArtifact>> {
        Box::new(Library {
            id: id(coordinates),
            artifacts: vec![],
        })
    }

    fn plugin(coordinates: &str) -> Box<dyn SoftwareComponent<JvmLibraryArtifact>> {
        Box::new(Plugin {
            id: id(coordinates),
        })
    }

    fn hash_of(component: &dyn SoftwareComponent<JvmLibraryArtifact>) -> u64 {
        let mut hasher = DefaultHasher::new();
        component.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_id_is_stable_across_calls() {
        let component = library("group:artifact:1.0");
        let first = component.id().clone();
        for _ in 0..3 {
            assert_eq!(component.id(), &first);
        }
    }

    #[test]
    fn test_equal_identifiers_same_type_are_equal() {
        assert!(*library("group:artifact:1.0") == *library("group:artifact:1.0"));
    }

    #[test]
    fn test_different_identifiers_are_not_equal() {
        assert!(*library("group:artifact:1.0") != *library("group:artifact:2.0"));
    }

    #[test]
    fn test_reflexive() {
        let component = library("group:artifact:1.0");
        assert!(*component == *component);
    }

    #[test]
    fn test_different_types_with_equal_identifiers_are_not_equal() {
        let lib = library("group:artifact:1.0");
        let plug = plugin("group:artifact:1.0");
        assert!(*lib != *plug);
        assert!(*plug != *lib);
    }

    #[test]
    fn test_symmetric_and_transitive() {
        let a = library("g:m:1");
        let b = library("g:m:1");
        let c = library("g:m:1");
        assert!(*a == *b && *b == *a);
        assert!(*b == *c);
        assert!(*a == *c);
    }

    #[test]
    fn test_artifacts_do_not_affect_equality() {
        let with_artifacts = Library {
            id: id("g:m:1"),
            artifacts: vec![
                JvmLibraryArtifact::resolved(JvmArtifactKind::Jar, PathBuf::from("/m.jar")),
                JvmLibraryArtifact::failed(
                    JvmArtifactKind::Sources,
                    ArtifactResolveError::new("missing"),
                ),
            ],
        };
        let without = Library {
            id: id("g:m:1"),
            artifacts: vec![],
        };
        assert!(same_component(&with_artifacts, &without));
    }

    #[test]
    fn test_same_component_on_concrete_values() {
        let lib = Library {
            id: id("g:m:1"),
            artifacts: vec![],
        };
        let plug = Plugin { id: id("g:m:1") };
        assert!(same_component(&lib, &lib));
        assert!(!same_component(&lib, &plug));
    }

    #[test]
    fn test_component_type_id_sees_through_trait_objects() {
        let boxed = library("g:m:1");
        let concrete = Library {
            id: id("g:m:1"),
            artifacts: vec![],
        };
        assert_eq!(component_type_id(&*boxed), TypeId::of::<Library>());
        assert_eq!(component_type_id(&concrete), TypeId::of::<Library>());
    }

    #[test]
    fn test_equal_components_hash_equally() {
        assert_eq!(hash_of(&*library("g:m:1")), hash_of(&*library("g:m:1")));
    }

    #[test]
    fn test_boxed_components_in_hash_set() {
        let mut set: HashSet<Box<dyn SoftwareComponent<JvmLibraryArtifact>>> = HashSet::new();
        assert!(set.insert(library("g:m:1")));
        assert!(!set.insert(library("g:m:1")));
        assert!(set.insert(plugin("g:m:1")));
        assert!(set.insert(library("g:m:2")));
        assert_eq!(set.len(), 3);
    }
}
