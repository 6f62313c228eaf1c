/*!
Canonical ordering and deduplication of alternative lists.

Every `'static` type has a [`TypeKey`], whose ordering is that of its [`TypeId`]: a total order which
is guaranteed to distinguish distinct types, unlike an order on type names. [`normalize`] sorts a list
of keys and removes duplicates, producing the [`Layout`] shared by every permutation of the same set
of alternatives. Two sums with equal layouts hold the same kinds of values, compare and hash
consistently, and can be converted into one another.
*/
use crate::storage::{Alternatives, Slot, Void};
use crate::{debug_from_display, quick_display};
use elysees::Arc;
use itertools::Itertools;
use smallvec::SmallVec;
use std::any::{type_name, TypeId};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

#[cfg(feature = "layout-cache")]
pub mod cache;

/// The number of keys a layout stores inline
pub const SMALL_LAYOUT_SIZE: usize = 4;

/// The key-vector of a layout
pub type LayoutKeys = SmallVec<[TypeKey; SMALL_LAYOUT_SIZE]>;

/// The identity of a single type, used to canonically order alternatives
#[derive(Copy, Clone)]
pub struct TypeKey {
    /// The type's identity
    id: TypeId,
    /// The type's name, for diagnostics only
    name: &'static str,
}

impl TypeKey {
    /// Get the key of a type
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> TypeKey {
        TypeKey {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
    /// Get the `TypeId` of this key
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }
    /// Get the name of the type this key identifies
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    #[inline]
    fn eq(&self, other: &TypeKey) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl PartialOrd for TypeKey {
    #[inline]
    fn partial_cmp(&self, other: &TypeKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeKey {
    #[inline]
    fn cmp(&self, other: &TypeKey) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for TypeKey {
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher)
    }
}

quick_display!(TypeKey, s, fmt => write!(fmt, "{}", s.name));
debug_from_display!(TypeKey);

/// A deduplicated, canonically ordered list of alternatives
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Layout {
    keys: LayoutKeys,
}

quick_display!(Layout, s, fmt => write!(fmt, "{{{}}}", s.keys.iter().join(", ")));
debug_from_display!(Layout);

impl Deref for Layout {
    type Target = [TypeKey];
    #[inline]
    fn deref(&self) -> &[TypeKey] {
        &self.keys
    }
}

impl Layout {
    /// Get the canonical position of a key in this layout, if it is present
    #[inline]
    pub fn position(&self, key: &TypeKey) -> Option<usize> {
        self.keys.binary_search(key).ok()
    }
    /// Check whether this layout contains a given key
    #[inline]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.position(key).is_some()
    }
    /// Check whether every alternative of this layout is also an alternative of `other`
    pub fn is_subset(&self, other: &Layout) -> bool {
        self.keys.iter().all(|key| other.contains(key))
    }
    /// Get the normalized union of two layouts
    pub fn union(&self, other: &Layout) -> Layout {
        normalize(self.keys.iter().chain(other.keys.iter()).copied())
    }
    /// Get the underlying keys of this layout
    #[inline]
    pub fn keys(&self) -> &[TypeKey] {
        &self.keys
    }
}

/**
Normalize a list of alternatives: sort it into canonical order and drop duplicates.

Lists of size zero or one are returned unchanged.

# Example
```rust
use coprod::normal::normalize;
use coprod::TypeKey;

let forwards = normalize(vec![TypeKey::of::<bool>(), TypeKey::of::<i32>()]);
let backwards = normalize(vec![
    TypeKey::of::<i32>(),
    TypeKey::of::<bool>(),
    TypeKey::of::<i32>(),
]);
assert_eq!(forwards, backwards);
assert_eq!(forwards.len(), 2);
```
*/
pub fn normalize<I: IntoIterator<Item = TypeKey>>(keys: I) -> Layout {
    let mut keys: LayoutKeys = keys.into_iter().collect();
    let candidates = keys.len();
    keys.sort();
    keys.dedup();
    tracing::trace!(candidates, distinct = keys.len(), "normalized alternative list");
    Layout { keys }
}

/// An alternative list made of `'static` types, which therefore has a canonical layout
pub trait Keys: Alternatives + 'static {
    /// Push the key of every alternative of this list, in list order
    fn push_keys(keys: &mut LayoutKeys);
    /// Get the key of the alternative currently held by a representation
    fn key_of(repr: &Self::Repr) -> TypeKey;
    /// Get the canonical layout of this list
    fn layout() -> Arc<Layout> {
        #[cfg(feature = "layout-cache")]
        {
            cache::layout_of::<Self>()
        }
        #[cfg(not(feature = "layout-cache"))]
        {
            Arc::new(compute_layout::<Self>())
        }
    }
}

/// Compute the canonical layout of an alternative list from scratch
pub fn compute_layout<S: Keys>() -> Layout {
    let mut keys = LayoutKeys::new();
    S::push_keys(&mut keys);
    normalize(keys)
}

impl Keys for () {
    #[inline]
    fn push_keys(_keys: &mut LayoutKeys) {}
    #[inline]
    fn key_of(repr: &Void) -> TypeKey {
        match *repr {}
    }
}

impl<H: 'static, T: Keys> Keys for (H, T) {
    #[inline]
    fn push_keys(keys: &mut LayoutKeys) {
        keys.push(TypeKey::of::<H>());
        T::push_keys(keys)
    }
    #[inline]
    fn key_of(repr: &Slot<H, T::Repr>) -> TypeKey {
        match repr {
            Slot::Here(_) => TypeKey::of::<H>(),
            Slot::There(rest) => T::key_of(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T;
    use pretty_assertions::assert_eq;

    fn keys_of<S: Keys>() -> LayoutKeys {
        let mut keys = LayoutKeys::new();
        S::push_keys(&mut keys);
        keys
    }

    #[test]
    fn permutations_normalize_identically() {
        let base = compute_layout::<T![bool, i32, String]>();
        assert_eq!(base.len(), 3);
        assert_eq!(base, compute_layout::<T![String, bool, i32]>());
        assert_eq!(base, compute_layout::<T![i32, String, bool]>());
        assert_eq!(base, compute_layout::<T![i32, i32, bool, String, bool]>());
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize(keys_of::<T![u8, char, u8, f64, char]>());
        let twice = normalize(once.iter().copied());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 3);
    }

    #[test]
    fn small_lists_are_unchanged() {
        assert!(normalize(keys_of::<T![]>()).is_empty());
        let single = normalize(keys_of::<T![Vec<u8>]>());
        assert_eq!(single.keys(), &[TypeKey::of::<Vec<u8>>()][..]);
    }

    #[test]
    fn distinct_types_with_similar_names_stay_distinct() {
        mod a {
            pub struct Node;
        }
        mod b {
            pub struct Node;
        }
        let layout = compute_layout::<T![a::Node, b::Node]>();
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn positions_subsets_and_unions() {
        let small = compute_layout::<T![bool, u8]>();
        let large = compute_layout::<T![u8, char, bool]>();
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert_eq!(small.union(&large), large);
        for key in small.iter() {
            let ix = large.position(key).expect("subset keys are present");
            assert_eq!(&large[ix], key);
        }
        assert_eq!(small.position(&TypeKey::of::<char>()), None);
    }

    #[test]
    fn layouts_display_their_names() {
        let layout = compute_layout::<T![bool]>();
        assert_eq!(format!("{}", layout), "{bool}");
    }

    #[test]
    fn cached_layouts_match_fresh_ones() {
        let cached = <T![u16, bool, u16] as Keys>::layout();
        assert_eq!(*cached, compute_layout::<T![bool, u16]>());
        let again = <T![u16, bool, u16] as Keys>::layout();
        assert_eq!(*again, *cached);
    }
}
