/*!
A global cache of canonical layouts, keyed by the identity of the alternative list
*/
use super::{compute_layout, Keys, Layout};
use ahash::RandomState;
use dashmap::DashMap;
use elysees::Arc;
use lazy_static::lazy_static;
use std::any::TypeId;

lazy_static! {
    /// The layouts computed so far
    static ref LAYOUTS: DashMap<TypeId, Arc<Layout>, RandomState> =
        DashMap::with_hasher(RandomState::new());
}

/// Get the layout of an alternative list, computing and caching it on first use
pub(super) fn layout_of<S: Keys>() -> Arc<Layout> {
    let id = TypeId::of::<S>();
    // Read-lock first!
    if let Some(cached) = LAYOUTS.get(&id) {
        return cached.value().clone();
    }
    tracing::debug!(list = std::any::type_name::<S>(), "layout cache miss");
    LAYOUTS
        .entry(id)
        .or_insert_with(|| Arc::new(compute_layout::<S>()))
        .value()
        .clone()
}

/// Get the number of layouts currently cached
pub fn cached_layouts() -> usize {
    LAYOUTS.len()
}
