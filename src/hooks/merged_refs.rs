//! Merging two reference handles into one callback.
//!
//! A renderable element accepts a single reference callback, but callers
//! sometimes hold two handles that both want the instance: one forwarded from
//! a parent, one local. [`merge_refs`] folds both into a single callback;
//! [`MergedRefs`] adds the per-instance memoization that keeps the merged
//! callback's identity stable across renders.

use crate::callback::Callback;
use crate::memo::MemoCell;
use crate::refs::RefHandle;

/// Combines two optional reference handles into one callback.
///
/// Invoking the returned callback with an instance delivers it to `ref1`
/// first, then `ref2`; absent handles are skipped. Callback-shaped handles
/// are invoked with the instance, cell-shaped handles have the instance
/// stored into their slot.
///
/// Every call to `merge_refs` produces a callback with a fresh identity; use
/// [`MergedRefs`] where the host compares callback identity between renders.
///
/// # Example
///
/// ```ignore
/// use view_hooks::{NodeRef, RefHandle, merge_refs};
///
/// let local: NodeRef<String> = NodeRef::new();
/// let merged = merge_refs(None, Some(RefHandle::from(local.clone())));
///
/// merged.call("abc".to_string());
/// assert_eq!(local.get(), Some("abc".to_string()));
/// ```
pub fn merge_refs<T: Clone + 'static>(
	ref1: Option<RefHandle<T>>,
	ref2: Option<RefHandle<T>>,
) -> Callback<T> {
	Callback::new(move |instance: T| {
		for handle in [&ref1, &ref2].into_iter().flatten() {
			handle.apply(instance.clone());
		}
	})
}

/// Per-component-instance adapter producing a stable merged callback.
///
/// The merged callback is recomputed only when the identity of either handle
/// changes; while both identities are unchanged, [`MergedRefs::merge`]
/// returns clones of the same callback, so the host sees the same reference
/// every render and does not detach and reattach the instance.
///
/// # Example
///
/// ```ignore
/// use view_hooks::{MergedRefs, NodeRef, RefHandle};
///
/// let merger: MergedRefs<String> = MergedRefs::new();
/// let outer: NodeRef<String> = NodeRef::new();
/// let inner: NodeRef<String> = NodeRef::new();
///
/// let first = merger.merge(
///     Some(RefHandle::from(outer.clone())),
///     Some(RefHandle::from(inner.clone())),
/// );
/// let second = merger.merge(
///     Some(RefHandle::from(outer)),
///     Some(RefHandle::from(inner)),
/// );
/// assert!(first.ptr_eq(&second));
/// ```
pub struct MergedRefs<T: 'static> {
	cache: MemoCell<(Option<RefHandle<T>>, Option<RefHandle<T>>), Callback<T>>,
}

impl<T: Clone + 'static> MergedRefs<T> {
	/// Creates an adapter with an empty cache.
	pub fn new() -> Self {
		Self {
			cache: MemoCell::new(),
		}
	}

	/// Returns the merged callback for the given handles.
	///
	/// The result is identity-stable: it is `ptr_eq` to the previously
	/// returned callback as long as both handle identities are unchanged.
	pub fn merge(
		&self,
		ref1: Option<RefHandle<T>>,
		ref2: Option<RefHandle<T>>,
	) -> Callback<T> {
		self.cache
			.get_or_recompute((ref1.clone(), ref2.clone()), || merge_refs(ref1, ref2))
	}
}

impl<T: Clone + 'static> Default for MergedRefs<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: 'static> std::fmt::Debug for MergedRefs<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MergedRefs")
			.field("cache", &self.cache)
			.finish()
	}
}
