//! Single-slot memo cell keyed by dependency identity.

use std::cell::RefCell;
use std::fmt;

/// A cache holding the last computed value together with the dependencies it
/// was computed from.
///
/// `get_or_recompute` returns the cached value as long as the supplied
/// dependencies compare equal to the stored ones, and recomputes (replacing
/// the slot) when they differ. Dependency types whose `PartialEq` is
/// identity, such as [`Callback`](crate::Callback), [`NodeRef`](crate::NodeRef),
/// and [`RefHandle`](crate::RefHandle), give recompute-on-identity-change
/// memoization.
///
/// # Example
///
/// ```ignore
/// use view_hooks::MemoCell;
///
/// let cell: MemoCell<u32, String> = MemoCell::new();
/// let a = cell.get_or_recompute(1, || "one".to_string());
/// let b = cell.get_or_recompute(1, || unreachable!("deps unchanged"));
/// assert_eq!(a, b);
/// ```
pub struct MemoCell<D, T> {
	slot: RefCell<Option<(D, T)>>,
}

impl<D, T> MemoCell<D, T> {
	/// Creates an empty cell.
	pub fn new() -> Self {
		Self {
			slot: RefCell::new(None),
		}
	}

	/// Drops the cached entry, forcing the next access to recompute.
	pub fn clear(&self) {
		*self.slot.borrow_mut() = None;
	}

	/// Returns `true` when the cell holds a cached entry.
	pub fn is_cached(&self) -> bool {
		self.slot.borrow().is_some()
	}
}

impl<D: PartialEq, T: Clone> MemoCell<D, T> {
	/// Returns the cached value when `deps` match the stored dependencies,
	/// otherwise computes a fresh value and caches it with `deps`.
	pub fn get_or_recompute<F>(&self, deps: D, compute: F) -> T
	where
		F: FnOnce() -> T,
	{
		{
			let slot = self.slot.borrow();
			if let Some((cached_deps, value)) = slot.as_ref() {
				if *cached_deps == deps {
					return value.clone();
				}
			}
		}

		tracing::trace!("memo dependencies changed, recomputing");
		let value = compute();
		*self.slot.borrow_mut() = Some((deps, value.clone()));
		value
	}
}

impl<D, T> Default for MemoCell<D, T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D, T> fmt::Debug for MemoCell<D, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoCell")
			.field("cached", &self.is_cached())
			.finish()
	}
}
