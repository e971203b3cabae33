//! Reference handles for renderable instances.
//!
//! A reference handle is an opaque slot through which a host exposes the
//! underlying object of a rendered instance. Handles come in two shapes:
//! a callback invoked with the instance, or a mutable cell the instance is
//! stored into. [`RefHandle`] unifies both behind a single dispatch point so
//! callers can treat either shape uniformly; absence is `Option<RefHandle>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::callback::Callback;

/// A mutable-cell reference handle.
///
/// `NodeRef` is a shared slot that starts empty and is populated by the host
/// when an instance attaches. Clones share the slot; equality is slot
/// identity, not the stored value.
///
/// # Example
///
/// ```ignore
/// use view_hooks::NodeRef;
///
/// let node_ref: NodeRef<String> = NodeRef::new();
/// assert_eq!(node_ref.get(), None);
///
/// node_ref.set("instance".to_string());
/// assert_eq!(node_ref.get(), Some("instance".to_string()));
/// ```
pub struct NodeRef<T> {
	inner: Rc<RefCell<Option<T>>>,
}

impl<T> NodeRef<T> {
	/// Creates an empty reference.
	pub fn new() -> Self {
		Self {
			inner: Rc::new(RefCell::new(None)),
		}
	}

	/// Stores an instance in the slot, replacing any previous one.
	pub fn set(&self, instance: T) {
		*self.inner.borrow_mut() = Some(instance);
	}

	/// Removes and returns the stored instance, leaving the slot empty.
	pub fn take(&self) -> Option<T> {
		self.inner.borrow_mut().take()
	}

	/// Returns `true` when the slot currently holds an instance.
	pub fn is_set(&self) -> bool {
		self.inner.borrow().is_some()
	}

	/// Returns `true` when both references share the same slot.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<T: Clone> NodeRef<T> {
	/// Returns a clone of the stored instance, if any.
	pub fn get(&self) -> Option<T> {
		self.inner.borrow().clone()
	}
}

impl<T> Clone for NodeRef<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T> Default for NodeRef<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Equality is slot identity: two references are equal when they share the
/// same slot.
impl<T> PartialEq for NodeRef<T> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl<T> fmt::Debug for NodeRef<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeRef")
			.field("set", &self.is_set())
			.finish()
	}
}

/// A reference handle in either of its two shapes.
///
/// The host does not care which shape a caller supplied; [`RefHandle::apply`]
/// is the single dispatch point that delivers an instance to either.
pub enum RefHandle<T: 'static> {
	/// A callback invoked with the instance.
	Callback(Callback<T>),
	/// A mutable cell the instance is stored into.
	Cell(NodeRef<T>),
}

impl<T: Clone + 'static> RefHandle<T> {
	/// Delivers an instance to this handle.
	///
	/// Callback handles are invoked with the instance; cell handles have the
	/// instance stored into their slot.
	pub fn apply(&self, instance: T) {
		match self {
			RefHandle::Callback(callback) => callback.call(instance),
			RefHandle::Cell(node_ref) => node_ref.set(instance),
		}
	}
}

impl<T> Clone for RefHandle<T> {
	fn clone(&self) -> Self {
		match self {
			RefHandle::Callback(callback) => RefHandle::Callback(callback.clone()),
			RefHandle::Cell(node_ref) => RefHandle::Cell(node_ref.clone()),
		}
	}
}

/// Equality is handle identity: same shape, same underlying callback or slot.
impl<T> PartialEq for RefHandle<T> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(RefHandle::Callback(a), RefHandle::Callback(b)) => a.ptr_eq(b),
			(RefHandle::Cell(a), RefHandle::Cell(b)) => a.ptr_eq(b),
			_ => false,
		}
	}
}

impl<T> fmt::Debug for RefHandle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RefHandle::Callback(callback) => f.debug_tuple("Callback").field(callback).finish(),
			RefHandle::Cell(node_ref) => f.debug_tuple("Cell").field(node_ref).finish(),
		}
	}
}

impl<T> From<Callback<T>> for RefHandle<T> {
	fn from(callback: Callback<T>) -> Self {
		RefHandle::Callback(callback)
	}
}

impl<T> From<NodeRef<T>> for RefHandle<T> {
	fn from(node_ref: NodeRef<T>) -> Self {
		RefHandle::Cell(node_ref)
	}
}
