//! Stable callback wrapper.
//!
//! This module provides [`Callback`], a type-safe, cloneable wrapper for
//! functions handed across component boundaries. Cloning a `Callback` shares
//! the underlying allocation, so a callback kept between renders keeps a
//! stable identity that hosts and memo caches can compare with
//! [`Callback::ptr_eq`].

use std::fmt;
use std::sync::Arc;

/// A type-safe, cloneable callback wrapper.
///
/// `Callback` wraps a function in an `Arc`, making it cheaply cloneable while
/// providing a stable reference that won't change between renders.
///
/// ## Type Parameters
///
/// - `Args`: The argument type the callback receives
/// - `Ret`: The return type of the callback (defaults to `()`)
///
/// ## Identity
///
/// Two callbacks compare equal when they share the same allocation, i.e.
/// one is a clone of the other. Wrapping the same closure twice produces two
/// distinct identities. This mirrors how host frameworks decide whether a
/// callback changed between renders.
///
/// ## Example
///
/// ```ignore
/// use view_hooks::Callback;
///
/// let on_attach = Callback::new(|instance: String| {
///     // receive the mounted instance
/// });
///
/// let same = on_attach.clone();
/// assert!(on_attach.ptr_eq(&same));
/// ```
pub struct Callback<Args, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	///
	/// # Example
	///
	/// ```ignore
	/// let handler = Callback::new(|instance| {
	///     // handle the instance
	/// });
	/// ```
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}

	/// Returns `true` when both callbacks share the same allocation.
	///
	/// This is the identity notion used by memoization: a cloned callback is
	/// "the same" callback, a freshly wrapped one is not.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

/// Equality is identity: two callbacks are equal when one is a clone of the
/// other.
impl<Args, Ret> PartialEq for Callback<Args, Ret> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl<Args, Ret> fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_callback_creation() {
		let callback = Callback::new(|_: i32| 42);
		assert_eq!(callback.call(0), 42);
	}

	#[test]
	fn test_callback_clone_shares_identity() {
		let callback1 = Callback::new(|x: i32| x * 2);
		let callback2 = callback1.clone();

		assert_eq!(callback1.call(5), 10);
		assert_eq!(callback2.call(5), 10);
		assert!(callback1.ptr_eq(&callback2));
		assert_eq!(callback1, callback2);
	}

	#[test]
	fn test_separate_wrappings_are_distinct() {
		let callback1 = Callback::new(|x: i32| x + 1);
		let callback2 = Callback::new(|x: i32| x + 1);

		assert!(!callback1.ptr_eq(&callback2));
		assert_ne!(callback1, callback2);
	}

	#[test]
	fn test_callback_with_captured_state() {
		use std::cell::Cell;
		use std::rc::Rc;

		let counter = Rc::new(Cell::new(0));
		let callback = Callback::new({
			let counter = Rc::clone(&counter);
			move |increment: i32| {
				counter.set(counter.get() + increment);
			}
		});

		callback.call(1);
		callback.call(2);
		callback.call(3);

		assert_eq!(counter.get(), 6);
	}

	#[test]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		let debug_str = format!("{:?}", callback);
		assert!(debug_str.contains("Callback"));
	}
}
