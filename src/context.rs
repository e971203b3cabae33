//! Context channel: tree-scoped shared values.
//!
//! A [`Context`] is a channel through which an ancestor publishes a value to
//! any descendant without threading it through props. Providers are scoped:
//! [`Context::provide`] pushes a value and returns a guard that removes it on
//! drop, and [`Context::with`] scopes a value to a closure. Readers see the
//! innermost provider, or `None` when no provider is in scope.
//!
//! Channels are single-threaded handles; clones share the channel, so the
//! component providing a value and the component reading it only need clones
//! of the same `Context`.
//!
//! # Example
//!
//! ```ignore
//! use view_hooks::Context;
//!
//! #[derive(Clone)]
//! struct Theme {
//!     name: &'static str,
//! }
//!
//! let theme: Context<Theme> = Context::new();
//! assert!(theme.current().is_none());
//!
//! theme.with(Theme { name: "dark" }, || {
//!     assert_eq!(theme.current().unwrap().name, "dark");
//! });
//!
//! assert!(theme.current().is_none());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A context channel handle.
///
/// Clones share the channel: a value provided through one clone is visible
/// through every other clone.
pub struct Context<V> {
	providers: Rc<RefCell<Vec<V>>>,
}

impl<V> Context<V> {
	/// Creates a new channel with no provider in scope.
	pub fn new() -> Self {
		Self {
			providers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Publishes `value` on this channel until the returned guard is dropped.
	///
	/// Nested provides shadow outer ones; guards must unwind in reverse
	/// creation order, which scope-based `Drop` gives naturally. Prefer
	/// [`Context::with`] when a closure fits the call site.
	#[must_use = "dropping the guard immediately removes the provided value"]
	pub fn provide(&self, value: V) -> ContextGuard<V> {
		self.providers.borrow_mut().push(value);
		tracing::trace!("context provider entered scope");
		ContextGuard {
			providers: Rc::clone(&self.providers),
		}
	}

	/// Publishes `value` for the duration of `f`.
	pub fn with<R>(&self, value: V, f: impl FnOnce() -> R) -> R {
		let _guard = self.provide(value);
		f()
	}

	/// Returns `true` when any provider is in scope.
	pub fn is_provided(&self) -> bool {
		!self.providers.borrow().is_empty()
	}
}

impl<V: Clone> Context<V> {
	/// Returns the innermost provided value, or `None` when no provider is in
	/// scope.
	pub fn current(&self) -> Option<V> {
		self.providers.borrow().last().cloned()
	}
}

impl<V> Clone for Context<V> {
	fn clone(&self) -> Self {
		Self {
			providers: Rc::clone(&self.providers),
		}
	}
}

impl<V> Default for Context<V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<V> fmt::Debug for Context<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context")
			.field("providers", &self.providers.borrow().len())
			.finish()
	}
}

/// Removes the matching provider from its channel on drop.
pub struct ContextGuard<V> {
	providers: Rc<RefCell<Vec<V>>>,
}

impl<V> Drop for ContextGuard<V> {
	fn drop(&mut self) {
		self.providers.borrow_mut().pop();
		tracing::trace!("context provider left scope");
	}
}

impl<V> fmt::Debug for ContextGuard<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ContextGuard").finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_current_with_value() {
		let ctx: Context<i32> = Context::new();
		ctx.with(42, || {
			assert_eq!(ctx.current(), Some(42));
		});
	}

	#[rstest]
	fn test_current_without_value() {
		let ctx: Context<String> = Context::new();
		assert!(ctx.current().is_none());
		assert!(!ctx.is_provided());
	}

	#[test]
	fn test_guard_restores_on_drop() {
		let ctx: Context<i32> = Context::new();
		{
			let _guard = ctx.provide(1);
			assert_eq!(ctx.current(), Some(1));
		}
		assert_eq!(ctx.current(), None);
	}

	#[test]
	fn test_nested_providers_shadow() {
		let ctx: Context<&'static str> = Context::new();
		ctx.with("outer", || {
			assert_eq!(ctx.current(), Some("outer"));
			ctx.with("inner", || {
				assert_eq!(ctx.current(), Some("inner"));
			});
			assert_eq!(ctx.current(), Some("outer"));
		});
	}

	#[test]
	fn test_clones_share_channel() {
		let ctx: Context<i32> = Context::new();
		let reader = ctx.clone();
		ctx.with(5, || {
			assert_eq!(reader.current(), Some(5));
		});
		assert_eq!(reader.current(), None);
	}

	#[test]
	fn test_distinct_channels_are_independent() {
		let a: Context<i32> = Context::new();
		let b: Context<i32> = Context::new();
		a.with(1, || {
			assert_eq!(b.current(), None);
		});
	}
}
