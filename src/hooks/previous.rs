//! Retaining the previous render cycle's value.

use std::cell::RefCell;
use std::fmt;

/// Tracks the value supplied on the prior completed render cycle.
///
/// A `Previous` owns two cells: the committed value from the last completed
/// cycle, and the pending value recorded during the current one. During
/// render, [`Previous::track`] records the current cycle's value and returns
/// the committed one, absent on the very first cycle. After the host commits
/// the cycle's output it calls [`Previous::commit`], promoting the pending
/// value. A cycle that never commits (a failed render) leaves the committed
/// value untouched.
///
/// # Example
///
/// ```ignore
/// use view_hooks::Previous;
///
/// let previous: Previous<i32> = Previous::new();
///
/// assert_eq!(previous.track(1), None); // first cycle
/// previous.commit();
///
/// assert_eq!(previous.track(2), Some(1));
/// previous.commit();
///
/// assert_eq!(previous.track(3), Some(2));
/// ```
pub struct Previous<T> {
	committed: RefCell<Option<T>>,
	pending: RefCell<Option<T>>,
}

impl<T: Clone> Previous<T> {
	/// Creates a tracker with no committed value.
	pub fn new() -> Self {
		Self {
			committed: RefCell::new(None),
			pending: RefCell::new(None),
		}
	}

	/// Records this cycle's value and returns the prior cycle's.
	///
	/// Reading and recording are decoupled: the returned value reflects the
	/// committed cell as of before this cycle, however many times `track` is
	/// called, until [`Previous::commit`] promotes the recorded value.
	pub fn track(&self, value: T) -> Option<T> {
		let previous = self.committed.borrow().clone();
		*self.pending.borrow_mut() = Some(value);
		previous
	}

	/// Promotes the value recorded during this cycle.
	///
	/// Called by the host once the cycle's output is committed. Without a
	/// recorded value this is a no-op.
	pub fn commit(&self) {
		if let Some(value) = self.pending.borrow_mut().take() {
			*self.committed.borrow_mut() = Some(value);
		}
	}

	/// Reads the committed value without recording a new one.
	pub fn get(&self) -> Option<T> {
		self.committed.borrow().clone()
	}
}

impl<T: Clone> Default for Previous<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: fmt::Debug> fmt::Debug for Previous<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Previous")
			.field("committed", &self.committed.borrow())
			.field("pending", &self.pending.borrow())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_cycle_is_absent() {
		let previous: Previous<i32> = Previous::new();
		assert_eq!(previous.track(0), None);
	}

	#[test]
	fn test_sequence_lags_by_one_cycle() {
		let previous = Previous::new();

		assert_eq!(previous.track("v0"), None);
		previous.commit();

		assert_eq!(previous.track("v1"), Some("v0"));
		previous.commit();

		assert_eq!(previous.track("v2"), Some("v1"));
	}

	#[test]
	fn test_repeated_track_within_cycle() {
		let previous = Previous::new();
		previous.track(1);
		previous.commit();

		// Two renders of the same cycle both see the prior committed value.
		assert_eq!(previous.track(2), Some(1));
		assert_eq!(previous.track(2), Some(1));
		previous.commit();

		assert_eq!(previous.track(3), Some(2));
	}

	#[test]
	fn test_uncommitted_cycle_leaves_value() {
		let previous = Previous::new();
		previous.track(1);
		previous.commit();

		// Render happened but the cycle never committed.
		assert_eq!(previous.track(2), Some(1));

		assert_eq!(previous.get(), Some(1));
	}

	#[test]
	fn test_commit_without_track_is_noop() {
		let previous: Previous<i32> = Previous::new();
		previous.commit();
		assert_eq!(previous.get(), None);

		previous.track(1);
		previous.commit();
		previous.commit();
		assert_eq!(previous.get(), Some(1));
	}

	#[test]
	fn test_get_does_not_record() {
		let previous = Previous::new();
		previous.track(1);
		previous.commit();

		assert_eq!(previous.get(), Some(1));
		previous.commit();
		// get() left nothing pending, so the committed value is unchanged.
		assert_eq!(previous.get(), Some(1));
	}
}
