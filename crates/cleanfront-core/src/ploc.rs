//! Ploc - Presentation State Container
//!
//! `Ploc<S>` owns exactly one [`Pulse`] holding a presentation feature's whole
//! state. Feature types embed a `Ploc` and expose their own operations, each of
//! which computes a complete next state and hands it to [`Ploc::change_state`].
//!
//! ## Example
//!
//! ```
//! use cleanfront_core::Ploc;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct CounterState {
//!     count: u32,
//!     label: String,
//! }
//!
//! struct CounterPloc {
//!     ploc: Ploc<CounterState>,
//! }
//!
//! impl CounterPloc {
//!     fn increment(&self) {
//!         let state = self.ploc.state();
//!         self.ploc.change_state(CounterState {
//!             count: state.count + 1,
//!             ..state
//!         });
//!     }
//! }
//!
//! let counter = CounterPloc { ploc: Ploc::new(CounterState::default()) };
//! counter.increment();
//! assert_eq!(counter.ploc.state().count, 1);
//! ```

use core::fmt;

use crate::pulse::{Comparator, Listener, Pulse, Subscription};

/// A state container backed by a single, privately owned [`Pulse`]
///
/// The inner cell is never handed out; callers read, replace and subscribe
/// through the container only. `Ploc` is not `Clone`.
pub struct Ploc<S: 'static> {
	state: Pulse<S>,
}

impl<S: PartialEq + 'static> Ploc<S> {
	/// Creates a container holding `initial`.
	pub fn new(initial: S) -> Self {
		Self {
			state: Pulse::new(initial),
		}
	}
}

impl<S: 'static> Ploc<S> {
	/// Creates a container whose change detection uses `differs`.
	pub fn with_comparator(initial: S, differs: Comparator<S>) -> Self {
		Self {
			state: Pulse::with_comparator(initial, differs),
		}
	}

	/// Returns a clone of the current state.
	pub fn state(&self) -> S
	where
		S: Clone,
	{
		self.state.get()
	}

	/// Reads the current state by reference.
	///
	/// # Panics
	///
	/// Panics if `f` changes this container's state with [`Ploc::change_state`]. Compute
	/// the next state from [`Ploc::state`] instead.
	pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
		self.state.with(f)
	}

	/// Replaces the entire state.
	///
	/// Subscribers are notified synchronously unless `next` equals the current
	/// state. Returns whether a notification happened.
	pub fn change_state(&self, next: S) -> bool
	where
		S: Clone,
	{
		self.state.set(next)
	}

	/// Registers a state listener.
	pub fn subscribe(&self, listener: &Listener<S>) {
		self.state.subscribe(listener);
	}

	/// Removes a state listener.
	pub fn unsubscribe(&self, listener: &Listener<S>) {
		self.state.unsubscribe(listener);
	}

	/// Subscribes a closure for as long as the returned guard lives.
	pub fn watch<F>(&self, f: F) -> Subscription<S>
	where
		F: Fn(&S) + 'static,
	{
		self.state.watch(f)
	}

	/// Number of registered state listeners.
	pub fn listener_count(&self) -> usize {
		self.state.listener_count()
	}
}

impl<S: fmt::Debug + 'static> fmt::Debug for Ploc<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Ploc").field("state", &self.state).finish()
	}
}
