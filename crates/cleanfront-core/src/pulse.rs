//! Pulse - Single-value Reactive Cell
//!
//! `Pulse<T>` holds one value and synchronously notifies its listeners whenever
//! the value is replaced by one that differs from the current value.
//!
//! ## Key Features
//!
//! - **Change Detection by Inequality**: `set()` notifies only when the new value
//!   differs from the current one (`!=` for `PartialEq` types, or a custom
//!   comparator supplied with [`Pulse::with_comparator`]).
//! - **Ordered, Deduplicated Listeners**: listeners run in subscription order and
//!   subscribing the same [`Listener`] twice has the same effect as once.
//! - **Synchronous Notification**: every effective `set()` runs one complete
//!   notification round before returning. There is no batching.
//! - **Shared Handle**: `Pulse<T>` is cheap to clone; all clones share the value
//!   and the listener list.
//!
//! ## Notification Round
//!
//! The listener list is snapshotted at the start of each round. A listener
//! subscribed during a round is first invoked by the next round. A listener
//! unsubscribed during a round is still invoked by that round if it was part of
//! the snapshot. Listeners may read the cell or set it again; a nested `set()`
//! runs its own full round before returning to the outer one.
//!
//! ## Example
//!
//! ```
//! use cleanfront_core::{Listener, Pulse};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Pulse::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let listener = Listener::new({
//!     let seen = seen.clone();
//!     move |value: &i32| seen.set(*value)
//! });
//! count.subscribe(&listener);
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//!
//! count.unsubscribe(&listener);
//! count.set(7);
//! assert_eq!(seen.get(), 42);
//! ```

use core::cell::RefCell;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::rc::{Rc, Weak};

/// Returns `true` when two values are considered different.
pub type Comparator<T> = fn(&T, &T) -> bool;

/// Unique identifier for a [`Pulse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PulseId(usize);

impl PulseId {
	fn next() -> Self {
		static COUNTER: AtomicUsize = AtomicUsize::new(0);
		Self(COUNTER.fetch_add(1, Ordering::Relaxed))
	}
}

/// A change listener registered on a [`Pulse`]
///
/// Listener identity is the identity of the wrapped closure: clones of one
/// `Listener` are the same listener, two `Listener::new` calls never are.
pub struct Listener<T: 'static> {
	callback: Rc<dyn Fn(&T)>,
}

impl<T: 'static> Listener<T> {
	/// Wraps a closure into a listener.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&T) + 'static,
	{
		Self {
			callback: Rc::new(f),
		}
	}

	/// Invokes the listener with a value.
	pub fn call(&self, value: &T) {
		(self.callback)(value)
	}

	/// Returns `true` if both handles refer to the same listener.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.callback, &other.callback)
	}
}

impl<T: 'static> Clone for Listener<T> {
	fn clone(&self) -> Self {
		Self {
			callback: Rc::clone(&self.callback),
		}
	}
}

impl<T: 'static> PartialEq for Listener<T> {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl<T: 'static> Eq for Listener<T> {}

impl<T: 'static> fmt::Debug for Listener<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listener")
			.field("ptr", &Rc::as_ptr(&self.callback).cast::<()>())
			.finish()
	}
}

struct PulseInner<T: 'static> {
	id: PulseId,
	value: RefCell<T>,
	listeners: RefCell<Vec<Listener<T>>>,
	differs: Comparator<T>,
}

/// A single-value reactive cell
///
/// ## Cloning
///
/// `Pulse<T>` shares its state via `Rc`. All clones observe and mutate the same
/// value and listener list, so a cell handed to a caller is the same cell its
/// owner keeps writing to.
pub struct Pulse<T: 'static> {
	inner: Rc<PulseInner<T>>,
}

impl<T: PartialEq + 'static> Pulse<T> {
	/// Creates a cell that notifies when `current != next`.
	///
	/// For floating point values this gives IEEE semantics: `NaN` always
	/// notifies, `0.0` and `-0.0` are equal.
	pub fn new(value: T) -> Self {
		Self::with_comparator(value, |current, next| current != next)
	}
}

impl<T: 'static> Pulse<T> {
	/// Creates a cell with a custom "values differ" predicate.
	///
	/// # Example
	///
	/// ```
	/// use cleanfront_core::Pulse;
	/// use std::rc::Rc;
	///
	/// // Identity comparison: a fresh Rc always notifies.
	/// let cell = Pulse::with_comparator(Rc::new(1), |a, b| !Rc::ptr_eq(a, b));
	/// cell.set(Rc::new(1));
	/// ```
	pub fn with_comparator(value: T, differs: Comparator<T>) -> Self {
		Self {
			inner: Rc::new(PulseInner {
				id: PulseId::next(),
				value: RefCell::new(value),
				listeners: RefCell::new(Vec::new()),
				differs,
			}),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.borrow().clone()
	}

	/// Reads the current value by reference.
	///
	/// The value stays borrowed while `f` runs. Use [`Pulse::get`] when the
	/// closure needs to write back.
	///
	/// # Panics
	///
	/// Panics if `f` changes this cell (through any clone) to a different value.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Replaces the value and notifies listeners if it changed.
	///
	/// Returns `true` when the value differed and listeners were notified.
	pub fn set(&self, value: T) -> bool
	where
		T: Clone,
	{
		let changed = {
			let current = self.inner.value.borrow();
			(self.inner.differs)(&current, &value)
		};
		if !changed {
			return false;
		}

		*self.inner.value.borrow_mut() = value.clone();
		self.notify(&value);
		true
	}

	/// Computes the next value from a copy of the current one and sets it.
	///
	/// The same inequality rule as [`Pulse::set`] applies.
	pub fn update<F>(&self, f: F) -> bool
	where
		T: Clone,
		F: FnOnce(&mut T),
	{
		let mut next = self.get();
		f(&mut next);
		self.set(next)
	}

	/// Registers a listener. Subscribing an already registered listener is a no-op.
	pub fn subscribe(&self, listener: &Listener<T>) {
		let mut listeners = self.inner.listeners.borrow_mut();
		if !listeners.iter().any(|l| l.ptr_eq(listener)) {
			listeners.push(listener.clone());
		}
	}

	/// Removes a listener. Removing an unknown listener is a no-op.
	pub fn unsubscribe(&self, listener: &Listener<T>) {
		self.inner
			.listeners
			.borrow_mut()
			.retain(|l| !l.ptr_eq(listener));
	}

	/// Subscribes a closure and returns a guard that unsubscribes it on drop.
	pub fn watch<F>(&self, f: F) -> Subscription<T>
	where
		F: Fn(&T) + 'static,
	{
		let listener = Listener::new(f);
		self.subscribe(&listener);
		Subscription {
			source: Rc::downgrade(&self.inner),
			listener,
		}
	}

	/// Number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.inner.listeners.borrow().len()
	}

	/// Identifier of this cell, shared by all clones.
	pub fn id(&self) -> PulseId {
		self.inner.id
	}

	fn notify(&self, value: &T) {
		// Snapshot so listeners may (un)subscribe or set re-entrantly.
		let snapshot = self.inner.listeners.borrow().clone();
		tracing::trace!(pulse = self.inner.id.0, listeners = snapshot.len(), "notifying listeners");
		for listener in &snapshot {
			listener.call(value);
		}
	}
}

impl<T: 'static> Clone for Pulse<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: Default + PartialEq + 'static> Default for Pulse<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Pulse<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Pulse")
			.field("id", &self.inner.id)
			.field("value", &*self.inner.value.borrow())
			.field("listeners", &self.inner.listeners.borrow().len())
			.finish()
	}
}

/// Guard returned by [`Pulse::watch`]; unsubscribes its listener on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<T: 'static> {
	source: Weak<PulseInner<T>>,
	listener: Listener<T>,
}

impl<T: 'static> Subscription<T> {
	/// The listener held by this guard.
	pub fn listener(&self) -> &Listener<T> {
		&self.listener
	}
}

impl<T: 'static> Drop for Subscription<T> {
	fn drop(&mut self) {
		if let Some(inner) = self.source.upgrade() {
			inner
				.listeners
				.borrow_mut()
				.retain(|l| !l.ptr_eq(&self.listener));
		}
	}
}

impl<T: 'static> fmt::Debug for Subscription<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &(self.source.strong_count() > 0))
			.finish()
	}
}
