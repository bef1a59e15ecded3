//! State history recording for development tooling
//!
//! [`StateHistory`] subscribes to a [`Pulse`] or [`Ploc`] and keeps the most
//! recent values in a bounded buffer, oldest first. The value current at
//! creation is the first entry. Dropping the recorder unsubscribes it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::ploc::Ploc;
use crate::pulse::{Pulse, Subscription};

/// Bounded record of the values a cell has taken.
pub struct StateHistory<S: 'static> {
	entries: Rc<RefCell<VecDeque<S>>>,
	capacity: usize,
	_subscription: Subscription<S>,
}

impl<S: Clone + 'static> StateHistory<S> {
	/// Starts recording `pulse`, keeping at most `capacity` entries (minimum 1).
	pub fn record(pulse: &Pulse<S>, capacity: usize) -> Self {
		let capacity = capacity.max(1);
		let entries = Rc::new(RefCell::new(VecDeque::with_capacity(capacity)));
		entries.borrow_mut().push_back(pulse.get());

		let subscription = pulse.watch({
			let entries = Rc::clone(&entries);
			move |value: &S| push_bounded(&entries, value.clone(), capacity)
		});

		Self {
			entries,
			capacity,
			_subscription: subscription,
		}
	}

	/// Starts recording the state of `ploc`.
	pub fn record_ploc(ploc: &Ploc<S>, capacity: usize) -> Self {
		let capacity = capacity.max(1);
		let entries = Rc::new(RefCell::new(VecDeque::with_capacity(capacity)));
		entries.borrow_mut().push_back(ploc.state());

		let subscription = ploc.watch({
			let entries = Rc::clone(&entries);
			move |value: &S| push_bounded(&entries, value.clone(), capacity)
		});

		Self {
			entries,
			capacity,
			_subscription: subscription,
		}
	}

	/// Recorded values, oldest first.
	pub fn entries(&self) -> Vec<S> {
		self.entries.borrow().iter().cloned().collect()
	}

	/// Most recent value.
	pub fn latest(&self) -> Option<S> {
		self.entries.borrow().back().cloned()
	}
}

impl<S: 'static> StateHistory<S> {
	/// Number of recorded values.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// `true` if no values are recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Maximum number of retained values.
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Drops all recorded values.
	pub fn clear(&self) {
		self.entries.borrow_mut().clear();
	}
}

fn push_bounded<S>(entries: &RefCell<VecDeque<S>>, value: S, capacity: usize) {
	let mut entries = entries.borrow_mut();
	if entries.len() == capacity {
		entries.pop_front();
	}
	entries.push_back(value);
}
