//! Integration tests for the Pulse notification contract
//!
//! These tests verify:
//! 1. Notification happens only when the value changes by inequality
//! 2. Subscribe and unsubscribe are idempotent
//! 3. Listeners run synchronously and in subscription order
//! 4. The snapshot rule for (un)subscribing during a notification round

use cleanfront_core::{Listener, Pulse};
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::rc::Rc;

type Log<T> = Rc<RefCell<Vec<T>>>;

fn recording_listener<T: Clone + 'static>(log: &Log<T>) -> Listener<T> {
	let log = log.clone();
	Listener::new(move |value: &T| log.borrow_mut().push(value.clone()))
}

#[fixture]
fn counter() -> Pulse<i32> {
	Pulse::new(0)
}

// ============================================================================
// Change detection
// ============================================================================

#[rstest]
#[case(1, 1, 1)]
#[case(1, 2, 2)]
#[case(0, 0, 0)]
fn test_notifies_only_on_change(
	counter: Pulse<i32>,
	#[case] first: i32,
	#[case] second: i32,
	#[case] expected_notifications: usize,
) {
	let log = Log::default();
	counter.subscribe(&recording_listener(&log));

	counter.set(first);
	counter.set(second);

	assert_eq!(log.borrow().len(), expected_notifications);
}

#[rstest]
fn test_nan_always_notifies() {
	let pulse = Pulse::new(f64::NAN);
	let log: Log<f64> = Log::default();
	pulse.subscribe(&recording_listener(&log));

	assert!(pulse.set(f64::NAN));
	assert!(pulse.set(f64::NAN));
	assert_eq!(log.borrow().len(), 2);
	assert!(log.borrow().iter().all(|v| v.is_nan()));
}

#[rstest]
fn test_signed_zero_is_equal() {
	let pulse = Pulse::new(0.0_f64);
	let log: Log<f64> = Log::default();
	pulse.subscribe(&recording_listener(&log));

	assert!(!pulse.set(-0.0));
	assert!(log.borrow().is_empty());
}

#[rstest]
fn test_every_change_gets_its_own_round(counter: Pulse<i32>) {
	let log = Log::default();
	counter.subscribe(&recording_listener(&log));

	for n in 1..=3 {
		counter.set(n);
		// Synchronous: visible before the next statement.
		assert_eq!(log.borrow().last(), Some(&n));
	}
	assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

// ============================================================================
// Subscription management
// ============================================================================

#[rstest]
fn test_duplicate_subscribe_notifies_once(counter: Pulse<i32>) {
	let log = Log::default();
	let listener = recording_listener(&log);

	counter.subscribe(&listener);
	counter.subscribe(&listener);
	counter.subscribe(&listener.clone());
	counter.set(5);

	assert_eq!(*log.borrow(), vec![5]);
	assert_eq!(counter.listener_count(), 1);
}

#[rstest]
fn test_unsubscribe_is_effective(counter: Pulse<i32>) {
	let log = Log::default();
	let listener = recording_listener(&log);
	counter.subscribe(&listener);

	counter.set(1);
	counter.unsubscribe(&listener);
	counter.set(2);

	assert_eq!(*log.borrow(), vec![1]);
}

#[rstest]
fn test_unsubscribe_unknown_listener_is_noop(counter: Pulse<i32>) {
	let log = Log::default();
	let subscribed = recording_listener(&log);
	let stranger = Listener::new(|_: &i32| {});
	counter.subscribe(&subscribed);

	counter.unsubscribe(&stranger);
	counter.unsubscribe(&stranger);
	counter.set(3);

	assert_eq!(*log.borrow(), vec![3]);
}

#[rstest]
fn test_listeners_run_in_subscription_order(counter: Pulse<i32>) {
	let order = Rc::new(RefCell::new(Vec::new()));
	let listeners: Vec<Listener<i32>> = ["first", "second", "third"]
		.into_iter()
		.map(|name| {
			let order = order.clone();
			Listener::new(move |_: &i32| order.borrow_mut().push(name))
		})
		.collect();
	for listener in &listeners {
		counter.subscribe(listener);
	}

	counter.set(1);
	assert_eq!(*order.borrow(), vec!["first", "second", "third"]);

	// Re-subscribing keeps the original position.
	counter.subscribe(&listeners[0]);
	order.borrow_mut().clear();
	counter.set(2);
	assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

// ============================================================================
// Notification round snapshot
// ============================================================================

#[rstest]
fn test_listener_added_during_round_waits_for_next_round(counter: Pulse<i32>) {
	let late_log = Log::default();
	let late = recording_listener(&late_log);

	let adder = Listener::new({
		let pulse = counter.clone();
		let late = late.clone();
		move |_: &i32| pulse.subscribe(&late)
	});
	counter.subscribe(&adder);

	counter.set(1);
	assert!(late_log.borrow().is_empty());

	counter.set(2);
	assert_eq!(*late_log.borrow(), vec![2]);
}

#[rstest]
fn test_listener_removed_during_round_still_runs_that_round(counter: Pulse<i32>) {
	let victim_log = Log::default();
	let victim = recording_listener(&victim_log);

	let remover = Listener::new({
		let pulse = counter.clone();
		let victim = victim.clone();
		move |_: &i32| pulse.unsubscribe(&victim)
	});
	counter.subscribe(&remover);
	counter.subscribe(&victim);

	counter.set(1);
	assert_eq!(*victim_log.borrow(), vec![1]);

	counter.set(2);
	assert_eq!(*victim_log.borrow(), vec![1]);
}

#[rstest]
fn test_reentrant_set_runs_nested_round(counter: Pulse<i32>) {
	let log = Log::default();
	let clamp = Listener::new({
		let pulse = counter.clone();
		move |value: &i32| {
			if *value > 10 {
				pulse.set(10);
			}
		}
	});
	counter.subscribe(&clamp);
	counter.subscribe(&recording_listener(&log));

	counter.set(42);

	assert_eq!(counter.get(), 10);
	// The nested round finishes before the outer round reaches the recorder.
	assert_eq!(*log.borrow(), vec![10, 42]);
}
