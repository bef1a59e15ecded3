//! Route repository contract and an in-memory implementation
//!
//! A [`RouteRepository`] is the router binding of a UI framework reduced to two
//! capabilities: read the current path and navigate. [`RouteManager`](crate::RouteManager)
//! only ever holds a shared reference to one.

use cleanfront_core::Pulse;
use std::cell::RefCell;

/// Read-current-path / navigate capability supplied by the application.
pub trait RouteRepository {
	/// Path currently displayed.
	fn current_route(&self) -> String;

	/// Navigates to `route`.
	fn change(&self, route: &str);
}

/// Route repository backed by memory
///
/// The current route lives in a [`Pulse`], so views can subscribe to
/// navigation. Navigating to the route already displayed does nothing and adds
/// no history entry.
///
/// # Example
///
/// ```
/// use cleanfront_router::{MemoryRouteRepository, RouteRepository};
///
/// let routes = MemoryRouteRepository::new("/");
/// routes.change("/users");
/// routes.change("/users");
///
/// assert_eq!(routes.current_route(), "/users");
/// assert_eq!(routes.history(), vec!["/", "/users"]);
/// ```
#[derive(Debug)]
pub struct MemoryRouteRepository {
	current: Pulse<String>,
	history: RefCell<Vec<String>>,
}

impl MemoryRouteRepository {
	/// Starts at `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		Self {
			history: RefCell::new(vec![initial.clone()]),
			current: Pulse::new(initial),
		}
	}

	/// The cell holding the current route.
	pub fn route(&self) -> &Pulse<String> {
		&self.current
	}

	/// Every route visited, oldest first, including the initial one.
	pub fn history(&self) -> Vec<String> {
		self.history.borrow().clone()
	}

	/// Returns to the previous route. Returns `false` at the first entry.
	pub fn back(&self) -> bool {
		let previous = {
			let mut history = self.history.borrow_mut();
			if history.len() < 2 {
				return false;
			}
			history.pop();
			history.last().cloned()
		};
		match previous {
			Some(route) => {
				self.current.set(route);
				true
			}
			None => false,
		}
	}
}

impl Default for MemoryRouteRepository {
	fn default() -> Self {
		Self::new("/")
	}
}

impl RouteRepository for MemoryRouteRepository {
	fn current_route(&self) -> String {
		self.current.get()
	}

	fn change(&self, route: &str) {
		if self.current.with(|current| current == route) {
			return;
		}
		self.history.borrow_mut().push(route.to_string());
		self.current.set(route.to_string());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::rc::Rc;

	#[rstest]
	fn test_default_starts_at_root() {
		let routes = MemoryRouteRepository::default();
		assert_eq!(routes.current_route(), "/");
		assert_eq!(routes.history(), vec!["/"]);
	}

	#[rstest]
	fn test_change_notifies_route_cell() {
		let routes = MemoryRouteRepository::new("/");
		let seen = Rc::new(RefCell::new(Vec::new()));
		let _guard = routes.route().watch({
			let seen = seen.clone();
			move |route: &String| seen.borrow_mut().push(route.clone())
		});

		routes.change("/a");
		routes.change("/a");
		routes.change("/b");

		assert_eq!(*seen.borrow(), vec!["/a", "/b"]);
	}

	#[rstest]
	fn test_trailing_slash_is_a_different_route() {
		let routes = MemoryRouteRepository::new("/login");
		routes.change("/login/");
		assert_eq!(routes.history(), vec!["/login", "/login/"]);
	}

	#[rstest]
	fn test_back() {
		let routes = MemoryRouteRepository::new("/");
		routes.change("/a");
		routes.change("/b");

		assert!(routes.back());
		assert_eq!(routes.current_route(), "/a");
		assert!(routes.back());
		assert_eq!(routes.current_route(), "/");
		assert!(!routes.back());
		assert_eq!(routes.history(), vec!["/"]);
	}
}
