//! Login redirect helper
//!
//! [`RouteManager`] forwards navigation to a [`RouteRepository`] and, when
//! given [`AuthOptions`], sends unauthenticated users to the login path.
//!
//! `check_for_login_route` keeps no state between calls. Each call reads the
//! current route and evaluates the predicate again, so an unauthenticated user
//! away from the login path is redirected on every call.
//!
//! | auth configured | current route == login path | logged in | navigates |
//! |-----------------|-----------------------------|-----------|-----------|
//! | no              | any                         | any       | never     |
//! | yes             | yes                         | any       | no        |
//! | yes             | no                          | yes       | no        |
//! | yes             | no                          | no        | to login  |

use cleanfront_conf::Settings;
use std::fmt;
use std::rc::Rc;

use crate::repository::RouteRepository;
use crate::store::KeyValueStore;

/// Login path plus a predicate telling whether the user is logged in.
#[derive(Clone)]
pub struct AuthOptions {
	login_path: String,
	is_logged_in: Rc<dyn Fn() -> bool>,
}

impl AuthOptions {
	/// Options with a caller-supplied predicate.
	pub fn new<F>(login_path: impl Into<String>, is_logged_in: F) -> Self
	where
		F: Fn() -> bool + 'static,
	{
		Self {
			login_path: login_path.into(),
			is_logged_in: Rc::new(is_logged_in),
		}
	}

	/// Treats the user as logged in while `store` holds a non-empty value
	/// under `token_key`. The store is read on every check; a failing read
	/// counts as logged out.
	pub fn token_in_store(
		login_path: impl Into<String>,
		store: Rc<dyn KeyValueStore>,
		token_key: impl Into<String>,
	) -> Self {
		let token_key = token_key.into();
		Self::new(login_path, move || match store.get(&token_key) {
			Ok(token) => token.is_some_and(|token| !token.is_empty()),
			Err(error) => {
				tracing::debug!(%error, "token lookup failed");
				false
			}
		})
	}

	/// Token-presence options using `routing.login_path` and `auth.token_key`.
	pub fn from_settings(settings: &Settings, store: Rc<dyn KeyValueStore>) -> Self {
		Self::token_in_store(
			settings.routing.login_path.clone(),
			store,
			settings.auth.token_key.clone(),
		)
	}

	/// Path unauthenticated users are sent to.
	pub fn login_path(&self) -> &str {
		&self.login_path
	}

	/// Evaluates the predicate.
	pub fn is_logged_in(&self) -> bool {
		(self.is_logged_in)()
	}
}

impl fmt::Debug for AuthOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AuthOptions")
			.field("login_path", &self.login_path)
			.finish_non_exhaustive()
	}
}

/// Navigation entry point with an optional login guard
///
/// # Example
///
/// ```
/// use cleanfront_router::{AuthOptions, MemoryRouteRepository, RouteManager, RouteRepository};
/// use std::rc::Rc;
///
/// let routes = Rc::new(MemoryRouteRepository::new("/dashboard"));
/// let manager = RouteManager::with_auth(routes.clone(), AuthOptions::new("/login", || false));
///
/// manager.check_for_login_route();
/// assert_eq!(routes.current_route(), "/login");
/// ```
pub struct RouteManager {
	repository: Rc<dyn RouteRepository>,
	auth: Option<AuthOptions>,
}

impl RouteManager {
	/// Manager without a login guard.
	pub fn new(repository: Rc<dyn RouteRepository>) -> Self {
		Self {
			repository,
			auth: None,
		}
	}

	/// Manager that redirects unauthenticated users to `auth.login_path()`.
	pub fn with_auth(repository: Rc<dyn RouteRepository>, auth: AuthOptions) -> Self {
		Self {
			repository,
			auth: Some(auth),
		}
	}

	/// Navigates to `path` unconditionally.
	pub fn change_route(&self, path: &str) {
		self.repository.change(path);
	}

	/// Redirects to the login path if the user is logged out and elsewhere.
	///
	/// Does nothing without auth options. Returns `true` if it navigated.
	pub fn check_for_login_route(&self) -> bool {
		let Some(auth) = &self.auth else {
			return false;
		};
		if self.repository.current_route() == auth.login_path || auth.is_logged_in() {
			return false;
		}
		tracing::debug!(login_path = %auth.login_path, "redirecting to login");
		self.repository.change(&auth.login_path);
		true
	}

	/// Evaluates the login predicate. `false` when no auth options were given.
	pub fn is_user_logged_in(&self) -> bool {
		self.auth.as_ref().is_some_and(AuthOptions::is_logged_in)
	}

	/// Auth options, if configured.
	pub fn auth(&self) -> Option<&AuthOptions> {
		self.auth.as_ref()
	}
}

impl fmt::Debug for RouteManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteManager")
			.field("auth", &self.auth)
			.finish_non_exhaustive()
	}
}
