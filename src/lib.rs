//! # cleanfront
//!
//! Clean-architecture building blocks for Rust frontends.
//!
//! Presentation code is organised around three ideas:
//!
//! - **Reactive cells** ([`Pulse`]) hold one value and synchronously notify
//!   their listeners when it changes.
//! - **Presentation logic components** embed a [`Ploc`] holding the whole
//!   state of one feature and replace that state through use cases.
//! - **Use cases** ([`UseCase`]) perform one application action and report it
//!   through `loading`/`data`/`error` cells ([`RequestResult`]), usually by
//!   running an [`ApiRequest`].
//!
//! Navigation goes through a [`RouteManager`], which can redirect logged-out
//! users to a login route.
//!
//! ## Feature Flags
//!
//! - `core` - cells, `Ploc`, `ApiRequest`, `UseCase`, validation
//! - `router` - `RouteManager`, route repositories, token store
//! - `conf` - `Settings` from TOML and `CLEANFRONT_*` variables
//! - `logging` - [`init_logging`] using `tracing-subscriber`
//! - `full` (default) - all of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use cleanfront::prelude::*;
//! use std::rc::Rc;
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct SessionState {
//!     user: Option<String>,
//! }
//!
//! let session = Ploc::new(SessionState::default());
//! let routes = Rc::new(MemoryRouteRepository::new("/dashboard"));
//! let manager = RouteManager::with_auth(routes.clone(), AuthOptions::new("/login", || false));
//!
//! manager.check_for_login_route();
//! assert_eq!(routes.current_route(), "/login");
//!
//! session.change_state(SessionState { user: Some("ada".to_string()) });
//! assert_eq!(session.state().user.as_deref(), Some("ada"));
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "logging")]
pub mod logging;
#[cfg(feature = "router")]
pub mod router;

// Re-export core types
#[cfg(feature = "core")]
pub use cleanfront_core::{
	ApiRequest, Listener, Ploc, Pulse, RequestHandler, RequestResult, RunOptions, Runnable,
	StateHistory, Subscription, UseCase, ValidationErrors, Validator, async_trait,
};

// Re-export router types
#[cfg(feature = "router")]
pub use cleanfront_router::{
	AuthOptions, KeyValueStore, MemoryRouteRepository, MemoryStore, RouteManager,
	RouteRepository, StoreError,
};

// Re-export settings
#[cfg(feature = "conf")]
pub use cleanfront_conf::{ConfigError, Settings};

#[cfg(feature = "logging")]
pub use logging::{LoggingError, init_logging};

/// Commonly used types in one import.
pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::{
		ApiRequest, Listener, Ploc, Pulse, RequestResult, RunOptions, StateHistory, UseCase,
		ValidationErrors, Validator, async_trait,
	};

	#[cfg(feature = "router")]
	pub use crate::{
		AuthOptions, KeyValueStore, MemoryRouteRepository, MemoryStore, RouteManager,
		RouteRepository,
	};

	#[cfg(feature = "conf")]
	pub use crate::Settings;
}
