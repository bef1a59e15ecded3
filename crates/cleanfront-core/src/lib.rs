//! cleanfront-core - Presentation Layer Primitives
//!
//! Small building blocks for frontends organised around use cases and
//! presentation logic components.
//!
//! ## Modules
//!
//! - [`pulse`]: [`Pulse`], a single-value reactive cell with ordered listeners
//! - [`ploc`]: [`Ploc`], a state container owning one `Pulse`
//! - [`request`]: [`ApiRequest`] and [`RequestResult`], the `loading`/`data`/`error`
//!   cells driven by an asynchronous operation
//! - [`use_case`]: the [`UseCase`] contract
//! - [`validation`]: [`ValidationErrors`] and the [`Validator`] trait
//! - [`history`]: [`StateHistory`], a bounded recorder for development tooling
//!
//! ## Threading
//!
//! Everything here is single-threaded (`Rc`-based, `!Send`). Notification is
//! synchronous; the only suspension point is awaiting the operation inside
//! [`ApiRequest::run`].
//!
//! ## Example
//!
//! ```
//! use cleanfront_core::{ApiRequest, Ploc};
//!
//! #[derive(Debug, Clone, PartialEq, Default)]
//! struct UsersState {
//!     users: Vec<String>,
//!     loading: bool,
//! }
//!
//! # futures::executor::block_on(async {
//! let ploc = Ploc::new(UsersState::default());
//! let request = ApiRequest::<Vec<String>, String>::from_fn(|| async {
//!     Ok(vec!["alice".to_string()])
//! });
//!
//! let result = request.run().await;
//! ploc.change_state(UsersState {
//!     users: result.data.get().unwrap_or_default(),
//!     loading: result.loading.get(),
//! });
//! assert_eq!(ploc.state().users, vec!["alice".to_string()]);
//! # });
//! ```

#![warn(missing_docs)]

pub mod history;
pub mod ploc;
pub mod pulse;
pub mod request;
pub mod use_case;
pub mod validation;

pub use history::StateHistory;
pub use ploc::Ploc;
pub use pulse::{Comparator, Listener, Pulse, PulseId, Subscription};
pub use request::{ApiRequest, FnHandler, RequestHandler, RequestResult, RunOptions, Runnable};
pub use use_case::UseCase;
pub use validation::{ValidationErrors, Validator};

// Re-export for implementing `UseCase` and `RequestHandler`
pub use async_trait::async_trait;
