//! Use case contract
//!
//! A use case performs one application action and reports it through a
//! [`RequestResult`]. Concrete use cases usually call one domain service and
//! map its outcome with [`RequestResult::from_outcome`], or wrap the call in an
//! [`ApiRequest`](crate::ApiRequest) when the action must be re-runnable.
//!
//! Failures are delivered through the `error` cell; `execute` itself never
//! fails once the cells exist.
//!
//! ## Example
//!
//! ```
//! use cleanfront_core::{RequestResult, UseCase, async_trait};
//!
//! struct Greet;
//!
//! #[async_trait(?Send)]
//! impl UseCase<String> for Greet {
//!     type Output = String;
//!     type Error = String;
//!
//!     async fn execute(&self, name: String) -> RequestResult<String, String> {
//!         if name.is_empty() {
//!             return RequestResult::failure("name is required".to_string());
//!         }
//!         RequestResult::success(format!("Hello, {name}"))
//!     }
//! }
//!
//! # futures::executor::block_on(async {
//! let result = Greet.execute("Ada".to_string()).await;
//! assert_eq!(result.data.get().as_deref(), Some("Hello, Ada"));
//! # });
//! ```

use async_trait::async_trait;

use crate::request::RequestResult;

/// One application action.
///
/// `Args` is the input; use a tuple for several arguments and `()` for none.
#[async_trait(?Send)]
pub trait UseCase<Args = ()> {
	/// Value produced on success.
	type Output: 'static;
	/// Failure type stored in the `error` cell.
	type Error: 'static;

	/// Performs the action.
	async fn execute(&self, args: Args) -> RequestResult<Self::Output, Self::Error>;
}
