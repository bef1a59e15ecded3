//! Asynchronous request wrapper
//!
//! [`ApiRequest`] runs one asynchronous operation and drives three [`Pulse`]
//! cells through a fixed sequence:
//!
//! | Step | `loading` | `data` | `error` |
//! |------|-----------|--------|---------|
//! | `run()` called | `true` | unchanged | unchanged |
//! | operation succeeded | `false` | `Some(value)` | `None` |
//! | operation failed | `false` | unchanged | `Some(error)` |
//! | future dropped before settling | `false` | unchanged | unchanged |
//!
//! A failed run leaves `data` at its previous value. Errors are stored as
//! `Rc<E>` created once per failure; the `error` cell compares by pointer, so
//! callers can test identity with `Rc::ptr_eq` and every new failure notifies.
//! The `data` cell compares with `PartialEq` instead: a re-run that succeeds
//! with a value equal to the current one does not notify `data` subscribers.
//! Subscribe to `loading` to observe every completion.
//!
//! Dropping the future returned by `run()` cancels the run. `loading` goes
//! back to `false`; `data` and `error` keep their values.
//!
//! ## Sources of work
//!
//! A [`Runnable`] is either an already-created future or a [`RequestHandler`]
//! that produces a fresh future per call. Both are normalized once, at
//! construction. A future-backed request settles only once: running it again
//! replays the same outcome without repeating the work.
//!
//! ## Concurrency
//!
//! Runs are not serialized. Issuing a second `run()` before the first settles
//! makes both write the same cells, and whichever settles last wins for each
//! cell. Await each run, or use one request per concurrent operation.
//!
//! ## Example
//!
//! ```
//! use cleanfront_core::ApiRequest;
//!
//! # futures::executor::block_on(async {
//! let request = ApiRequest::<Vec<String>, String>::from_fn(|| async {
//!     Ok(vec!["alice".to_string(), "bob".to_string()])
//! });
//!
//! let pending = request.run();
//! assert!(request.loading().get());
//!
//! let result = pending.await;
//! assert!(!result.loading.get());
//! assert_eq!(result.data.get().map(|users| users.len()), Some(2));
//! assert!(result.error.get().is_none());
//! # });
//! ```

use core::fmt;
use core::future::Future;
use core::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::pulse::Pulse;

/// A re-invocable source of asynchronous work.
#[async_trait(?Send)]
pub trait RequestHandler {
	/// Value produced on success.
	type Output;
	/// Value produced on failure.
	type Error;

	/// Starts one execution of the operation.
	async fn execute(&self) -> Result<Self::Output, Self::Error>;
}

/// [`RequestHandler`] built from a closure returning a future.
pub struct FnHandler<F, T, E> {
	f: F,
	_marker: PhantomData<fn() -> Result<T, E>>,
}

impl<F, T, E> FnHandler<F, T, E> {
	/// Wraps `f`; every `execute()` calls it once.
	pub fn new(f: F) -> Self {
		Self {
			f,
			_marker: PhantomData,
		}
	}
}

#[async_trait(?Send)]
impl<F, Fut, T, E> RequestHandler for FnHandler<F, T, E>
where
	F: Fn() -> Fut + 'static,
	Fut: Future<Output = Result<T, E>> + 'static,
	T: 'static,
	E: 'static,
{
	type Output = T;
	type Error = E;

	async fn execute(&self) -> Result<T, E> {
		(self.f)().await
	}
}

/// The work wrapped by an [`ApiRequest`].
pub enum Runnable<T: 'static, E: 'static> {
	/// An already-created future. It settles once; later runs replay its outcome.
	Future(LocalBoxFuture<'static, Result<T, E>>),
	/// A handler producing a fresh future on every run.
	Handler(Rc<dyn RequestHandler<Output = T, Error = E>>),
}

impl<T: 'static, E: 'static> Runnable<T, E> {
	/// Wraps a future.
	pub fn future<Fut>(future: Fut) -> Self
	where
		Fut: Future<Output = Result<T, E>> + 'static,
	{
		Self::Future(future.boxed_local())
	}

	/// Wraps a handler.
	pub fn handler<H>(handler: H) -> Self
	where
		H: RequestHandler<Output = T, Error = E> + 'static,
	{
		Self::Handler(Rc::new(handler))
	}
}

impl<T: 'static, E: 'static> fmt::Debug for Runnable<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Future(_) => f.write_str("Runnable::Future"),
			Self::Handler(_) => f.write_str("Runnable::Handler"),
		}
	}
}

type Invoke<T, E> = Box<dyn Fn() -> LocalBoxFuture<'static, Result<T, Rc<E>>>>;

fn normalize<T, E>(runnable: Runnable<T, E>) -> Invoke<T, E>
where
	T: Clone + 'static,
	E: 'static,
{
	match runnable {
		Runnable::Future(future) => {
			let settled = future.map(|outcome| outcome.map_err(Rc::new)).shared();
			Box::new(move || settled.clone().boxed_local())
		}
		Runnable::Handler(handler) => Box::new(move || {
			let handler = Rc::clone(&handler);
			async move { handler.execute().await.map_err(Rc::new) }.boxed_local()
		}),
	}
}

fn error_differs<E>(current: &Option<Rc<E>>, next: &Option<Rc<E>>) -> bool {
	match (current, next) {
		(Some(a), Some(b)) => !Rc::ptr_eq(a, b),
		(None, None) => false,
		_ => true,
	}
}

/// The `loading`/`data`/`error` cells describing an asynchronous operation
///
/// Cloning copies the handles, not the values: a clone observes the same cells.
pub struct RequestResult<T: 'static, E: 'static> {
	/// `true` while a run is in flight.
	pub loading: Pulse<bool>,
	/// Last successful value.
	pub data: Pulse<Option<T>>,
	/// Failure of the last run, if it failed.
	pub error: Pulse<Option<Rc<E>>>,
}

impl<T: PartialEq + 'static, E: 'static> RequestResult<T, E> {
	/// Cells in their initial state: not loading, no data, no error.
	pub fn idle() -> Self {
		Self::from_parts(false, None, None)
	}

	/// A settled success.
	pub fn success(value: T) -> Self {
		Self::from_parts(false, Some(value), None)
	}

	/// A settled failure.
	pub fn failure(error: E) -> Self {
		Self::from_parts(false, None, Some(Rc::new(error)))
	}

	/// Maps a finished operation onto settled cells.
	pub fn from_outcome(outcome: Result<T, E>) -> Self {
		match outcome {
			Ok(value) => Self::success(value),
			Err(error) => Self::failure(error),
		}
	}

	fn from_parts(loading: bool, data: Option<T>, error: Option<Rc<E>>) -> Self {
		Self {
			loading: Pulse::new(loading),
			data: Pulse::new(data),
			error: Pulse::with_comparator(error, error_differs::<E>),
		}
	}
}

impl<T: 'static, E: 'static> RequestResult<T, E> {
	/// `true` when not loading and no error is set.
	pub fn is_success(&self) -> bool {
		!self.loading.get() && self.error.with(Option::is_none)
	}

	/// Current error, if any.
	pub fn current_error(&self) -> Option<Rc<E>> {
		self.error.with(|error| error.clone())
	}
}

impl<T: 'static, E: 'static> Clone for RequestResult<T, E> {
	fn clone(&self) -> Self {
		Self {
			loading: self.loading.clone(),
			data: self.data.clone(),
			error: self.error.clone(),
		}
	}
}

impl<T: fmt::Debug + 'static, E: fmt::Debug + 'static> fmt::Debug for RequestResult<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestResult")
			.field("loading", &self.loading)
			.field("data", &self.data)
			.field("error", &self.error)
			.finish()
	}
}

/// Options for [`ApiRequest::run_with`].
pub struct RunOptions<T: 'static> {
	on_success: Option<Box<dyn FnOnce(&T)>>,
}

impl<T: 'static> RunOptions<T> {
	/// Options with no callbacks.
	pub fn new() -> Self {
		Self { on_success: None }
	}

	/// Called once with the value after a successful run, after the cells settle.
	pub fn on_success<F>(mut self, f: F) -> Self
	where
		F: FnOnce(&T) + 'static,
	{
		self.on_success = Some(Box::new(f));
		self
	}
}

impl<T: 'static> Default for RunOptions<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: 'static> fmt::Debug for RunOptions<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RunOptions")
			.field("has_on_success", &self.on_success.is_some())
			.finish()
	}
}

/// Clears `loading` when a run is dropped before it settles.
struct LoadingGuard {
	loading: Pulse<bool>,
	settled: bool,
}

impl LoadingGuard {
	fn settle(mut self) {
		self.settled = true;
	}
}

impl Drop for LoadingGuard {
	fn drop(&mut self) {
		if !self.settled {
			tracing::debug!("request run abandoned");
			self.loading.set(false);
		}
	}
}

/// Runs an asynchronous operation and reflects its state in three cells.
pub struct ApiRequest<T: 'static, E: 'static> {
	invoke: Invoke<T, E>,
	cells: RequestResult<T, E>,
}

impl<T, E> ApiRequest<T, E>
where
	T: Clone + PartialEq + 'static,
	E: 'static,
{
	/// Creates a request around `runnable`.
	pub fn new(runnable: Runnable<T, E>) -> Self {
		Self {
			invoke: normalize(runnable),
			cells: RequestResult::idle(),
		}
	}

	/// Creates a request around an already-created future.
	pub fn from_future<Fut>(future: Fut) -> Self
	where
		Fut: Future<Output = Result<T, E>> + 'static,
	{
		Self::new(Runnable::future(future))
	}

	/// Creates a request around a handler.
	pub fn from_handler<H>(handler: H) -> Self
	where
		H: RequestHandler<Output = T, Error = E> + 'static,
	{
		Self::new(Runnable::handler(handler))
	}

	/// Creates a request around a closure that starts the operation.
	pub fn from_fn<F, Fut>(f: F) -> Self
	where
		F: Fn() -> Fut + 'static,
		Fut: Future<Output = Result<T, E>> + 'static,
	{
		Self::from_handler(FnHandler::new(f))
	}

	/// Runs the operation with default options.
	///
	/// See [`ApiRequest::run_with`].
	pub fn run(&self) -> LocalBoxFuture<'static, RequestResult<T, E>> {
		self.run_with(RunOptions::new())
	}

	/// Runs the operation.
	///
	/// `loading` is set before this returns. The returned future drives the
	/// operation and settles the cells; it always resolves to this request's
	/// cells. Dropping the future before it resolves cancels the run and resets
	/// `loading` to `false`, leaving `data` and `error` untouched.
	pub fn run_with(&self, options: RunOptions<T>) -> LocalBoxFuture<'static, RequestResult<T, E>> {
		self.cells.loading.set(true);
		tracing::debug!("request run started");
		let pending = (self.invoke)();
		let cells = self.cells.clone();
		// Moved into the future so it also fires if the future is never polled.
		let guard = LoadingGuard {
			loading: cells.loading.clone(),
			settled: false,
		};

		async move {
			let outcome = pending.await;
			guard.settle();
			match outcome {
				Ok(value) => {
					cells.data.set(Some(value.clone()));
					cells.loading.set(false);
					cells.error.set(None);
					tracing::debug!(outcome = "success", "request run settled");
					if let Some(on_success) = options.on_success {
						on_success(&value);
					}
				}
				Err(error) => {
					cells.error.set(Some(error));
					cells.loading.set(false);
					tracing::debug!(outcome = "failure", "request run settled");
				}
			}
			cells
		}
		.boxed_local()
	}
}

impl<T: 'static, E: 'static> ApiRequest<T, E> {
	/// Calls `f` once with the current data. This does not subscribe.
	pub fn on_success<F>(&self, f: F)
	where
		T: Clone,
		F: FnOnce(Option<T>),
	{
		f(self.cells.data.get())
	}

	/// The `loading` cell.
	pub fn loading(&self) -> &Pulse<bool> {
		&self.cells.loading
	}

	/// The `data` cell.
	pub fn data(&self) -> &Pulse<Option<T>> {
		&self.cells.data
	}

	/// The `error` cell.
	pub fn error(&self) -> &Pulse<Option<Rc<E>>> {
		&self.cells.error
	}

	/// Handles to the three cells.
	pub fn result(&self) -> RequestResult<T, E> {
		self.cells.clone()
	}
}

impl<T: fmt::Debug + 'static, E: fmt::Debug + 'static> fmt::Debug for ApiRequest<T, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ApiRequest")
			.field("cells", &self.cells)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pulse::Listener;
	use rstest::rstest;
	use std::cell::{Cell, RefCell};

	#[derive(Debug, PartialEq)]
	struct Boom(&'static str);

	#[rstest]
	fn test_idle_cells() {
		let result = RequestResult::<i32, Boom>::idle();
		assert!(!result.loading.get());
		assert_eq!(result.data.get(), None);
		assert!(result.current_error().is_none());
		assert!(result.is_success());
	}

	#[rstest]
	fn test_from_outcome() {
		let ok = RequestResult::<i32, Boom>::from_outcome(Ok(3));
		assert_eq!(ok.data.get(), Some(3));
		assert!(ok.is_success());

		let err = RequestResult::<i32, Boom>::from_outcome(Err(Boom("x")));
		assert_eq!(err.data.get(), None);
		assert_eq!(err.current_error().as_deref(), Some(&Boom("x")));
		assert!(!err.is_success());
	}

	#[rstest]
	fn test_error_cell_compares_identity() {
		let result = RequestResult::<i32, Boom>::idle();
		let hits = Rc::new(Cell::new(0));
		let listener = Listener::new({
			let hits = hits.clone();
			move |_: &Option<Rc<Boom>>| hits.set(hits.get() + 1)
		});
		result.error.subscribe(&listener);

		let first = Rc::new(Boom("same"));
		result.error.set(Some(first.clone()));
		result.error.set(Some(first));
		result.error.set(Some(Rc::new(Boom("same"))));
		assert_eq!(hits.get(), 2);
	}

	#[rstest]
	fn test_run_sets_loading_before_await() {
		let request = ApiRequest::<i32, Boom>::from_fn(|| async { Ok(1) });
		let pending = request.run();
		assert!(request.loading().get());
		drop(pending);
		assert!(!request.loading().get());
		assert_eq!(request.data().get(), None);
	}

	#[rstest]
	fn test_run_success_sequence() {
		let request = ApiRequest::<i32, Boom>::from_fn(|| async { Ok(5) });
		let log = Rc::new(RefCell::new(Vec::new()));
		let _loading = request.loading().watch({
			let log = log.clone();
			move |v| log.borrow_mut().push(format!("loading={v}"))
		});
		let _data = request.data().watch({
			let log = log.clone();
			move |v| log.borrow_mut().push(format!("data={v:?}"))
		});

		let result = futures::executor::block_on(request.run());
		assert_eq!(result.data.get(), Some(5));
		assert_eq!(
			*log.borrow(),
			vec!["loading=true", "data=Some(5)", "loading=false"]
		);
	}

	#[rstest]
	fn test_on_success_reads_current_data() {
		let request = ApiRequest::<i32, Boom>::from_fn(|| async { Ok(8) });
		let seen = Rc::new(RefCell::new(Vec::new()));

		request.on_success({
			let seen = seen.clone();
			move |data| seen.borrow_mut().push(data)
		});
		futures::executor::block_on(request.run());
		request.on_success({
			let seen = seen.clone();
			move |data| seen.borrow_mut().push(data)
		});

		assert_eq!(*seen.borrow(), vec![None, Some(8)]);
	}

	#[rstest]
	fn test_runnable_debug() {
		let runnable = Runnable::<i32, Boom>::future(async { Ok(1) });
		assert_eq!(format!("{:?}", runnable), "Runnable::Future");
	}
}
