//! cleanfront-router - Navigation and Login Redirects
//!
//! - [`RouteRepository`]: the read-current-path / navigate capability an
//!   application supplies from its UI framework's router
//! - [`RouteManager`]: forwards navigation and redirects logged-out users to
//!   the login path
//! - [`AuthOptions`]: login path plus the logged-in predicate, optionally built
//!   from a [`KeyValueStore`] token lookup or from `cleanfront-conf` settings
//! - [`MemoryRouteRepository`] and [`MemoryStore`]: in-memory implementations
//!   for tests and non-browser hosts

#![warn(missing_docs)]

pub mod manager;
pub mod repository;
pub mod store;

pub use manager::{AuthOptions, RouteManager};
pub use repository::{MemoryRouteRepository, RouteRepository};
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
