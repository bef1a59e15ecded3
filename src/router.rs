//! Route repositories and the login redirect helper.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "router")]
//! use cleanfront::router::{AuthOptions, MemoryRouteRepository, RouteManager};
//! ```

pub use cleanfront_router::*;
