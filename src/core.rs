//! Reactive cells, state containers, requests and use cases.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "core")]
//! use cleanfront::core::{ApiRequest, Ploc, Pulse};
//! ```

pub use cleanfront_core::*;
