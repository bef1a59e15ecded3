//! cleanfront-conf - Application Settings
//!
//! Loads the routing and authentication settings used by `cleanfront-router`
//! from TOML, then applies `CLEANFRONT_`-prefixed environment overrides.
//!
//! ## Example
//!
//! ```
//! use cleanfront_conf::Settings;
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     [routing]
//!     login_path = "/signin"
//!     "#,
//! )
//! .unwrap()
//! .with_overrides_from(|key| (key == "TOKEN_KEY").then(|| "session".to_string()));
//!
//! settings.validate().unwrap();
//! assert_eq!(settings.routing.login_path, "/signin");
//! assert_eq!(settings.auth.token_key, "session");
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod error;
pub mod settings;

pub use env::Env;
pub use error::{ConfigError, Result};
pub use settings::{AuthSettings, RoutingSettings, Settings};
