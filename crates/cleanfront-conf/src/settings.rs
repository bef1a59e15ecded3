//! Settings schema and loading
//!
//! Every field has a default, so an empty document is a complete
//! configuration:
//!
//! ```toml
//! [routing]
//! login_path = "/login"
//! home_path = "/"
//!
//! [auth]
//! token_key = "token"
//! ```
//!
//! Precedence, lowest first: defaults, TOML, `CLEANFRONT_*` variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::env::Env;
use crate::error::{ConfigError, Result};

/// Route paths used by the redirect helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
	/// Where unauthenticated users are sent.
	pub login_path: String,
	/// Landing route after login.
	pub home_path: String,
}

impl Default for RoutingSettings {
	fn default() -> Self {
		Self {
			login_path: "/login".to_string(),
			home_path: "/".to_string(),
		}
	}
}

/// Authentication token lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
	/// Key under which the session token is stored.
	pub token_key: String,
}

impl Default for AuthSettings {
	fn default() -> Self {
		Self {
			token_key: "token".to_string(),
		}
	}
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// `[routing]` table.
	pub routing: RoutingSettings,
	/// `[auth]` table.
	pub auth: AuthSettings,
}

impl Settings {
	/// Parses settings from TOML text. Missing tables and keys take defaults.
	///
	/// # Examples
	///
	/// ```
	/// use cleanfront_conf::Settings;
	///
	/// let settings = Settings::from_toml_str("[routing]\nlogin_path = \"/signin\"").unwrap();
	/// assert_eq!(settings.routing.login_path, "/signin");
	/// assert_eq!(settings.auth.token_key, "token");
	/// ```
	pub fn from_toml_str(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), "loaded settings file");
		Ok(settings)
	}

	/// Applies `CLEANFRONT_LOGIN_PATH`, `CLEANFRONT_HOME_PATH` and
	/// `CLEANFRONT_TOKEN_KEY` from the process environment.
	pub fn with_env_overrides(self) -> Self {
		let env = Env::new();
		self.with_overrides_from(|key| env.var(key))
	}

	/// Applies overrides from `lookup`, which receives the unprefixed key
	/// (`LOGIN_PATH`, `HOME_PATH`, `TOKEN_KEY`).
	pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let targets: [(&str, &mut String); 3] = [
			("LOGIN_PATH", &mut self.routing.login_path),
			("HOME_PATH", &mut self.routing.home_path),
			("TOKEN_KEY", &mut self.auth.token_key),
		];
		for (key, slot) in targets {
			if let Some(value) = lookup(key) {
				tracing::debug!(key, "settings override applied");
				*slot = value;
			}
		}
		self
	}

	/// Checks that route paths are absolute and the token key is non-empty.
	pub fn validate(&self) -> Result<()> {
		for (key, path) in [
			("routing.login_path", &self.routing.login_path),
			("routing.home_path", &self.routing.home_path),
		] {
			if !path.starts_with('/') {
				return Err(ConfigError::invalid(key, "must start with `/`"));
			}
		}
		if self.auth.token_key.trim().is_empty() {
			return Err(ConfigError::invalid("auth.token_key", "must not be empty"));
		}
		Ok(())
	}

	/// Loads `path`, applies environment overrides and validates the result.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let settings = Self::from_file(path)?.with_env_overrides();
		settings.validate()?;
		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;

	#[rstest]
	fn test_empty_document_is_default() {
		let settings = Settings::from_toml_str("").unwrap();
		assert_eq!(settings, Settings::default());
		assert_eq!(settings.routing.login_path, "/login");
		assert_eq!(settings.routing.home_path, "/");
		assert_eq!(settings.auth.token_key, "token");
	}

	#[rstest]
	fn test_partial_table_keeps_other_defaults() {
		let settings = Settings::from_toml_str("[routing]\nhome_path = \"/app\"\n").unwrap();
		assert_eq!(settings.routing.home_path, "/app");
		assert_eq!(settings.routing.login_path, "/login");
	}

	#[rstest]
	fn test_wrong_type_is_toml_error() {
		let result = Settings::from_toml_str("[auth]\ntoken_key = 5\n");
		assert!(matches!(result, Err(ConfigError::Toml(_))));
	}

	#[rstest]
	fn test_overrides_from_lookup() {
		let vars = HashMap::from([
			("LOGIN_PATH", "/signin".to_string()),
			("TOKEN_KEY", "session".to_string()),
		]);
		let settings = Settings::default().with_overrides_from(|key| vars.get(key).cloned());

		assert_eq!(settings.routing.login_path, "/signin");
		assert_eq!(settings.routing.home_path, "/");
		assert_eq!(settings.auth.token_key, "session");
	}

	#[rstest]
	#[case("login", "/", "token", Some("routing.login_path"))]
	#[case("/login", "home", "token", Some("routing.home_path"))]
	#[case("/login", "/", "  ", Some("auth.token_key"))]
	#[case("/login", "/", "token", None)]
	fn test_validate(
		#[case] login_path: &str,
		#[case] home_path: &str,
		#[case] token_key: &str,
		#[case] failing_key: Option<&str>,
	) {
		let settings = Settings {
			routing: RoutingSettings {
				login_path: login_path.to_string(),
				home_path: home_path.to_string(),
			},
			auth: AuthSettings {
				token_key: token_key.to_string(),
			},
		};

		match (settings.validate(), failing_key) {
			(Ok(()), None) => {}
			(Err(ConfigError::Invalid { key, .. }), Some(expected)) => assert_eq!(key, expected),
			(other, expected) => panic!("unexpected {other:?} for {expected:?}"),
		}
	}

	#[rstest]
	fn test_serializes_back_to_toml() {
		let text = toml::to_string(&Settings::default()).unwrap();
		assert!(text.contains("login_path = \"/login\""));
	}
}
