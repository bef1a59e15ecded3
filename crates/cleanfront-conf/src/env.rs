//! Environment variable lookup with prefix support

use std::env;

/// Prefix used for every cleanfront environment variable.
pub const DEFAULT_PREFIX: &str = "CLEANFRONT_";

/// Reads prefixed environment variables
#[derive(Debug, Clone)]
pub struct Env {
	prefix: String,
}

impl Env {
	/// Lookup using [`DEFAULT_PREFIX`].
	pub fn new() -> Self {
		Self::with_prefix(DEFAULT_PREFIX)
	}

	/// Lookup using a custom prefix.
	pub fn with_prefix(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
		}
	}

	/// Full variable name for `key`, e.g. `LOGIN_PATH` -> `CLEANFRONT_LOGIN_PATH`.
	pub fn key_name(&self, key: &str) -> String {
		format!("{}{}", self.prefix, key)
	}

	/// Value of the prefixed variable, if set and valid unicode.
	pub fn var(&self, key: &str) -> Option<String> {
		env::var(self.key_name(key)).ok()
	}
}

impl Default for Env {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Env::new(), "CLEANFRONT_LOGIN_PATH")]
	#[case(Env::with_prefix("APP_"), "APP_LOGIN_PATH")]
	fn test_key_name(#[case] env: Env, #[case] expected: &str) {
		assert_eq!(env.key_name("LOGIN_PATH"), expected);
	}

	#[rstest]
	fn test_unset_variable_is_none() {
		let env = Env::with_prefix("CLEANFRONT_TEST_UNSET_");
		assert_eq!(env.var("NOTHING_HERE"), None);
	}
}
