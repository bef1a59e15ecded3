//! Log output setup
//!
//! The library crates only emit `tracing` events. Applications that have no
//! subscriber of their own can install a formatted one here.

use tracing_subscriber::EnvFilter;

/// Errors from [`init_logging`]
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
	/// The filter directive could not be parsed.
	#[error("invalid log filter `{directive}`: {reason}")]
	InvalidFilter {
		/// Directive as given.
		directive: String,
		/// Parser message.
		reason: String,
	},

	/// A global subscriber is already installed.
	#[error("global tracing subscriber already set: {0}")]
	AlreadySet(String),
}

/// Installs a formatted subscriber filtered by `filter`
/// (`EnvFilter` syntax, e.g. `"cleanfront_core=debug,info"`).
///
/// `RUST_LOG` is not consulted; pass its value explicitly if wanted.
pub fn init_logging(filter: &str) -> Result<(), LoggingError> {
	let env_filter = EnvFilter::try_new(filter).map_err(|error| LoggingError::InvalidFilter {
		directive: filter.to_string(),
		reason: error.to_string(),
	})?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(true)
		.try_init()
		.map_err(|error| LoggingError::AlreadySet(error.to_string()))?;

	tracing::debug!(filter, "logging initialized");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_filter_is_rejected() {
		let result = init_logging("cleanfront_core=notalevel");
		assert!(matches!(result, Err(LoggingError::InvalidFilter { .. })));
	}

	#[rstest]
	fn test_second_install_fails_without_panicking() {
		// Another test in this binary may have installed one already.
		let _ = init_logging("warn");
		let result = init_logging("warn");
		assert!(matches!(result, Err(LoggingError::AlreadySet(_))));
	}
}
