//! Error types for settings loading

use std::path::PathBuf;

/// Errors raised while loading or validating [`Settings`](crate::Settings)
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The settings file could not be read.
	#[error("failed to read settings file {path}: {source}")]
	Io {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The settings text is not valid TOML or does not match the schema.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A value parsed but is not acceptable.
	#[error("invalid setting `{key}`: {reason}")]
	Invalid {
		/// Dotted key of the offending value, e.g. `routing.login_path`.
		key: String,
		/// What is wrong with it.
		reason: String,
	},
}

impl ConfigError {
	pub(crate) fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::Invalid {
			key: key.into(),
			reason: reason.into(),
		}
	}
}

/// Result alias for settings operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_display() {
		let error = ConfigError::invalid("routing.login_path", "must start with `/`");
		assert_eq!(
			error.to_string(),
			"invalid setting `routing.login_path`: must start with `/`"
		);
	}

	#[rstest]
	fn test_io_display_names_path() {
		let error = ConfigError::Io {
			path: PathBuf::from("missing.toml"),
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
		};
		assert!(error.to_string().contains("missing.toml"));
	}
}
