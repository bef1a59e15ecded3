//! Validation failures
//!
//! [`ValidationErrors`] maps field names to messages. Use cases convert it into
//! their own error type, so it reaches the UI through the ordinary `error` cell
//! and presentation code matches on the variant to pull out field messages.

use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
	fields: BTreeMap<String, String>,
}

impl ValidationErrors {
	/// No failures.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`ValidationErrors::add`].
	pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
		self.add(field, message);
		self
	}

	/// Records a failure. The first message recorded for a field is kept.
	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.fields.entry(field.into()).or_insert_with(|| message.into());
	}

	/// Message recorded for `field`.
	pub fn get(&self, field: &str) -> Option<&str> {
		self.fields.get(field).map(String::as_str)
	}

	/// Iterates `(field, message)` pairs ordered by field name.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of failing fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// `true` if nothing failed.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// `Ok(())` when empty, otherwise `Err(self)`.
	pub fn into_result(self) -> Result<(), Self> {
		if self.is_empty() { Ok(()) } else { Err(self) }
	}

	/// The underlying map.
	pub fn into_map(self) -> BTreeMap<String, String> {
		self.fields
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let names = self.fields.keys().map(String::as_str).collect::<Vec<_>>();
		write!(
			f,
			"validation failed for {} field(s): {}",
			names.len(),
			names.join(", ")
		)
	}
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<(String, String)> for ValidationErrors {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		let mut errors = Self::new();
		for (field, message) in iter {
			errors.add(field, message);
		}
		errors
	}
}

/// Checks a value before a use case acts on it.
pub trait Validator<T: ?Sized> {
	/// Returns every failing field, or `Ok(())`.
	fn validate(&self, value: &T) -> Result<(), ValidationErrors>;
}

impl<T: ?Sized, F> Validator<T> for F
where
	F: Fn(&T) -> Result<(), ValidationErrors>,
{
	fn validate(&self, value: &T) -> Result<(), ValidationErrors> {
		self(value)
	}
}
