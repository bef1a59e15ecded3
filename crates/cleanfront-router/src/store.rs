//! Key-value storage capability
//!
//! Auth predicates read session tokens through an injected [`KeyValueStore`]
//! instead of a global storage object. [`MemoryStore`] is the in-process
//! implementation; browser or file backed stores live in the application.

use std::cell::RefCell;
use std::collections::HashMap;

/// Errors raised by a [`KeyValueStore`]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	/// Keys must contain at least one non-whitespace character.
	#[error("storage key must not be empty")]
	EmptyKey,

	/// The backing storage refused the operation.
	#[error("storage unavailable: {0}")]
	Unavailable(String),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String key-value storage
pub trait KeyValueStore {
	/// Value stored under `key`.
	fn get(&self, key: &str) -> StoreResult<Option<String>>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: &str, value: &str) -> StoreResult<()>;

	/// Removes `key`. Removing a missing key is not an error.
	fn remove(&self, key: &str) -> StoreResult<()>;
}

/// In-memory [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// `true` if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}

fn check_key(key: &str) -> StoreResult<()> {
	if key.trim().is_empty() {
		return Err(StoreError::EmptyKey);
	}
	Ok(())
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> StoreResult<Option<String>> {
		check_key(key)?;
		Ok(self.entries.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> StoreResult<()> {
		check_key(key)?;
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> StoreResult<()> {
		check_key(key)?;
		self.entries.borrow_mut().remove(key);
		Ok(())
	}
}
