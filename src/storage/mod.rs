//! Persistence collaborator
//!
//! Game progress is stored as serialized strings under string keys, one key
//! per day. Backends only move strings; encoding and validation of the
//! stored [`GameState`](crate::game::GameState) happen in the session.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Key/value store for serialized game progress
pub trait Storage {
    /// Read the value stored under `key`, or `None` if nothing is stored
    ///
    /// # Errors
    /// Returns a `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns a `StorageError` if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Storage key holding the progress for `day`
///
/// # Examples
/// ```
/// use sqwordle::storage::day_key;
///
/// assert_eq!(day_key(12), "days[12]");
/// ```
#[must_use]
pub fn day_key(day: u32) -> String {
    format!("days[{day}]")
}
