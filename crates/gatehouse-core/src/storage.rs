//! Durable key-value storage seam.

use crate::error::Result;

/// String key-value storage that survives process restarts.
///
/// Reads and writes are synchronous. Implementations must tolerate
/// `remove` on a missing key.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
