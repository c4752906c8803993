//! Durable storage backends for the session store.

mod atomic_toml;
mod file_store;
mod memory_store;

pub use atomic_toml::AtomicTomlFile;
pub use file_store::FileKeyValueStorage;
pub use memory_store::MemoryStorage;
