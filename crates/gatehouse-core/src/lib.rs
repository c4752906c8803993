pub mod auth;
pub mod confirmation;
pub mod config;
pub mod envelope;
pub mod error;
pub mod headline;
pub mod identity;
pub mod navigation;
pub mod notification;
pub mod session;
pub mod storage;
pub mod transport;

// Re-export common error type
pub use error::GatehouseError;
