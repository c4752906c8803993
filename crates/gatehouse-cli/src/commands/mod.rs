pub mod context;
pub mod request;
pub mod session;
