//! Navigation facility.

/// Host facility that moves the UI to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
