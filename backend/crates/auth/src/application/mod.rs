//! Application Layer
//!
//! Route classification policy and gate configuration.

pub mod config;
pub mod route_policy;

// Re-exports
pub use config::GateConfig;
pub use route_policy::{RouteClass, RoutePolicy};
