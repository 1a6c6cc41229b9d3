//! Gate Configuration
//!
//! Configuration for the route gate.

use crate::application::route_policy::RoutePolicy;

/// Route gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Path classification policy
    pub policy: RoutePolicy,
    /// Where unauthenticated users land
    pub login_path: String,
    /// Where authenticated users land
    pub dashboard_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            policy: RoutePolicy::default(),
            login_path: "/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
        }
    }
}
