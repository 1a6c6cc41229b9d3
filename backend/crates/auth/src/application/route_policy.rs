//! Route Classification Policy
//!
//! Pure path classification for the route gate. Every incoming path falls
//! into exactly one class; the gate decides redirects from the class and
//! the session state.

/// How a path should be treated by the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Auth-provider API or static asset; never touched by the gate
    Bypass,
    /// Requires a session
    Protected,
    /// Login/signup page; sends authenticated users away
    Auth,
    /// No gating
    Public,
}

/// Path prefix sets driving classification
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    /// Prefixes requiring a session
    pub protected_prefixes: Vec<String>,
    /// Login/signup prefixes
    pub auth_prefixes: Vec<String>,
    /// Prefixes the gate never inspects
    pub bypass_prefixes: Vec<String>,
    /// File extensions treated as static assets
    pub asset_extensions: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            protected_prefixes: vec!["/dashboard".to_string()],
            auth_prefixes: vec!["/login".to_string(), "/signup".to_string()],
            bypass_prefixes: vec!["/api/auth".to_string()],
            asset_extensions: vec![
                "svg".to_string(),
                "png".to_string(),
                "jpg".to_string(),
                "jpeg".to_string(),
                "gif".to_string(),
                "webp".to_string(),
                "ico".to_string(),
            ],
        }
    }
}

impl RoutePolicy {
    /// Classify a request path
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_bypassed(path) {
            return RouteClass::Bypass;
        }
        if self.matches_prefix(&self.protected_prefixes, path) {
            return RouteClass::Protected;
        }
        if self.matches_prefix(&self.auth_prefixes, path) {
            return RouteClass::Auth;
        }
        RouteClass::Public
    }

    fn is_bypassed(&self, path: &str) -> bool {
        if self.matches_prefix(&self.bypass_prefixes, path) {
            return true;
        }
        // Static assets by extension (favicon.ico included)
        if let Some((_, ext)) = path.rsplit_once('.') {
            if self.asset_extensions.iter().any(|e| e == ext) {
                return true;
            }
        }
        false
    }

    fn matches_prefix(&self, prefixes: &[String], path: &str) -> bool {
        prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}
