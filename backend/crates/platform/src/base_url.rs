//! Deployment Base URL Resolution
//!
//! Resolves the externally reachable base URL from deployment environment
//! variables. This is deployment glue, not a stable contract: production
//! deployments expose a fixed project URL, preview deployments expose
//! per-branch / per-deployment URLs, and local development falls back to
//! localhost.

use std::env;

/// Default port for local development
const DEFAULT_LOCAL_PORT: &str = "3000";

/// Snapshot of the deployment-related environment.
///
/// Read once via [`DeployEnv::from_env`]; kept as plain data so URL
/// resolution stays a pure function.
#[derive(Debug, Clone, Default)]
pub struct DeployEnv {
    /// Deployment environment name ("production", "preview", ...)
    pub deploy_env: Option<String>,
    /// Stable production URL of the project (host, no scheme)
    pub production_url: Option<String>,
    /// URL of the current branch deployment (host, no scheme)
    pub branch_url: Option<String>,
    /// URL of the exact deployment/commit (host, no scheme)
    pub deployment_url: Option<String>,
    /// Local port override
    pub port: Option<String>,
}

impl DeployEnv {
    /// Read the deployment environment variables
    pub fn from_env() -> Self {
        Self {
            deploy_env: env::var("DEPLOY_ENV").ok(),
            production_url: env::var("PROJECT_PRODUCTION_URL").ok(),
            branch_url: env::var("BRANCH_URL").ok(),
            deployment_url: env::var("DEPLOYMENT_URL").ok(),
            port: env::var("PORT").ok(),
        }
    }

    /// Resolve the base URL.
    ///
    /// Production uses the project URL; otherwise the branch URL, or the
    /// exact deployment URL when `use_deployment_url` is set. Anything
    /// unset falls back to `http://localhost:{port}`.
    pub fn base_url(&self, use_deployment_url: bool) -> String {
        let is_prod = self.deploy_env.as_deref() == Some("production");

        let host = if is_prod {
            self.production_url.as_deref()
        } else if use_deployment_url {
            self.deployment_url.as_deref()
        } else {
            self.branch_url.as_deref()
        };

        match host {
            Some(host) if !host.is_empty() => format!("https://{}", host),
            _ => {
                let port = self.port.as_deref().unwrap_or(DEFAULT_LOCAL_PORT);
                format!("http://localhost:{}", port)
            }
        }
    }
}

/// Resolve the base URL from the process environment
pub fn resolve() -> String {
    DeployEnv::from_env().base_url(false)
}
