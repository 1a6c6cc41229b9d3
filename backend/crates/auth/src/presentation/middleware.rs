//! Route Gate Middleware
//!
//! Intercepts every request, classifies its path and redirects based on
//! session presence:
//! - protected route without a session -> login page
//! - auth route (login/signup) with a session -> dashboard
//!
//! A failed session lookup is logged and treated as "no session"; the
//! provider owns the session, we only read it.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::forwarded_cookie_header;
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::route_policy::RouteClass;
use crate::domain::identity::AuthContext;
use crate::domain::verifier::SessionVerifier;

/// Gate middleware state
#[derive(Clone)]
pub struct RouteGateState<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<V>,
    pub config: Arc<GateConfig>,
}

impl<V> RouteGateState<V>
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub fn new(verifier: V, config: GateConfig) -> Self {
        Self {
            verifier: Arc::new(verifier),
            config: Arc::new(config),
        }
    }
}

/// Route gate middleware
///
/// On pass-through, a present [`AuthContext`] is inserted into request
/// extensions so downstream handlers can use the identity without a
/// second provider round-trip.
pub async fn route_gate<V>(
    State(state): State<RouteGateState<V>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let path = req.uri().path().to_string();

    let class = state.config.policy.classify(&path);
    if class == RouteClass::Bypass {
        return next.run(req).await;
    }

    let cookie_header = forwarded_cookie_header(req.headers());

    let ctx = match state.verifier.verify(&cookie_header).await {
        Ok(ctx) => ctx,
        Err(e) => {
            // Lookup failure and "no session" take the same path
            tracing::warn!(error = %e, path = %path, "Session lookup failed");
            None
        }
    };

    match (class, &ctx) {
        (RouteClass::Protected, None) => {
            Redirect::temporary(&state.config.login_path).into_response()
        }
        (RouteClass::Auth, Some(_)) => {
            Redirect::temporary(&state.config.dashboard_path).into_response()
        }
        _ => {
            if let Some(ctx) = ctx {
                req.extensions_mut().insert(ctx);
            }
            next.run(req).await
        }
    }
}
