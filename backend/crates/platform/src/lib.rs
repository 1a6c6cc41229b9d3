//! Platform Infrastructure
//!
//! Cross-cutting web plumbing shared by the backend crates:
//! - `cookie` - Cookie header forwarding
//! - `base_url` - deployment-environment base URL resolution

pub mod base_url;
pub mod cookie;
