//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL for the chat backend
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default base URL for the auth service
pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";

/// Application name
pub const APP_NAME: &str = "Aura";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
