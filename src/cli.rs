//! Command-line and environment configuration
//!
//! Nothing is persisted; service endpoints and the starting locale come
//! from flags or their env fallbacks.

use clap::Parser;

use crate::constants::{DEFAULT_AUTH_URL, DEFAULT_BACKEND_URL};
use crate::models::Locale;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "aura",
    version,
    about = "Terminal dashboard for browsing and organizing links to AI tools"
)]
pub struct Cli {
    /// Base URL of the chat backend
    #[arg(long, env = "AURA_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Base URL of the auth service
    #[arg(long, env = "AURA_AUTH_URL", default_value = DEFAULT_AUTH_URL)]
    pub auth_url: String,

    /// Public api key sent with every auth request
    #[arg(long, env = "AURA_AUTH_KEY", default_value = "")]
    pub auth_key: String,

    /// Starting display language
    #[arg(long, env = "AURA_LOCALE", value_enum, default_value = "zh")]
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["aura"]).unwrap();
        assert_eq!(cli.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(cli.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(cli.locale, Locale::Zh);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "aura",
            "--backend-url",
            "http://10.0.0.2:8000",
            "--locale",
            "en",
        ])
        .unwrap();
        assert_eq!(cli.backend_url, "http://10.0.0.2:8000");
        assert_eq!(cli.locale, Locale::En);
    }
}
