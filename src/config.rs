use std::env;

/// AppConfig
///
/// Holds the client's configuration state. Immutable once loaded, so every
/// component sees the same collaborator endpoint for the whole process lifetime.
#[derive(Clone)]
pub struct AppConfig {
    // Base URL of the collaborator backend (scheme + host + port, no path).
    pub api_base_url: String,
    // Runtime environment marker. Controls log formatting and fail-fast behavior.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development defaults
/// (local collaborator, pretty logs) and hardened production behavior
/// (mandatory configuration, JSON logs).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup, without needing any environment variables.
    fn default() -> Self {
        Self {
            // The collaborator's default local bind.
            api_base_url: "http://localhost:8000".to_string(),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing configuration at startup. Reads
    /// all parameters from environment variables and implements the fail-fast
    /// principle.
    ///
    /// # Panics
    /// Panics if `API_BASE_URL` is not set when running in Production. This
    /// prevents the client from starting pointed at nothing.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        match env {
            Env::Local => Self {
                env: Env::Local,
                // Local development falls back to the collaborator's default port.
                api_base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            },
            Env::Production => Self {
                env: Env::Production,
                api_base_url: env::var("API_BASE_URL")
                    .expect("FATAL: API_BASE_URL required in production"),
            },
        }
    }
}
