//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Shortest secret accepted for the cookie signing key.
pub const MIN_SECRET_BYTES: usize = 64;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub secret: String,
    /// Base URL of the storefront REST backend, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    #[serde(default = "default_api_timeout_secs")]
    pub api_timeout_secs: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_api_timeout_secs() -> u64 {
    10
}

fn default_cache_capacity() -> usize {
    256
}

impl ServerConfig {
    /// Rejects settings the server cannot start with.
    pub fn validate(&self) -> Result<(), String> {
        if self.secret.len() < MIN_SECRET_BYTES {
            return Err(format!(
                "secret must be at least {MIN_SECRET_BYTES} bytes long"
            ));
        }
        if self.api_base_url.trim().is_empty() {
            return Err("api_base_url must be set".to_string());
        }
        Ok(())
    }
}
