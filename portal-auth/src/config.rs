use serde::{Deserialize, Serialize};

/// Path of the public key endpoint, relative to the API base URL.
pub const PUBLIC_KEY_PATH: &str = "/auth/pubkey";

/// Connection settings for the portal backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Base URL of the backend API (e.g. `https://portal.example.com/api`).
    pub api_base_url: String,
    /// Request timeout for the key fetch.
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
        }
    }
}

impl AuthConfig {
    /// Full URL of the public key endpoint.
    pub fn public_key_url(&self) -> String {
        format!("{}{PUBLIC_KEY_PATH}", self.api_base_url.trim_end_matches('/'))
    }
}
