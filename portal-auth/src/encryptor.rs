use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::key::encrypt_with_key;

/// Encrypts passwords with the backend's current public key before they are
/// sent for login or password reset.
///
/// The key is fetched fresh on every call and never cached, so a server-side
/// key rotation takes effect on the very next submission.
#[derive(Debug, Clone)]
pub struct PasswordEncryptor {
    config: AuthConfig,
    client: Client,
}

impl PasswordEncryptor {
    /// Creates an encryptor for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if the HTTP client cannot be built.
    pub fn new(config: AuthConfig) -> AuthResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AuthError::Config(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Fetches the backend's PEM public key.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::KeyFetch`] on transport failure or a non-2xx
    /// response.
    pub async fn fetch_public_key(&self) -> AuthResult<String> {
        let url = self.config.public_key_url();
        debug!(url = %url, "fetching public key");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                warn!(url = %url, error = %e, "public key fetch failed");
                AuthError::KeyFetch(e)
            })?;

        response.text().await.map_err(AuthError::KeyFetch)
    }

    /// Fetches the current key and encrypts `plaintext` with it.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::fetch_public_key`] or [`encrypt_with_key`].
    pub async fn encrypt_password(&self, plaintext: &str) -> AuthResult<String> {
        let pem = self.fetch_public_key().await?;
        encrypt_with_key(plaintext, &pem)
    }
}
