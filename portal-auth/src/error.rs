//! Error types for password pre-encryption.

use thiserror::Error;

/// Message shown to the user for any failed submission.
pub const GENERIC_USER_MESSAGE: &str = "Unable to process request. Please try again.";

/// Errors from fetching the public key or encrypting with it.
///
/// None of these are retried automatically; the user resubmits the form.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The public key could not be fetched (transport failure or non-2xx).
    #[error("failed to fetch public key: {0}")]
    KeyFetch(#[source] reqwest::Error),

    /// The server sent something that is not an RSA public key in PEM form.
    /// The message never contains the key text itself.
    #[error("invalid public key format: {0}")]
    InvalidKeyFormat(String),

    /// Encryption failed, e.g. the plaintext is too long for the key.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The HTTP client could not be built from the configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AuthError {
    /// The text to show end users. Details stay in logs and `Display`.
    pub fn user_message(&self) -> &'static str {
        GENERIC_USER_MESSAGE
    }
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
