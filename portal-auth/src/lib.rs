//! Password pre-encryption for the customer portal.
//!
//! Passwords never leave the client in the clear. Before a login or password
//! reset is submitted:
//! 1. the backend's RSA public key is fetched from `GET <api>/auth/pubkey`
//!    (plain-text PEM body),
//! 2. the password is encrypted with RSA-OAEP (SHA-256),
//! 3. the ciphertext is base64-encoded for the request body.
//!
//! # Design Principles
//!
//! - **No key cache**: every submission fetches the key again, so rotation
//!   on the server is picked up immediately
//! - **No retries**: a failed fetch surfaces to the form, which lets the user
//!   resubmit
//! - **Generic user errors**: [`AuthError::user_message`] never reveals
//!   which step failed or any key material

mod config;
mod encryptor;
mod error;
mod key;

pub use config::{AuthConfig, PUBLIC_KEY_PATH};
pub use encryptor::PasswordEncryptor;
pub use error::{AuthError, AuthResult, GENERIC_USER_MESSAGE};
pub use key::{encrypt_with_key, max_plaintext_len, oaep_limit, parse_public_key};
