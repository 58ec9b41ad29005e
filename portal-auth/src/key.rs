//! RSA public key parsing and RSA-OAEP encryption.
//!
//! Keys arrive as PEM text, either SubjectPublicKeyInfo
//! (`-----BEGIN PUBLIC KEY-----`) or PKCS#1 (`-----BEGIN RSA PUBLIC KEY-----`).
//! Ciphertext is returned as standard base64 so it can travel in a JSON body.

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::error::{AuthError, AuthResult};

/// Parses a PEM-encoded RSA public key.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyFormat`] if the text is not an RSA public
/// key in either supported PEM layout.
pub fn parse_public_key(pem: &str) -> AuthResult<RsaPublicKey> {
    let pem = pem.trim();
    if !pem.starts_with("-----BEGIN") {
        return Err(AuthError::InvalidKeyFormat("missing PEM header".to_string()));
    }

    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|_| AuthError::InvalidKeyFormat("not an RSA public key".to_string()))
}

/// Longest plaintext, in bytes, that RSA-OAEP with SHA-256 accepts for `key`.
pub fn oaep_limit(key: &RsaPublicKey) -> usize {
    key.size()
        .saturating_sub(2 * <Sha256 as Digest>::output_size() + 2)
}

/// Longest password, in bytes, that can be encrypted with the PEM key.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyFormat`] if the key does not parse.
pub fn max_plaintext_len(pem: &str) -> AuthResult<usize> {
    parse_public_key(pem).map(|key| oaep_limit(&key))
}

/// Encrypts `plaintext` with RSA-OAEP (SHA-256) and returns base64 ciphertext.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKeyFormat`] for a bad key and
/// [`AuthError::Encryption`] for anything else, including plaintext longer
/// than [`max_plaintext_len`].
pub fn encrypt_with_key(plaintext: &str, pem: &str) -> AuthResult<String> {
    let key = parse_public_key(pem)?;

    let limit = oaep_limit(&key);
    if plaintext.len() > limit {
        return Err(AuthError::Encryption(format!(
            "plaintext is {} bytes, key allows at most {limit}",
            plaintext.len()
        )));
    }

    let ciphertext = key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), plaintext.as_bytes())
        .map_err(|e| AuthError::Encryption(e.to_string()))?;

    Ok(STANDARD.encode(ciphertext))
}
