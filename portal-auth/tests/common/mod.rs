//! Shared test helpers for auth tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rsa::pkcs1::{EncodeRsaPublicKey, LineEnding};
use rsa::pkcs8::EncodePublicKey;
use rsa::{Oaep, RsaPrivateKey};
use sha2::Sha256;

/// Returns a deterministic 1024-bit RSA key, generated once per test binary.
pub fn test_private_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        RsaPrivateKey::new(&mut rng, 1024).expect("key generation")
    })
}

/// The test key's public half as SubjectPublicKeyInfo PEM.
pub fn test_public_pem() -> String {
    test_private_key()
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .expect("encode spki pem")
}

/// The test key's public half as PKCS#1 PEM.
pub fn test_pkcs1_pem() -> String {
    test_private_key()
        .to_public_key()
        .to_pkcs1_pem(LineEnding::LF)
        .expect("encode pkcs1 pem")
}

/// Decodes base64 ciphertext and decrypts it with the test key.
pub fn decrypt(ciphertext_b64: &str) -> String {
    let bytes = STANDARD.decode(ciphertext_b64).expect("valid base64");
    let plain = test_private_key()
        .decrypt(Oaep::new::<Sha256>(), &bytes)
        .expect("oaep decrypt");
    String::from_utf8(plain).expect("utf-8 plaintext")
}
