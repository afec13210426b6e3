//! Cryptographic operations.
//!
//! Keys are split by capability: everything that can encrypt implements
//! [`Encrypt`], and only key material holding a private half implements
//! [`Decrypt`]. A public-only key therefore has no decrypt path at all.
//!
//! - [`oaep`]: RSA-OAEP (SHA-256) primitives over raw bytes
//! - [`transport`]: base64 framing and the application plaintext cap

pub mod oaep;
pub mod transport;

use crate::error::Result;

pub use oaep::oaep_capacity;
pub use transport::{decrypt_from_transport, encrypt_to_transport};

/// Encrypt capability, shared by keypairs and public keys.
pub trait Encrypt {
    /// Encrypt UTF-8 plaintext to raw OAEP ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::PlaintextTooLarge` if the plaintext exceeds
    /// [`Encrypt::capacity`].
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>>;

    /// Largest plaintext, in bytes, a single encryption can carry.
    fn capacity(&self) -> usize;
}

/// Decrypt capability, only available on keys with private material.
pub trait Decrypt: Encrypt {
    /// Decrypt raw OAEP ciphertext back to UTF-8 plaintext.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` for a wrong key or corrupted
    /// ciphertext, and `CipherError::Encoding` if the result is not UTF-8.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String>;
}
