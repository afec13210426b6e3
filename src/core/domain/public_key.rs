//! Public key handle.
//!
//! Encrypt-only RSA key. There is deliberately no way to decrypt with it.

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;

use super::Keypair;
use crate::core::cipher::{oaep, Encrypt};
use crate::error::{KeyError, Result};

/// A public key that can encrypt for, but never decrypt as, its owner.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyHandle {
    inner: RsaPublicKey,
}

impl PublicKeyHandle {
    /// Parse a PEM-encoded public key (SubjectPublicKeyInfo or PKCS#1).
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidKey` if the bytes are not UTF-8 or do not
    /// decode to a valid RSA public key.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let pem = std::str::from_utf8(bytes)
            .map_err(|_| KeyError::InvalidKey("not a PEM document".to_string()))?
            .trim();

        let inner = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Public half of a keypair.
    pub fn from_keypair(keypair: &Keypair) -> Self {
        Self {
            inner: keypair.rsa_public().clone(),
        }
    }

    /// Public key as SubjectPublicKeyInfo PEM.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::ExportFailed` if encoding fails.
    pub fn export(&self) -> Result<String> {
        self.inner
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeyError::ExportFailed(e.to_string()).into())
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.inner.size() * 8
    }
}

impl Encrypt for PublicKeyHandle {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        oaep::encrypt(&self.inner, plaintext)
    }

    fn capacity(&self) -> usize {
        oaep::capacity(&self.inner)
    }
}

impl std::fmt::Debug for PublicKeyHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKeyHandle")
            .field("bits", &self.bits())
            .finish()
    }
}
