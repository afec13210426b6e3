//! Keypair type.
//!
//! Wraps an RSA private key together with its derived public half.

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher::{oaep, Decrypt, Encrypt};
use crate::core::constants::DEFAULT_KEY_BITS;
use crate::core::validation;
use crate::error::{KeyError, Result};

/// An RSA private key and the public key derived from it.
///
/// The public half is computed once at construction and can never be set
/// independently of the private half.
pub struct Keypair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl Keypair {
    /// Generate a fresh keypair with a modulus of `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::GenerationFailed` if `bits` is unsupported
    /// (1024-4096, multiple of 256) or the primitive fails.
    pub fn generate(bits: usize) -> Result<Self> {
        validation::validate_key_bits(bits)
            .map_err(|e| KeyError::GenerationFailed(e.to_string()))?;

        debug!(bits, "generating keypair");
        let private = RsaPrivateKey::new(&mut OsRng, bits)
            .map_err(|e| KeyError::GenerationFailed(e.to_string()))?;

        Ok(Self::from_private(private))
    }

    /// Generate a fresh 2048-bit keypair.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::GenerationFailed` if the primitive fails.
    pub fn generate_default() -> Result<Self> {
        Self::generate(DEFAULT_KEY_BITS)
    }

    /// Parse a PEM-encoded private key (PKCS#1 or PKCS#8).
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidKey` if the bytes are not UTF-8 or do not
    /// decode to a valid RSA private key.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self> {
        let pem = std::str::from_utf8(bytes)
            .map_err(|_| KeyError::InvalidKey("not a PEM document".to_string()))?
            .trim();

        let private = RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map_err(|e| KeyError::InvalidKey(e.to_string()))?;

        Ok(Self::from_private(private))
    }

    fn from_private(private: RsaPrivateKey) -> Self {
        let public = private.to_public_key();
        Self { private, public }
    }

    /// Private key as PKCS#1 PEM.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::ExportFailed` if encoding fails.
    pub fn export_private(&self) -> Result<Zeroizing<String>> {
        self.private
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| KeyError::ExportFailed(e.to_string()).into())
    }

    /// Public key as SubjectPublicKeyInfo PEM.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::ExportFailed` if encoding fails.
    pub fn export_public(&self) -> Result<String> {
        self.public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| KeyError::ExportFailed(e.to_string()).into())
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public.size() * 8
    }

    pub(crate) fn rsa_public(&self) -> &RsaPublicKey {
        &self.public
    }
}

impl Encrypt for Keypair {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        oaep::encrypt(&self.public, plaintext)
    }

    fn capacity(&self) -> usize {
        oaep::capacity(&self.public)
    }
}

impl Decrypt for Keypair {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        oaep::decrypt(&self.private, ciphertext)
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("bits", &self.bits())
            .finish_non_exhaustive()
    }
}
