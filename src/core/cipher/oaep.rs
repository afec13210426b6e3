//! RSA-OAEP primitives.
//!
//! OAEP with SHA-256 for both the label hash and MGF1.

use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

/// OAEP plaintext capacity for a modulus of `modulus_bytes` bytes.
///
/// `k - 2*hLen - 2`; 190 bytes for a 2048-bit key.
pub fn oaep_capacity(modulus_bytes: usize) -> usize {
    let hash_len = <Sha256 as Digest>::output_size();
    modulus_bytes.saturating_sub(2 * hash_len + 2)
}

/// Capacity of a concrete public key.
pub fn capacity(key: &RsaPublicKey) -> usize {
    oaep_capacity(key.size())
}

/// Encrypt a UTF-8 string with a public key.
///
/// # Errors
///
/// Returns `CipherError::PlaintextTooLarge` if the UTF-8 encoding exceeds
/// the key's OAEP capacity.
pub fn encrypt(key: &RsaPublicKey, plaintext: &str) -> Result<Vec<u8>> {
    let max = capacity(key);
    let bytes = plaintext.as_bytes();
    if bytes.len() > max {
        return Err(CipherError::PlaintextTooLarge {
            len: bytes.len(),
            max,
        }
        .into());
    }

    trace!(plaintext_len = bytes.len(), "encrypting");

    let ciphertext = key
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), bytes)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    trace!(ciphertext_len = ciphertext.len(), "encrypted");
    Ok(ciphertext)
}

/// Decrypt OAEP ciphertext with a private key.
///
/// Every failure of the primitive maps to the same error so callers cannot
/// distinguish a wrong key from tampering.
///
/// # Errors
///
/// Returns `CipherError::DecryptionFailed` or `CipherError::Encoding`.
pub fn decrypt(key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<String> {
    trace!(ciphertext_len = ciphertext.len(), "decrypting");

    let decrypted = Zeroizing::new(
        key.decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| CipherError::DecryptionFailed)?,
    );

    trace!(plaintext_len = decrypted.len(), "decrypted");

    std::str::from_utf8(&decrypted)
        .map(str::to_owned)
        .map_err(|e| CipherError::Encoding(format!("UTF-8 error: {}", e)).into())
}
