//! Transport encoding.
//!
//! Ciphertext leaves the process through text-only channels, so it is
//! framed as standard base64 with padding. Plaintext is capped below the raw
//! OAEP capacity to keep payloads short enough for copy/paste.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use super::{Decrypt, Encrypt};
use crate::core::constants::TRANSPORT_MAX_PLAINTEXT;
use crate::error::{CipherError, Result};

/// Encrypt plaintext and encode it for a text channel.
///
/// # Errors
///
/// Returns `CipherError::PlaintextTooLarge` if the plaintext exceeds 250
/// UTF-8 bytes or the key's own capacity.
pub fn encrypt_to_transport(plaintext: &str, key: &impl Encrypt) -> Result<String> {
    let len = plaintext.len();
    if len > TRANSPORT_MAX_PLAINTEXT {
        return Err(CipherError::PlaintextTooLarge {
            len,
            max: TRANSPORT_MAX_PLAINTEXT,
        }
        .into());
    }

    let ciphertext = key.encrypt(plaintext)?;
    debug!(plaintext_len = len, "encrypted for transport");
    Ok(STANDARD.encode(ciphertext))
}

/// Decode transport text and decrypt it.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `CipherError::Encoding` for malformed base64, otherwise whatever
/// [`Decrypt::decrypt`] returns.
pub fn decrypt_from_transport(text: &str, key: &impl Decrypt) -> Result<String> {
    let ciphertext = STANDARD
        .decode(text.trim())
        .map_err(|e| CipherError::Encoding(format!("base64 error: {}", e)))?;

    let plaintext = key.decrypt(&ciphertext)?;
    debug!(plaintext_len = plaintext.len(), "decrypted from transport");
    Ok(plaintext)
}
