//! Input validation for keybox operations.
//!
//! Validates key names, key sizes, and key file permissions.

use crate::core::constants::{KEY_BITS_STEP, MAX_KEY_BITS, MAX_NAME_LEN, MIN_KEY_BITS};
use crate::error::{Result, ValidationError};

/// Characters that are never allowed in a key name.
const FORBIDDEN_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Device names Windows refuses as file names.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Validate a key name for the current platform.
///
/// Key names are used verbatim as file names, so they must be portable:
/// - Not empty, at most 255 characters
/// - No control characters and none of `\ / : * ? " < > |`
/// - Must not end with `.`
/// - On Windows, not a reserved device name (`CON`, `COM1`, ...)
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the name is rejected.
pub fn validate_name(name: &str) -> Result<()> {
    validate_name_for(name, cfg!(windows))
}

/// Validate a key name, optionally rejecting Windows device names.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the name is rejected.
pub fn validate_name_for(name: &str, reserved_device_names: bool) -> Result<()> {
    let invalid = |reason: String| -> crate::error::Error {
        ValidationError::InvalidName {
            name: name.to_string(),
            reason,
        }
        .into()
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty".to_string()));
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(invalid(format!(
            "{} characters (max {})",
            len, MAX_NAME_LEN
        )));
    }

    for (i, ch) in name.chars().enumerate() {
        if ch.is_control() {
            return Err(invalid(format!(
                "control character at position {}",
                i + 1
            )));
        }
        if FORBIDDEN_CHARS.contains(&ch) {
            return Err(invalid(format!(
                "invalid character '{}' at position {}",
                ch,
                i + 1
            )));
        }
    }

    if name.ends_with('.') {
        return Err(invalid("cannot end with '.'".to_string()));
    }

    if reserved_device_names
        && RESERVED_NAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
    {
        return Err(invalid("reserved device name".to_string()));
    }

    Ok(())
}

/// Validate an RSA modulus size for key generation.
///
/// # Errors
///
/// Returns `ValidationError::InvalidKeyBits` if the size is unsupported.
pub fn validate_key_bits(bits: usize) -> Result<()> {
    if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) || bits % KEY_BITS_STEP != 0 {
        return Err(ValidationError::InvalidKeyBits(bits).into());
    }
    Ok(())
}

/// Validate file permissions (Unix only).
///
/// # Errors
///
/// Returns `ValidationError::InvalidPermissions` if the mode doesn't match.
#[cfg(unix)]
pub fn validate_file_permissions(path: &std::path::Path, expected_mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", expected_mode),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}
