//! Constants used throughout keybox.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.keybox.toml).
pub const CONFIG_FILE: &str = ".keybox.toml";

/// Default key store root, relative to the working directory.
pub const KEYS_DIR: &str = "keys";

/// Private namespace directory under the keys root.
pub const PRIVATE_DIR: &str = "private";

/// Public namespace directory under the keys root.
pub const PUBLIC_DIR: &str = "public";

/// Default RSA modulus size for generated keys.
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Smallest modulus accepted for generation.
pub const MIN_KEY_BITS: usize = 1024;

/// Largest modulus accepted for generation. Larger public keys cannot be reloaded.
pub const MAX_KEY_BITS: usize = 4096;

/// Generated modulus sizes must be a multiple of this.
pub const KEY_BITS_STEP: usize = 256;

/// Application cap on transport plaintext, in UTF-8 bytes.
pub const TRANSPORT_MAX_PLAINTEXT: usize = 250;

/// Longest accepted key name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Default channel polling interval in milliseconds.
pub const WATCH_INTERVAL_MS: u64 = 500;

/// Unix mode for private key files.
pub const PRIVATE_KEY_MODE: u32 = 0o600;

/// Unix mode for public key files.
pub const PUBLIC_KEY_MODE: u32 = 0o644;
