//! Error types.
//!
//! One enum per concern, wrapped by the top-level [`Error`].

use thiserror::Error;

use crate::core::types::Namespace;

/// Top-level error for all keybox operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key material errors.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Bytes do not decode to a structurally valid key.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The RSA primitive rejected the requested parameters.
    #[error("key generation failed: {0}")]
    GenerationFailed(String),

    #[error("key export failed: {0}")]
    ExportFailed(String),
}

/// Encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("plaintext too large: {len} bytes (max {max})")]
    PlaintextTooLarge { len: usize, max: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong key or corrupted ciphertext. Deliberately carries no detail.
    #[error("decryption failed: wrong key or corrupted ciphertext")]
    DecryptionFailed,

    /// Malformed UTF-8 or base64.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Key store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{namespace} key not found: {name}")]
    NotFound { namespace: Namespace, name: String },

    #[error("{namespace} key already exists: {name}")]
    AlreadyExists { namespace: Namespace, name: String },

    #[error("failed to read key store: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write key store: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid key name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("unsupported key size: {0} bits (use 1024-4096, a multiple of 256)")]
    InvalidKeyBits(usize),

    #[error("insecure permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Text channel errors.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("failed to read channel: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write channel: {0}")]
    Write(#[source] std::io::Error),

    #[error("timed out after {0}s waiting for new content")]
    Timeout(u64),

    #[error("channel is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, Error>;
