//! Keybox - local RSA key store and copy/paste encryption.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create the key directories
//! │   ├── list          # List both namespaces
//! │   ├── new, import   # Create and import keys
//! │   ├── rename, rm    # Manage stored keys
//! │   ├── pubkey        # Print a public key PEM
//! │   ├── encrypt       # Plaintext -> base64
//! │   ├── decrypt       # base64 -> plaintext, optional watch
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .keybox.toml management
//!     ├── cipher/       # Encrypt/Decrypt traits
//!     │   ├── oaep      # RSA-OAEP (SHA-256)
//!     │   └── transport # base64 framing, 250-byte cap
//!     ├── domain/       # Keypair, PublicKeyHandle
//!     ├── store/        # Key store over keys/{private,public}
//!     ├── diagnostics   # Skipped-file reports
//!     └── channel       # Text channels (file, stdio, memory)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use keybox::{decrypt_from_transport, encrypt_to_transport, KeyStore, Layout, TracingSink};
//!
//! let mut store = KeyStore::open(Layout::new("keys"), &TracingSink)?;
//! store.create_private("alice")?;
//!
//! let alice = store.lookup_private("alice")?;
//! let text = encrypt_to_transport("hello", alice)?;
//! assert_eq!(decrypt_from_transport(&text, alice)?, "hello");
//! # Ok::<(), keybox::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::channel::{FileChannel, MemoryChannel, StdioChannel, TextChannel};
pub use crate::core::cipher::{decrypt_from_transport, encrypt_to_transport, Decrypt, Encrypt};
pub use crate::core::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use crate::core::domain::{Keypair, PublicKeyHandle};
pub use crate::core::store::{KeyStore, Layout, SharedKeyStore};
pub use crate::core::types::Namespace;
pub use crate::error::{Error, Result};
