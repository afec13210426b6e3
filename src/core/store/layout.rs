//! On-disk layout of the key store.
//!
//! ```text
//! <root>/
//! ├── private/<name>   PEM private key, mode 0600
//! └── public/<name>    PEM public key
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::Namespace;
use crate::error::{Result, StoreError};

/// Paths of the two namespace directories under a common root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one namespace.
    pub fn dir(&self, namespace: Namespace) -> PathBuf {
        self.root.join(namespace.dir_name())
    }

    /// File path of a named key.
    pub fn path(&self, namespace: Namespace, name: &str) -> PathBuf {
        self.dir(namespace).join(name)
    }

    /// Whether both namespace directories exist.
    pub fn is_initialized(&self) -> bool {
        self.dir(Namespace::Private).is_dir() && self.dir(Namespace::Public).is_dir()
    }

    /// Create both namespace directories if absent.
    ///
    /// Idempotent. The private directory is restricted to the owner on Unix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if a directory cannot be created.
    pub fn ensure(&self) -> Result<()> {
        for namespace in [Namespace::Private, Namespace::Public] {
            let dir = self.dir(namespace);
            if dir.is_dir() {
                continue;
            }
            debug!(path = %dir.display(), "creating key directory");
            fs::create_dir_all(&dir).map_err(StoreError::WriteFailed)?;

            #[cfg(unix)]
            if namespace == Namespace::Private {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))
                    .map_err(StoreError::WriteFailed)?;
            }
        }
        Ok(())
    }
}
