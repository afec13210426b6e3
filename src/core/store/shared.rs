//! Thread-safe key store handle.
//!
//! Store operations touch the directory and the in-memory maps together and
//! must not interleave. `SharedKeyStore` runs each one under a single lock.

use std::sync::{Arc, Mutex};

use tracing::warn;

use super::KeyStore;
use crate::core::diagnostics::TracingSink;

/// A cloneable handle that serializes access to one [`KeyStore`].
#[derive(Debug, Clone)]
pub struct SharedKeyStore {
    inner: Arc<Mutex<KeyStore>>,
}

impl SharedKeyStore {
    pub fn new(store: KeyStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A lock poisoned by a panicking caller is recovered by refreshing the
    /// maps from disk before `f` runs.
    pub fn with<R>(&self, f: impl FnOnce(&mut KeyStore) -> R) -> R {
        let mut guard = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                if let Err(e) = guard.refresh(&TracingSink) {
                    warn!(error = %e, "key store refresh after panic failed");
                }
                self.inner.clear_poison();
                guard
            }
        };
        f(&mut guard)
    }
}

impl From<KeyStore> for SharedKeyStore {
    fn from(store: KeyStore) -> Self {
        Self::new(store)
    }
}
