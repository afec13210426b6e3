//! Key store.
//!
//! Holds every loaded key, indexed by name, in two independent namespaces:
//! private keypairs and public keys. The store is built by scanning the
//! namespace directories and is the only owner of the loaded keys; callers
//! look keys up by name and must look them up again after any mutation.
//!
//! ## Loading rules
//!
//! - Each regular file in `private/` is parsed as a [`Keypair`], each file in
//!   `public/` as a [`PublicKeyHandle`]. The file name is the key name.
//! - A file that cannot be read or parsed is skipped and reported to the
//!   [`DiagnosticSink`]; it never aborts the scan.
//! - The two namespaces load independently of each other.
//!
//! Mutating operations live in [`ops`](self::ops) and always keep the
//! in-memory maps and the directory contents in step.

mod fs;
mod layout;
mod ops;
mod shared;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::core::constants::PRIVATE_KEY_MODE;
use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::domain::{Keypair, PublicKeyHandle};
use crate::core::types::{KeyName, Namespace};
use crate::error::{Result, StoreError};

pub use layout::Layout;
pub use shared::SharedKeyStore;

/// The transient "current public key": the public half of the selected
/// private key. Lives outside the public namespace and is never persisted.
#[derive(Debug)]
struct CurrentKey {
    source: KeyName,
    key: PublicKeyHandle,
}

/// In-memory view of the key directories.
#[derive(Debug)]
pub struct KeyStore {
    layout: Layout,
    private: BTreeMap<KeyName, Keypair>,
    public: BTreeMap<KeyName, PublicKeyHandle>,
    current: Option<CurrentKey>,
}

impl KeyStore {
    /// Initialize the layout and scan it.
    ///
    /// This is the startup entry point: it is the only constructor that
    /// creates directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directories cannot be created or listed.
    pub fn open(layout: Layout, sink: &dyn DiagnosticSink) -> Result<Self> {
        layout.ensure()?;
        Self::scan(layout, sink)
    }

    /// Scan both namespace directories without modifying anything.
    ///
    /// A missing namespace directory scans as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if an existing directory cannot be
    /// listed. Unloadable files are reported to `sink` instead.
    pub fn scan(layout: Layout, sink: &dyn DiagnosticSink) -> Result<Self> {
        let private = scan_namespace(&layout, Namespace::Private, sink, Keypair::from_encoded)?;
        let public = scan_namespace(
            &layout,
            Namespace::Public,
            sink,
            PublicKeyHandle::from_encoded,
        )?;

        info!(
            private = private.len(),
            public = public.len(),
            "key store loaded"
        );

        Ok(Self {
            layout,
            private,
            public,
            current: None,
        })
    }

    /// Re-scan the directories and replace both namespaces at once.
    ///
    /// The current public key is re-derived if its private key still exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if a directory cannot be listed; the
    /// store is left unchanged in that case.
    pub fn refresh(&mut self, sink: &dyn DiagnosticSink) -> Result<()> {
        let fresh = Self::scan(self.layout.clone(), sink)?;
        let source = self.current.take().map(|current| current.source);

        *self = fresh;
        if let Some(source) = source {
            if self.private.contains_key(&source) {
                self.select_private(&source)?;
            }
        }
        Ok(())
    }

    /// Directory layout backing this store.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Look up a private keypair.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such key is loaded.
    pub fn lookup_private(&self, name: &str) -> Result<&Keypair> {
        self.private
            .get(name)
            .ok_or_else(|| not_found(Namespace::Private, name))
    }

    /// Look up a public key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such key is loaded.
    pub fn lookup_public(&self, name: &str) -> Result<&PublicKeyHandle> {
        self.public
            .get(name)
            .ok_or_else(|| not_found(Namespace::Public, name))
    }

    /// Whether a key is loaded in the given namespace.
    pub fn contains(&self, namespace: Namespace, name: &str) -> bool {
        match namespace {
            Namespace::Private => self.private.contains_key(name),
            Namespace::Public => self.public.contains_key(name),
        }
    }

    /// Names in the private namespace, sorted.
    pub fn private_names(&self) -> impl Iterator<Item = &str> {
        self.private.keys().map(String::as_str)
    }

    /// Names in the public namespace, sorted.
    pub fn public_names(&self) -> impl Iterator<Item = &str> {
        self.public.keys().map(String::as_str)
    }

    /// Loaded private keypairs with their names.
    pub fn private_keys(&self) -> impl Iterator<Item = (&str, &Keypair)> {
        self.private.iter().map(|(name, key)| (name.as_str(), key))
    }

    /// Loaded public keys with their names.
    pub fn public_keys(&self) -> impl Iterator<Item = (&str, &PublicKeyHandle)> {
        self.public.iter().map(|(name, key)| (name.as_str(), key))
    }

    /// Number of keys in a namespace.
    pub fn len(&self, namespace: Namespace) -> usize {
        match namespace {
            Namespace::Private => self.private.len(),
            Namespace::Public => self.public.len(),
        }
    }

    /// Whether both namespaces are empty.
    pub fn is_empty(&self) -> bool {
        self.private.is_empty() && self.public.is_empty()
    }

    /// Select a private key and derive the current public key from it.
    ///
    /// Replaces any previous selection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the private key is not loaded.
    pub fn select_private(&mut self, name: &str) -> Result<&PublicKeyHandle> {
        let key = PublicKeyHandle::from_keypair(self.lookup_private(name)?);
        debug!(source = name, "current public key selected");

        let current = self.current.insert(CurrentKey {
            source: name.to_string(),
            key,
        });
        Ok(&current.key)
    }

    /// Public half of the selected private key, if any.
    pub fn current_public(&self) -> Option<&PublicKeyHandle> {
        self.current.as_ref().map(|current| &current.key)
    }

    /// Name of the selected private key, if any.
    pub fn current_source(&self) -> Option<&str> {
        self.current.as_ref().map(|current| current.source.as_str())
    }
}

fn not_found(namespace: Namespace, name: &str) -> crate::error::Error {
    StoreError::NotFound {
        namespace,
        name: name.to_string(),
    }
    .into()
}

/// Load every regular file of one namespace directory with `parse`.
fn scan_namespace<T>(
    layout: &Layout,
    namespace: Namespace,
    sink: &dyn DiagnosticSink,
    parse: fn(&[u8]) -> Result<T>,
) -> Result<BTreeMap<KeyName, T>> {
    let dir = layout.dir(namespace);
    let mut keys = BTreeMap::new();

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dir.display(), "key directory missing, treating as empty");
            return Ok(keys);
        }
        Err(e) => return Err(StoreError::ReadFailed(e).into()),
    };

    for entry in entries {
        let entry = entry.map_err(StoreError::ReadFailed)?;
        let path = entry.path();

        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => continue,
            Ok(_) => {}
            Err(e) => {
                sink.log(&Diagnostic::new(namespace, path, e.to_string()));
                continue;
            }
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => {
                sink.log(&Diagnostic::new(namespace, path, "file name is not UTF-8"));
                continue;
            }
        };

        match load_file(&path, parse) {
            Ok(key) => {
                if namespace == Namespace::Private {
                    fs::check_private_permissions(&path, PRIVATE_KEY_MODE);
                }
                debug!(%namespace, name = %name, "key loaded");
                keys.insert(name, key);
            }
            Err(e) => sink.log(&Diagnostic::new(namespace, path, e.to_string())),
        }
    }

    Ok(keys)
}

fn load_file<T>(path: &Path, parse: fn(&[u8]) -> Result<T>) -> Result<T> {
    let contents = zeroize::Zeroizing::new(std::fs::read(path).map_err(StoreError::ReadFailed)?);
    parse(&contents)
}
