//! Key store mutations.
//!
//! Every operation validates the key name and checks for collisions before
//! touching the filesystem, then updates the directory and the in-memory map
//! together. Taking `&mut self` serializes them; see [`SharedKeyStore`] for
//! use across threads.
//!
//! [`SharedKeyStore`]: super::SharedKeyStore

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use super::fs::{occupied, write_new};
use super::{not_found, KeyStore};
use crate::core::constants::{DEFAULT_KEY_BITS, PRIVATE_KEY_MODE, PUBLIC_KEY_MODE};
use crate::core::domain::{Keypair, PublicKeyHandle};
use crate::core::types::Namespace;
use crate::core::validation::validate_name;
use crate::error::{Error, Result, StoreError, ValidationError};

impl KeyStore {
    /// Generate a 2048-bit keypair and store it under `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` for a bad name and
    /// `StoreError::AlreadyExists` if the name is taken. Nothing is generated
    /// or written in either case.
    pub fn create_private(&mut self, name: &str) -> Result<()> {
        self.create_private_with_bits(name, DEFAULT_KEY_BITS)
    }

    /// Generate a keypair of `bits` bits and store it under `name`.
    ///
    /// # Errors
    ///
    /// As [`KeyStore::create_private`], plus `KeyError::GenerationFailed`
    /// for an unsupported key size.
    pub fn create_private_with_bits(&mut self, name: &str, bits: usize) -> Result<()> {
        validate_name(name)?;
        self.ensure_vacant(Namespace::Private, name)?;

        let keypair = Keypair::generate(bits)?;
        let pem = keypair.export_private()?;
        self.write_key(Namespace::Private, name, pem.as_bytes())?;

        self.private.insert(name.to_string(), keypair);
        info!(name, bits, "private key created");
        Ok(())
    }

    /// Store encoded key bytes under `name` after checking that they parse.
    ///
    /// Imports never overwrite an existing key.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName`, `KeyError::InvalidKey` or
    /// `StoreError::AlreadyExists`; nothing is written on error.
    pub fn import_bytes(&mut self, namespace: Namespace, name: &str, bytes: &[u8]) -> Result<()> {
        validate_name(name)?;

        match namespace {
            Namespace::Private => {
                let keypair = Keypair::from_encoded(bytes)?;
                self.ensure_vacant(namespace, name)?;
                self.write_key(namespace, name, bytes)?;
                self.private.insert(name.to_string(), keypair);
            }
            Namespace::Public => {
                let key = PublicKeyHandle::from_encoded(bytes)?;
                self.ensure_vacant(namespace, name)?;
                self.write_key(namespace, name, bytes)?;
                self.public.insert(name.to_string(), key);
            }
        }

        info!(%namespace, name, "key imported");
        Ok(())
    }

    /// Import a key file. The key name defaults to the source file name.
    ///
    /// Returns the name the key was stored under.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the file cannot be read, otherwise
    /// as [`KeyStore::import_bytes`].
    pub fn import_file(
        &mut self,
        namespace: Namespace,
        name: Option<&str>,
        path: &Path,
    ) -> Result<String> {
        let name = match name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| -> Error {
                    ValidationError::InvalidName {
                        name: path.display().to_string(),
                        reason: "cannot derive a key name from this path".to_string(),
                    }
                    .into()
                })?,
        };

        debug!(path = %path.display(), name = %name, "importing key file");
        let bytes = zeroize::Zeroizing::new(fs::read(path).map_err(StoreError::ReadFailed)?);
        self.import_bytes(namespace, &name, &bytes)?;
        Ok(name)
    }

    /// Rename a key within its namespace.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `old` is absent,
    /// `ValidationError::InvalidName` if `new` is invalid, and
    /// `StoreError::AlreadyExists` if `new` is taken (including `new == old`).
    pub fn rename(&mut self, namespace: Namespace, old: &str, new: &str) -> Result<()> {
        if !self.contains(namespace, old) {
            return Err(not_found(namespace, old));
        }
        validate_name(new)?;
        self.ensure_vacant(namespace, new)?;

        fs::rename(
            self.layout.path(namespace, old),
            self.layout.path(namespace, new),
        )
        .map_err(StoreError::WriteFailed)?;

        match namespace {
            Namespace::Private => {
                if let Some(key) = self.private.remove(old) {
                    self.private.insert(new.to_string(), key);
                }
                if let Some(current) = self.current.as_mut() {
                    if current.source == old {
                        current.source = new.to_string();
                    }
                }
            }
            Namespace::Public => {
                if let Some(key) = self.public.remove(old) {
                    self.public.insert(new.to_string(), key);
                }
            }
        }

        info!(%namespace, old, new, "key renamed");
        Ok(())
    }

    /// Delete a key file and its entry. Irreversible.
    ///
    /// A file that has already disappeared from disk counts as deleted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the key is not loaded, or
    /// `StoreError::WriteFailed` if the file cannot be removed.
    pub fn delete(&mut self, namespace: Namespace, name: &str) -> Result<()> {
        if !self.contains(namespace, name) {
            return Err(not_found(namespace, name));
        }

        let path = self.layout.path(namespace, name);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "key file already gone");
            }
            Err(e) => return Err(StoreError::WriteFailed(e).into()),
        }

        match namespace {
            Namespace::Private => {
                self.private.remove(name);
                if self.current_source() == Some(name) {
                    self.current = None;
                }
            }
            Namespace::Public => {
                self.public.remove(name);
            }
        }

        info!(%namespace, name, "key deleted");
        Ok(())
    }

    fn ensure_vacant(&self, namespace: Namespace, name: &str) -> Result<()> {
        if self.contains(namespace, name) || occupied(&self.layout.path(namespace, name)) {
            return Err(collision(namespace, name));
        }
        Ok(())
    }

    fn write_key(&self, namespace: Namespace, name: &str, contents: &[u8]) -> Result<()> {
        let mode = match namespace {
            Namespace::Private => PRIVATE_KEY_MODE,
            Namespace::Public => PUBLIC_KEY_MODE,
        };
        let path = self.layout.path(namespace, name);

        write_new(self.layout.root(), &path, contents, mode).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                collision(namespace, name)
            } else {
                StoreError::WriteFailed(e).into()
            }
        })?;

        debug!(path = %path.display(), "key file written");
        Ok(())
    }
}

fn collision(namespace: Namespace, name: &str) -> Error {
    StoreError::AlreadyExists {
        namespace,
        name: name.to_string(),
    }
    .into()
}
