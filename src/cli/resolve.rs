//! Key store resolution helpers for CLI commands.

use std::path::Path;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::diagnostics::{Diagnostic, DiagnosticSink};
use crate::core::store::{KeyStore, Layout};
use crate::error::Result;

/// Sink that reports skipped key files as CLI warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct WarnSink;

impl DiagnosticSink for WarnSink {
    fn log(&self, diagnostic: &Diagnostic) {
        output::warn(&format!(
            "skipped {} key {}: {}",
            diagnostic.namespace,
            output::path(diagnostic.path.display()),
            diagnostic.reason
        ));
    }
}

/// Resolve the key directory layout.
///
/// Rules:
/// - `--dir` / `KEYBOX_DIR` wins when given
/// - otherwise `keys_dir` from `.keybox.toml`
/// - otherwise `keys` in the current directory
pub fn layout(config: &Config, dir: Option<&Path>) -> Result<Layout> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => config.keys_dir()?,
    };
    Ok(Layout::new(root))
}

/// Load the config and open the key store, creating directories as needed.
pub fn open(dir: Option<&Path>) -> Result<(Config, KeyStore)> {
    let config = Config::load()?;
    let store = KeyStore::open(layout(&config, dir)?, &WarnSink)?;
    Ok((config, store))
}

/// Open the key store with the default config.
pub fn store(dir: Option<&Path>) -> Result<KeyStore> {
    open(dir).map(|(_, store)| store)
}
