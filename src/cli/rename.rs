//! Rename command - rename a key within its namespace.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::types::Namespace;
use crate::error::Result;

/// Rename a key.
pub fn execute(dir: Option<&Path>, namespace: Namespace, old: &str, new: &str) -> Result<()> {
    let mut store = resolve::store(dir)?;
    store.rename(namespace, old, new)?;
    output::success(&format!(
        "renamed {} key {} to {}",
        namespace,
        output::key(old),
        output::key(new)
    ));
    Ok(())
}
