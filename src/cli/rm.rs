//! Rm command - delete a key.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Confirm;

use crate::cli::{output, resolve};
use crate::core::types::Namespace;
use crate::error::{Result, StoreError};

/// Delete a key, asking first unless forced.
pub fn execute(dir: Option<&Path>, namespace: Namespace, name: &str, force: bool) -> Result<()> {
    let mut store = resolve::store(dir)?;

    if !store.contains(namespace, name) {
        return Err(StoreError::NotFound {
            namespace,
            name: name.to_string(),
        }
        .into());
    }

    if !force && !confirm(namespace, name)? {
        output::hint("cancelled");
        return Ok(());
    }

    store.delete(namespace, name)?;
    output::success(&format!("removed {} key {}", namespace, output::key(name)));
    Ok(())
}

/// Ask before deleting. Without a terminal there is nobody to ask.
fn confirm(namespace: Namespace, name: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        output::warn("no terminal to confirm on; pass --force to delete");
        return Ok(false);
    }

    Confirm::new()
        .with_prompt(format!("Delete {} key {}?", namespace, name))
        .default(false)
        .interact()
        .map_err(Into::into)
}
