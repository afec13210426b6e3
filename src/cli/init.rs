//! Init command.
//!
//! Creates the private and public key directories.

use std::path::Path;

use tracing::info;

use crate::cli::{output, resolve};
use crate::core::config::Config;
use crate::error::Result;

/// Initialize the key store.
pub fn execute(dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let layout = resolve::layout(&config, dir)?;

    if layout.is_initialized() {
        output::dimmed(&format!(
            "already initialized at {}",
            layout.root().display()
        ));
        return Ok(());
    }

    layout.ensure()?;
    info!(root = %layout.root().display(), "key store initialized");

    output::success(&format!("initialized {}", output::path(layout.root().display())));
    output::hint("create a key with: keybox new <name>");
    Ok(())
}
