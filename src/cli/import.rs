//! Import command.
//!
//! Imports a PEM key from a file, or from stdin when no file is given.

use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::{output, resolve};
use crate::core::channel::{StdioChannel, TextChannel};
use crate::core::types::Namespace;
use crate::error::{Result, ValidationError};

/// Import a key into a namespace.
pub fn execute(
    dir: Option<&Path>,
    namespace: Namespace,
    name: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let mut store = resolve::store(dir)?;

    let name = match (file, name) {
        (Some(path), name) => store.import_file(namespace, name, path)?,
        (None, Some(name)) => {
            let pem = Zeroizing::new(StdioChannel.read()?);
            store.import_bytes(namespace, name, pem.as_bytes())?;
            name.to_string()
        }
        (None, None) => {
            return Err(ValidationError::InvalidName {
                name: String::new(),
                reason: "--name is required when importing from stdin".to_string(),
            }
            .into())
        }
    };

    output::success(&format!("imported {} key {}", namespace, output::key(&name)));
    Ok(())
}
