//! Pubkey command.
//!
//! Prints a public key PEM so it can be handed to someone else.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::domain::PublicKeyHandle;
use crate::error::Result;

/// Print the public key for a private key, or a stored public key.
pub fn execute(dir: Option<&Path>, name: &str, public: bool) -> Result<()> {
    let mut store = resolve::store(dir)?;

    let pem = if public {
        store.lookup_public(name)?.export()?
    } else {
        let key: &PublicKeyHandle = store.select_private(name)?;
        key.export()?
    };

    output::data(pem.trim_end());
    Ok(())
}
