//! New command - generate a private key.

use std::path::Path;

use tracing::info;

use crate::cli::{output, resolve};
use crate::error::Result;

/// Generate and store a new private key.
pub fn execute(dir: Option<&Path>, name: &str, bits: Option<usize>) -> Result<()> {
    let (config, mut store) = resolve::open(dir)?;
    let bits = bits.unwrap_or(config.keybox.key_bits);

    info!(name, bits, "generating key");
    store.create_private_with_bits(name, bits)?;

    output::success(&format!("created {} ({} bits)", output::key(name), bits));
    output::hint(&format!("share the public key with: keybox pubkey {}", name));
    Ok(())
}
