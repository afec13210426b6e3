//! Decrypt command.
//!
//! Decrypts base64 ciphertext from stdin or a file. With `--watch`, waits
//! for the file to receive new content first.

use std::path::Path;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::cli::{output, resolve, watch};
use crate::core::channel::{FileChannel, StdioChannel, TextChannel};
use crate::core::cipher::decrypt_from_transport;
use crate::error::{ChannelError, Result};

/// Decrypt a message with a private key.
pub fn execute(
    dir: Option<&Path>,
    key: &str,
    input: Option<&Path>,
    wait: bool,
    timeout: Option<u64>,
) -> Result<()> {
    let (config, store) = resolve::open(dir)?;
    let keypair = store.lookup_private(key)?;

    let ciphertext = match input {
        Some(path) if wait => {
            let secs = timeout.unwrap_or(config.watch.timeout_secs);
            let limit = (secs > 0).then_some(Duration::from_secs(secs));
            output::hint(&format!("waiting for {} to change", path.display()));
            watch::wait_for_change(&FileChannel::new(path), config.watch_interval(), limit)?
                .ok_or(ChannelError::Timeout(secs))?
        }
        Some(path) => FileChannel::new(path).read()?,
        None => StdioChannel.read()?,
    };

    if ciphertext.trim().is_empty() {
        return Err(ChannelError::Empty.into());
    }

    let plaintext = Zeroizing::new(decrypt_from_transport(&ciphertext, keypair)?);
    output::data(&plaintext);
    Ok(())
}
