//! Encrypt command.
//!
//! Encrypts a short message for a public key and prints it as base64.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Input;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::{output, resolve};
use crate::core::channel::{FileChannel, StdioChannel, TextChannel};
use crate::core::cipher::encrypt_to_transport;
use crate::error::{ChannelError, Result, ValidationError};

/// Who a message is encrypted for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// A key from the public namespace.
    Public(String),
    /// The public half of one of your own private keys.
    Me(String),
}

impl Recipient {
    /// Pick the recipient from `--to` / `--me`; `--to` wins when both are set.
    pub fn from_flags(to: Option<String>, me: Option<String>) -> Result<Self> {
        match (to, me) {
            (Some(name), _) => Ok(Self::Public(name)),
            (None, Some(name)) => Ok(Self::Me(name)),
            (None, None) => Err(ValidationError::InvalidName {
                name: String::new(),
                reason: "pass --to <PUBLIC_KEY> or --me <PRIVATE_KEY>".to_string(),
            }
            .into()),
        }
    }
}

/// Encrypt plaintext for a recipient.
pub fn execute(
    dir: Option<&Path>,
    recipient: Recipient,
    text: Option<String>,
    out: Option<&Path>,
) -> Result<()> {
    let mut store = resolve::store(dir)?;

    let plaintext = Zeroizing::new(match text {
        Some(text) => text,
        None => read_plaintext()?,
    });

    let ciphertext = match &recipient {
        Recipient::Public(name) => encrypt_to_transport(&plaintext, store.lookup_public(name)?)?,
        Recipient::Me(name) => encrypt_to_transport(&plaintext, store.select_private(name)?)?,
    };
    debug!(?recipient, "message encrypted");

    match out {
        Some(path) => {
            FileChannel::new(path).write(&ciphertext)?;
            output::success(&format!("encrypted to {}", output::path(path.display())));
        }
        None => StdioChannel.write(&ciphertext)?,
    }

    Ok(())
}

/// Plaintext from piped stdin, or an interactive prompt on a terminal.
fn read_plaintext() -> Result<String> {
    if io::stdin().is_terminal() {
        let text: String = Input::new().with_prompt("Message").interact_text()?;
        return Ok(text);
    }

    let mut text = StdioChannel.read()?;
    let trimmed = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(trimmed);
    if text.is_empty() {
        return Err(ChannelError::Empty.into());
    }
    Ok(text)
}
