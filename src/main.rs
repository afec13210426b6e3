//! Keybox - local RSA key store and copy/paste encryption.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keybox::cli::output;
use keybox::cli::{execute, Cli};
use keybox::error::{CipherError, Error, KeyError, StoreError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("KEYBOX_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keybox=debug")
        } else {
            EnvFilter::new("keybox=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.dir) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound { .. }) => Some("run: keybox list"),
            Error::Store(StoreError::AlreadyExists { .. }) => Some("choose another name"),
            Error::Key(KeyError::GenerationFailed(_)) => Some("try: keybox new <name> --bits 2048"),
            Error::Cipher(CipherError::DecryptionFailed) => {
                Some("check that the message was encrypted for this key")
            }
            Error::Cipher(CipherError::PlaintextTooLarge { .. }) => {
                Some("split the message into smaller parts")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
