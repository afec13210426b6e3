//! Command-line interface.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod import;
pub mod init;
pub mod list;
pub mod new;
pub mod output;
pub mod pubkey;
pub mod rename;
pub mod resolve;
pub mod rm;
pub mod watch;

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::core::types::Namespace;

/// Keybox - local RSA keys and copy/paste encryption.
#[derive(Parser)]
#[command(
    name = "keybox",
    about = "Local RSA key store and copy/paste encryption",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Key store root (overrides keys_dir in .keybox.toml)
    #[arg(long, global = true, env = "KEYBOX_DIR", value_name = "KEYS_DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the key directories
    Init,

    /// List private and public keys
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a new private key
    New {
        /// Key name
        name: String,
        /// Modulus size in bits (defaults to key_bits in .keybox.toml)
        #[arg(short, long)]
        bits: Option<usize>,
    },

    /// Import a PEM key from a file or stdin
    Import {
        /// Namespace to import into
        #[arg(value_enum)]
        scope: Scope,
        /// Key name (defaults to the file name)
        #[arg(short, long, required_unless_present = "file")]
        name: Option<String>,
        /// PEM file to import; stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Rename a key
    Rename {
        #[arg(value_enum)]
        scope: Scope,
        /// Current name
        old: String,
        /// New name
        new: String,
    },

    /// Delete a key
    Rm {
        #[arg(value_enum)]
        scope: Scope,
        /// Key name
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the public key PEM for a key
    Pubkey {
        /// Key name
        name: String,
        /// Read from the public namespace instead of deriving from a private key
        #[arg(long)]
        public: bool,
    },

    /// Encrypt text to base64
    #[command(group(ArgGroup::new("recipient").required(true).args(["to", "me"])))]
    Encrypt {
        /// Encrypt for a stored public key
        #[arg(long, value_name = "PUBLIC_KEY")]
        to: Option<String>,
        /// Encrypt for yourself with the public half of a private key
        #[arg(long, value_name = "PRIVATE_KEY")]
        me: Option<String>,
        /// Plaintext; read from stdin or prompted when omitted
        text: Option<String>,
        /// Write the ciphertext to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Decrypt base64 text
    Decrypt {
        /// Private key to decrypt with
        #[arg(short, long)]
        key: String,
        /// Read the ciphertext from a file instead of stdin
        #[arg(long = "in", value_name = "FILE")]
        input: Option<PathBuf>,
        /// Wait for the file to change before decrypting
        #[arg(short, long, requires = "input")]
        watch: bool,
        /// Give up waiting after this many seconds
        #[arg(long, requires = "watch")]
        timeout: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Key namespace as named on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Private,
    Public,
}

impl From<Scope> for Namespace {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Private => Namespace::Private,
            Scope::Public => Namespace::Public,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, dir: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let dir = dir.as_deref();
    match command {
        Init => init::execute(dir),
        List { json } => list::execute(dir, json),
        New { name, bits } => new::execute(dir, &name, bits),
        Import { scope, name, file } => {
            import::execute(dir, scope.into(), name.as_deref(), file.as_deref())
        }
        Rename { scope, old, new } => rename::execute(dir, scope.into(), &old, &new),
        Rm { scope, name, force } => rm::execute(dir, scope.into(), &name, force),
        Pubkey { name, public } => pubkey::execute(dir, &name, public),
        Encrypt { to, me, text, out } => {
            let recipient = encrypt::Recipient::from_flags(to, me)?;
            encrypt::execute(dir, recipient, text, out.as_deref())
        }
        Decrypt {
            key,
            input,
            watch,
            timeout,
        } => decrypt::execute(dir, &key, input.as_deref(), watch, timeout),
        Completions { shell } => completions::execute(shell),
    }
}
