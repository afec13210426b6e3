//! Plain-text channels.
//!
//! Ciphertext and plaintext enter and leave the core through a text buffer
//! (the clipboard, in a desktop front-end). The core only ever sees the
//! [`TextChannel`] contract; concrete channels live here for the CLI and tests.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{ChannelError, Result};

/// A readable and writable plain-text buffer.
pub trait TextChannel {
    /// Current contents of the channel.
    fn read(&self) -> Result<String>;

    /// Replace the contents of the channel.
    fn write(&self, text: &str) -> Result<()>;
}

/// A file used as a copy/paste buffer.
///
/// A missing file reads as empty. Writes replace the file atomically so a
/// concurrent reader never sees half a message.
#[derive(Debug, Clone)]
pub struct FileChannel {
    path: PathBuf,
}

impl FileChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextChannel for FileChannel {
    fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(ChannelError::Read(e).into()),
        }
    }

    fn write(&self, text: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(ChannelError::Write)?;
        tmp.write_all(text.as_bytes()).map_err(ChannelError::Write)?;
        tmp.persist(&self.path)
            .map_err(|e| ChannelError::Write(e.error))?;

        debug!(path = %self.path.display(), len = text.len(), "channel written");
        Ok(())
    }
}

/// Standard input and output.
///
/// Reading consumes all of stdin; writing prints one line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioChannel;

impl TextChannel for StdioChannel {
    fn read(&self) -> Result<String> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(ChannelError::Read)?;
        Ok(text)
    }

    fn write(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text).map_err(ChannelError::Write)?;
        stdout.flush().map_err(ChannelError::Write)?;
        Ok(())
    }
}

/// In-process buffer.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    buffer: RefCell<String>,
}

impl MemoryChannel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: RefCell::new(text.into()),
        }
    }
}

impl TextChannel for MemoryChannel {
    fn read(&self) -> Result<String> {
        Ok(self.buffer.borrow().clone())
    }

    fn write(&self, text: &str) -> Result<()> {
        *self.buffer.borrow_mut() = text.to_string();
        Ok(())
    }
}
