//! Shared domain types.
//!
//! Provides semantic aliases and the namespace enum used throughout the store.

use std::fmt;

use serde::Serialize;

/// A key name. Equal to the key's file name inside its namespace directory.
pub type KeyName = String;

/// One of the two independent key collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Private,
    Public,
}

impl Namespace {
    /// Directory name under the keys root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Namespace::Private => crate::core::constants::PRIVATE_DIR,
            Namespace::Public => crate::core::constants::PUBLIC_DIR,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Private => f.write_str("private"),
            Namespace::Public => f.write_str("public"),
        }
    }
}
