//! Scan diagnostics.
//!
//! A key file that cannot be loaded is skipped, not fatal. Each skip is
//! recorded as a timestamped [`Diagnostic`] and handed to a [`DiagnosticSink`].

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;

use crate::core::types::Namespace;

/// A key file skipped during a store scan.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    pub namespace: Namespace,
    pub path: PathBuf,
    pub reason: String,
}

impl Diagnostic {
    pub fn new(namespace: Namespace, path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            namespace,
            path,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} skipped {} key {}: {}",
            self.at.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.namespace,
            self.path.display(),
            self.reason
        )
    }
}

/// Receiver for scan diagnostics.
pub trait DiagnosticSink {
    fn log(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, diagnostic: &Diagnostic) {
        warn!(
            namespace = %diagnostic.namespace,
            path = %diagnostic.path.display(),
            reason = %diagnostic.reason,
            "skipped bad key file"
        );
    }
}

impl DiagnosticSink for RefCell<Vec<Diagnostic>> {
    fn log(&self, diagnostic: &Diagnostic) {
        self.borrow_mut().push(diagnostic.clone());
    }
}

impl DiagnosticSink for Mutex<Vec<Diagnostic>> {
    fn log(&self, diagnostic: &Diagnostic) {
        self.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn log(&self, diagnostic: &Diagnostic) {
        (**self).log(diagnostic)
    }
}
