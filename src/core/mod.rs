//! Core library components.
//!
//! This module contains the reusable logic for key management,
//! encryption, and configuration handling.

pub mod channel;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod domain;
pub mod store;
pub mod types;
pub mod validation;
