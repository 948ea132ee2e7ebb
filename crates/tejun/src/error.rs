//! Error types for Tejun operations.
//!
//! This module provides the main error type [`TejunError`] which wraps the
//! failure conditions of the generation pipeline and its callers. Structural
//! problems in a generated model are never errors; they are reported through
//! [`tejun_core::validation::ValidationReport`] instead.

use std::io;

use thiserror::Error;

use crate::export::ExportError;

/// The main error type for Tejun operations.
#[derive(Debug, Error)]
pub enum TejunError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
