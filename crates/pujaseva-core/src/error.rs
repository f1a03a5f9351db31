// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pujaseva.

use thiserror::Error;

/// Top-level error type for all Pujaseva operations.
#[derive(Debug, Error)]
pub enum PujasevaError {
    // -- Page structure --
    #[error("page element missing: {0}")]
    MissingElement(&'static str),

    // -- Request form --
    #[error("required request fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    // -- Deep-links --
    #[error("invalid messaging link: {0}")]
    InvalidLink(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PujasevaError>;
