// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for wcag-engine

use thiserror::Error;

/// Main error type for wcag-engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color format: \"{0}\" (expected 6-digit hex, e.g. #1A2B3C)")]
    InvalidColorFormat(String),

    #[error("Unknown WCAG level: \"{0}\" (expected A, AA or AAA)")]
    UnknownWcagLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
