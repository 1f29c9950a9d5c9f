//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`BookError`] covers every failure mode of a book
//! session:
//! - Asset loading and decoding errors (models and narration audio)
//! - Configuration errors (duplicate target indices, invalid scales)
//! - Tracking session failures (camera permission, anchor creation, start)
//!
//! None of these are retried. Any error raised while a book is starting up
//! aborts the remaining startup sequence.
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, BookError>`.

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum BookError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// A model or audio file could not be read or decoded.
    #[error("Failed to load asset '{path}': {reason}")]
    AssetLoad {
        /// Path of the asset as given to the loader
        path: String,
        /// Human readable cause
        reason: String,
    },

    // ========================================================================
    // Registration & Configuration Errors
    // ========================================================================
    /// The same image target index was registered twice.
    #[error("Target index {0} is already registered")]
    DuplicateTarget(u32),

    /// The book configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========================================================================
    // Tracking Errors
    // ========================================================================
    /// The tracking session could not be created or started.
    #[error("Tracking session error: {0}")]
    TrackingSession(String),

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BookError {
    /// Builds an [`BookError::AssetLoad`] from any displayable cause.
    pub fn asset_load(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        BookError::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Alias for `Result<T, BookError>`.
pub type Result<T> = std::result::Result<T, BookError>;
