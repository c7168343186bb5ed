//! Error types for the BizTone plugin.
//!
//! This module defines the centralized error type [`BizToneError`] and a type alias
//! [`Result`] used throughout the crate. Conversion and clipboard failures are
//! expected outcomes of the interaction loop and are normally carried as values
//! (see [`crate::domain::ConversionError`]); this type covers the cases where an
//! operation cannot proceed at all.

use crate::app::modes::UiState;
use thiserror::Error;

/// Reasons a convert request is rejected before anything is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The trimmed input was empty.
    #[error("no text to convert")]
    EmptyText,

    /// No conversion target is selected.
    #[error("no conversion target selected")]
    NoTarget,
}

/// The main error type for BizTone operations.
#[derive(Debug, Error)]
pub enum BizToneError {
    /// Input failed local validation and was never sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The conversion service could not be reached.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The conversion service answered with a non-success status.
    #[error("Service error: {0}")]
    Service(String),

    /// The conversion service answered with success but an unusable body.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No answer arrived before the configured deadline.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The clipboard program was missing or failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// The orchestrator was asked to move between states that are not connected.
    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// State before the attempted transition.
        from: UiState,
        /// Rejected target state.
        to: UiState,
    },

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for BizTone operations.
pub type Result<T> = std::result::Result<T, BizToneError>;
