//! Infrastructure utilities for the Zellij sandbox.
//!
//! - [`paths`]: Data directory and `~` expansion

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
