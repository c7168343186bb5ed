//! Domain layer for the BizTone plugin.
//!
//! Core value types, independent of Zellij APIs and of the UI.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`conversion`]: Targets, requests, results, and conversion failures
//! - [`notification`]: Transient status messages
//! - [`messages`]: Localized user-facing strings
//!
//! # Examples
//!
//! ```
//! use biztone::domain::{ConversionRequest, Target, ValidationError};
//!
//! let target = Target::parse("customer").unwrap();
//! let request = ConversionRequest::new("  hello  ", Some(&target)).unwrap();
//! assert_eq!(request.text(), "hello");
//!
//! assert_eq!(
//!     ConversionRequest::new("   ", Some(&target)),
//!     Err(ValidationError::EmptyText)
//! );
//! ```

pub mod conversion;
pub mod error;
pub mod messages;
pub mod notification;

pub use conversion::{
    ConversionError, ConversionErrorKind, ConversionRequest, ConversionResult, ServiceErrorBody,
    Target,
};
pub use error::{BizToneError, Result, ValidationError};
pub use messages::Messages;
pub use notification::{Notification, NotificationKind};
