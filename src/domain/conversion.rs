//! Conversion request, result, and error models.
//!
//! These are the values that cross the boundary to the remote conversion
//! service. The wire shapes are:
//!
//! ```text
//! request   POST { "text": "...", "target": "boss" }
//! success   2xx  { "converted_text": "...", ... }
//! failure   4xx/5xx { "error": "..." }   (body optional)
//! ```

use super::error::{BizToneError, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A conversion target offered to the user.
///
/// `value` is what the service receives; `label` is what the selector shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub value: String,
    pub label: String,
}

impl Target {
    /// Parses a configuration entry of the form `value` or `value:Label`.
    ///
    /// Returns `None` when the value part is blank.
    ///
    /// ```
    /// use biztone::domain::Target;
    ///
    /// let t = Target::parse("customer:External customer").unwrap();
    /// assert_eq!(t.value, "customer");
    /// assert_eq!(t.label, "External customer");
    ///
    /// let t = Target::parse("boss").unwrap();
    /// assert_eq!(t.label, "boss");
    /// ```
    #[must_use]
    pub fn parse(entry: &str) -> Option<Self> {
        let (value, label) = match entry.split_once(':') {
            Some((value, label)) => (value.trim(), label.trim()),
            None => (entry.trim(), entry.trim()),
        };

        if value.is_empty() {
            return None;
        }

        let label = if label.is_empty() { value } else { label };

        Some(Self {
            value: value.to_string(),
            label: label.to_string(),
        })
    }
}

/// Payload sent to the conversion service.
///
/// `text` is always trimmed and non-empty; construction enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    text: String,
    target: String,
}

impl ConversionRequest {
    /// Builds a request from raw input and the selected target.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyText`] when `text` is empty or
    /// whitespace-only, and [`ValidationError::NoTarget`] when no target is given.
    /// Text is checked first.
    pub fn new(text: &str, target: Option<&Target>) -> std::result::Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let target = target.ok_or(ValidationError::NoTarget)?;

        Ok(Self {
            text: text.to_string(),
            target: target.value.clone(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Successful conversion payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionResult {
    pub converted_text: String,
}

/// Body the service may attach to a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure category of a settled conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The request never produced a service response.
    Transport,
    /// The service answered with a non-success status.
    Service,
    /// The service answered with success but without `converted_text`.
    MalformedResponse,
    /// The local deadline passed before any answer.
    Timeout,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transport => "transport",
            Self::Service => "service",
            Self::MalformedResponse => "malformed response",
            Self::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// A failed conversion, ready to be shown to the user.
///
/// `message` is never empty: decoding substitutes a localized fallback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ConversionError {
    pub kind: ConversionErrorKind,
    pub message: String,
}

impl ConversionError {
    #[must_use]
    pub fn new(kind: ConversionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<ConversionError> for BizToneError {
    fn from(err: ConversionError) -> Self {
        match err.kind {
            ConversionErrorKind::Transport => Self::Transport(err.message),
            ConversionErrorKind::Service => Self::Service(err.message),
            ConversionErrorKind::MalformedResponse => Self::MalformedResponse(err.message),
            ConversionErrorKind::Timeout => Self::Timeout(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss() -> Target {
        Target {
            value: "boss".to_string(),
            label: "Boss".to_string(),
        }
    }

    #[test]
    fn parse_rejects_blank_values() {
        assert_eq!(Target::parse("   "), None);
        assert_eq!(Target::parse(":Label"), None);
    }

    #[test]
    fn parse_falls_back_to_value_for_blank_label() {
        let t = Target::parse("peer: ").unwrap();
        assert_eq!(t.label, "peer");
    }

    #[test]
    fn request_trims_text() {
        let req = ConversionRequest::new("  hello \n", Some(&boss())).unwrap();
        assert_eq!(req.text(), "hello");
        assert_eq!(req.target(), "boss");
    }

    #[test]
    fn request_rejects_whitespace_before_checking_target() {
        assert_eq!(
            ConversionRequest::new(" \t\n", None),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(
            ConversionRequest::new("hello", None),
            Err(ValidationError::NoTarget)
        );
    }

    #[test]
    fn request_serializes_to_wire_shape() {
        let req = ConversionRequest::new("안녕", Some(&boss())).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "안녕", "target": "boss" }));
    }

    #[test]
    fn result_ignores_extra_fields() {
        let body = r#"{"original_text":"a","converted_text":"b","target":"boss"}"#;
        let result: ConversionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.converted_text, "b");
    }

    #[test]
    fn conversion_error_maps_onto_crate_error() {
        let err = ConversionError::new(ConversionErrorKind::Service, "invalid target");
        assert_eq!(err.to_string(), "service: invalid target");
        let err: BizToneError = err.into();
        assert!(matches!(err, BizToneError::Service(ref m) if m == "invalid target"));
    }
}
