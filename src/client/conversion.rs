//! Wire encoding for the conversion service.
//!
//! [`encode_request`] turns a validated [`ConversionRequest`] into the pieces a
//! Zellij `web_request` needs; [`decode_response`] maps whatever comes back
//! (status plus raw body) onto a typed outcome. Decoding never fails: every
//! byte sequence becomes either a [`ConversionResult`] or a
//! [`ConversionError`] with a non-empty message.

use super::context::CallContext;
use super::trace::TraceContext;
use crate::domain::{
    ConversionError, ConversionErrorKind, ConversionRequest, ConversionResult, Messages, Result,
    ServiceErrorBody,
};
use std::collections::BTreeMap;

/// A fully encoded POST to the conversion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpCall {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    pub context: BTreeMap<String, String>,
}

/// Encodes `request` as a JSON POST to `endpoint`, tagged with `request_id`.
///
/// # Errors
///
/// Returns [`crate::BizToneError::Serialization`] if the body cannot be encoded.
pub fn encode_request(
    endpoint: &str,
    request_id: u64,
    request: &ConversionRequest,
) -> Result<HttpCall> {
    let body = serde_json::to_vec(request)?;

    let mut headers = BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ]);
    if let Some(trace) = TraceContext::from_current() {
        headers.insert("traceparent".to_string(), trace.to_traceparent());
    }

    tracing::debug!(
        request_id,
        url = %endpoint,
        body_len = body.len(),
        "encoded conversion request"
    );

    Ok(HttpCall {
        url: endpoint.to_string(),
        headers,
        body,
        context: CallContext::conversion(request_id).to_map(),
    })
}

/// Returns `true` for HTTP statuses in the success range.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Maps a settled web request onto a conversion outcome.
///
/// - 2xx with a string `converted_text`: success.
/// - 2xx otherwise: [`ConversionErrorKind::MalformedResponse`].
/// - non-2xx with a JSON body: [`ConversionErrorKind::Service`], carrying the
///   body's `error` string when present and non-blank.
/// - non-2xx with a non-JSON or empty body: [`ConversionErrorKind::Transport`].
///   Zellij reports requests that never reached a server this way.
pub fn decode_response(
    status: u16,
    body: &[u8],
    messages: &Messages,
) -> std::result::Result<ConversionResult, ConversionError> {
    if is_success(status) {
        return serde_json::from_slice::<ConversionResult>(body).map_err(|e| {
            tracing::debug!(status, error = %e, "success response without converted_text");
            ConversionError::new(
                ConversionErrorKind::MalformedResponse,
                messages.unknown_error.clone(),
            )
        });
    }

    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => {
            let service_message = serde_json::from_value::<ServiceErrorBody>(value)
                .ok()
                .and_then(|b| b.error)
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty());

            tracing::debug!(status, has_message = service_message.is_some(), "service rejected conversion");

            Err(ConversionError::new(
                ConversionErrorKind::Service,
                service_message.unwrap_or_else(|| messages.unknown_error.clone()),
            ))
        }
        Err(_) => {
            tracing::debug!(
                status,
                detail = %String::from_utf8_lossy(body),
                "conversion request did not reach the service"
            );
            Err(ConversionError::new(
                ConversionErrorKind::Transport,
                messages.network_failure.clone(),
            ))
        }
    }
}
