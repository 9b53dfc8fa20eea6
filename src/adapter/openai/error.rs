//! OpenAI API Errors
//!
//! APIエラーの表現とエラーチェーンの文字列化

use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the OpenAI REST API
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Failed to decode {operation} response: {detail}")]
    Decode { operation: String, detail: String },

    /// The response object itself reports a failure
    #[error("Response failed: {0}")]
    ResponseFailed(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build a status error from a response body
    ///
    /// Uses `error.message` when the body is the usual error envelope,
    /// otherwise the raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.trim().is_empty() => "(empty body)".to_string(),
            Err(_) => body.trim().to_string(),
        };

        Self::Status { status, message }
    }
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}
