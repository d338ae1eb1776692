//
//  jira-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Jira Client
//!
//! This module provides the types shared by every API family: the unified
//! [`JiraError`] type, the crate-wide [`Result`] alias, and the pagination
//! helpers re-exported from the [`pagination`] submodule.
//!
//! # Example
//!
//! ```rust
//! use jira_client::api::common::JiraError;
//!
//! fn describe(result: Result<(), JiraError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(JiraError::Http { status: 404, .. }) => "not found".to_string(),
//!         Err(JiraError::Api { messages }) => messages.join(" / "),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

mod pagination;

pub use pagination::*;

/// Crate-wide result alias.
pub type Result<T, E = JiraError> = std::result::Result<T, E>;

/// Unified error type for all Jira client operations.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `Config` | Invalid or conflicting settings at construction |
/// | `Url` | The configured host cannot form a URL |
/// | `Network` | Connection failure or timeout in the reqwest transport |
/// | `Transport` | A custom [`Transport`](crate::api::Transport) reported a failure |
/// | `Http` | The server answered with a non-2xx status |
/// | `Api` | A 2xx response embedded an `errorMessages` list |
/// | `Json` | A request or response body could not be (de)serialized |
///
/// # Notes
///
/// - `Http` keeps the raw response body; use [`JiraError::detail`] to pull a
///   readable message out of it
/// - Nothing in the client retries; every error reaches the caller as-is
#[derive(Error, Debug)]
pub enum JiraError {
    /// Invalid or conflicting configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The scheme/host/port combination does not form a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A network-level error from the reqwest transport.
    ///
    /// Covers connection failures, DNS errors, TLS errors and timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A failure reported by a custom transport implementation.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server responded with a non-success status code.
    ///
    /// # Fields
    ///
    /// - `status` - The HTTP status code
    /// - `body` - The raw response body, untouched
    #[error("Request failed with status code {status}")]
    Http {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The server answered successfully but embedded error messages.
    ///
    /// Jira occasionally returns `200 OK` with a body such as
    /// `{"errorMessages": ["..."]}`. The messages are joined with `", "` for
    /// display.
    #[error("{}", .messages.join(", "))]
    Api {
        /// The embedded error messages, in server order.
        messages: Vec<String>,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JiraError {
    /// Returns the HTTP status code for [`JiraError::Http`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the server rejected the credentials (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Extracts a human-readable message from an HTTP error body.
    ///
    /// Jira returns errors in the format:
    /// ```json
    /// {"errorMessages": ["Issue does not exist"], "errors": {"summary": "required"}}
    /// ```
    ///
    /// Some endpoints (and proxies in front of Jira) return
    /// `{"message": "..."}` instead. If the body is not JSON, the trimmed body
    /// itself is returned.
    ///
    /// # Returns
    ///
    /// `None` for non-HTTP errors or an empty body.
    pub fn detail(&self) -> Option<String> {
        let Self::Http { body, .. } = self else {
            return None;
        };

        if let Ok(json) = serde_json::from_str::<Value>(body) {
            let mut parts = error_messages(&json).unwrap_or_default();

            if let Some(errors) = json.get("errors").and_then(Value::as_object) {
                parts.extend(
                    errors
                        .iter()
                        .map(|(field, message)| format!("{}: {}", field, display_value(message))),
                );
            }

            if parts.is_empty() {
                if let Some(message) = json.get("message").and_then(Value::as_str) {
                    parts.push(message.to_string());
                }
            }

            if !parts.is_empty() {
                return Some(parts.join(", "));
            }
        }

        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Returns the embedded `errorMessages` of a payload, if there are any.
///
/// Only a non-empty array counts. Non-string entries are rendered as JSON.
pub(crate) fn error_messages(payload: &Value) -> Option<Vec<String>> {
    let messages = payload.get("errorMessages")?.as_array()?;
    if messages.is_empty() {
        return None;
    }
    Some(messages.iter().map(display_value).collect())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
