//
//  jira-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The seam between the client and the network. The client only ever talks to
//! a [`Transport`]: it hands over a fully assembled [`HttpRequest`] and gets an
//! [`HttpResponse`] back, whatever its status.
//!
//! [`ReqwestTransport`] is the production implementation. Tests swap in a fake
//! that records requests and returns canned responses.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use jira_client::api::{HttpRequest, HttpResponse, Transport};
//! use jira_client::Result;
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl Transport for Canned {
//!     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
//!         Ok(HttpResponse::new(200, br#"{"ok":true}"#.to_vec()))
//!     }
//! }
//! ```

use std::borrow::Cow;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Certificate, Client, Method};

use super::request::Body;
use crate::api::common::Result;
use crate::config::ClientConfig;

/// A fully assembled HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Headers in the order they will be sent.
    pub headers: Vec<(String, String)>,
    pub body: Body,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response without headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Value of the `Content-Type` header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Executes HTTP requests.
///
/// Implementations return every response they receive, including non-2xx
/// ones; status handling belongs to the client. An `Err` means no response
/// was received at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport honoring the TLS settings of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Network`](crate::JiraError::Network) if the CA
    /// certificate is not valid PEM or the TLS backend fails to initialize.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(format!("jira-client/{}", crate::VERSION))
            .danger_accept_invalid_certs(!config.strict_ssl());

        if let Some(pem) = config.ca() {
            builder = builder.add_root_certificate(Certificate::from_pem(pem.as_bytes())?);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Wraps an existing reqwest client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.http.request(request.method, &request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.body(serde_json::to_vec(&value)?),
            Body::Multipart(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.filename)
                    .mime_str(&file.content_type)?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_helpers() {
        let response = HttpResponse::new(201, "hello").with_header("Content-Type", "text/plain");
        assert!(response.is_success());
        assert_eq!(response.content_type(), Some("text/plain"));
        assert_eq!(response.text(), "hello");

        assert!(!HttpResponse::new(404, Vec::new()).is_success());
        assert!(!HttpResponse::new(199, Vec::new()).is_success());
    }

    #[test]
    fn test_transport_builds_from_config() {
        let config = ClientConfig::builder("jira.example.com")
            .strict_ssl(false)
            .build()
            .unwrap();
        assert!(ReqwestTransport::new(&config).is_ok());
    }
}
