//
//  jira-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Jira API
//!
//! This module provides [`JiraClient`], the dispatcher behind every Jira
//! operation. It turns a [`RequestSpec`] into an [`HttpRequest`], sends it
//! through the configured [`Transport`], and unwraps the response.
//!
//! ## Features
//!
//! - One immutable configuration shared by all clones
//! - Authentication and `X-Atlassian-Token` header injection
//! - Detection of error lists embedded in successful responses
//! - Injectable transport for testing

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use super::models::Download;
use super::request::{assemble, RequestSpec};
use super::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use super::url::compose_url;
use crate::api::common::{error_messages, JiraError, Result};
use crate::config::ClientConfig;

/// Async client for the Jira REST APIs.
///
/// Cloning is cheap: clones share the configuration and the transport (and
/// with it the connection pool). The client holds no mutable state, so it can
/// be used from any number of tasks at once.
///
/// # Example
///
/// ```rust,no_run
/// use jira_client::{ClientConfig, JiraClient};
///
/// # async fn example() -> jira_client::Result<()> {
/// let config = ClientConfig::builder("jira.example.com")
///     .basic_auth("me@example.com", "api-token")
///     .build()?;
/// let client = JiraClient::new(config)?;
///
/// let issue = client.find_issue("PROJ-1", Default::default()).await?;
/// println!("{}", issue["fields"]["summary"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JiraClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JiraClient {
    /// Creates a client using the reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS settings cannot be applied.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client using a custom transport.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Creates a client using an already shared transport.
    pub fn with_shared_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the absolute URL a request would be sent to.
    pub fn make_url(&self, spec: &RequestSpec) -> String {
        compose_url(&self.config, spec)
    }

    /// Builds the request that would be sent, without sending it.
    pub fn make_request(&self, spec: RequestSpec) -> HttpRequest {
        assemble(&self.config, spec)
    }

    /// Sends a request and returns the raw response.
    ///
    /// The body is not inspected, which makes this the entry point for binary
    /// downloads.
    ///
    /// # Errors
    ///
    /// - [`JiraError::Http`] for a non-2xx status, carrying status and body
    /// - Whatever the transport reports when no response was received
    pub async fn do_raw_request(&self, spec: RequestSpec) -> Result<HttpResponse> {
        let request = self.make_request(spec);
        debug!(method = %request.method, url = %request.url, "Sending Jira request");

        let response = self.transport.execute(request).await?;
        trace!(status = response.status, bytes = response.body.len(), "Received Jira response");

        if !response.is_success() {
            return Err(JiraError::Http {
                status: response.status,
                body: response.text().into_owned(),
            });
        }
        Ok(response)
    }

    /// Sends a request and returns the decoded JSON payload.
    ///
    /// An empty body yields [`Value::Null`]; a body that is not JSON yields
    /// [`Value::String`] with its text.
    ///
    /// # Errors
    ///
    /// Everything [`do_raw_request`](Self::do_raw_request) reports, plus
    /// [`JiraError::Api`] when a successful response carries a non-empty
    /// `errorMessages` list.
    pub async fn do_request(&self, spec: RequestSpec) -> Result<Value> {
        let response = self.do_raw_request(spec).await?;
        let payload = decode_payload(&response);

        if let Some(messages) = error_messages(&payload) {
            debug!(count = messages.len(), "Jira response embedded error messages");
            return Err(JiraError::Api { messages });
        }
        Ok(payload)
    }

    /// Sends a request and deserializes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`do_request`](Self::do_request) reports, plus
    /// [`JiraError::Json`] when the payload does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let payload = self.do_request(spec).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Sends a request for binary content.
    pub(crate) async fn download(&self, spec: RequestSpec) -> Result<Download> {
        let response = self.do_raw_request(spec).await?;
        Ok(Download {
            content_type: response.content_type().map(str::to_string),
            bytes: response.body,
        })
    }
}

fn decode_payload(response: &HttpResponse) -> Value {
    let text = response.text();
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.into_owned()))
}
