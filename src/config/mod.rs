//
//  jira-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module holds the immutable [`ClientConfig`] every request is built
//! from, the [`ClientConfigBuilder`] that validates it, and (in [`file`]) the
//! TOML loader used by the `jira` binary.
//!
//! ## Overview
//!
//! A configuration is validated exactly once, when it is built. After that it
//! is shared read-only (behind an `Arc`) by every clone of the client, so no
//! request ever observes a half-updated setting.
//!
//! Validation covers:
//!
//! - **Host**: must form a valid URL authority together with the protocol and port
//! - **Authentication**: at most one mode; Basic and Bearer values must be non-empty
//!
//! ## Usage
//!
//! ```rust
//! use jira_client::config::{ClientConfig, Protocol};
//!
//! let config = ClientConfig::builder("jira.somehost.com")
//!     .protocol(Protocol::Http)
//!     .port(8080)
//!     .basic_auth("someusername", "somepassword")
//!     .build()?;
//!
//! assert_eq!(config.origin(), "http://jira.somehost.com:8080");
//! assert_eq!(config.api_version(), 2);
//! # Ok::<(), jira_client::JiraError>(())
//! ```
//!
//! ## Submodules
//!
//! - [`file`]: TOML configuration files and their default location

pub mod file;

pub use file::*;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::common::{JiraError, Result};
use crate::api::request::merge_header;
use crate::auth::AuthCredential;

/// URL scheme used to reach the Jira server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
}

impl Protocol {
    /// Returns the URL scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = JiraError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(JiraError::Config(format!(
                "unsupported protocol '{}', expected http or https",
                other
            ))),
        }
    }
}

/// Immutable, validated client configuration.
///
/// Built with [`ClientConfig::builder`] or loaded from TOML with
/// [`ClientConfig::from_toml_str`] / [`ClientConfig::load`]. There is no way
/// to change a value after construction.
///
/// # Defaults
///
/// | Setting | Default |
/// |---------|---------|
/// | protocol | `https` |
/// | port | scheme default |
/// | api_version | `2` |
/// | base_path | `""` |
/// | webhook_version | `"1.0"` |
/// | greenhopper_version | `"1.0"` |
/// | strict_ssl | `true` |
/// | timeout | none |
/// | default headers | none |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    protocol: Protocol,
    host: String,
    port: Option<u16>,
    origin: String,
    api_version: u8,
    base_path: String,
    intermediate_path: Option<String>,
    webhook_version: String,
    greenhopper_version: String,
    auth: AuthCredential,
    strict_ssl: bool,
    ca: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// Starts building a configuration for the given host.
    ///
    /// # Parameters
    ///
    /// * `host` - Host name or IP address, without scheme, port or path
    pub fn builder(host: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(host)
    }

    /// URL scheme.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Host name as configured.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if one was configured.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Scheme, host and (non-default) port, e.g. `https://jira.example.com`.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Core REST API version used in `/rest/api/{version}`.
    pub fn api_version(&self) -> u8 {
        self.api_version
    }

    /// Context path prepended to every request path, e.g. `/jira`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Instance-level intermediate path override.
    ///
    /// When set, it replaces the intermediate path of every API family and
    /// every per-call override.
    pub fn intermediate_path(&self) -> Option<&str> {
        self.intermediate_path.as_deref()
    }

    /// Webhooks API version used in `/rest/webhooks/{version}`.
    pub fn webhook_version(&self) -> &str {
        &self.webhook_version
    }

    /// GreenHopper API version used in `/rest/greenhopper/{version}`.
    pub fn greenhopper_version(&self) -> &str {
        &self.greenhopper_version
    }

    /// The authentication credential.
    pub fn auth(&self) -> &AuthCredential {
        &self.auth
    }

    /// Whether TLS certificates are verified.
    pub fn strict_ssl(&self) -> bool {
        self.strict_ssl
    }

    /// Additional PEM-encoded root certificate.
    pub fn ca(&self) -> Option<&str> {
        self.ca.as_deref()
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Extra headers sent with every request, e.g. proxy credentials.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Builder for [`ClientConfig`].
///
/// All checks run in [`build`](Self::build); setters never fail.
///
/// # Example
///
/// ```rust
/// use jira_client::config::ClientConfig;
///
/// let err = ClientConfig::builder("jira.example.com")
///     .basic_auth("me", "secret")
///     .bearer_auth("token")
///     .build()
///     .unwrap_err();
///
/// assert!(err.to_string().contains("only one authentication"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    protocol: Protocol,
    host: String,
    port: Option<u16>,
    api_version: u8,
    base_path: String,
    intermediate_path: Option<String>,
    webhook_version: String,
    greenhopper_version: String,
    credentials: Vec<AuthCredential>,
    strict_ssl: bool,
    ca: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl ClientConfigBuilder {
    fn new(host: impl Into<String>) -> Self {
        Self {
            protocol: Protocol::default(),
            host: host.into(),
            port: None,
            api_version: 2,
            base_path: String::new(),
            intermediate_path: None,
            webhook_version: "1.0".to_string(),
            greenhopper_version: "1.0".to_string(),
            credentials: Vec::new(),
            strict_ssl: true,
            ca: None,
            timeout: None,
            headers: Vec::new(),
        }
    }

    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn api_version(mut self, version: u8) -> Self {
        self.api_version = version;
        self
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Forces one intermediate path for every request, ignoring API families.
    pub fn intermediate_path(mut self, path: impl Into<String>) -> Self {
        self.intermediate_path = Some(path.into());
        self
    }

    pub fn webhook_version(mut self, version: impl Into<String>) -> Self {
        self.webhook_version = version.into();
        self
    }

    pub fn greenhopper_version(mut self, version: impl Into<String>) -> Self {
        self.greenhopper_version = version.into();
        self
    }

    /// Uses HTTP Basic authentication.
    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth(AuthCredential::basic(username, password))
    }

    /// Uses bearer token authentication.
    pub fn bearer_auth(self, token: impl Into<String>) -> Self {
        self.auth(AuthCredential::bearer(token))
    }

    /// Sets the credential directly. [`AuthCredential::None`] is a no-op.
    pub fn auth(mut self, credential: AuthCredential) -> Self {
        if credential.is_authenticated() {
            self.credentials.push(credential);
        }
        self
    }

    /// Disables certificate verification when `false`.
    pub fn strict_ssl(mut self, strict: bool) -> Self {
        self.strict_ssl = strict;
        self
    }

    /// Trusts an additional PEM-encoded root certificate.
    pub fn ca(mut self, pem: impl Into<String>) -> Self {
        self.ca = Some(pem.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header to every request.
    ///
    /// These sit between the built-in headers and per-call headers: they
    /// replace `X-Atlassian-Token` or `Authorization`, and a request's own
    /// header of the same name replaces them. Names match case-insensitively.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        merge_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Validates the settings and produces the configuration.
    ///
    /// # Errors
    ///
    /// - [`JiraError::Config`] if the host is empty or carries a path, port,
    ///   query or credentials of its own
    /// - [`JiraError::Config`] if more than one authentication mode was set,
    ///   or the chosen one has empty values
    /// - [`JiraError::Url`] if the host cannot be parsed at all
    pub fn build(self) -> Result<ClientConfig> {
        let origin = resolve_origin(self.protocol, &self.host, self.port)?;

        let mut credentials = self.credentials;
        if credentials.len() > 1 {
            return Err(JiraError::Config(
                "only one authentication mode may be configured".to_string(),
            ));
        }
        let auth = credentials.pop().unwrap_or_default();
        auth.validate()?;

        if self.headers.iter().any(|(name, _)| name.trim().is_empty()) {
            return Err(JiraError::Config("header names must not be empty".to_string()));
        }

        Ok(ClientConfig {
            protocol: self.protocol,
            host: self.host,
            port: self.port,
            origin,
            api_version: self.api_version,
            base_path: self.base_path,
            intermediate_path: self.intermediate_path,
            webhook_version: self.webhook_version,
            greenhopper_version: self.greenhopper_version,
            auth,
            strict_ssl: self.strict_ssl,
            ca: self.ca,
            timeout: self.timeout,
            headers: self.headers,
        })
    }
}

fn resolve_origin(protocol: Protocol, host: &str, port: Option<u16>) -> Result<String> {
    if host.trim().is_empty() {
        return Err(JiraError::Config("a host is required".to_string()));
    }

    let mut url = Url::parse(&format!("{}://{}", protocol, host))?;
    let bare = url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && url.port().is_none();
    if !bare {
        return Err(JiraError::Config(format!(
            "host '{}' must be a bare host name; use port and base_path for the rest",
            host
        )));
    }

    if port.is_some() {
        url.set_port(port)
            .map_err(|()| JiraError::Config(format!("host '{}' cannot carry a port", host)))?;
    }

    Ok(url.origin().ascii_serialization())
}
