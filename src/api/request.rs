//
//  jira-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request descriptions and header assembly.
//!
//! A [`RequestSpec`] describes one call in domain terms: which API family,
//! which path, which query, which body. [`assemble`] merges it with the
//! client-wide defaults into the [`HttpRequest`] handed to the transport.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::transport::HttpRequest;
use super::url::{compose_url, ApiFamily, Query};
use crate::api::common::Result;
use crate::config::ClientConfig;

/// Header Jira requires on state-changing requests to skip XSRF checks.
pub const ATLASSIAN_TOKEN_HEADER: &str = "X-Atlassian-Token";

/// A file sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Form field name.
    pub field: String,
    /// File name reported to the server.
    pub filename: String,
    /// MIME type of the content.
    pub content_type: String,
    /// File content.
    pub bytes: Vec<u8>,
}

/// Request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// A JSON document.
    Json(Value),
    /// A single-file multipart form.
    Multipart(MultipartFile),
}

/// Everything needed to build one request, in domain terms.
///
/// Defaults: `GET`, no query, no body, no extra headers, family intermediate
/// path, path decoding (not encoding).
///
/// # Example
///
/// ```rust
/// use jira_client::api::{ApiFamily, Query, RequestSpec};
/// use reqwest::Method;
///
/// let spec = RequestSpec::new(ApiFamily::Agile, "/board/7/backlog")
///     .method(Method::GET)
///     .query(Query::new().with("startAt", 0).with("maxResults", 50));
///
/// assert_eq!(spec.path, "/board/7/backlog");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub family: ApiFamily,
    pub path: String,
    pub query: Query,
    /// Per-call intermediate path, used unless the config sets one.
    pub intermediate_path: Option<String>,
    pub method: Method,
    pub body: Body,
    /// Extra headers; each replaces a default header of the same name.
    pub headers: Vec<(String, String)>,
    /// Percent-encode the path instead of decoding it.
    pub encode: bool,
}

impl RequestSpec {
    pub fn new(family: ApiFamily, path: impl Into<String>) -> Self {
        Self {
            family,
            path: path.into(),
            query: Query::new(),
            intermediate_path: None,
            method: Method::GET,
            body: Body::Empty,
            headers: Vec::new(),
            encode: false,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Replaces the query.
    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn intermediate_path(mut self, path: impl Into<String>) -> Self {
        self.intermediate_path = Some(path.into());
        self
    }

    /// Adds or replaces a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        merge_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Sets a JSON body from an already-built value.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Body::Json(body);
        self
    }

    /// Serializes `body` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Json`](crate::JiraError::Json) if serialization fails.
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.json_value(serde_json::to_value(body)?))
    }

    pub fn multipart(mut self, file: MultipartFile) -> Self {
        self.body = Body::Multipart(file);
        self
    }

    /// Percent-encodes the path (for raw file names).
    pub fn encoded(mut self) -> Self {
        self.encode = true;
        self
    }
}

/// Merges client defaults and a request description into a transport request.
///
/// Headers, in increasing precedence:
///
/// 1. `X-Atlassian-Token: no-check`
/// 2. `Authorization`, when the config carries a credential
/// 3. the config's default headers
/// 4. `Content-Type: application/json` for JSON bodies
/// 5. the headers of `spec`
///
/// Names are compared case-insensitively, so a later header replaces an
/// earlier one of the same name and leaves the rest alone.
pub fn assemble(config: &ClientConfig, spec: RequestSpec) -> HttpRequest {
    let url = compose_url(config, &spec);

    let mut headers = vec![(ATLASSIAN_TOKEN_HEADER.to_string(), "no-check".to_string())];
    if let Some(value) = config.auth().header_value() {
        headers.push(("Authorization".to_string(), value));
    }
    for (name, value) in config.default_headers() {
        merge_header(&mut headers, name.clone(), value.clone());
    }
    if matches!(spec.body, Body::Json(_)) {
        headers.push(("Content-Type".to_string(), "application/json".to_string()));
    }
    for (name, value) in spec.headers {
        merge_header(&mut headers, name, value);
    }

    HttpRequest {
        method: spec.method,
        url,
        headers,
        body: spec.body,
        timeout: config.timeout(),
    }
}

pub(crate) fn merge_header(headers: &mut Vec<(String, String)>, name: String, value: String) {
    match headers
        .iter_mut()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
    {
        Some(entry) => entry.1 = value,
        None => headers.push((name, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Protocol;
    use serde_json::json;
    use std::time::Duration;

    fn config() -> ClientConfig {
        ClientConfig::builder("jira.somehost.com")
            .protocol(Protocol::Http)
            .port(8080)
            .basic_auth("someusername", "somepassword")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let request = assemble(&config(), RequestSpec::new(ApiFamily::Api, "/somePathName"));

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "http://jira.somehost.com:8080/rest/api/2/somePathName");
        assert_eq!(request.header("x-atlassian-token"), Some("no-check"));
        assert_eq!(
            request.header("Authorization"),
            Some("Basic c29tZXVzZXJuYW1lOnNvbWVwYXNzd29yZA==")
        );
        assert_eq!(request.header("Content-Type"), None);
        assert_eq!(request.body, Body::Empty);
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_bearer_header() {
        let config = ClientConfig::builder("jira.somehost.com")
            .bearer_auth("testBearer")
            .build()
            .unwrap();
        let request = assemble(&config, RequestSpec::new(ApiFamily::Api, "/x"));
        assert_eq!(request.header("authorization"), Some("Bearer testBearer"));
    }

    #[test]
    fn test_no_auth_header_without_credentials() {
        let config = ClientConfig::builder("jira.somehost.com").build().unwrap();
        let request = assemble(&config, RequestSpec::new(ApiFamily::Api, "/x"));
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.headers.len(), 1);
    }

    #[test]
    fn test_caller_overrides_win() {
        let spec = RequestSpec::new(ApiFamily::Api, "/x")
            .method(Method::POST)
            .json_value(json!({"a": 1}))
            .header("x-atlassian-token", "nocheck")
            .header("content-type", "application/vnd.custom+json");
        let request = assemble(&config(), spec);

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Body::Json(json!({"a": 1})));
        assert_eq!(request.header("X-Atlassian-Token"), Some("nocheck"));
        assert_eq!(request.header("Content-Type"), Some("application/vnd.custom+json"));
        assert!(request.header("Authorization").is_some());
        assert_eq!(request.headers.len(), 3);
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let spec = RequestSpec::new(ApiFamily::Api, "/x")
            .json(&json!({"fields": {}}))
            .unwrap();
        let request = assemble(&config(), spec);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_default_headers_sit_between_builtins_and_spec() {
        let config = ClientConfig::builder("jira.somehost.com")
            .basic_auth("someusername", "somepassword")
            .default_header("Cookie", "JSESSIONID=abc")
            .default_header("authorization", "Negotiate xyz")
            .default_header("X-Proxy", "one")
            .build()
            .unwrap();
        let spec = RequestSpec::new(ApiFamily::Api, "/x").header("x-proxy", "two");
        let request = assemble(&config, spec);

        assert_eq!(request.header("X-Atlassian-Token"), Some("no-check"));
        assert_eq!(request.header("Authorization"), Some("Negotiate xyz"));
        assert_eq!(request.header("Cookie"), Some("JSESSIONID=abc"));
        assert_eq!(request.header("X-Proxy"), Some("two"));
        assert_eq!(request.headers.len(), 4);
    }

    #[test]
    fn test_spec_header_replaces_earlier_spec_header() {
        let spec = RequestSpec::new(ApiFamily::Api, "/x")
            .header("X-Trace", "1")
            .header("x-trace", "2");
        assert_eq!(spec.headers, vec![("X-Trace".to_string(), "2".to_string())]);
    }
}
