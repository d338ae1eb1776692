//
//  jira-client
//  api/url.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! URL composition for every Jira request.
//!
//! A request URL is assembled from four parts:
//!
//! ```text
//! {origin}{base_path}{intermediate_path}{path}?{query}
//! https://jira.example.com/jira/rest/api/2/issue/KEY-1?fields=*all
//! ```
//!
//! The intermediate path depends on the [`ApiFamily`] of the endpoint, unless a
//! per-call or instance-level override replaces it. The instance-level override
//! wins over everything.

use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::request::RequestSpec;
use crate::config::ClientConfig;

/// Characters left as-is by `encodeURI`-style path encoding.
const URI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// The REST API an endpoint belongs to.
///
/// Each family has its own default intermediate path:
///
/// | Family | Intermediate path |
/// |--------|-------------------|
/// | `Api` | `/rest/api/{api_version}` |
/// | `Webhook` | `/rest/webhooks/{webhook_version}` |
/// | `DevStatus` | `/rest/dev-status/latest/issue` |
/// | `Agile` | `/rest/agile/1.0` |
/// | `GreenHopper` | `/rest/greenhopper/{greenhopper_version}` |
/// | `Secure` | `/secure` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// The core REST API.
    Api,
    /// The webhooks registration API.
    Webhook,
    /// The development information API.
    DevStatus,
    /// The Jira Software (Agile) API.
    Agile,
    /// The legacy GreenHopper API.
    GreenHopper,
    /// Browser-facing download endpoints (attachments and avatars).
    Secure,
}

impl ApiFamily {
    /// Returns the default intermediate path of this family.
    pub fn intermediate_path(self, config: &ClientConfig) -> String {
        match self {
            Self::Api => format!("/rest/api/{}", config.api_version()),
            Self::Webhook => format!("/rest/webhooks/{}", config.webhook_version()),
            Self::DevStatus => "/rest/dev-status/latest/issue".to_string(),
            Self::Agile => "/rest/agile/1.0".to_string(),
            Self::GreenHopper => format!("/rest/greenhopper/{}", config.greenhopper_version()),
            Self::Secure => "/secure".to_string(),
        }
    }
}

/// A value that can appear in a query string.
///
/// Implemented for strings, booleans and integers.
pub trait QueryValue {
    /// Renders the value as it appears before form encoding.
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

macro_rules! impl_query_value_for_integers {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_query_value_for_integers!(u8, u16, u32, u64, usize, i32, i64);

/// Ordered query parameters.
///
/// Parameters are emitted in insertion order. `None` values passed to
/// [`with_opt`](Self::with_opt) are skipped entirely.
///
/// # Example
///
/// ```rust
/// use jira_client::api::Query;
///
/// let query = Query::new()
///     .with("startAt", 0)
///     .with_opt("state", None::<&str>)
///     .with_list("fields", &["summary", "status"]);
///
/// assert_eq!(query.encode().as_deref(), Some("startAt=0&fields=summary%2Cstatus"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl QueryValue) -> Self {
        self.pairs.push((key.into(), value.to_query_value()));
        self
    }

    /// Appends a parameter only when a value is present.
    pub fn with_opt<V: QueryValue>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Appends a comma-joined list, skipping it when the list is empty.
    pub fn with_list<S: AsRef<str>>(self, key: impl Into<String>, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.with(key, joined)
    }

    /// Appends every parameter of another query.
    pub fn extend(mut self, other: Query) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Form-encodes the parameters, or `None` when there are none.
    pub fn encode(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }
}

impl<K: Into<String>, V: QueryValue> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (key, value)| query.with(key, value))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode().unwrap_or_default())
    }
}

/// Resolves the intermediate path for a request.
///
/// Precedence: instance-level override, then per-call override, then the
/// family default.
pub fn resolve_intermediate_path(
    config: &ClientConfig,
    family: ApiFamily,
    per_call: Option<&str>,
) -> String {
    config
        .intermediate_path()
        .or(per_call)
        .map(str::to_string)
        .unwrap_or_else(|| family.intermediate_path(config))
}

/// Builds the absolute URL for a request.
///
/// With `spec.encode` set, the path is percent-encoded like `encodeURI`, so raw
/// attachment file names survive. Otherwise percent sequences already present
/// in the path are decoded, unless they are not valid UTF-8. The query string
/// is not affected by either.
pub fn compose_url(config: &ClientConfig, spec: &RequestSpec) -> String {
    let intermediate =
        resolve_intermediate_path(config, spec.family, spec.intermediate_path.as_deref());
    let raw_path = format!("{}{}{}", config.base_path(), intermediate, spec.path);

    let path = if spec.encode {
        utf8_percent_encode(&raw_path, URI_PATH).to_string()
    } else {
        decode_path(raw_path)
    };

    let mut url = String::with_capacity(config.origin().len() + path.len() + 1);
    url.push_str(config.origin());
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(&path);

    if let Some(query) = spec.query.encode() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Decodes percent sequences, keeping the path as given when they do not
/// form valid UTF-8.
fn decode_path(raw_path: String) -> String {
    match percent_decode_str(&raw_path).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw_path,
    }
}
