//
//  jira-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Jira accepts three authentication modes from this client:
//!
//! - **None**: anonymous access, no `Authorization` header
//! - **Basic**: username and password (Jira Cloud: email and API token)
//! - **Bearer**: a personal access token (Jira Server/Data Center) or OAuth token
//!
//! The mode is chosen once when the [`ClientConfig`](crate::config::ClientConfig)
//! is built and is never re-derived per request.
//!
//! ## Example
//!
//! ```rust
//! use jira_client::auth::AuthCredential;
//!
//! let credential = AuthCredential::basic("someusername", "somepassword");
//! assert_eq!(
//!     credential.header_value().as_deref(),
//!     Some("Basic c29tZXVzZXJuYW1lOnNvbWVwYXNzd29yZA==")
//! );
//! ```

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::api::common::{JiraError, Result};

/// Authentication credentials attached to every request.
///
/// # Variants
///
/// - `None`: no authentication
/// - `Basic`: HTTP Basic authentication
/// - `Bearer`: bearer token authentication
///
/// In TOML configuration files the variant is selected with a `type` key:
///
/// ```toml
/// [auth]
/// type = "bearer"
/// token = "NjM0NTY3ODkw..."
/// ```
///
/// # Notes
///
/// - `Debug` output redacts passwords and tokens
/// - Use [`validate`](Self::validate) before use; the config builder does this
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthCredential {
    /// Anonymous access.
    #[default]
    None,
    /// HTTP Basic authentication.
    Basic {
        /// The Jira username (Cloud: account email).
        username: String,
        /// The password (Cloud: API token).
        password: String,
    },
    /// Bearer token authentication.
    Bearer {
        /// The personal access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates a Basic credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a Bearer credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Checks the credential invariants.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Config`] if a Basic credential has an empty
    /// username or password, or a Bearer credential has an empty token.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::None => Ok(()),
            Self::Basic { username, password } => {
                if username.is_empty() || password.is_empty() {
                    return Err(JiraError::Config(
                        "basic authentication requires both a username and a password".to_string(),
                    ));
                }
                Ok(())
            }
            Self::Bearer { token } => {
                if token.is_empty() {
                    return Err(JiraError::Config(
                        "bearer authentication requires a non-empty token".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Returns the `Authorization` header value for this credential.
    ///
    /// - Basic: `Basic base64(username:password)`
    /// - Bearer: `Bearer {token}`
    /// - None: no header
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Basic { username, password } => Some(format!(
                "Basic {}",
                STANDARD.encode(format!("{}:{}", username, password))
            )),
            Self::Bearer { token } => Some(format!("Bearer {}", token)),
        }
    }

    /// Returns `true` unless this is [`AuthCredential::None`].
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer { .. } => f
                .debug_struct("Bearer")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header() {
        let cred = AuthCredential::basic("someusername", "somepassword");
        assert_eq!(
            cred.header_value().unwrap(),
            "Basic c29tZXVzZXJuYW1lOnNvbWVwYXNzd29yZA=="
        );
        assert!(cred.validate().is_ok());
    }

    #[test]
    fn test_bearer_header() {
        let cred = AuthCredential::bearer("testBearer");
        assert_eq!(cred.header_value().unwrap(), "Bearer testBearer");
    }

    #[test]
    fn test_none_has_no_header() {
        assert_eq!(AuthCredential::None.header_value(), None);
        assert!(!AuthCredential::None.is_authenticated());
    }

    #[test]
    fn test_validation_rejects_empty_parts() {
        assert!(AuthCredential::basic("", "pw").validate().is_err());
        assert!(AuthCredential::basic("user", "").validate().is_err());
        assert!(AuthCredential::bearer("").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", AuthCredential::basic("me", "hunter2"));
        assert!(rendered.contains("me"));
        assert!(!rendered.contains("hunter2"));

        let rendered = format!("{:?}", AuthCredential::bearer("s3cret"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_deserialize_tagged() {
        let cred: AuthCredential =
            toml::from_str("type = \"basic\"\nusername = \"u\"\npassword = \"p\"").unwrap();
        assert_eq!(cred, AuthCredential::basic("u", "p"));

        let cred: AuthCredential = toml::from_str("type = \"none\"").unwrap();
        assert_eq!(cred, AuthCredential::None);
    }
}
