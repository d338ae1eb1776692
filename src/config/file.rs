//
//  jira-client
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File Module
//!
//! Reads a [`ClientConfig`] from TOML. The file goes through the same
//! validation as the builder, so a file can never produce a configuration the
//! builder would reject.
//!
//! ## Configuration File Location
//!
//! [`default_config_path`] resolves the platform-specific location:
//!
//! - **Linux**: `~/.config/jira/config.toml`
//! - **macOS**: `~/Library/Application Support/jira/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\jira\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! protocol = "https"
//! host = "jira.example.com"
//! base_path = "/jira"
//! timeout_ms = 30000
//!
//! [auth]
//! type = "basic"
//! username = "me@example.com"
//! password = "api-token"
//!
//! [headers]
//! Proxy-Authorization = "Basic cHJveHk6c2VjcmV0"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use super::{ClientConfig, Protocol};
use crate::api::common::{JiraError, Result};
use crate::auth::AuthCredential;

/// On-disk shape of a configuration file.
///
/// Every key except `host` is optional and falls back to the builder default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    host: String,
    #[serde(default)]
    protocol: Option<Protocol>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    api_version: Option<u8>,
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    intermediate_path: Option<String>,
    #[serde(default)]
    webhook_version: Option<String>,
    #[serde(default)]
    greenhopper_version: Option<String>,
    #[serde(default)]
    strict_ssl: Option<bool>,
    #[serde(default)]
    ca: Option<String>,
    #[serde(default)]
    timeout_ms: Option<u64>,
    #[serde(default)]
    auth: AuthCredential,
    #[serde(default)]
    headers: BTreeMap<String, String>,
}

impl ConfigFile {
    fn into_config(self) -> Result<ClientConfig> {
        let mut builder = ClientConfig::builder(self.host).auth(self.auth);

        if let Some(protocol) = self.protocol {
            builder = builder.protocol(protocol);
        }
        if let Some(port) = self.port {
            builder = builder.port(port);
        }
        if let Some(version) = self.api_version {
            builder = builder.api_version(version);
        }
        if let Some(base_path) = self.base_path {
            builder = builder.base_path(base_path);
        }
        if let Some(path) = self.intermediate_path {
            builder = builder.intermediate_path(path);
        }
        if let Some(version) = self.webhook_version {
            builder = builder.webhook_version(version);
        }
        if let Some(version) = self.greenhopper_version {
            builder = builder.greenhopper_version(version);
        }
        if let Some(strict) = self.strict_ssl {
            builder = builder.strict_ssl(strict);
        }
        if let Some(ca) = self.ca {
            builder = builder.ca(ca);
        }
        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        for (name, value) in self.headers {
            builder = builder.default_header(name, value);
        }

        builder.build()
    }
}

impl ClientConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Config`] for TOML syntax errors, unknown keys,
    /// and every error the builder reports.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jira_client::config::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml_str(r#"
    ///     host = "jira.example.com"
    ///     [auth]
    ///     type = "bearer"
    ///     token = "abc"
    /// "#)?;
    ///
    /// assert_eq!(config.origin(), "https://jira.example.com");
    /// # Ok::<(), jira_client::JiraError>(())
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| JiraError::Config(format!("invalid configuration file: {}", e)))?;
        file.into_config()
    }

    /// Reads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Config`] if the file cannot be read, plus every
    /// error of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JiraError::Config(format!("could not read {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }
}

/// Returns the platform-specific path of the configuration file.
///
/// The file may not exist; this only returns where it would be.
///
/// # Errors
///
/// Returns [`JiraError::Config`] if no home directory can be determined.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "jira").ok_or_else(|| {
        JiraError::Config("could not determine the configuration directory".to_string())
    })?;
    Ok(dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_minimal_file() {
        let config = ClientConfig::from_toml_str("host = \"jira.example.com\"").unwrap();
        assert_eq!(config.origin(), "https://jira.example.com");
        assert_eq!(config.auth(), &AuthCredential::None);
    }

    #[test]
    fn test_full_file() {
        let config = ClientConfig::from_toml_str(
            r#"
            protocol = "http"
            host = "jira.somehost.com"
            port = 8080
            api_version = 3
            base_path = "/jira"
            webhook_version = "2.0"
            greenhopper_version = "1.1"
            strict_ssl = false
            timeout_ms = 1500

            [auth]
            type = "basic"
            username = "someusername"
            password = "somepassword"
            "#,
        )
        .unwrap();

        assert_eq!(config.origin(), "http://jira.somehost.com:8080");
        assert_eq!(config.api_version(), 3);
        assert_eq!(config.base_path(), "/jira");
        assert_eq!(config.webhook_version(), "2.0");
        assert_eq!(config.greenhopper_version(), "1.1");
        assert!(!config.strict_ssl());
        assert_eq!(config.timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(
            config.auth(),
            &AuthCredential::basic("someusername", "somepassword")
        );
    }

    #[test]
    fn test_headers_table() {
        let config = ClientConfig::from_toml_str(
            r#"
            host = "jira.example.com"

            [headers]
            Cookie = "JSESSIONID=abc"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.default_headers(),
            &[("Cookie".to_string(), "JSESSIONID=abc".to_string())]
        );
    }

    #[test]
    fn test_invalid_files() {
        assert!(matches!(
            ClientConfig::from_toml_str("port = 80"),
            Err(JiraError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str("host = \"h\"\nunknown = 1"),
            Err(JiraError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_toml_str("host = \"h\"\n[auth]\ntype = \"bearer\"\ntoken = \"\""),
            Err(JiraError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"jira.example.com\"").unwrap();
        writeln!(file, "[auth]").unwrap();
        writeln!(file, "type = \"bearer\"").unwrap();
        writeln!(file, "token = \"abc\"").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.auth(), &AuthCredential::bearer("abc"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, JiraError::Config(_)));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
