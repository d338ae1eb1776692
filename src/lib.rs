//
//  jira-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Jira Client Library
//!
//! A typed async client for the Jira REST API and its companion APIs
//! (Agile, webhooks, dev-status and the legacy GreenHopper API).
//!
//! ## Overview
//!
//! The library is built from four small parts:
//!
//! - **URL composer**: origin, base path, API-family intermediate path,
//!   operation path and query string
//! - **Header assembler**: method, auth, `X-Atlassian-Token` and body
//! - **Dispatcher**: sends the request and detects `errorMessages` returned
//!   with a success status
//! - **Operation catalog**: one declarative entry per Jira endpoint, wrapped by
//!   a thin `async fn` on [`JiraClient`]
//!
//! ## Module Structure
//!
//! - [`api`]: URL composition, requests, transport, dispatch and operations
//! - [`auth`]: Basic and bearer credentials
//! - [`config`]: Client configuration and TOML config files
//! - [`cli`]: The `jira` command-line tool
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jira_client::{ClientConfig, JiraClient};
//! use jira_client::api::ops::SearchOptions;
//!
//! # async fn example() -> jira_client::Result<()> {
//! let config = ClientConfig::builder("jira.example.com")
//!     .bearer_auth("personal-access-token")
//!     .build()?;
//! let client = JiraClient::new(config)?;
//!
//! let results = client
//!     .search_jira("project = PROJ AND status = Open", SearchOptions::default())
//!     .await?;
//! println!("{} open issues", results["total"]);
//! # Ok(())
//! # }
//! ```

/// HTTP layer and the operation catalog.
pub mod api;

/// Credentials and the `Authorization` header.
pub mod auth;

/// Command-line interface for the `jira` binary.
pub mod cli;

/// Client configuration.
///
/// Config files are read from platform-specific locations by default:
/// - Linux: `~/.config/jira/config.toml`
/// - macOS: `~/Library/Application Support/jira/config.toml`
/// - Windows: `%APPDATA%\jira\config.toml`
pub mod config;

pub use api::client::JiraClient;
pub use api::common::{JiraError, Result};
pub use config::ClientConfig;

/// Library version, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use jira_client::VERSION;
///
/// println!("jira version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the `jira` binary.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors, usage and configuration issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The config file is missing, unreadable or invalid.
    pub const CONFIG_ERROR: i32 = 3;

    /// Jira rejected the credentials (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 8;
}
