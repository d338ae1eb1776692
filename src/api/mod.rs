//
//  jira-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module turns typed operation calls into HTTP requests against a Jira
//! instance and turns the responses back into values or errors.
//!
//! ## Architecture
//!
//! A call flows through four stages:
//!
//! 1. [`endpoints`]: a declarative table of `(verb, family, path template)`
//! 2. [`url`]: composes the absolute URL from the config and a [`RequestSpec`]
//! 3. [`request`]: assembles method, headers and body into an [`HttpRequest`]
//! 4. [`client`]: sends it through a [`Transport`] and checks the response
//!
//! The [`ops`] modules are thin wrappers that fill in templates and build
//! query strings and bodies.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_client::{ClientConfig, JiraClient};
//!
//! # async fn example() -> jira_client::Result<()> {
//! let config = ClientConfig::builder("jira.example.com")
//!     .basic_auth("me", "secret")
//!     .build()?;
//! let client = JiraClient::new(config)?;
//!
//! let issue = client.find_issue("PROJ-1", Default::default()).await?;
//! println!("{}", issue["fields"]["summary"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures are returned as [`JiraError`](common::JiraError) variants:
//!
//! - `Http`: the server answered with a non-2xx status
//! - `Api`: a 2xx answer carried a non-empty `errorMessages` list
//! - `Network` / `Transport`: the request never completed
//! - `Json`: a body could not be (de)serialized

/// Core client: dispatching, response checks and the fake transport used in
/// tests.
pub mod client;

/// Shared types: errors and pagination.
pub mod common;

pub mod endpoints;

/// Response types with a stable shape.
pub mod models;

pub mod ops;

/// Request descriptions and header assembly.
pub mod request;

/// The HTTP seam.
pub mod transport;

pub mod url;

pub use client::JiraClient;
pub use request::{assemble, Body, MultipartFile, RequestSpec};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use url::{compose_url, ApiFamily, Query, QueryValue};
