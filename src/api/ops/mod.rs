//
//  jira-client
//  api/ops/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operations
//!
//! Typed wrappers over the endpoint catalog, grouped by resource. Every
//! operation is an `async fn` on [`JiraClient`](crate::JiraClient), so the
//! modules here only contribute `impl` blocks and option structs.
//!
//! | Module | Resources |
//! |--------|-----------|
//! | [`issues`] | issues, attachments, transitions, create metadata, search |
//! | [`comments`] | issue comments |
//! | [`links`] | issue links and remote links |
//! | [`worklogs`] | worklogs |
//! | [`projects`] | projects, versions, components, workflows |
//! | [`users`] | users, groups, avatars |
//! | [`fields`] | fields, field options, priorities, statuses, server info |
//! | [`webhooks`] | webhook registrations |
//! | [`dev_status`] | development information |
//! | [`agile`] | boards, sprints, backlogs, epics |
//! | [`greenhopper`] | rapid views and sprint reports |
//! | [`generic`] | free-form GET requests |
//!
//! Most operations return the decoded payload as a [`serde_json::Value`];
//! the handful with a stable shape return types from
//! [`models`](crate::api::models).

pub mod agile;
pub mod comments;
pub mod dev_status;
pub mod fields;
pub mod generic;
pub mod greenhopper;
pub mod issues;
pub mod links;
pub mod projects;
pub mod users;
pub mod webhooks;
pub mod worklogs;

pub use agile::{BoardIssueQuery, BoardQuery};
pub use issues::{CreateMetadataOptions, FindIssueOptions, SearchOptions};
pub use projects::DeleteVersionOptions;
pub use users::SearchUsersOptions;
