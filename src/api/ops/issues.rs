//
//  jira-client
//  api/ops/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue operations: CRUD, metadata, watchers, transitions, attachments and
//! JQL search.
//!
//! # Example
//!
//! ```rust,no_run
//! use jira_client::api::ops::SearchOptions;
//! use jira_client::JiraClient;
//!
//! # async fn example(client: JiraClient) -> jira_client::Result<()> {
//! let results = client
//!     .search_jira(
//!         "project = PROJ AND status = Open",
//!         SearchOptions {
//!             max_results: Some(10),
//!             fields: Some(vec!["summary".to_string()]),
//!             ..Default::default()
//!         },
//!     )
//!     .await?;
//!
//! for issue in results["issues"].as_array().into_iter().flatten() {
//!     println!("{} {}", issue["key"], issue["fields"]["summary"]);
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::client::JiraClient;
use crate::api::common::{Pagination, Result};
use crate::api::endpoints::*;
use crate::api::models::Download;
use crate::api::request::{MultipartFile, ATLASSIAN_TOKEN_HEADER};
use crate::api::url::Query;

/// Query options for [`JiraClient::find_issue`].
///
/// `None` falls back to Jira's broadest view: no expansions, all fields, all
/// properties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindIssueOptions {
    /// Comma-separated expansions, e.g. `renderedFields,changelog`.
    pub expand: Option<String>,
    /// Comma-separated fields; defaults to `*all`.
    pub fields: Option<String>,
    /// Comma-separated properties; defaults to `*all`.
    pub properties: Option<String>,
    /// Key the `fields` map by field key instead of id.
    pub fields_by_keys: bool,
}

/// Filters for [`JiraClient::get_issue_create_metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMetadataOptions {
    pub project_ids: Vec<String>,
    pub project_keys: Vec<String>,
    pub issuetype_ids: Vec<String>,
    pub issuetype_names: Vec<String>,
    pub expand: Option<String>,
}

/// Optional body fields of [`JiraClient::search_jira`].
///
/// Unset fields are left out of the request so Jira applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<Vec<String>>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    jql: &'a str,
    #[serde(flatten)]
    options: &'a SearchOptions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnresolvedIssueCount {
    issues_unresolved_count: u64,
}

const OPEN_STATUS_JQL: &str = " AND status in (Open, 'In Progress', Reopened)";

impl JiraClient {
    /// Fetches an issue by id or key.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use jira_client::api::ops::FindIssueOptions;
    /// # async fn example(client: jira_client::JiraClient) -> jira_client::Result<()> {
    /// let issue = client
    ///     .find_issue("PROJ-1", FindIssueOptions {
    ///         fields: Some("summary,status".to_string()),
    ///         ..Default::default()
    ///     })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_issue(&self, issue_id_or_key: &str, options: FindIssueOptions) -> Result<Value> {
        let query = Query::new()
            .with("expand", options.expand.as_deref().unwrap_or(""))
            .with("fields", options.fields.as_deref().unwrap_or("*all"))
            .with("properties", options.properties.as_deref().unwrap_or("*all"))
            .with("fieldsByKeys", options.fields_by_keys);
        self.do_request(FIND_ISSUE.spec(&[issue_id_or_key]).query(query))
            .await
    }

    /// Creates an issue (or sub-task) from a `{"fields": {...}}` document.
    pub async fn add_new_issue<B: Serialize + ?Sized>(&self, issue: &B) -> Result<Value> {
        self.do_request(ADD_NEW_ISSUE.spec(&[]).json(issue)?).await
    }

    /// Edits an issue. `query` carries flags such as `notifyUsers=false`.
    pub async fn update_issue<B: Serialize + ?Sized>(
        &self,
        issue_id: &str,
        issue_update: &B,
        query: Query,
    ) -> Result<Value> {
        self.do_request(UPDATE_ISSUE.spec(&[issue_id]).json(issue_update)?.query(query))
            .await
    }

    pub async fn delete_issue(&self, issue_id: &str) -> Result<Value> {
        self.do_request(DELETE_ISSUE.spec(&[issue_id])).await
    }

    /// Returns the fields that can be edited on an issue.
    pub async fn issue_edit_meta(&self, issue_id: &str) -> Result<Value> {
        self.do_request(ISSUE_EDIT_META.spec(&[issue_id])).await
    }

    pub async fn get_issue_property(&self, issue_id: &str, property_key: &str) -> Result<Value> {
        self.do_request(GET_ISSUE_PROPERTY.spec(&[issue_id, property_key]))
            .await
    }

    /// Returns one page of an issue's change history. Defaults to 0/50.
    pub async fn get_issue_changelog(&self, issue_id: &str, page: Option<Pagination>) -> Result<Value> {
        let page = page.unwrap_or_default();
        let query = Query::new()
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(GET_ISSUE_CHANGELOG.spec(&[issue_id]).query(query))
            .await
    }

    pub async fn get_issue_watchers(&self, issue_id: &str) -> Result<Value> {
        self.do_request(GET_ISSUE_WATCHERS.spec(&[issue_id])).await
    }

    /// Adds a watcher. Jira expects the bare username as a JSON string.
    pub async fn add_watcher(&self, issue_key: &str, username: &str) -> Result<Value> {
        self.do_request(ADD_WATCHER.spec(&[issue_key]).json(username)?)
            .await
    }

    /// Assigns an issue by username (Server and Data Center).
    pub async fn update_assignee(&self, issue_key: &str, assignee_name: &str) -> Result<Value> {
        self.do_request(
            UPDATE_ASSIGNEE
                .spec(&[issue_key])
                .json_value(json!({ "name": assignee_name })),
        )
        .await
    }

    /// Assigns an issue by account id (Cloud).
    pub async fn update_assignee_with_id(&self, issue_key: &str, account_id: &str) -> Result<Value> {
        self.do_request(
            UPDATE_ASSIGNEE
                .spec(&[issue_key])
                .json_value(json!({ "accountId": account_id })),
        )
        .await
    }

    /// Lists the transitions available on an issue, including their fields.
    pub async fn list_transitions(&self, issue_id: &str) -> Result<Value> {
        self.do_request(
            LIST_TRANSITIONS
                .spec(&[issue_id])
                .query(Query::new().with("expand", "transitions.fields")),
        )
        .await
    }

    /// Performs a transition, e.g. `{"transition": {"id": "5"}}`.
    pub async fn transition_issue<B: Serialize + ?Sized>(&self, issue_id: &str, transition: &B) -> Result<Value> {
        self.do_request(TRANSITION_ISSUE.spec(&[issue_id]).json(transition)?)
            .await
    }

    pub async fn issue_notify<B: Serialize + ?Sized>(&self, issue_id: &str, notification: &B) -> Result<Value> {
        self.do_request(ISSUE_NOTIFY.spec(&[issue_id]).json(notification)?)
            .await
    }

    /// Uploads a file as an attachment.
    ///
    /// The upload is sent as `multipart/form-data` in a field named `file`,
    /// with the `X-Atlassian-Token: nocheck` header Jira requires for it.
    pub async fn add_attachment_on_issue(
        &self,
        issue_id: &str,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<Value> {
        let file = MultipartFile {
            field: "file".to_string(),
            filename: filename.to_string(),
            content_type: "application/octet-stream".to_string(),
            bytes: content,
        };
        self.do_request(
            ADD_ATTACHMENT
                .spec(&[issue_id])
                .header(ATLASSIAN_TOKEN_HEADER, "nocheck")
                .multipart(file),
        )
        .await
    }

    /// Downloads an attachment's content.
    ///
    /// The file name goes into the path as-is and is percent-encoded there.
    pub async fn download_attachment(&self, attachment_id: &str, filename: &str) -> Result<Download> {
        self.download(DOWNLOAD_ATTACHMENT.spec(&[attachment_id, filename]).encoded())
            .await
    }

    pub async fn delete_attachment(&self, attachment_id: &str) -> Result<Value> {
        self.do_request(DELETE_ATTACHMENT.spec(&[attachment_id])).await
    }

    /// Returns the metadata needed to create issues, optionally filtered.
    pub async fn get_issue_create_metadata(&self, options: CreateMetadataOptions) -> Result<Value> {
        let query = Query::new()
            .with_list("issuetypeIds", &options.issuetype_ids)
            .with_list("projectIds", &options.project_ids)
            .with_list("projectKeys", &options.project_keys)
            .with_list("issuetypeNames", &options.issuetype_names)
            .with_opt("expand", options.expand);
        self.do_request(ISSUE_CREATE_METADATA.spec(&[]).query(query))
            .await
    }

    pub async fn get_issue_create_meta_project_issue_types(
        &self,
        project_id_or_key: &str,
        page: Option<Pagination>,
    ) -> Result<Value> {
        let page = page.unwrap_or_default();
        let query = Query::new()
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(CREATE_META_ISSUE_TYPES.spec(&[project_id_or_key]).query(query))
            .await
    }

    pub async fn get_issue_create_meta_fields(
        &self,
        project_id_or_key: &str,
        issue_type_id: &str,
        page: Option<Pagination>,
    ) -> Result<Value> {
        let page = page.unwrap_or_default();
        let query = Query::new()
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(
            CREATE_META_FIELDS
                .spec(&[project_id_or_key, issue_type_id])
                .query(query),
        )
        .await
    }

    /// Runs a JQL search.
    pub async fn search_jira(&self, jql: &str, options: SearchOptions) -> Result<Value> {
        let body = SearchRequest {
            jql,
            options: &options,
        };
        self.do_request(SEARCH.spec(&[]).json(&body)?).await
    }

    /// Searches the issues assigned to a user, optionally only unresolved ones.
    pub async fn get_users_issues(&self, username: &str, open: bool) -> Result<Value> {
        let open_jql = if open { OPEN_STATUS_JQL } else { "" };
        let jql = format!("assignee = {}{}", username.replace('@', "\\u0040"), open_jql);
        self.search_jira(&jql, SearchOptions::default()).await
    }

    /// Returns the number of unresolved issues in a version.
    pub async fn get_unresolved_issue_count(&self, version_id: &str) -> Result<u64> {
        let count: UnresolvedIssueCount = self
            .send(UNRESOLVED_ISSUE_COUNT.spec(&[version_id]))
            .await?;
        Ok(count.issues_unresolved_count)
    }
}
