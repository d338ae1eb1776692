//
//  jira-client
//  api/ops/agile.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Jira Software (Agile) operations: boards, sprints, backlogs, epics and
//! ranking.
//!
//! All routes live under `/rest/agile/1.0`. List endpoints return a [`Page`]
//! envelope; the client never follows `next_page` on its own.
//!
//! # Example
//!
//! ```rust,no_run
//! use jira_client::api::common::Pagination;
//! use jira_client::api::ops::BoardQuery;
//!
//! # async fn example(client: jira_client::JiraClient) -> jira_client::Result<()> {
//! let mut query = BoardQuery {
//!     project_key_or_id: Some("PROJ".to_string()),
//!     ..Default::default()
//! };
//! loop {
//!     let page = client.get_all_boards(query.clone()).await?;
//!     for board in &page.values {
//!         println!("{} {}", board["id"], board["name"]);
//!     }
//!     match page.next_page() {
//!         Some(next) => query.page = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::JiraClient;
use crate::api::common::{Page, Pagination, Result};
use crate::api::endpoints::*;
use crate::api::url::Query;

/// Filters for [`JiraClient::get_all_boards`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardQuery {
    /// `scrum`, `kanban` or `simple`.
    pub board_type: Option<String>,
    pub name: Option<String>,
    pub project_key_or_id: Option<String>,
    pub page: Pagination,
}

/// Query shared by the board, sprint and epic issue listings.
///
/// Defaults: first 50 issues, no JQL, `validateQuery=true`, all fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardIssueQuery {
    pub page: Pagination,
    /// Extra JQL filter applied on top of the board's own filter.
    pub jql: Option<String>,
    pub validate_query: bool,
    pub fields: Vec<String>,
    pub expand: Vec<String>,
}

impl Default for BoardIssueQuery {
    fn default() -> Self {
        Self {
            page: Pagination::default(),
            jql: None,
            validate_query: true,
            fields: Vec::new(),
            expand: Vec::new(),
        }
    }
}

impl BoardIssueQuery {
    fn to_query(&self) -> Query {
        Query::new()
            .with("startAt", self.page.start_at)
            .with("maxResults", self.page.max_results)
            .with_opt("jql", self.jql.as_deref())
            .with("validateQuery", self.validate_query)
            .with_list("fields", &self.fields)
            .with_list("expand", &self.expand)
    }
}

fn page_query(page: Option<Pagination>) -> Query {
    let page = page.unwrap_or_default();
    Query::new()
        .with("startAt", page.start_at)
        .with("maxResults", page.max_results)
}

impl JiraClient {
    // Boards

    /// Lists boards, optionally filtered by type, name or project.
    pub async fn get_all_boards(&self, query: BoardQuery) -> Result<Page<Value>> {
        let params = Query::new()
            .with("startAt", query.page.start_at)
            .with("maxResults", query.page.max_results)
            .with_opt("type", query.board_type)
            .with_opt("name", query.name)
            .with_opt("projectKeyOrId", query.project_key_or_id);
        self.send(GET_ALL_BOARDS.spec(&[]).query(params)).await
    }

    pub async fn create_board<B: Serialize + ?Sized>(&self, board: &B) -> Result<Value> {
        self.do_request(CREATE_BOARD.spec(&[]).json(board)?).await
    }

    pub async fn get_board(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD.spec(&[board_id])).await
    }

    pub async fn delete_board(&self, board_id: &str) -> Result<Value> {
        self.do_request(DELETE_BOARD.spec(&[board_id])).await
    }

    /// Returns a board's column, estimation and ranking configuration.
    pub async fn get_configuration(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_CONFIGURATION.spec(&[board_id]))
            .await
    }

    /// Returns the backlog issues of a board.
    pub async fn get_issues_for_backlog(&self, board_id: &str, query: BoardIssueQuery) -> Result<Value> {
        self.do_request(GET_BOARD_BACKLOG.spec(&[board_id]).query(query.to_query()))
            .await
    }

    /// Returns a board's backlog with Jira's default paging.
    pub async fn get_backlog_for_board(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_BACKLOG.spec(&[board_id])).await
    }

    pub async fn get_issues_for_board(&self, board_id: &str, query: BoardIssueQuery) -> Result<Value> {
        self.do_request(GET_BOARD_ISSUES.spec(&[board_id]).query(query.to_query()))
            .await
    }

    /// Lists the epics of a board, optionally only done or not-done ones.
    pub async fn get_epics(&self, board_id: &str, page: Option<Pagination>, done: Option<bool>) -> Result<Page<Value>> {
        let query = page_query(page).with_opt("done", done);
        self.send(GET_BOARD_EPICS.spec(&[board_id]).query(query)).await
    }

    /// Lists a board's issues in an epic; use `none` as the epic for issues
    /// without one.
    pub async fn get_board_issues_for_epic(
        &self,
        board_id: &str,
        epic_id: &str,
        query: BoardIssueQuery,
    ) -> Result<Value> {
        self.do_request(
            GET_BOARD_EPIC_ISSUES
                .spec(&[board_id, epic_id])
                .query(query.to_query()),
        )
        .await
    }

    /// Lists the projects a board draws issues from.
    pub async fn get_projects(&self, board_id: &str, page: Option<Pagination>) -> Result<Page<Value>> {
        self.send(GET_BOARD_PROJECTS.spec(&[board_id]).query(page_query(page)))
            .await
    }

    pub async fn get_projects_full(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_PROJECTS_FULL.spec(&[board_id]))
            .await
    }

    pub async fn get_board_properties_keys(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_PROPERTY_KEYS.spec(&[board_id]))
            .await
    }

    pub async fn get_board_property(&self, board_id: &str, property_key: &str) -> Result<Value> {
        self.do_request(GET_BOARD_PROPERTY.spec(&[board_id, property_key]))
            .await
    }

    /// Stores any JSON value as a board property.
    pub async fn set_board_property<B: Serialize + ?Sized>(
        &self,
        board_id: &str,
        property_key: &str,
        value: &B,
    ) -> Result<Value> {
        self.do_request(
            SET_BOARD_PROPERTY
                .spec(&[board_id, property_key])
                .json(value)?,
        )
        .await
    }

    pub async fn delete_board_property(&self, board_id: &str, property_key: &str) -> Result<Value> {
        self.do_request(DELETE_BOARD_PROPERTY.spec(&[board_id, property_key]))
            .await
    }

    /// Lists a board's sprints, optionally by state (`future`, `active`, `closed`).
    pub async fn get_all_sprints(
        &self,
        board_id: &str,
        page: Option<Pagination>,
        state: Option<&str>,
    ) -> Result<Page<Value>> {
        let query = page_query(page).with_opt("state", state);
        self.send(GET_BOARD_SPRINTS.spec(&[board_id]).query(query)).await
    }

    /// Lists a board's sprints with Jira's default paging.
    pub async fn list_sprints(&self, board_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_SPRINTS.spec(&[board_id])).await
    }

    pub async fn get_board_issues_for_sprint(
        &self,
        board_id: &str,
        sprint_id: &str,
        query: BoardIssueQuery,
    ) -> Result<Value> {
        self.do_request(
            GET_BOARD_SPRINT_ISSUES
                .spec(&[board_id, sprint_id])
                .query(query.to_query()),
        )
        .await
    }

    /// Lists a sprint's issues with Jira's default paging.
    pub async fn get_sprint_issues(&self, board_id: &str, sprint_id: &str) -> Result<Value> {
        self.do_request(GET_BOARD_SPRINT_ISSUES.spec(&[board_id, sprint_id]))
            .await
    }

    /// Lists the versions of a board's projects, optionally by release state.
    pub async fn get_all_versions(
        &self,
        board_id: &str,
        page: Option<Pagination>,
        released: Option<bool>,
    ) -> Result<Page<Value>> {
        let query = page_query(page).with_opt("released", released);
        self.send(GET_BOARD_VERSIONS.spec(&[board_id]).query(query)).await
    }

    // Sprints and issues

    pub async fn get_sprint(&self, sprint_id: &str) -> Result<Value> {
        self.do_request(GET_SPRINT.spec(&[sprint_id])).await
    }

    /// Moves one issue into a sprint.
    pub async fn add_issue_to_sprint(&self, issue_id: &str, sprint_id: &str) -> Result<Value> {
        self.do_request(
            ADD_ISSUES_TO_SPRINT
                .spec(&[sprint_id])
                .json_value(json!({ "issues": [issue_id] })),
        )
        .await
    }

    /// Returns an issue with its Agile fields (sprint, epic, rank).
    pub async fn get_issue(&self, issue_id_or_key: &str, fields: &[&str], expand: &[&str]) -> Result<Value> {
        let query = Query::new()
            .with_list("fields", fields)
            .with_list("expand", expand);
        self.do_request(GET_AGILE_ISSUE.spec(&[issue_id_or_key]).query(query))
            .await
    }

    /// Returns the estimate of an issue in the board's estimation field.
    pub async fn get_issue_estimation_for_board(&self, issue_id_or_key: &str, board_id: &str) -> Result<Value> {
        self.do_request(
            GET_ISSUE_ESTIMATION
                .spec(&[issue_id_or_key])
                .query(Query::new().with("boardId", board_id)),
        )
        .await
    }

    /// Sets the estimate of an issue, e.g. `{"value": "8.0"}`.
    pub async fn estimate_issue_for_board<B: Serialize + ?Sized>(
        &self,
        issue_id_or_key: &str,
        board_id: &str,
        estimate: &B,
    ) -> Result<Value> {
        self.do_request(
            ESTIMATE_ISSUE
                .spec(&[issue_id_or_key])
                .query(Query::new().with("boardId", board_id))
                .json(estimate)?,
        )
        .await
    }

    /// Ranks issues before or after another issue.
    pub async fn rank_issues<B: Serialize + ?Sized>(&self, ranking: &B) -> Result<Value> {
        self.do_request(RANK_ISSUES.spec(&[]).json(ranking)?).await
    }

    /// Moves issues out of any sprint into the backlog.
    pub async fn move_to_backlog(&self, issues: &[&str]) -> Result<Value> {
        self.do_request(
            MOVE_TO_BACKLOG
                .spec(&[])
                .json_value(json!({ "issues": issues })),
        )
        .await
    }

    pub async fn get_filter(&self, filter_id: &str) -> Result<Value> {
        self.do_request(GET_FILTER.spec(&[filter_id])).await
    }

    // Epics

    pub async fn get_epic(&self, epic_id_or_key: &str) -> Result<Value> {
        self.do_request(GET_EPIC.spec(&[epic_id_or_key])).await
    }

    /// Updates the given fields of an epic, e.g. `{"done": true}`.
    pub async fn partially_update_epic<B: Serialize + ?Sized>(&self, epic_id_or_key: &str, update: &B) -> Result<Value> {
        self.do_request(PARTIALLY_UPDATE_EPIC.spec(&[epic_id_or_key]).json(update)?)
            .await
    }

    pub async fn get_issues_for_epic(&self, epic_id_or_key: &str, query: BoardIssueQuery) -> Result<Value> {
        self.do_request(GET_EPIC_ISSUES.spec(&[epic_id_or_key]).query(query.to_query()))
            .await
    }

    pub async fn move_issues_to_epic(&self, epic_id_or_key: &str, issues: &[&str]) -> Result<Value> {
        self.do_request(
            MOVE_ISSUES_TO_EPIC
                .spec(&[epic_id_or_key])
                .json_value(json!({ "issues": issues })),
        )
        .await
    }

    /// Ranks an epic before or after another epic.
    pub async fn rank_epics<B: Serialize + ?Sized>(&self, epic_id_or_key: &str, ranking: &B) -> Result<Value> {
        self.do_request(RANK_EPICS.spec(&[epic_id_or_key]).json(ranking)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use crate::api::request::Body;
    use crate::api::transport::HttpResponse;
    use reqwest::Method;

    const BASE: &str = "http://jira.somehost.com:8080/rest/agile/1.0";

    #[tokio::test]
    async fn test_all_boards_query_and_page() {
        let (client, transport) = fake_client();
        transport.respond(HttpResponse::new(
            200,
            r#"{"maxResults":2,"startAt":0,"total":5,"isLast":false,"values":[{"id":1},{"id":2}]}"#,
        ));

        let page = client
            .get_all_boards(BoardQuery {
                board_type: Some("scrum".to_string()),
                project_key_or_id: Some("PROJ".to_string()),
                page: Pagination::first(2),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.values.len(), 2);
        assert_eq!(page.next_page(), Some(Pagination::new(2, 2)));
        assert_eq!(
            transport.last().url,
            format!("{BASE}/board?startAt=0&maxResults=2&type=scrum&projectKeyOrId=PROJ")
        );
    }

    #[tokio::test]
    async fn test_backlog_issue_query_defaults() {
        let (client, transport) = fake_client();
        client
            .get_issues_for_backlog("7", BoardIssueQuery::default())
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/board/7/backlog?startAt=0&maxResults=50&validateQuery=true")
        );
    }

    #[tokio::test]
    async fn test_sprint_issue_query_full() {
        let (client, transport) = fake_client();
        let query = BoardIssueQuery {
            page: Pagination::new(10, 20),
            jql: Some("assignee = fred".to_string()),
            validate_query: false,
            fields: vec!["summary".to_string(), "status".to_string()],
            expand: vec!["changelog".to_string()],
        };
        client
            .get_board_issues_for_sprint("7", "3", query)
            .await
            .unwrap();

        assert_eq!(
            transport.last().url,
            format!(
                "{BASE}/board/7/sprint/3/issue?startAt=10&maxResults=20&jql=assignee+%3D+fred\
                 &validateQuery=false&fields=summary%2Cstatus&expand=changelog"
            )
        );
    }

    #[tokio::test]
    async fn test_backlog_for_board_uses_agile_family() {
        let (client, transport) = fake_client();
        client.get_backlog_for_board("7").await.unwrap();
        assert_eq!(transport.last().url, format!("{BASE}/board/7/backlog"));
    }

    #[tokio::test]
    async fn test_sprints_by_state() {
        let (client, transport) = fake_client();
        client.get_all_sprints("7", None, Some("active")).await.unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/board/7/sprint?startAt=0&maxResults=50&state=active")
        );
    }

    #[tokio::test]
    async fn test_epics_done_filter() {
        let (client, transport) = fake_client();
        client.get_epics("7", None, Some(false)).await.unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/board/7/epic?startAt=0&maxResults=50&done=false")
        );
    }

    #[tokio::test]
    async fn test_add_issue_to_sprint_body() {
        let (client, transport) = fake_client();
        client.add_issue_to_sprint("PROJ-1", "3").await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, format!("{BASE}/sprint/3/issue"));
        assert_eq!(request.body, Body::Json(json!({"issues": ["PROJ-1"]})));
    }

    #[tokio::test]
    async fn test_move_issues_to_epic_body() {
        let (client, transport) = fake_client();
        client
            .move_issues_to_epic("EPIC-1", &["PROJ-1", "PROJ-2"])
            .await
            .unwrap();
        assert_eq!(
            transport.last().body,
            Body::Json(json!({"issues": ["PROJ-1", "PROJ-2"]}))
        );
    }

    #[tokio::test]
    async fn test_estimate_issue_for_board() {
        let (client, transport) = fake_client();
        client
            .estimate_issue_for_board("PROJ-1", "7", &json!({"value": "8.0"}))
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url, format!("{BASE}/issue/PROJ-1/estimation?boardId=7"));
    }

    #[tokio::test]
    async fn test_set_board_property_accepts_any_json() {
        let (client, transport) = fake_client();
        client
            .set_board_property("7", "columns", &vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(transport.last().body, Body::Json(json!([1, 2, 3])));
    }
}
