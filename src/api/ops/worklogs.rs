//
//  jira-client
//  api/ops/worklogs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Worklog operations.
//!
//! Adding a worklog adjusts the issue's remaining estimate: automatically by
//! default, or to an explicit new value when one is given.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::JiraClient;
use crate::api::common::{Pagination, Result};
use crate::api::endpoints::*;
use crate::api::url::Query;

impl JiraClient {
    /// Logs work on an issue.
    ///
    /// # Parameters
    ///
    /// * `worklog` - The worklog document, e.g. `{"timeSpent": "1h"}`
    /// * `new_estimate` - Sets the remaining estimate (`adjustEstimate=new`);
    ///   when `None`, Jira reduces it automatically (`adjustEstimate=auto`)
    /// * `options` - Further query flags, appended last
    pub async fn add_worklog<B: Serialize + ?Sized>(
        &self,
        issue_id: &str,
        worklog: &B,
        new_estimate: Option<&str>,
        options: Query,
    ) -> Result<Value> {
        let adjust = if new_estimate.is_some() { "new" } else { "auto" };
        let query = Query::new()
            .with("adjustEstimate", adjust)
            .with_opt("newEstimate", new_estimate)
            .extend(options);
        self.do_request(ADD_WORKLOG.spec(&[issue_id]).json(worklog)?.query(query))
            .await
    }

    pub async fn update_worklog<B: Serialize + ?Sized>(
        &self,
        issue_id: &str,
        worklog_id: &str,
        worklog: &B,
        options: Query,
    ) -> Result<Value> {
        self.do_request(
            UPDATE_WORKLOG
                .spec(&[issue_id, worklog_id])
                .json(worklog)?
                .query(options),
        )
        .await
    }

    pub async fn delete_worklog(&self, issue_id: &str, worklog_id: &str) -> Result<Value> {
        self.do_request(DELETE_WORKLOG.spec(&[issue_id, worklog_id]))
            .await
    }

    /// Returns one page of an issue's worklogs. Defaults to 0/1000.
    pub async fn get_issue_worklogs(&self, issue_id: &str, page: Option<Pagination>) -> Result<Value> {
        let page = page.unwrap_or(Pagination::first(1000));
        let query = Query::new()
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(GET_ISSUE_WORKLOGS.spec(&[issue_id]).query(query))
            .await
    }

    /// Fetches worklogs by id.
    pub async fn get_worklogs(&self, worklog_ids: &[u64], expand: &[&str]) -> Result<Value> {
        self.do_request(
            GET_WORKLOGS
                .spec(&[])
                .query(Query::new().with_list("expand", expand))
                .json_value(json!({ "ids": worklog_ids })),
        )
        .await
    }

    /// Lists the ids of worklogs changed since the given instant.
    pub async fn updated_worklogs(&self, since: DateTime<Utc>, expand: &[&str]) -> Result<Value> {
        let query = Query::new()
            .with("since", since.timestamp_millis())
            .with_list("expand", expand);
        self.do_request(UPDATED_WORKLOGS.spec(&[]).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use crate::api::request::Body;
    use chrono::TimeZone;

    const BASE: &str = "http://jira.somehost.com:8080/rest/api/2";

    #[tokio::test]
    async fn test_add_worklog_adjusts_automatically() {
        let (client, transport) = fake_client();
        client
            .add_worklog("PROJ-1", &json!({"timeSpent": "1h"}), None, Query::new())
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.url, format!("{BASE}/issue/PROJ-1/worklog?adjustEstimate=auto"));
        assert_eq!(request.body, Body::Json(json!({"timeSpent": "1h"})));
    }

    #[tokio::test]
    async fn test_add_worklog_with_new_estimate() {
        let (client, transport) = fake_client();
        client
            .add_worklog(
                "PROJ-1",
                &json!({"timeSpent": "1h"}),
                Some("2d"),
                Query::new().with("notifyUsers", false),
            )
            .await
            .unwrap();

        assert_eq!(
            transport.last().url,
            format!("{BASE}/issue/PROJ-1/worklog?adjustEstimate=new&newEstimate=2d&notifyUsers=false")
        );
    }

    #[tokio::test]
    async fn test_issue_worklogs_default_page() {
        let (client, transport) = fake_client();
        client.get_issue_worklogs("PROJ-1", None).await.unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/issue/PROJ-1/worklog?startAt=0&maxResults=1000")
        );
    }

    #[tokio::test]
    async fn test_get_worklogs_by_id() {
        let (client, transport) = fake_client();
        client
            .get_worklogs(&[1, 2, 3], &["properties"])
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.url, format!("{BASE}/worklog/list?expand=properties"));
        assert_eq!(request.body, Body::Json(json!({"ids": [1, 2, 3]})));
    }

    #[tokio::test]
    async fn test_updated_worklogs_uses_epoch_millis() {
        let (client, transport) = fake_client();
        let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        client.updated_worklogs(since, &[]).await.unwrap();

        assert_eq!(
            transport.last().url,
            format!("{BASE}/worklog/updated?since=1704067200000")
        );
    }
}
