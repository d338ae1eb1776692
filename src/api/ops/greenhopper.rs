//
//  jira-client
//  api/ops/greenhopper.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy GreenHopper calls for rapid views and sprint reports.
//!
//! Prefer the Agile board API on current Jira versions. These remain for
//! servers where sprint reports are only exposed here.

use serde::Deserialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;
use crate::api::url::Query;

#[derive(Debug, Deserialize)]
struct RapidViews {
    #[serde(default)]
    views: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct SprintQuery {
    #[serde(default)]
    sprints: Vec<Value>,
}

impl JiraClient {
    /// Lists every rapid view visible to the user.
    pub async fn list_rapid_views(&self) -> Result<Vec<Value>> {
        let response: RapidViews = self.send(LIST_RAPID_VIEWS.spec(&[])).await?;
        Ok(response.views)
    }

    /// Finds a rapid view by name, ignoring case.
    ///
    /// # Returns
    ///
    /// `None` when no view has that name.
    pub async fn find_rapid_view(&self, name: &str) -> Result<Option<Value>> {
        let wanted = name.to_lowercase();
        let views = self.list_rapid_views().await?;
        Ok(views.into_iter().find(|view| {
            view.get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.to_lowercase() == wanted)
        }))
    }

    /// Returns the most recent sprint of a rapid view, if it has any.
    pub async fn get_last_sprint_for_rapid_view(&self, rapid_view_id: &str) -> Result<Option<Value>> {
        let mut response: SprintQuery = self.send(SPRINT_QUERY.spec(&[rapid_view_id])).await?;
        Ok(response.sprints.pop())
    }

    /// Returns the sprint report (completed, incomplete and punted issues).
    pub async fn get_sprint_report(&self, rapid_view_id: &str, sprint_id: &str) -> Result<Value> {
        let query = Query::new()
            .with("rapidViewId", rapid_view_id)
            .with("sprintId", sprint_id);
        self.do_request(SPRINT_REPORT.spec(&[]).query(query)).await
    }

    pub async fn get_backlog_for_rapid_view(&self, rapid_view_id: &str) -> Result<Value> {
        self.do_request(
            RAPID_VIEW_BACKLOG
                .spec(&[])
                .query(Query::new().with("rapidViewId", rapid_view_id)),
        )
        .await
    }
}
