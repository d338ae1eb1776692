//
//  jira-client
//  api/ops/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Projects, versions, components and workflows.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;
use crate::api::models::Project;
use crate::api::url::Query;

/// Where issues of a deleted version are moved.
///
/// With neither target set, Jira removes the version from all issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteVersionOptions {
    /// Version that replaces the deleted one in `fixVersions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_fix_issues_to: Option<String>,
    /// Version that replaces the deleted one in `affectedVersions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_affected_issues_to: Option<String>,
}

impl JiraClient {
    pub async fn get_project(&self, project: &str) -> Result<Value> {
        self.do_request(GET_PROJECT.spec(&[project])).await
    }

    pub async fn create_project<B: Serialize + ?Sized>(&self, project: &B) -> Result<Value> {
        self.do_request(CREATE_PROJECT.spec(&[]).json(project)?).await
    }

    /// Lists every project visible to the user.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.send(LIST_PROJECTS.spec(&[])).await
    }

    /// Lists a project's versions, optionally expanded (e.g. `operations`).
    pub async fn get_versions(&self, project: &str, expand: &[&str]) -> Result<Value> {
        self.do_request(
            GET_VERSIONS
                .spec(&[project])
                .query(Query::new().with_list("expand", expand)),
        )
        .await
    }

    pub async fn get_version(&self, version_id: &str) -> Result<Value> {
        self.do_request(GET_VERSION.spec(&[version_id])).await
    }

    pub async fn create_version<B: Serialize + ?Sized>(&self, version: &B) -> Result<Value> {
        self.do_request(CREATE_VERSION.spec(&[]).json(version)?).await
    }

    /// Updates a version. The target is the `id` field of `version`.
    ///
    /// A document without an `id` produces a request Jira will reject.
    pub async fn update_version<B: Serialize + ?Sized>(&self, version: &B) -> Result<Value> {
        let body = serde_json::to_value(version)?;
        let version_id = match body.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        self.do_request(UPDATE_VERSION.spec(&[version_id.as_str()]).json_value(body))
            .await
    }

    /// Deletes a version, optionally moving its issues to other versions.
    pub async fn delete_version(&self, version_id: &str, options: DeleteVersionOptions) -> Result<Value> {
        self.do_request(DELETE_VERSION.spec(&[version_id]).json(&options)?)
            .await
    }

    /// Moves a version, e.g. `{"position": "First"}` or `{"after": "..."}`.
    pub async fn move_version<B: Serialize + ?Sized>(&self, version_id: &str, position: &B) -> Result<Value> {
        self.do_request(MOVE_VERSION.spec(&[version_id]).json(position)?)
            .await
    }

    pub async fn list_components(&self, project: &str) -> Result<Value> {
        self.do_request(LIST_COMPONENTS.spec(&[project])).await
    }

    pub async fn add_new_component<B: Serialize + ?Sized>(&self, component: &B) -> Result<Value> {
        self.do_request(ADD_NEW_COMPONENT.spec(&[]).json(component)?)
            .await
    }

    pub async fn update_component<B: Serialize + ?Sized>(&self, component_id: &str, component: &B) -> Result<Value> {
        self.do_request(UPDATE_COMPONENT.spec(&[component_id]).json(component)?)
            .await
    }

    /// Deletes a component, optionally reassigning its issues.
    pub async fn delete_component(&self, component_id: &str, move_issues_to: Option<&str>) -> Result<Value> {
        self.do_request(
            DELETE_COMPONENT
                .spec(&[component_id])
                .query(Query::new().with_opt("moveIssuesTo", move_issues_to)),
        )
        .await
    }

    /// Counts the issues that use a component.
    pub async fn related_issue_counts(&self, component_id: &str) -> Result<Value> {
        self.do_request(RELATED_ISSUE_COUNTS.spec(&[component_id]))
            .await
    }

    pub async fn get_workflows(&self, query: Query) -> Result<Value> {
        self.do_request(GET_WORKFLOWS.spec(&[]).query(query)).await
    }

    pub async fn get_workflow_scheme(&self, project: &str, query: Query) -> Result<Value> {
        self.do_request(GET_WORKFLOW_SCHEME.spec(&[project]).query(query))
            .await
    }
}
