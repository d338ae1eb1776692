//
//  jira-client
//  api/ops/links.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue links and remote links.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;

impl JiraClient {
    /// Links two issues.
    ///
    /// ```json
    /// {"type": {"name": "Duplicate"}, "inwardIssue": {"key": "A-1"}, "outwardIssue": {"key": "A-2"}}
    /// ```
    pub async fn issue_link<B: Serialize + ?Sized>(&self, link: &B) -> Result<Value> {
        self.do_request(CREATE_ISSUE_LINK.spec(&[]).json(link)?).await
    }

    pub async fn delete_issue_link(&self, link_id: &str) -> Result<Value> {
        self.do_request(DELETE_ISSUE_LINK.spec(&[link_id])).await
    }

    pub async fn list_issue_link_types(&self) -> Result<Value> {
        self.do_request(LIST_ISSUE_LINK_TYPES.spec(&[])).await
    }

    pub async fn get_remote_links(&self, issue_key: &str) -> Result<Value> {
        self.do_request(GET_REMOTE_LINKS.spec(&[issue_key])).await
    }

    /// Creates (or, with a matching `globalId`, updates) a remote link.
    pub async fn create_remote_link<B: Serialize + ?Sized>(&self, issue_key: &str, remote_link: &B) -> Result<Value> {
        self.do_request(CREATE_REMOTE_LINK.spec(&[issue_key]).json(remote_link)?)
            .await
    }

    pub async fn delete_remote_link(&self, issue_key: &str, link_id: &str) -> Result<Value> {
        self.do_request(DELETE_REMOTE_LINK.spec(&[issue_key, link_id]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_issue_link_posts_body() {
        let (client, transport) = fake_client();
        client
            .issue_link(&json!({"type": {"name": "Duplicate"}}))
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "http://jira.somehost.com:8080/rest/api/2/issueLink");
    }

    #[tokio::test]
    async fn test_delete_remote_link() {
        let (client, transport) = fake_client();
        client.delete_remote_link("PROJ-1", "10000").await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.url,
            "http://jira.somehost.com:8080/rest/api/2/issue/PROJ-1/remotelink/10000"
        );
    }
}
