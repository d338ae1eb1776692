//
//  jira-client
//  api/ops/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue comment operations.

use serde::Serialize;
use serde_json::{json, Value};

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;
use crate::api::url::Query;

impl JiraClient {
    /// Adds a plain-text comment to an issue.
    pub async fn add_comment(&self, issue_id: &str, text: &str) -> Result<Value> {
        self.do_request(ADD_COMMENT.spec(&[issue_id]).json_value(json!({ "body": text })))
            .await
    }

    /// Adds a comment from a full comment document, e.g. with `visibility`.
    pub async fn add_comment_advanced<B: Serialize + ?Sized>(&self, issue_id: &str, comment: &B) -> Result<Value> {
        self.do_request(ADD_COMMENT.spec(&[issue_id]).json(comment)?)
            .await
    }

    /// Replaces the text of a comment. `query` carries flags such as `expand`.
    pub async fn update_comment(
        &self,
        issue_id: &str,
        comment_id: &str,
        text: &str,
        query: Query,
    ) -> Result<Value> {
        self.do_request(
            UPDATE_COMMENT
                .spec(&[issue_id, comment_id])
                .json_value(json!({ "body": text }))
                .query(query),
        )
        .await
    }

    pub async fn get_comments(&self, issue_id: &str) -> Result<Value> {
        self.do_request(GET_COMMENTS.spec(&[issue_id])).await
    }

    pub async fn get_comment(&self, issue_id: &str, comment_id: &str) -> Result<Value> {
        self.do_request(GET_COMMENT.spec(&[issue_id, comment_id])).await
    }

    pub async fn delete_comment(&self, issue_id: &str, comment_id: &str) -> Result<Value> {
        self.do_request(DELETE_COMMENT.spec(&[issue_id, comment_id]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use crate::api::request::Body;
    use reqwest::Method;

    #[tokio::test]
    async fn test_add_comment_wraps_text() {
        let (client, transport) = fake_client();
        client.add_comment("PROJ-1", "Looks good").await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "http://jira.somehost.com:8080/rest/api/2/issue/PROJ-1/comment"
        );
        assert_eq!(request.body, Body::Json(json!({"body": "Looks good"})));
    }

    #[tokio::test]
    async fn test_add_comment_advanced_sends_document() {
        let (client, transport) = fake_client();
        let comment = json!({
            "body": "Internal note",
            "visibility": {"type": "role", "value": "Administrators"}
        });
        client.add_comment_advanced("PROJ-1", &comment).await.unwrap();
        assert_eq!(transport.last().body, Body::Json(comment));
    }

    #[tokio::test]
    async fn test_update_comment_with_query() {
        let (client, transport) = fake_client();
        client
            .update_comment("PROJ-1", "10000", "Edited", Query::new().with("expand", "renderedBody"))
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "http://jira.somehost.com:8080/rest/api/2/issue/PROJ-1/comment/10000?expand=renderedBody"
        );
        assert_eq!(request.body, Body::Json(json!({"body": "Edited"})));
    }

    #[tokio::test]
    async fn test_delete_comment() {
        let (client, transport) = fake_client();
        client.delete_comment("PROJ-1", "10000").await.unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.body, Body::Empty);
    }
}
