//
//  jira-client
//  api/ops/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Fields, field options and instance-wide metadata.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;
use crate::api::models::{Field, IssueType, Priority, Status};

impl JiraClient {
    /// Lists every system and custom field.
    pub async fn list_fields(&self) -> Result<Vec<Field>> {
        self.send(LIST_FIELDS.spec(&[])).await
    }

    pub async fn create_custom_field<B: Serialize + ?Sized>(&self, field: &B) -> Result<Value> {
        self.do_request(CREATE_CUSTOM_FIELD.spec(&[]).json(field)?).await
    }

    pub async fn create_field_option<B: Serialize + ?Sized>(&self, field_key: &str, option: &B) -> Result<Value> {
        self.do_request(CREATE_FIELD_OPTION.spec(&[field_key]).json(option)?)
            .await
    }

    pub async fn list_field_options(&self, field_key: &str) -> Result<Value> {
        self.do_request(LIST_FIELD_OPTIONS.spec(&[field_key])).await
    }

    /// Creates or replaces a field option.
    pub async fn upsert_field_option<B: Serialize + ?Sized>(
        &self,
        field_key: &str,
        option_id: &str,
        option: &B,
    ) -> Result<Value> {
        self.do_request(
            UPSERT_FIELD_OPTION
                .spec(&[field_key, option_id])
                .json(option)?,
        )
        .await
    }

    pub async fn get_field_option(&self, field_key: &str, option_id: &str) -> Result<Value> {
        self.do_request(GET_FIELD_OPTION.spec(&[field_key, option_id]))
            .await
    }

    pub async fn delete_field_option(&self, field_key: &str, option_id: &str) -> Result<Value> {
        self.do_request(DELETE_FIELD_OPTION.spec(&[field_key, option_id]))
            .await
    }

    pub async fn list_priorities(&self) -> Result<Vec<Priority>> {
        self.send(LIST_PRIORITIES.spec(&[])).await
    }

    pub async fn list_issue_types(&self) -> Result<Vec<IssueType>> {
        self.send(LIST_ISSUE_TYPES.spec(&[])).await
    }

    pub async fn list_status(&self) -> Result<Vec<Status>> {
        self.send(LIST_STATUS.spec(&[])).await
    }

    /// Returns version and deployment details of the Jira instance.
    pub async fn get_server_info(&self) -> Result<Value> {
        self.do_request(SERVER_INFO.spec(&[])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use crate::api::transport::HttpResponse;
    use crate::JiraError;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_priorities_is_typed() {
        let (client, transport) = fake_client();
        transport.respond(HttpResponse::new(
            200,
            r##"[{"id":"1","name":"Highest","statusColor":"#d04437"},{"id":"3","name":"Medium"}]"##,
        ));

        let priorities = client.list_priorities().await.unwrap();
        assert_eq!(priorities.len(), 2);
        assert_eq!(priorities[0].status_color.as_deref(), Some("#d04437"));
        assert_eq!(
            transport.last().url,
            "http://jira.somehost.com:8080/rest/api/2/priority"
        );
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_json_error() {
        let (client, transport) = fake_client();
        transport.respond(HttpResponse::new(200, r#"{"not":"a list"}"#));

        let err = client.list_status().await.unwrap_err();
        assert!(matches!(err, JiraError::Json(_)));
    }

    #[tokio::test]
    async fn test_upsert_field_option() {
        let (client, transport) = fake_client();
        client
            .upsert_field_option("customfield_1", "7", &json!({"value": "Blue"}))
            .await
            .unwrap();

        let request = transport.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "http://jira.somehost.com:8080/rest/api/2/field/customfield_1/option/7"
        );
    }
}
