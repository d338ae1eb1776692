//
//  jira-client
//  api/ops/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook registration.
//!
//! These calls only manage registrations. Receiving deliveries is up to the
//! application.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;

impl JiraClient {
    /// Registers a webhook.
    ///
    /// ```json
    /// {"name": "my webhook", "url": "https://example.com/hook", "events": ["jira:issue_created"]}
    /// ```
    pub async fn register_webhook<B: Serialize + ?Sized>(&self, webhook: &B) -> Result<Value> {
        self.do_request(REGISTER_WEBHOOK.spec(&[]).json(webhook)?).await
    }

    pub async fn list_webhooks(&self) -> Result<Value> {
        self.do_request(LIST_WEBHOOKS.spec(&[])).await
    }

    pub async fn get_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.do_request(GET_WEBHOOK.spec(&[webhook_id])).await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<Value> {
        self.do_request(DELETE_WEBHOOK.spec(&[webhook_id])).await
    }
}
