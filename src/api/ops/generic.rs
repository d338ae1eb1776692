//
//  jira-client
//  api/ops/generic.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GET requests to endpoints without a dedicated method.

use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;

impl JiraClient {
    /// Sends a GET to a core API endpoint, e.g. `"issue/KEY-1/votes"`.
    ///
    /// A leading `/` is accepted.
    pub async fn generic_get(&self, endpoint: &str) -> Result<Value> {
        self.do_request(GENERIC.spec(&[endpoint.trim_start_matches('/')]))
            .await
    }

    /// Sends a GET to an Agile API endpoint, e.g. `"board/7/quickfilter"`.
    pub async fn generic_agile_get(&self, endpoint: &str) -> Result<Value> {
        self.do_request(GENERIC_AGILE.spec(&[endpoint.trim_start_matches('/')]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::fake_client;

    #[tokio::test]
    async fn test_generic_get() {
        let (client, transport) = fake_client();
        client.generic_get("issue/KEY-1/votes").await.unwrap();
        assert_eq!(
            transport.last().url,
            "http://jira.somehost.com:8080/rest/api/2/issue/KEY-1/votes"
        );
    }

    #[tokio::test]
    async fn test_generic_agile_get_strips_leading_slash() {
        let (client, transport) = fake_client();
        client.generic_agile_get("/board/7/quickfilter").await.unwrap();
        assert_eq!(
            transport.last().url,
            "http://jira.somehost.com:8080/rest/agile/1.0/board/7/quickfilter"
        );
    }
}
