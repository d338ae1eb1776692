//
//  jira-client
//  api/ops/dev_status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Development information linked to issues (branches, commits, pull
//! requests).

use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::Result;
use crate::api::endpoints::*;
use crate::api::url::Query;

impl JiraClient {
    /// Returns the development summary of an issue.
    pub async fn get_dev_status_summary(&self, issue_id: &str) -> Result<Value> {
        self.do_request(
            DEV_STATUS_SUMMARY
                .spec(&[])
                .query(Query::new().with("issueId", issue_id)),
        )
        .await
    }

    /// Returns development details of an issue.
    ///
    /// # Parameters
    ///
    /// * `application_type` - e.g. `stash`, `bitbucket`, `github`
    /// * `data_type` - e.g. `repository`, `pullrequest`
    pub async fn get_dev_status_detail(
        &self,
        issue_id: &str,
        application_type: &str,
        data_type: &str,
    ) -> Result<Value> {
        let query = Query::new()
            .with("issueId", issue_id)
            .with("applicationType", application_type)
            .with("dataType", data_type);
        self.do_request(DEV_STATUS_DETAIL.spec(&[]).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::fake_client;

    #[tokio::test]
    async fn test_dev_status_detail_url() {
        let (client, transport) = fake_client();
        client
            .get_dev_status_detail("10001", "stash", "pullrequest")
            .await
            .unwrap();

        assert_eq!(
            transport.last().url,
            "http://jira.somehost.com:8080/rest/dev-status/latest/issue/detail?issueId=10001&applicationType=stash&dataType=pullrequest"
        );
    }
}
