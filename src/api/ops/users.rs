//
//  jira-client
//  api/ops/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Users, groups and avatars.

use serde::Serialize;
use serde_json::Value;

use crate::api::client::JiraClient;
use crate::api::common::{Pagination, Result};
use crate::api::endpoints::*;
use crate::api::models::{Download, User};
use crate::api::url::Query;

/// Criteria for [`JiraClient::search_users`]. Pagination defaults to 0/50.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchUsersOptions {
    /// Username filter (Server and Data Center).
    pub username: Option<String>,
    /// Free-text filter matched against names and emails (Cloud).
    pub query: Option<String>,
    pub page: Option<Pagination>,
}

/// `users[start:max]`, the expansion Jira uses to page group members.
fn users_expansion(page: Pagination) -> String {
    format!("users[{}:{}]", page.start_at, page.max_results)
}

impl JiraClient {
    /// Returns the user the client authenticates as.
    pub async fn get_current_user(&self) -> Result<User> {
        self.send(GET_CURRENT_USER.spec(&[])).await
    }

    /// Returns a user by account id, optionally expanded (`groups`, `applicationRoles`).
    pub async fn get_user(&self, account_id: &str, expand: &[&str]) -> Result<Value> {
        let query = Query::new()
            .with("accountId", account_id)
            .with_list("expand", expand);
        self.do_request(GET_USER.spec(&[]).query(query)).await
    }

    /// Lists all users, active and inactive. Defaults to 0/100.
    pub async fn get_users(&self, page: Option<Pagination>) -> Result<Value> {
        let page = page.unwrap_or(Pagination::first(100));
        let query = Query::new()
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(GET_USERS.spec(&[]).query(query)).await
    }

    pub async fn create_user<B: Serialize + ?Sized>(&self, user: &B) -> Result<Value> {
        self.do_request(CREATE_USER.spec(&[]).json(user)?).await
    }

    pub async fn search_users(&self, options: SearchUsersOptions) -> Result<Value> {
        let page = options.page.unwrap_or_default();
        let query = Query::new()
            .with_opt("username", options.username)
            .with_opt("query", options.query)
            .with("startAt", page.start_at)
            .with("maxResults", page.max_results);
        self.do_request(SEARCH_USERS.spec(&[]).query(query)).await
    }

    /// Returns a group with one page of its users. Defaults to 0/50.
    pub async fn get_users_in_group(&self, group_name: &str, page: Option<Pagination>) -> Result<Value> {
        let query = Query::new()
            .with("groupname", group_name)
            .with("expand", users_expansion(page.unwrap_or_default()));
        self.do_request(GET_GROUP.spec(&[]).query(query)).await
    }

    /// Returns one page of a group's members. Defaults to 0/50.
    pub async fn get_members_of_group(
        &self,
        group_name: &str,
        page: Option<Pagination>,
        include_inactive_users: bool,
    ) -> Result<Value> {
        let query = Query::new()
            .with("groupname", group_name)
            .with("expand", users_expansion(page.unwrap_or_default()))
            .with("includeInactiveUsers", include_inactive_users);
        self.do_request(GET_GROUP_MEMBERS.spec(&[]).query(query)).await
    }

    /// Downloads a user's avatar image.
    pub async fn download_user_avatar(&self, owner_id: &str, avatar_id: u64) -> Result<Download> {
        let query = Query::new()
            .with("ownerId", owner_id)
            .with("avatarId", avatar_id);
        self.download(DOWNLOAD_USER_AVATAR.spec(&[]).query(query)).await
    }

    /// Downloads a project or issue type avatar image.
    pub async fn download_avatar(&self, avatar_type: &str, avatar_id: u64) -> Result<Download> {
        let query = Query::new()
            .with("avatarType", avatar_type)
            .with("avatarId", avatar_id);
        self.download(DOWNLOAD_AVATAR.spec(&[]).query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::fake_client;
    use crate::api::transport::HttpResponse;

    const BASE: &str = "http://jira.somehost.com:8080/rest/api/2";

    #[tokio::test]
    async fn test_current_user_is_typed() {
        let (client, transport) = fake_client();
        transport.respond(HttpResponse::new(
            200,
            r#"{"accountId":"abc","displayName":"Fred","active":true}"#,
        ));

        let user = client.get_current_user().await.unwrap();
        assert_eq!(user.account_id.as_deref(), Some("abc"));
        assert_eq!(transport.last().url, format!("{BASE}/myself"));
    }

    #[tokio::test]
    async fn test_get_users_default_page() {
        let (client, transport) = fake_client();
        client.get_users(None).await.unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/users?startAt=0&maxResults=100")
        );
    }

    #[tokio::test]
    async fn test_search_users_skips_missing_filters() {
        let (client, transport) = fake_client();
        client
            .search_users(SearchUsersOptions {
                query: Some("fred".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/user/search?query=fred&startAt=0&maxResults=50")
        );
    }

    #[tokio::test]
    async fn test_group_members_expansion() {
        let (client, transport) = fake_client();
        client
            .get_members_of_group("jira-users", Some(Pagination::new(10, 20)), true)
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/group/member?groupname=jira-users&expand=users%5B10%3A20%5D&includeInactiveUsers=true")
        );
    }

    #[tokio::test]
    async fn test_get_user_expand() {
        let (client, transport) = fake_client();
        client.get_user("abc", &["groups", "applicationRoles"]).await.unwrap();
        assert_eq!(
            transport.last().url,
            format!("{BASE}/user?accountId=abc&expand=groups%2CapplicationRoles")
        );
    }

    #[tokio::test]
    async fn test_avatar_download() {
        let (client, transport) = fake_client();
        transport.respond(HttpResponse::new(200, vec![1u8, 2, 3]).with_header("content-type", "image/png"));

        let avatar = client.download_avatar("project", 10100).await.unwrap();
        assert_eq!(avatar.content_type.as_deref(), Some("image/png"));
        assert_eq!(avatar.bytes, vec![1, 2, 3]);
        assert_eq!(
            transport.last().url,
            "http://jira.somehost.com:8080/secure/viewavatar?avatarType=project&avatarId=10100"
        );
    }
}
