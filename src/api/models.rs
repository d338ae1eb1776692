//
//  jira-client
//  api/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed views of common Jira resources.
//!
//! Most operations return [`serde_json::Value`] because Jira payloads vary by
//! deployment, installed apps and `expand` parameters. The handful of
//! resources below are stable enough to type. Every field that some Jira
//! flavor omits is optional, so the same structs read Cloud and Server
//! responses alike.
//!
//! # Example
//!
//! ```rust
//! use jira_client::api::models::User;
//!
//! let json = r#"{"accountId": "5b10a2844c20165700ede21g", "displayName": "Mia Krystof", "active": true}"#;
//! let user: User = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(user.display_name, "Mia Krystof");
//! assert!(user.name.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// URLs of an avatar in the four standard sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarUrls {
    #[serde(rename = "16x16", default)]
    pub small: Option<String>,
    #[serde(rename = "24x24", default)]
    pub medium_small: Option<String>,
    #[serde(rename = "32x32", default)]
    pub medium: Option<String>,
    #[serde(rename = "48x48", default)]
    pub large: Option<String>,
}

/// A Jira user.
///
/// Cloud identifies users by `account_id`; Server and Data Center by `key`
/// and `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub avatar_urls: Option<AvatarUrls>,
}

/// Category a project belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategory {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A Jira project, as listed by `/project`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub project_type_key: Option<String>,
    #[serde(default)]
    pub simplified: Option<bool>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub project_category: Option<ProjectCategory>,
    #[serde(default)]
    pub avatar_urls: Option<AvatarUrls>,
}

/// An issue priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub status_color: Option<String>,
}

/// An issue type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub subtask: bool,
    #[serde(default)]
    pub avatar_id: Option<u64>,
    #[serde(default)]
    pub hierarchy_level: Option<i32>,
}

/// Category of a workflow status (`new`, `indeterminate`, `done`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: u64,
    pub key: String,
    #[serde(default)]
    pub color_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A workflow status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub status_category: Option<StatusCategory>,
}

/// Schema of a field's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default)]
    pub custom_id: Option<u64>,
}

/// A system or custom field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub navigable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub clause_names: Vec<String>,
    #[serde(default)]
    pub schema: Option<FieldSchema>,
}

/// Binary content returned by a download endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Value of the `Content-Type` header, when the server sent one.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_user() {
        let user: User = serde_json::from_str(
            r#"{"self":"https://jira/rest/api/2/user?username=fred","key":"fred","name":"fred",
                "emailAddress":"fred@example.com","displayName":"Fred F. User","active":true,
                "timeZone":"Australia/Sydney","avatarUrls":{"48x48":"https://jira/a48","16x16":"https://jira/a16"}}"#,
        )
        .unwrap();

        assert_eq!(user.key.as_deref(), Some("fred"));
        assert_eq!(user.account_id, None);
        assert_eq!(user.time_zone.as_deref(), Some("Australia/Sydney"));
        let avatars = user.avatar_urls.unwrap();
        assert_eq!(avatars.large.as_deref(), Some("https://jira/a48"));
        assert_eq!(avatars.medium, None);
    }

    #[test]
    fn test_status_with_category() {
        let status: Status = serde_json::from_str(
            r#"{"id":"10000","name":"In Progress","statusCategory":{"id":4,"key":"indeterminate","colorName":"yellow"}}"#,
        )
        .unwrap();
        assert_eq!(status.status_category.unwrap().key, "indeterminate");
    }

    #[test]
    fn test_custom_field() {
        let field: Field = serde_json::from_str(
            r#"{"id":"customfield_10000","key":"customfield_10000","name":"Story Points","custom":true,
                "clauseNames":["cf[10000]","Story Points"],
                "schema":{"type":"number","custom":"com.atlassian.jira.plugin.system.customfieldtypes:float","customId":10000}}"#,
        )
        .unwrap();
        assert!(field.custom);
        assert_eq!(field.clause_names.len(), 2);
        assert_eq!(field.schema.unwrap().custom_id, Some(10000));
    }
}
