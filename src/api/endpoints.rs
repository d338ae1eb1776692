//
//  jira-client
//  api/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The endpoint table.
//!
//! Every Jira operation the client offers is one [`Endpoint`] here: an HTTP
//! verb, an [`ApiFamily`] and a path template with `{name}` placeholders. The
//! typed methods in [`ops`](super::ops) fill in the template and add the query
//! and body; nothing else about a route lives anywhere else.

use reqwest::Method;

use super::request::RequestSpec;
use super::url::ApiFamily;

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Verb> for Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// One route of the Jira API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub verb: Verb,
    pub family: ApiFamily,
    /// Path with `{name}` placeholders, relative to the family's base.
    pub template: &'static str,
}

impl Endpoint {
    pub const fn new(verb: Verb, family: ApiFamily, template: &'static str) -> Self {
        Self {
            verb,
            family,
            template,
        }
    }

    /// Number of `{...}` placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.template.matches('{').count()
    }

    /// Fills the placeholders with `params`, in order.
    ///
    /// Parameters are inserted verbatim; a missing one leaves its slot empty.
    pub fn path(&self, params: &[&str]) -> String {
        debug_assert_eq!(
            self.placeholder_count(),
            params.len(),
            "wrong parameter count for {}",
            self.template
        );

        let mut path = String::with_capacity(self.template.len() + 16);
        let mut params = params.iter();
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            if let Some(param) = params.next() {
                path.push_str(param);
            }
            rest = match rest[start..].find('}') {
                Some(end) => &rest[start + end + 1..],
                None => "",
            };
        }
        path.push_str(rest);
        path
    }

    /// Starts a request for this endpoint.
    pub fn spec(&self, params: &[&str]) -> RequestSpec {
        RequestSpec::new(self.family, self.path(params)).method(self.verb.into())
    }
}

macro_rules! endpoints {
    ($($name:ident => $verb:ident $family:ident $template:literal;)*) => {
        $(
            pub const $name: Endpoint = Endpoint::new(Verb::$verb, ApiFamily::$family, $template);
        )*

        /// Every endpoint, keyed by constant name.
        pub const CATALOG: &[(&str, Endpoint)] = &[$((stringify!($name), $name)),*];
    };
}

endpoints! {
    // Issues
    FIND_ISSUE => Get Api "/issue/{issueIdOrKey}";
    ADD_NEW_ISSUE => Post Api "/issue";
    UPDATE_ISSUE => Put Api "/issue/{issueId}";
    DELETE_ISSUE => Delete Api "/issue/{issueId}";
    ISSUE_EDIT_META => Get Api "/issue/{issueId}/editmeta";
    GET_ISSUE_PROPERTY => Get Api "/issue/{issueId}/properties/{propertyKey}";
    GET_ISSUE_CHANGELOG => Get Api "/issue/{issueId}/changelog";
    GET_ISSUE_WATCHERS => Get Api "/issue/{issueId}/watchers";
    ADD_WATCHER => Post Api "/issue/{issueKey}/watchers";
    UPDATE_ASSIGNEE => Put Api "/issue/{issueKey}/assignee";
    LIST_TRANSITIONS => Get Api "/issue/{issueId}/transitions";
    TRANSITION_ISSUE => Post Api "/issue/{issueId}/transitions";
    ISSUE_NOTIFY => Post Api "/issue/{issueId}/notify";
    ADD_ATTACHMENT => Post Api "/issue/{issueId}/attachments";
    DOWNLOAD_ATTACHMENT => Get Secure "/attachment/{attachmentId}/{filename}";
    DELETE_ATTACHMENT => Delete Api "/attachment/{attachmentId}";
    ISSUE_CREATE_METADATA => Get Api "/issue/createmeta";
    CREATE_META_ISSUE_TYPES => Get Api "/issue/createmeta/{projectIdOrKey}/issuetypes";
    CREATE_META_FIELDS => Get Api "/issue/createmeta/{projectIdOrKey}/issuetypes/{issueTypeId}";
    SEARCH => Post Api "/search";
    UNRESOLVED_ISSUE_COUNT => Get Api "/version/{versionId}/unresolvedIssueCount";

    // Comments
    ADD_COMMENT => Post Api "/issue/{issueId}/comment";
    GET_COMMENTS => Get Api "/issue/{issueId}/comment";
    GET_COMMENT => Get Api "/issue/{issueId}/comment/{commentId}";
    UPDATE_COMMENT => Put Api "/issue/{issueId}/comment/{commentId}";
    DELETE_COMMENT => Delete Api "/issue/{issueId}/comment/{commentId}";

    // Links
    CREATE_ISSUE_LINK => Post Api "/issueLink";
    DELETE_ISSUE_LINK => Delete Api "/issueLink/{linkId}";
    LIST_ISSUE_LINK_TYPES => Get Api "/issueLinkType";
    GET_REMOTE_LINKS => Get Api "/issue/{issueKey}/remotelink";
    CREATE_REMOTE_LINK => Post Api "/issue/{issueKey}/remotelink";
    DELETE_REMOTE_LINK => Delete Api "/issue/{issueKey}/remotelink/{linkId}";

    // Worklogs
    ADD_WORKLOG => Post Api "/issue/{issueId}/worklog";
    UPDATE_WORKLOG => Put Api "/issue/{issueId}/worklog/{worklogId}";
    DELETE_WORKLOG => Delete Api "/issue/{issueId}/worklog/{worklogId}";
    GET_ISSUE_WORKLOGS => Get Api "/issue/{issueId}/worklog";
    GET_WORKLOGS => Post Api "/worklog/list";
    UPDATED_WORKLOGS => Get Api "/worklog/updated";

    // Projects, versions, components, workflows
    GET_PROJECT => Get Api "/project/{project}";
    CREATE_PROJECT => Post Api "/project/";
    LIST_PROJECTS => Get Api "/project";
    GET_VERSIONS => Get Api "/project/{project}/versions";
    GET_VERSION => Get Api "/version/{versionId}";
    CREATE_VERSION => Post Api "/version";
    UPDATE_VERSION => Put Api "/version/{versionId}";
    DELETE_VERSION => Delete Api "/version/{versionId}";
    MOVE_VERSION => Post Api "/version/{versionId}/move";
    LIST_COMPONENTS => Get Api "/project/{project}/components";
    ADD_NEW_COMPONENT => Post Api "/component";
    UPDATE_COMPONENT => Put Api "/component/{componentId}";
    DELETE_COMPONENT => Delete Api "/component/{componentId}";
    RELATED_ISSUE_COUNTS => Get Api "/component/{componentId}/relatedIssueCounts";
    GET_WORKFLOWS => Get Api "/workflow";
    GET_WORKFLOW_SCHEME => Get Api "/project/{project}/workflowscheme";

    // Users and groups
    GET_CURRENT_USER => Get Api "/myself";
    GET_USER => Get Api "/user";
    GET_USERS => Get Api "/users";
    CREATE_USER => Post Api "/user";
    SEARCH_USERS => Get Api "/user/search";
    GET_GROUP => Get Api "/group";
    GET_GROUP_MEMBERS => Get Api "/group/member";
    DOWNLOAD_USER_AVATAR => Get Secure "/useravatar";
    DOWNLOAD_AVATAR => Get Secure "/viewavatar";

    // Fields and metadata
    LIST_FIELDS => Get Api "/field";
    CREATE_CUSTOM_FIELD => Post Api "/field";
    CREATE_FIELD_OPTION => Post Api "/field/{fieldKey}/option";
    LIST_FIELD_OPTIONS => Get Api "/field/{fieldKey}/option";
    UPSERT_FIELD_OPTION => Put Api "/field/{fieldKey}/option/{optionId}";
    GET_FIELD_OPTION => Get Api "/field/{fieldKey}/option/{optionId}";
    DELETE_FIELD_OPTION => Delete Api "/field/{fieldKey}/option/{optionId}";
    LIST_PRIORITIES => Get Api "/priority";
    LIST_ISSUE_TYPES => Get Api "/issuetype";
    LIST_STATUS => Get Api "/status";
    SERVER_INFO => Get Api "/serverInfo";

    // Webhooks
    REGISTER_WEBHOOK => Post Webhook "/webhook";
    LIST_WEBHOOKS => Get Webhook "/webhook";
    GET_WEBHOOK => Get Webhook "/webhook/{webhookId}";
    DELETE_WEBHOOK => Delete Webhook "/webhook/{webhookId}";

    // Development information
    DEV_STATUS_SUMMARY => Get DevStatus "/summary";
    DEV_STATUS_DETAIL => Get DevStatus "/detail";

    // Agile: boards
    GET_ALL_BOARDS => Get Agile "/board";
    CREATE_BOARD => Post Agile "/board";
    GET_BOARD => Get Agile "/board/{boardId}";
    DELETE_BOARD => Delete Agile "/board/{boardId}";
    GET_BOARD_CONFIGURATION => Get Agile "/board/{boardId}/configuration";
    GET_BOARD_BACKLOG => Get Agile "/board/{boardId}/backlog";
    GET_BOARD_ISSUES => Get Agile "/board/{boardId}/issue";
    GET_BOARD_EPICS => Get Agile "/board/{boardId}/epic";
    GET_BOARD_EPIC_ISSUES => Get Agile "/board/{boardId}/epic/{epicId}/issue";
    GET_BOARD_PROJECTS => Get Agile "/board/{boardId}/project";
    GET_BOARD_PROJECTS_FULL => Get Agile "/board/{boardId}/project/full";
    GET_BOARD_PROPERTY_KEYS => Get Agile "/board/{boardId}/properties";
    GET_BOARD_PROPERTY => Get Agile "/board/{boardId}/properties/{propertyKey}";
    SET_BOARD_PROPERTY => Put Agile "/board/{boardId}/properties/{propertyKey}";
    DELETE_BOARD_PROPERTY => Delete Agile "/board/{boardId}/properties/{propertyKey}";
    GET_BOARD_SPRINTS => Get Agile "/board/{boardId}/sprint";
    GET_BOARD_SPRINT_ISSUES => Get Agile "/board/{boardId}/sprint/{sprintId}/issue";
    GET_BOARD_VERSIONS => Get Agile "/board/{boardId}/version";

    // Agile: sprints, issues, epics
    GET_SPRINT => Get Agile "/sprint/{sprintId}";
    ADD_ISSUES_TO_SPRINT => Post Agile "/sprint/{sprintId}/issue";
    GET_AGILE_ISSUE => Get Agile "/issue/{issueIdOrKey}";
    GET_ISSUE_ESTIMATION => Get Agile "/issue/{issueIdOrKey}/estimation";
    ESTIMATE_ISSUE => Put Agile "/issue/{issueIdOrKey}/estimation";
    RANK_ISSUES => Put Agile "/issue/rank";
    MOVE_TO_BACKLOG => Post Agile "/backlog/issue";
    GET_FILTER => Get Agile "/filter/{filterId}";
    GET_EPIC => Get Agile "/epic/{epicIdOrKey}";
    PARTIALLY_UPDATE_EPIC => Post Agile "/epic/{epicIdOrKey}";
    GET_EPIC_ISSUES => Get Agile "/epic/{epicIdOrKey}/issue";
    MOVE_ISSUES_TO_EPIC => Post Agile "/epic/{epicIdOrKey}/issue";
    RANK_EPICS => Put Agile "/epic/{epicIdOrKey}/rank";

    // GreenHopper
    LIST_RAPID_VIEWS => Get GreenHopper "/rapidviews/list";
    SPRINT_QUERY => Get GreenHopper "/sprintquery/{rapidViewId}";
    SPRINT_REPORT => Get GreenHopper "/rapid/charts/sprintreport";
    RAPID_VIEW_BACKLOG => Get GreenHopper "/xboard/plan/backlog/data";

    // Generic
    GENERIC => Get Api "/{endpoint}";
    GENERIC_AGILE => Get Agile "/{endpoint}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(FIND_ISSUE.path(&["PROJ-1"]), "/issue/PROJ-1");
        assert_eq!(
            GET_BOARD_EPIC_ISSUES.path(&["7", "12"]),
            "/board/7/epic/12/issue"
        );
        assert_eq!(SEARCH.path(&[]), "/search");
    }

    #[test]
    fn test_spec_carries_verb_and_family() {
        let spec = DELETE_BOARD.spec(&["3"]);
        assert_eq!(spec.method, Method::DELETE);
        assert_eq!(spec.family, ApiFamily::Agile);
        assert_eq!(spec.path, "/board/3");
    }

    #[test]
    fn test_catalog_templates_are_well_formed() {
        for (name, endpoint) in CATALOG {
            assert!(endpoint.template.starts_with('/'), "{} lacks a leading slash", name);
            assert_eq!(
                endpoint.template.matches('{').count(),
                endpoint.template.matches('}').count(),
                "{} has unbalanced placeholders",
                name
            );
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<&str> = CATALOG.iter().map(|(name, _)| *name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
