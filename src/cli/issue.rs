//
//  jira-client
//  cli/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;

use crate::api::ops::FindIssueOptions;

use super::{print_json, GlobalOptions};

/// Show an issue
#[derive(Args, Debug)]
pub struct IssueCommand {
    /// Issue key or id (e.g., PROJ-123)
    pub key: String,

    /// Comma-separated fields to return (default: all)
    #[arg(long)]
    pub fields: Option<String>,

    /// Comma-separated entities to expand (e.g., renderedFields,changelog)
    #[arg(long)]
    pub expand: Option<String>,
}

impl IssueCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let issue = client.find_issue(&self.key, self.options()).await?;
        print_json(&issue)
    }

    fn options(&self) -> FindIssueOptions {
        FindIssueOptions {
            fields: self.fields.clone(),
            expand: self.expand.clone(),
            ..Default::default()
        }
    }
}
