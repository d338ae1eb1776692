//
//  jira-client
//  cli/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JQL search command
//!
//! ```bash
//! jira search "project = PROJ AND status = Open" --max 20 --fields summary,status
//! ```

use anyhow::Result;
use clap::Args;

use crate::api::ops::SearchOptions;

use super::{print_json, GlobalOptions};

/// Search issues with JQL
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// JQL query
    pub jql: String,

    /// Maximum number of issues to return
    #[arg(long, default_value = "50")]
    pub max: u32,

    /// Index of the first issue to return
    #[arg(long, default_value = "0")]
    pub start: u32,

    /// Fields to return (can be comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,
}

impl SearchCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let results = client.search_jira(&self.jql, self.options()).await?;
        print_json(&results)
    }

    fn options(&self) -> SearchOptions {
        SearchOptions {
            start_at: Some(self.start),
            max_results: Some(self.max),
            fields: (!self.fields.is_empty()).then(|| self.fields.clone()),
            expand: None,
        }
    }
}
