//
//  jira-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod issue;
mod search;

pub use api::ApiCommand;
pub use issue::IssueCommand;
pub use search::SearchCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::default_config_path;
use crate::{ClientConfig, JiraClient};

/// Jira CLI - Work with Jira from the command line
#[derive(Parser, Debug)]
#[command(
    name = "jira",
    version,
    about = "Work with Jira from the command line",
    long_about = "jira is a small CLI over the jira-client library.\n\n\
                  It reads a TOML config file and prints API responses as JSON.",
    propagate_version = true,
    after_help = "Use 'jira <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "JIRA_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Loads the config file and builds a client from it.
    pub fn client(&self) -> Result<JiraClient> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let config = ClientConfig::load(&path)?;
        Ok(JiraClient::new(config)?)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make API requests
    Api(ApiCommand),

    /// Show the authenticated user
    Whoami,

    /// Show an issue
    Issue(IssueCommand),

    /// Search issues with JQL
    Search(SearchCommand),

    /// Show Jira server information
    #[command(name = "server-info")]
    ServerInfo,

    /// Print version information
    Version,
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["jira", "whoami", "--config", "/tmp/jira.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Whoami));
        assert_eq!(cli.global.config, Some(PathBuf::from("/tmp/jira.toml")));
    }

    #[test]
    fn test_parse_server_info() {
        let cli = Cli::try_parse_from(["jira", "server-info"]).unwrap();
        assert!(matches!(cli.command, Commands::ServerInfo));
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let global = GlobalOptions {
            config: Some(PathBuf::from("/nonexistent/jira/config.toml")),
        };
        let err = global.client().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<crate::JiraError>(),
            Some(crate::JiraError::Config(_))
        ));
    }
}
