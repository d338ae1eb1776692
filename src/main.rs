//
//  jira-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jira_client::cli::{print_json, Cli, Commands};
use jira_client::{exit_codes, JiraError};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            let jira_error = e.downcast_ref::<JiraError>();
            if let Some(detail) = jira_error.and_then(JiraError::detail) {
                eprintln!("{detail}");
            }
            std::process::exit(exit_code(jira_error));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("JIRA_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: Option<&JiraError>) -> i32 {
    match error {
        Some(JiraError::Config(_)) => exit_codes::CONFIG_ERROR,
        Some(e) if e.is_auth_failure() => exit_codes::AUTH_ERROR,
        Some(e) if e.is_not_found() => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Issue(cmd) => cmd.run(&cli.global).await,
        Commands::Search(cmd) => cmd.run(&cli.global).await,
        Commands::Whoami => {
            let user = cli.global.client()?.get_current_user().await?;
            print_json(&user)
        }
        Commands::ServerInfo => {
            let info = cli.global.client()?.get_server_info().await?;
            print_json(&info)
        }
        Commands::Version => {
            println!("jira version {}", jira_client::VERSION);
            Ok(())
        }
    }
}
