//
//  jira-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! This command makes requests to any Jira endpoint, similar to `gh api` for
//! GitHub. Requests go through the same client as every other command, so the
//! configured host, auth and headers apply.
//!
//! ## Examples
//!
//! ```bash
//! # Get an issue
//! jira api issue/PROJ-1
//!
//! # Query parameters
//! jira api search -q jql="project = PROJ" -q maxResults=5
//!
//! # Create a version with POST
//! jira api -X POST version -F project=PROJ -F name=1.2.0 -F released=false
//!
//! # Agile API
//! jira api --agile board/7/sprint -q state=active
//! ```

use std::fs;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::{ApiFamily, Query, RequestSpec};

use super::{print_json, GlobalOptions};

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint relative to the API root (e.g., issue/PROJ-1)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Send the request to the Agile API instead of the core API
    #[arg(long)]
    pub agile: bool,

    /// Query parameters as key=value (can be specified multiple times)
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Request headers as 'Name: Value' (can be specified multiple times)
    #[arg(long, short = 'H', action = clap::ArgAction::Append)]
    pub header: Vec<String>,

    /// Request body fields as JSON (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f', conflicts_with = "field")]
    pub input: Option<String>,

    /// Include response status and headers in output
    #[arg(long, short = 'i')]
    pub include: bool,

    /// Suppress output (only fail on errors)
    #[arg(long)]
    pub silent: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let spec = self.build_spec()?;

        let response = client.do_raw_request(spec).await?;

        if self.silent {
            return Ok(());
        }

        if self.include {
            println!("{} {}", style("HTTP").dim(), style(response.status).green());
            for (name, value) in &response.headers {
                println!("{}: {}", name, value);
            }
            println!();
        }

        let text = response.text();
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => print_json(&json)?,
            Err(_) if text.is_empty() => {}
            Err(_) => println!("{}", text),
        }

        Ok(())
    }

    fn build_spec(&self) -> Result<RequestSpec> {
        let family = if self.agile {
            ApiFamily::Agile
        } else {
            ApiFamily::Api
        };
        let path = format!("/{}", self.endpoint.trim_start_matches('/'));

        let mut spec = RequestSpec::new(family, path)
            .method(self.parse_method()?)
            .query(self.build_query()?);

        for header in &self.header {
            let (name, value) = split_pair(header, ':')
                .ok_or_else(|| anyhow::anyhow!("Invalid header format: {}. Expected 'Name: Value'", header))?;
            spec = spec.header(name.trim(), value.trim());
        }

        if let Some(body) = self.build_body()? {
            spec = spec.json_value(body);
        }
        Ok(spec)
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_query(&self) -> Result<Query> {
        self.query
            .iter()
            .map(|pair| {
                split_pair(pair, '=')
                    .ok_or_else(|| anyhow::anyhow!("Invalid query format: {}. Expected key=value", pair))
            })
            .collect()
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input)?
            };
            return Ok(Some(serde_json::from_str(&content)?));
        }

        if self.field.is_empty() {
            return Ok(None);
        }

        let mut body = serde_json::Map::new();
        for field in &self.field {
            let (key, value) = split_pair(field, '=')
                .ok_or_else(|| anyhow::anyhow!("Invalid field format: {}. Expected key=value", field))?;
            set_nested_value(&mut body, key, parse_field_value(value));
        }
        Ok(Some(Value::Object(body)))
    }
}

fn split_pair(input: &str, separator: char) -> Option<(&str, &str)> {
    input.split_once(separator)
}

/// Interprets a `-F` value as JSON where it looks like JSON, else as a string.
fn parse_field_value(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                Value::Number(n.into())
            } else if value.starts_with('[') || value.starts_with('{') {
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
            } else {
                Value::String(value.to_string())
            }
        }
    }
}

fn set_nested_value(obj: &mut serde_json::Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let nested = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if let Value::Object(nested) = nested {
                set_nested_value(nested, rest, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Body;
    use serde_json::json;

    fn command(args: &[&str]) -> ApiCommand {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            api: ApiCommand,
        }

        let mut argv = vec!["jira-api"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).unwrap().api
    }

    #[test]
    fn test_spec_for_core_api() {
        let spec = command(&["issue/PROJ-1", "-q", "fields=summary"]).build_spec().unwrap();
        assert_eq!(spec.family, ApiFamily::Api);
        assert_eq!(spec.path, "/issue/PROJ-1");
        assert_eq!(spec.method, Method::GET);
        assert_eq!(spec.query.encode().as_deref(), Some("fields=summary"));
        assert_eq!(spec.body, Body::Empty);
    }

    #[test]
    fn test_spec_for_agile_api() {
        let spec = command(&["--agile", "/board/7"]).build_spec().unwrap();
        assert_eq!(spec.family, ApiFamily::Agile);
        assert_eq!(spec.path, "/board/7");
    }

    #[test]
    fn test_fields_build_nested_json_body() {
        let spec = command(&[
            "-X", "post", "version", "-F", "name=1.2.0", "-F", "released=false",
            "-F", "project.key=PROJ", "-F", "projectId=10000",
        ])
        .build_spec()
        .unwrap();

        assert_eq!(spec.method, Method::POST);
        assert_eq!(
            spec.body,
            Body::Json(json!({
                "name": "1.2.0",
                "released": false,
                "project": {"key": "PROJ"},
                "projectId": 10000
            }))
        );
    }

    #[test]
    fn test_invalid_method_is_rejected() {
        assert!(command(&["-X", "BREW", "issue"]).build_spec().is_err());
    }

    #[test]
    fn test_invalid_query_is_rejected() {
        assert!(command(&["issue", "-q", "novalue"]).build_spec().is_err());
    }
}
