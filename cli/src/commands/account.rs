//! Account commands: REGISTER, LOGIN and WHOAMI.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the register command.
#[derive(Args)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub full_name: String,

    /// Email address, used to log in
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long, env = "NOTEKEEPER_PASSWORD")]
    pub password: String,
}

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,

    /// Password
    #[arg(long, env = "NOTEKEEPER_PASSWORD")]
    pub password: String,
}

/// Arguments for the whoami command.
#[derive(Args)]
pub struct WhoamiArgs {}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

impl UserView {
    fn print_details(&self) {
        println!("  {} {}", "Name:".cyan(), self.full_name);
        println!("  {} {}", "Email:".cyan(), self.email);
        println!("  {} {}", "ID:".cyan(), self.id);
        if let Some(created) = &self.created_on {
            println!("  {} {}", "Created:".cyan(), format_timestamp(created));
        }
    }
}

/// Response from POST /create-account.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserView,
    pub access_token: String,
}

impl HumanReadable for RegisterResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        self.user.print_details();
        println!();
        print_token_hint(&self.access_token);
    }
}

/// Response from POST /login.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

impl HumanReadable for LoginResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        print_token_hint(&self.access_token);
    }
}

/// Response from GET /get-user.
#[derive(Debug, Deserialize, Serialize)]
pub struct WhoamiResponse {
    pub message: String,
    pub user: UserView,
}

impl HumanReadable for WhoamiResponse {
    fn print_human(&self) {
        println!("{}", "Current User".green().bold());
        println!();
        self.user.print_details();
    }
}

fn print_token_hint(token: &str) {
    println!("  {}", "Export the token to use it:".dimmed());
    println!("  export NOTEKEEPER_TOKEN={}", token);
}

/// Execute the register command.
pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: RegisterArgs,
) -> Result<()> {
    let url = format!("{}/create-account", base_url);
    let body = json!({
        "fullName": args.full_name,
        "email": args.email,
        "password": args.password,
    });

    let response: RegisterResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}

/// Execute the login command.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: LoginArgs,
) -> Result<()> {
    let url = format!("{}/login", base_url);
    let body = json!({ "email": args.email, "password": args.password });

    let response: LoginResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}

/// Execute the whoami command.
pub async fn whoami(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: WhoamiArgs,
) -> Result<()> {
    let url = format!("{}/get-user", base_url);

    let response: WhoamiResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
