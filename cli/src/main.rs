//! Command-line client for Notekeeper.
//!
//! Commands:
//! - register / login / whoami: account management
//! - add / edit / delete / pin: change notes
//! - list / search: read notes
//!
//! Configuration via environment:
//! - NOTEKEEPER_URL: Base URL of the server (default: http://localhost:8000)
//! - NOTEKEEPER_TOKEN: Bearer token printed by `register` or `login`

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    account::{LoginArgs, RegisterArgs, WhoamiArgs},
    add::AddArgs,
    delete::DeleteArgs,
    edit::EditArgs,
    list::ListArgs,
    pin::PinArgs,
    search::SearchArgs,
};

/// Notekeeper CLI
///
/// Manage your notes from the command line. Prints JSON by default;
/// pass --human for formatted output.
#[derive(Parser)]
#[command(name = "notekeeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notekeeper server URL
    #[arg(
        long,
        env = "NOTEKEEPER_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    url: String,

    /// Bearer token for authentication
    #[arg(long, env = "NOTEKEEPER_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and receive a token
    Register(RegisterArgs),

    /// Log in and receive a token
    Login(LoginArgs),

    /// Show the account the token belongs to
    Whoami(WhoamiArgs),

    /// Add a note
    Add(AddArgs),

    /// Replace a note's title, content and tags
    Edit(EditArgs),

    /// List your notes, pinned first
    List(ListArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Pin or unpin a note
    Pin(PinArgs),

    /// Search your notes
    Search(SearchArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let url = cli.url.trim_end_matches('/');

    let result = match cli.command {
        Commands::Register(args) => {
            commands::account::register(&client, url, cli.human, args).await
        }
        Commands::Login(args) => commands::account::login(&client, url, cli.human, args).await,
        Commands::Whoami(args) => commands::account::whoami(&client, url, cli.human, args).await,
        Commands::Add(args) => commands::add::execute(&client, url, cli.human, args).await,
        Commands::Edit(args) => commands::edit::execute(&client, url, cli.human, args).await,
        Commands::List(args) => commands::list::execute(&client, url, cli.human, args).await,
        Commands::Delete(args) => commands::delete::execute(&client, url, cli.human, args).await,
        Commands::Pin(args) => commands::pin::execute(&client, url, cli.human, args).await,
        Commands::Search(args) => commands::search::execute(&client, url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
