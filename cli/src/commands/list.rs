//! LIST command - List the caller's notes, pinned first.

use anyhow::Result;
use clap::Args;

use super::{NotesResponse, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    _args: ListArgs,
) -> Result<()> {
    let url = format!("{}/get-all-notes", base_url);

    let response: NotesResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
