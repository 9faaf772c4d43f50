//! SEARCH command - Find notes whose title, content or tags contain a string.

use anyhow::Result;
use clap::Args;

use super::{NotesResponse, make_request, output};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (matched literally, case-insensitive)
    pub query: String,
}

/// Execute the search command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: SearchArgs,
) -> Result<()> {
    let url = format!("{}/search-notes", base_url);

    let response: NotesResponse =
        make_request(client.get(&url).query(&[("query", args.query)])).await?;

    output(&response, human)
}
