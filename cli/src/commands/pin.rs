//! PIN command - Pin or unpin a note.

use anyhow::Result;
use clap::Args;
use serde_json::json;
use uuid::Uuid;

use super::{NoteResponse, make_request, output};

/// Arguments for the pin command.
#[derive(Args)]
pub struct PinArgs {
    /// Note ID
    pub note_id: Uuid,

    /// Unpin instead of pin
    #[arg(long)]
    pub off: bool,
}

/// Execute the pin command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: PinArgs,
) -> Result<()> {
    let url = format!("{}/update-note-pinned/{}", base_url, args.note_id);
    let body = json!({ "isPinned": !args.off });

    let response: NoteResponse = make_request(client.put(&url).json(&body)).await?;

    output(&response, human)
}
