//! ADD command - Create a note.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{NoteResponse, make_request, output};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Note title
    #[arg(long, short = 't')]
    pub title: String,

    /// Note content
    #[arg(long, short = 'c')]
    pub content: String,

    /// Tag to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
struct AddNoteBody {
    title: String,
    content: String,
    tags: Vec<String>,
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: AddArgs,
) -> Result<()> {
    let url = format!("{}/add-note", base_url);
    let body = AddNoteBody {
        title: args.title,
        content: args.content,
        tags: args.tags,
    };

    let response: NoteResponse = make_request(client.post(&url).json(&body)).await?;

    output(&response, human)
}
