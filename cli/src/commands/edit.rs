//! EDIT command - Replace a note's title, content and tags.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use uuid::Uuid;

use super::{NoteResponse, make_request, output};

/// Arguments for the edit command.
///
/// Tags not given are cleared. The pin is left alone unless `--pinned`
/// is passed.
#[derive(Args)]
pub struct EditArgs {
    /// Note ID to edit
    pub note_id: Uuid,

    /// New title
    #[arg(long, short = 't')]
    pub title: String,

    /// New content
    #[arg(long, short = 'c')]
    pub content: String,

    /// Tag to set (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Set the pinned flag
    #[arg(long)]
    pub pinned: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EditNoteBody {
    title: String,
    content: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_pinned: Option<bool>,
}

/// Execute the edit command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: EditArgs,
) -> Result<()> {
    let url = format!("{}/edit-note/{}", base_url, args.note_id);
    let body = EditNoteBody {
        title: args.title,
        content: args.content,
        tags: args.tags,
        is_pinned: args.pinned,
    };

    let response: NoteResponse = make_request(client.put(&url).json(&body)).await?;

    output(&response, human)
}
