//! Command implementations for the notekeeper CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod account;
pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod pin;
pub mod search;

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Build an HTTP client, optionally configured with a Bearer token.
pub fn build_client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();

    if let Some(token) = token {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| anyhow::anyhow!("Invalid token value: {}", e))?;
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    Ok(builder.build()?)
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Send a request and decode the success envelope into `T`.
///
/// A non-2xx status becomes [`CliError::Server`] carrying the envelope's
/// `message`, or the raw body when it is not an envelope.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(CliError::Server {
        status: status.as_u16(),
        message: envelope_message(&body),
    })
}

/// The `message` of an error envelope, falling back to the whole body.
fn envelope_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// A note as returned by the API.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    pub user_id: Uuid,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl NoteView {
    /// Print a compact block for this note.
    pub fn print_summary(&self) {
        let pin = if self.is_pinned {
            "*".yellow()
        } else {
            " ".normal()
        };
        println!("  {} {}", pin, self.title.bold());
        println!("    {} {}", "ID:".cyan(), self.id);
        println!("    {}", truncate(&self.content, 72).dimmed());
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
            println!("    {} {}", "Tags:".cyan(), tags.join(" "));
        }
        println!(
            "    {} {}",
            "Updated:".cyan(),
            format_timestamp(&self.updated_on)
        );
    }
}

/// Envelope carrying one note.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteResponse {
    pub message: String,
    pub note: NoteView,
}

impl HumanReadable for NoteResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!();
        self.note.print_summary();
    }
}

/// Envelope carrying a list of notes.
#[derive(Debug, Deserialize, Serialize)]
pub struct NotesResponse {
    pub message: String,
    pub notes: Vec<NoteView>,
}

impl HumanReadable for NotesResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.notes.is_empty() {
            println!("  {}", "(No notes)".dimmed());
            return;
        }

        for note in &self.notes {
            note.print_summary();
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.notes.len());
        println!();
        println!("  {}", "* = pinned".dimmed());
    }
}

/// Format a timestamp for human display.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_message() {
        let body = r#"{"error": true, "message": "Note not found"}"#;
        assert_eq!(envelope_message(body), "Note not found");
        assert_eq!(envelope_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer line of text", 10), "a longe...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_note_view_from_api_json() {
        let json = r#"{
            "_id": "7f0c9a8e-3c1b-4d2a-9e5f-1a2b3c4d5e6f",
            "title": "T",
            "content": "C",
            "tags": ["x"],
            "isPinned": true,
            "userId": "0e6f1c2d-4b3a-4c5d-8e7f-9a0b1c2d3e4f",
            "createdOn": "2024-01-01T00:00:00Z",
            "updatedOn": "2024-01-02T00:00:00Z"
        }"#;
        let note: NoteView = serde_json::from_str(json).unwrap();
        assert!(note.is_pinned);
        assert_eq!(note.tags, vec!["x"]);
    }
}
