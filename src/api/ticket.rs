//! Ticket Summarizer Endpoint
//!
//! Preview-based mock summarizer; stands in for a future model-backed one.

use axum::response::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TicketIn {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TicketOut {
    pub summary: String,
}

/// POST /ticket/summarize
pub async fn summarize(Json(body): Json<TicketIn>) -> Json<TicketOut> {
    Json(TicketOut {
        summary: summarize_text(&body.text),
    })
}

/// Texts over 200 chars are cut to a 180-char preview with an ellipsis.
fn summarize_text(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return "No content provided.".to_string();
    }

    if text.chars().count() > 200 {
        let preview: String = text.chars().take(180).collect();
        format!("Summary: {}...", preview)
    } else {
        format!("Summary: {}", text)
    }
}
