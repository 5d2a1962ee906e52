//! Prompt construction for the completion call.
//!
//! The instruction template and generation parameters are fixed constants;
//! nothing about the prompt is request-configurable, and the builder never
//! truncates the notes (the validator's length cap is the only size control).

use serde::Serialize;

use crate::validate::NotesInput;

/// Sampling temperature, biased toward consistent output.
pub const TEMPERATURE: f32 = 0.2;

/// Cap on the completion length, in tokens.
pub const MAX_COMPLETION_TOKENS: u32 = 1024;

/// A single chat message in the completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The payload handed to a [`CompletionClient`](crate::client::CompletionClient).
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Renders the fixed instruction template plus the notes into a request.
///
/// The notes are embedded verbatim after a fixed lead-in phrase.
pub fn build(notes: &NotesInput) -> CompletionRequest {
    CompletionRequest {
        messages: vec![
            Message::system(SYSTEM_INSTRUCTION),
            Message::user(format!("{USER_LEAD_IN}\n\n{}", notes.as_str())),
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_COMPLETION_TOKENS,
    }
}

const USER_LEAD_IN: &str = "Extract the action items from these meeting notes:";

const SYSTEM_INSTRUCTION: &str = r#"You are an assistant that extracts action items from meeting notes.

For every action item you find, produce:
1. "task": what needs to be done
2. "assignee": who is responsible, or null if nobody is named
3. "priority": "high", "medium" or "low", inferred from urgency language in the notes
4. "deadline": when it is due, or null if no deadline is stated
5. "context": one sentence of context around the item

Respond with ONLY a JSON object of the form:
{"actionItems": [{"task": "...", "assignee": "...", "priority": "...", "deadline": "...", "context": "..."}], "summary": "..."}

where "summary" is a single sentence summarising the whole meeting. If the notes contain no action items, return an empty "actionItems" array. Do not wrap the JSON in markdown fences and do not add any prose before or after it."#;
