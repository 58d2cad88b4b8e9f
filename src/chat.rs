//! Boundary Types
//!
//! The types exchanged with the surrounding chat UI: conversation messages
//! supplied by the caller, and the structured teacher response returned to
//! it. `TeacherResponse` serializes to the camelCase JSON shape the UI
//! renders (`content`, `codeExamples`, `relatedTopics`, `difficulty`).

use serde::{Deserialize, Serialize};

use crate::classify::Difficulty;

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior message in the conversation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A runnable code snippet attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub language: String,
    pub code: String,
    pub explanation: String,
}

/// The structured response returned for one utterance.
///
/// `content` uses a fixed markdown subset the UI renders: `#`/`##` headings,
/// `**bold**`, backtick inline code, and `- ` bullets. The generator always
/// emits balanced markers; the renderer does not validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_examples: Vec<CodeExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_topics: Vec<String>,
    pub difficulty: Difficulty,
}
