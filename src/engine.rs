//! Teacher Engine
//!
//! The façade callers talk to: takes a raw utterance plus conversation
//! context, runs extraction, classification, and generation, and hands back
//! a complete response. Holds the only mutable state in the pipeline (the
//! retained context window).

use async_trait::async_trait;
use tracing::debug;

use crate::chat::{ChatMessage, TeacherResponse};
use crate::classify::classify;
use crate::config::TutorConfig;
use crate::errors::Result;
use crate::generate::ResponseGenerator;
use crate::keywords::extract_keywords;

/// Anything that can answer an utterance in context. Lets callers swap the
/// deterministic engine for a mock in tests.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    async fn respond(&mut self, utterance: &str, context: &[ChatMessage]) -> Result<TeacherResponse>;
}

/// Deterministic tutoring engine over the static knowledge base.
pub struct TeacherEngine {
    config: TutorConfig,
    generator: ResponseGenerator,
    context: Vec<ChatMessage>,
}

impl TeacherEngine {
    pub fn new(config: TutorConfig) -> Self {
        let generator = ResponseGenerator::new().with_language_tag(&config.language_tag);
        Self {
            config,
            generator,
            context: Vec::new(),
        }
    }

    /// Swaps in a custom generator (deterministic chooser, alternative
    /// language tag). Resets nothing else.
    pub fn with_generator(mut self, generator: ResponseGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// The context retained from the most recent call.
    pub fn context(&self) -> &[ChatMessage] {
        &self.context
    }

    /// Answers an utterance. Each call replaces the retained context with
    /// the caller-supplied one, truncated to the configured window; the
    /// response itself depends only on the utterance.
    pub async fn generate_response(
        &mut self,
        utterance: &str,
        context: &[ChatMessage],
    ) -> TeacherResponse {
        self.context = context.to_vec();
        let max = self.config.max_context_messages;
        if self.context.len() > max {
            // Keep the most recent messages.
            self.context.drain(..self.context.len() - max);
        }

        let keywords = extract_keywords(utterance);
        let classification = classify(keywords);
        debug!(
            topic = classification.topic.as_str(),
            context_len = self.context.len(),
            "answering utterance"
        );
        let response = self.generator.generate(&classification);

        if self.config.simulated_latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.simulated_latency_ms)).await;
        }

        response
    }
}

#[async_trait]
impl ResponseSource for TeacherEngine {
    async fn respond(&mut self, utterance: &str, context: &[ChatMessage]) -> Result<TeacherResponse> {
        Ok(self.generate_response(utterance, context).await)
    }
}
