//! Algotutor - Deterministic Algorithm Teaching Engine
//!
//! A rule-based request classifier and knowledge-driven response generator
//! for an algorithm-tutoring chat assistant. Free-text utterances are
//! normalized to keyword sets, classified by ordered keyword-membership
//! rules, and answered from an immutable, built-in knowledge base.
//!
//! - **Keywords**: lowercase, punctuation-stripped, stop-word-filtered tokens
//! - **Classification**: topic / subtopic / intent / difficulty, first-match-wins
//! - **Knowledge**: algorithms, data structures, and DP patterns with code
//! - **Responses**: markdown prose, code examples, related-topic tags
//! - **Boundary**: async `ResponseSource` seam for the surrounding chat UI
//!
//! # Quick Start
//!
//! ```ignore
//! use algotutor::{TeacherEngine, TutorConfig};
//!
//! let mut engine = TeacherEngine::new(TutorConfig::default());
//! let response = engine.generate_response("how do I implement bubble sort", &[]).await;
//! println!("{}", response.content);
//! ```

// ─── Core pipeline ─────────────────────────────────────────────────
pub mod classify;
pub mod generate;
pub mod keywords;
pub mod knowledge;

// ─── Façade & boundary ─────────────────────────────────────────────
pub mod chat;
pub mod engine;

// ─── Infrastructure ────────────────────────────────────────────────
pub mod config;
pub mod errors;

pub use chat::{ChatMessage, CodeExample, Role, TeacherResponse};
pub use classify::{classify, Classification, Difficulty, Intent, Topic};
pub use config::TutorConfig;
pub use engine::{ResponseSource, TeacherEngine};
pub use errors::{Result, TutorError};
pub use generate::ResponseGenerator;
pub use keywords::extract_keywords;
pub use knowledge::{knowledge_base, KnowledgeBase, KnowledgeEntry};
