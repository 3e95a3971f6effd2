//! Text-generation capability used by the summarizer.
//!
//! The backend is opaque to the rest of the crate: instruction and input in,
//! text or error out. [`OpenAiGenerator`] talks to an OpenAI-compatible
//! chat-completions endpoint; tests substitute their own implementations.

mod error;
mod openai;

pub use error::GenerationError;
pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiGenerator};

use async_trait::async_trait;

/// One generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Fixed instruction framing the task (the system message).
    pub system_instruction: String,
    /// Task input (the user message).
    pub task_input: String,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Sampling temperature; low values are near-deterministic.
    pub temperature: f32,
}

/// Trait that text-generation backends implement.
///
/// # Object Safety
///
/// This trait uses `async_trait` so the summarizer can hold an
/// `Arc<dyn TextGenerator>`; Rust 2024 native async traits are not
/// object-safe.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the backend's name for logging (e.g., "openai").
    fn name(&self) -> &str;

    /// Generates text for `request`.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
