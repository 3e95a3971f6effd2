//! Two-pass summary generation over a [`PaperRecord`].
//!
//! Pass one asks the backend for a short structural assessment from the
//! title, abstract, introduction and conclusion. Pass two adds a bounded
//! excerpt of the full text and asks for detailed content analysis. Each
//! pass fails independently: a backend error is replaced by a placeholder
//! and the report is still produced.

pub mod prompts;
mod report;

pub use report::{ATTRIBUTION_FOOTER, FIRST_PASS_HEADING, SECOND_PASS_HEADING, SummaryReport};

use std::sync::Arc;

use tracing::{info, warn};

use crate::generation::{GenerationRequest, TextGenerator};
use crate::record::PaperRecord;

/// Output token bound for the first pass.
pub const FIRST_PASS_MAX_TOKENS: u32 = 1000;
/// Output token bound for the second pass.
pub const SECOND_PASS_MAX_TOKENS: u32 = 1500;
/// Sampling temperature for both passes.
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Substituted for the first pass when the backend fails.
pub const FIRST_PASS_PLACEHOLDER: &str = "Error generating first pass summary.";
/// Substituted for the second pass when the backend fails.
pub const SECOND_PASS_PLACEHOLDER: &str = "Error generating second pass summary.";

/// Runs the two reading passes against a text-generation backend.
#[derive(Clone)]
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("generator", &self.generator.name())
            .finish()
    }
}

impl Summarizer {
    /// Creates a summarizer backed by `generator`.
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Builds the first-pass request for `record`.
    #[must_use]
    pub fn first_pass_request(record: &PaperRecord) -> GenerationRequest {
        GenerationRequest {
            system_instruction: prompts::FIRST_PASS_INSTRUCTION.to_string(),
            task_input: prompts::context_block(record),
            max_output_tokens: FIRST_PASS_MAX_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        }
    }

    /// Builds the second-pass request for `record`.
    #[must_use]
    pub fn second_pass_request(record: &PaperRecord) -> GenerationRequest {
        let context = prompts::context_block(record);
        GenerationRequest {
            system_instruction: prompts::SECOND_PASS_INSTRUCTION.to_string(),
            task_input: prompts::second_pass_input(&context, &record.full_text),
            max_output_tokens: SECOND_PASS_MAX_TOKENS,
            temperature: SUMMARY_TEMPERATURE,
        }
    }

    /// Produces the two-pass report for `record`.
    ///
    /// The passes run one after the other. Never fails: backend errors are
    /// logged and replaced by [`FIRST_PASS_PLACEHOLDER`] /
    /// [`SECOND_PASS_PLACEHOLDER`].
    #[tracing::instrument(skip(self, record), fields(title = %record.title, generator = self.generator.name()))]
    pub async fn summarize(&self, record: &PaperRecord) -> SummaryReport {
        let first_pass = self
            .run_pass("first", &Self::first_pass_request(record), FIRST_PASS_PLACEHOLDER)
            .await;
        let second_pass = self
            .run_pass("second", &Self::second_pass_request(record), SECOND_PASS_PLACEHOLDER)
            .await;

        info!("summary composed");
        SummaryReport::new(record.title.clone(), first_pass, second_pass)
    }

    async fn run_pass(&self, pass: &str, request: &GenerationRequest, placeholder: &str) -> String {
        match self.generator.generate(request).await {
            Ok(text) => text.trim().to_string(),
            Err(error) => {
                warn!(pass, error = %error, "generation pass failed; substituting placeholder");
                placeholder.to_string()
            }
        }
    }
}
