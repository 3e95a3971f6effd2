//! Message-in, report-out orchestration.
//!
//! Front ends (chat bots, the CLI) hand over a free-text message and get
//! back a [`PipelineOutcome`] carrying either the report or the reason
//! there is none. Delivery, threading and addressing stay with the caller.

use tracing::{info, warn};

use crate::extract::{ExtractError, PaperExtractor};
use crate::parser::find_reference;
use crate::summary::{Summarizer, SummaryReport};

/// Result of handling one message.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The message contained no URL-shaped token.
    NoReference,
    /// A reference was found but its content could not be extracted.
    ExtractionFailed {
        /// The reference that was attempted.
        reference: String,
        /// Why extraction failed.
        error: ExtractError,
    },
    /// The paper was extracted and summarized.
    Summarized {
        /// The reference that was summarized.
        reference: String,
        /// The composed report.
        report: SummaryReport,
    },
}

impl PipelineOutcome {
    /// Interim notice a front end can post while a reference is processed.
    #[must_use]
    pub fn status_message(reference: &str) -> String {
        format!("I'm analyzing the paper at {reference}. This may take a few minutes...")
    }

    /// User-facing text for this outcome.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoReference => "I couldn't find a paper link in the message. Please make sure \
                                  it contains a valid academic paper URL."
                .to_string(),
            Self::ExtractionFailed { reference, .. } => format!(
                "I had trouble extracting content from {reference}. Please ensure it's a valid \
                 and accessible academic paper."
            ),
            Self::Summarized { report, .. } => {
                format!("Here's the summary of the paper:\n\n{report}")
            }
        }
    }

    /// Returns the report if the message was summarized.
    #[must_use]
    pub fn report(&self) -> Option<&SummaryReport> {
        match self {
            Self::Summarized { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Reference detection, extraction and summarization, run in sequence.
#[derive(Debug, Clone)]
pub struct SummaryPipeline {
    extractor: PaperExtractor,
    summarizer: Summarizer,
}

impl SummaryPipeline {
    /// Creates a pipeline from its two stages.
    #[must_use]
    pub fn new(extractor: PaperExtractor, summarizer: Summarizer) -> Self {
        Self {
            extractor,
            summarizer,
        }
    }

    /// Handles one inbound message body.
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn handle_message(&self, text: &str) -> PipelineOutcome {
        let Some(reference) = find_reference(text) else {
            info!("no paper reference in message");
            return PipelineOutcome::NoReference;
        };
        self.handle_reference(reference).await
    }

    /// Extracts and summarizes an already located reference.
    #[tracing::instrument(skip(self))]
    pub async fn handle_reference(&self, reference: String) -> PipelineOutcome {
        let record = match self.extractor.extract(&reference).await {
            Ok(record) => record,
            Err(error) => {
                warn!(error = %error, kind = ?error.kind(), "extraction failed");
                return PipelineOutcome::ExtractionFailed { reference, error };
            }
        };

        let report = self.summarizer.summarize(&record).await;
        PipelineOutcome::Summarized { reference, report }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_reference() {
        let msg = PipelineOutcome::status_message("https://arxiv.org/abs/1");
        assert!(msg.contains("https://arxiv.org/abs/1"));
        assert!(msg.contains("few minutes"));
    }

    #[test]
    fn test_no_reference_message() {
        let outcome = PipelineOutcome::NoReference;
        assert!(outcome.user_message().contains("couldn't find a paper link"));
        assert!(outcome.report().is_none());
    }

    #[test]
    fn test_extraction_failed_message() {
        let outcome = PipelineOutcome::ExtractionFailed {
            reference: "https://example.com/x".to_string(),
            error: ExtractError::http_status("https://example.com/x", 404),
        };
        let msg = outcome.user_message();
        assert!(msg.contains("trouble extracting content from https://example.com/x"));
    }

    #[test]
    fn test_summarized_message_embeds_report() {
        let outcome = PipelineOutcome::Summarized {
            reference: "https://example.com/x".to_string(),
            report: SummaryReport::new("T", "one", "two"),
        };
        let msg = outcome.user_message();
        assert!(msg.starts_with("Here's the summary of the paper:\n\n# Summary of \"T\""));
        assert_eq!(outcome.report().map(SummaryReport::title), Some("T"));
    }
}
