//! Paper Summarizer Core Library
//!
//! This library turns a reference to an academic paper (a URL) into a
//! structured [`PaperRecord`] and then into a two-pass critical-reading
//! [`SummaryReport`] produced by an injected text-generation backend.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Locating a paper reference inside free text
//! - [`record`] - The structured extraction result shared between stages
//! - [`extract`] - Fetching and partitioning PDF/HTML/arXiv documents
//! - [`generation`] - The text-generation capability and its HTTP backend
//! - [`summary`] - First/second pass prompting and report composition
//! - [`pipeline`] - Message-in, report-out orchestration for front ends

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod extract;
pub mod generation;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod summary;
mod user_agent;

// Re-export commonly used types
pub use extract::{ExtractError, FailureKind, FetchConfig, PaperExtractor};
pub use generation::{GenerationError, GenerationRequest, OpenAiGenerator, TextGenerator};
pub use parser::find_reference;
pub use pipeline::{PipelineOutcome, SummaryPipeline};
pub use record::{PaperRecord, Sections, UNKNOWN_TITLE};
pub use summary::{SummaryReport, Summarizer};
