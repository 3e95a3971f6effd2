//! Content extraction: fetch a paper reference and partition it into a record.
//!
//! # Architecture
//!
//! - [`route`] - Normalizes the reference and picks arXiv / PDF / HTML handling
//! - [`pdf`] - Page-ordered text decoding plus line-shape partitioning
//! - [`html`] - Selector-based title/abstract/main-text extraction
//! - [`heading`] - The section heading heuristic used for PDF text
//!
//! Routing rules are mutually exclusive and evaluated in order:
//!
//! 1. host contains `arxiv.org` → abstract pages are rewritten to their PDF,
//!    then handled as PDF
//! 2. path ends in `.pdf` (case-insensitive) → PDF
//! 3. anything else → HTML
//!
//! Every failure aborts the request; there is no retry and no partial record.
//!
//! # Example
//!
//! ```no_run
//! use paper_summarizer_core::{FetchConfig, PaperExtractor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PaperExtractor::new(&FetchConfig::default())?;
//! let record = extractor.extract("https://arxiv.org/abs/1706.03762").await?;
//! println!("{} ({} sections)", record.title, record.sections.len());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod heading;
pub mod html;
mod http_client;
pub mod pdf;
pub mod route;

pub use error::{ExtractError, FailureKind};
pub use heading::is_heading;
pub use http_client::FetchConfig;
pub use route::{Route, normalize_reference, rewrite_arxiv_abstract, route_reference};

use reqwest::Client;
use tracing::{debug, info};

use crate::record::PaperRecord;

/// Fetches paper references and turns them into [`PaperRecord`]s.
///
/// Holds only the read-only HTTP client; cloning is cheap and clones share
/// the connection pool.
#[derive(Debug, Clone)]
pub struct PaperExtractor {
    client: Client,
}

impl PaperExtractor {
    /// Creates an extractor with the given fetch settings.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ClientBuild`] when the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            client: http_client::build_fetch_client(config)?,
        })
    }

    /// Extracts a structured record from the document behind `reference`.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractError`] when the reference is not a web URL, the
    /// fetch fails or returns a non-success status, the document cannot be
    /// decoded, or it yields no text.
    #[tracing::instrument(skip(self), fields(reference = %reference))]
    pub async fn extract(&self, reference: &str) -> Result<PaperRecord, ExtractError> {
        let url = normalize_reference(reference)?;
        let route = route_reference(&url);
        debug!(?route, "routed reference");

        let record = match route {
            Route::Arxiv { pdf_url } => self.extract_pdf(pdf_url.as_str()).await?,
            Route::Pdf => self.extract_pdf(url.as_str()).await?,
            Route::Html => self.extract_html(url.as_str()).await?,
        };

        if record.full_text.trim().is_empty() {
            return Err(ExtractError::empty_content(record.source_url));
        }

        info!(
            title = %record.title,
            source_url = %record.source_url,
            sections = record.sections.len(),
            "paper extracted"
        );
        Ok(record)
    }

    async fn extract_pdf(&self, url: &str) -> Result<PaperRecord, ExtractError> {
        let bytes = http_client::fetch_bytes(&self.client, url).await?;
        let text = pdf::decode_pdf_text_blocking(bytes, url).await?;
        Ok(pdf::parse_pdf_text(&text, url))
    }

    async fn extract_html(&self, url: &str) -> Result<PaperRecord, ExtractError> {
        let body = http_client::fetch_text(&self.client, url).await?;
        Ok(html::parse_html(&body, url))
    }
}
