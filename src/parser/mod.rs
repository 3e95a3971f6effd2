//! Input parsing module for locating paper references in free text.
//!
//! Message bodies arrive as unstructured text (chat messages, pasted
//! citations). This module finds URL-shaped tokens and picks the one most
//! likely to point at a paper.
//!
//! # Example
//!
//! ```
//! use paper_summarizer_core::parser::find_reference;
//!
//! let reference = find_reference("Thoughts on https://arxiv.org/abs/1706.03762 ?");
//! assert_eq!(reference.as_deref(), Some("https://arxiv.org/abs/1706.03762"));
//! ```

mod reference;
mod url;

pub use reference::{ACADEMIC_DOMAINS, find_reference, is_academic_url};
pub use url::extract_url_candidates;
