//! PDF extraction: decode pages to text, then partition the text by line shape.

use std::panic::{AssertUnwindSafe, catch_unwind, set_hook, take_hook};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::record::{PaperRecord, Sections, UNKNOWN_TITLE};

use super::ExtractError;
use super::heading::is_heading;

const ABSTRACT_TRIGGER: &str = "abstract";
const ABSTRACT_TERMINATORS: [&str; 2] = ["introduction", "keywords"];

// The PDF decoder panics on some malformed inputs. The panic hook is
// swapped out while decoding so expected failures do not spam stderr.
static DECODE_PANIC_HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Decodes PDF bytes into text, pages concatenated in page order.
///
/// # Errors
///
/// Returns [`ExtractError::PdfDecode`] if the decoder reports an error or
/// panics on malformed input.
pub fn decode_pdf_text(bytes: &[u8], url: &str) -> Result<String, ExtractError> {
    match catch_unwind_silent(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::pdf_decode(url, format!("{e:?}"))),
        Err(_) => {
            warn!(url, "PDF decoder panicked on malformed input");
            Err(ExtractError::pdf_decode(url, "decoder panicked on malformed input"))
        }
    }
}

/// Decodes PDF bytes on the blocking pool so the async worker stays free.
///
/// # Errors
///
/// Returns [`ExtractError::PdfDecode`] if decoding fails or the decode task
/// is cancelled or panics outside the decoder.
pub async fn decode_pdf_text_blocking(bytes: Vec<u8>, url: &str) -> Result<String, ExtractError> {
    let task_url = url.to_string();
    tokio::task::spawn_blocking(move || decode_pdf_text(&bytes, &task_url))
        .await
        .map_err(|e| ExtractError::pdf_decode(url, format!("decode task failed: {e}")))?
}

fn catch_unwind_silent<F, T>(operation: F) -> Result<T, Box<dyn std::any::Any + Send + 'static>>
where
    F: FnOnce() -> T + std::panic::UnwindSafe,
{
    let _panic_hook_guard = DECODE_PANIC_HOOK_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let previous_hook = take_hook();
    set_hook(Box::new(|_| {}));
    let outcome = catch_unwind(operation);
    set_hook(previous_hook);
    outcome
}

/// Builds a record from flattened PDF text.
///
/// `full_text` is kept verbatim; title, abstract and sections are derived
/// from its lines.
#[must_use]
pub fn parse_pdf_text(text: &str, source_url: &str) -> PaperRecord {
    let title = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(UNKNOWN_TITLE)
        .to_string();

    let abstract_text = extract_abstract(text);
    let sections = extract_sections(text);
    debug!(
        title = %title,
        abstract_len = abstract_text.len(),
        sections = sections.len(),
        "parsed PDF text"
    );

    PaperRecord {
        title,
        abstract_text,
        sections,
        full_text: text.to_string(),
        source_url: source_url.to_string(),
    }
}

/// Collects the lines after the first line mentioning "abstract" up to the
/// first line starting with "introduction" or "keywords".
fn extract_abstract(text: &str) -> String {
    let mut lines = text.lines();
    if !lines
        .by_ref()
        .any(|line| line.to_lowercase().contains(ABSTRACT_TRIGGER))
    {
        return String::new();
    }

    let mut parts: Vec<&str> = Vec::new();
    for line in lines.map(str::trim) {
        let lower = line.to_lowercase();
        if ABSTRACT_TERMINATORS
            .iter()
            .any(|terminator| lower.starts_with(terminator))
        {
            break;
        }
        // Later lines mentioning "abstract" are body text, not a new trigger.
        if !line.is_empty() {
            parts.push(line);
        }
    }
    parts.join(" ")
}

/// Splits the text into heading-delimited sections.
///
/// Lines before the first heading are dropped. A heading followed by no
/// body lines is not recorded.
fn extract_sections(text: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current: Option<&str> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if is_heading(line) {
            if let Some(label) = current
                && !body.is_empty()
            {
                sections.insert(label.to_string(), body.join(" "));
            }
            body.clear();
            current = Some(line);
        } else if current.is_some() {
            body.push(line);
        }
    }

    if let Some(label) = current
        && !body.is_empty()
    {
        sections.insert(label.to_string(), body.join(" "));
    }

    sections
}
