//! URL candidate scanning over free text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Regex pattern for finding URL-shaped tokens in text.
/// Matches scheme-prefixed or `www.`-prefixed tokens, capturing until
/// whitespace, angle brackets, or double quotes.
#[allow(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Message bodies wrap links as <https://...> or href="...", so those delimiters end a match
    Regex::new(r#"https?://[^\s<>"]+|www\.[^\s<>"]+"#).expect("URL regex is valid") // Static pattern, safe to panic
});

/// Returns every URL-shaped substring of `input`, in document order.
///
/// Candidates are returned verbatim: no normalization, validation, or
/// trailing punctuation cleanup is applied. Reference detection is purely
/// syntactic.
///
/// # Examples
///
/// ```
/// use paper_summarizer_core::parser::extract_url_candidates;
///
/// let urls = extract_url_candidates("see https://arxiv.org/abs/1 and www.example.com");
/// assert_eq!(urls, vec!["https://arxiv.org/abs/1", "www.example.com"]);
/// ```
#[tracing::instrument(level = "trace", skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn extract_url_candidates(input: &str) -> Vec<&str> {
    URL_PATTERN
        .find_iter(input)
        .map(|m| {
            trace!(url = %m.as_str(), "found URL candidate");
            m.as_str()
        })
        .collect()
}
