//! Paper reference detection with academic-domain prioritization.

use tracing::debug;

use super::url::extract_url_candidates;

/// Publisher and repository hostnames that mark a URL as a paper link.
pub const ACADEMIC_DOMAINS: [&str; 22] = [
    "arxiv.org",
    "ieee.org",
    "acm.org",
    "springer.com",
    "sciencedirect.com",
    "nature.com",
    "researchgate.net",
    "ssrn.com",
    "biorxiv.org",
    "medrxiv.org",
    "pnas.org",
    "acs.org",
    "wiley.com",
    "tandfonline.com",
    "sagepub.com",
    "oup.com",
    "frontiersin.org",
    "mdpi.com",
    "plos.org",
    "hindawi.com",
    "elsevier.com",
    "semanticscholar.org",
];

/// Returns true if the candidate mentions any allow-listed academic domain
/// (case-insensitive substring match).
#[must_use]
pub fn is_academic_url(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    ACADEMIC_DOMAINS.iter().any(|domain| lower.contains(domain))
}

/// Locates the paper reference inside a free-text message.
///
/// Returns the earliest academic-domain URL if one exists, otherwise the
/// earliest URL of any kind, otherwise `None`.
///
/// # Examples
///
/// ```
/// use paper_summarizer_core::find_reference;
///
/// let text = "blog https://example.com/post, paper https://arxiv.org/abs/2301.01234";
/// assert_eq!(find_reference(text).as_deref(), Some("https://arxiv.org/abs/2301.01234"));
/// assert_eq!(find_reference("no links here"), None);
/// ```
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
#[must_use]
pub fn find_reference(text: &str) -> Option<String> {
    let candidates = extract_url_candidates(text);

    if let Some(academic) = candidates.iter().find(|url| is_academic_url(url)) {
        debug!(url = %academic, "academic reference found");
        return Some((*academic).to_string());
    }

    let fallback = candidates.first().map(|url| (*url).to_string());
    match &fallback {
        Some(url) => debug!(url = %url, "no academic domain matched; using first URL"),
        None => debug!("no URL-shaped token in text"),
    }
    fallback
}
