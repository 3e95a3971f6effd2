//! Shared User-Agent string for document fetches.
//!
//! Publisher sites routinely reject non-browser agents on PDF and landing
//! pages, so fetches present a fixed browser-style identity.

/// Browser User-Agent sent with every document fetch.
pub(crate) const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default User-Agent for document fetch requests.
#[must_use]
pub(crate) fn default_fetch_user_agent() -> String {
    FETCH_USER_AGENT.to_string()
}
