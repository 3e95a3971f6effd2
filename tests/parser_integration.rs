//! Integration tests for paper reference detection.
//!
//! These tests exercise `find_reference` with realistic chat-style messages.

use paper_summarizer_core::find_reference;
use paper_summarizer_core::parser::{ACADEMIC_DOMAINS, is_academic_url};

/// A message with a blog link first and a paper link later picks the paper.
#[test]
fn test_find_reference_prefers_academic_over_earlier_blog() {
    let input = "Loved the write-up at https://example.com/post and the paper \
                 https://arxiv.org/abs/2301.01234 itself";
    assert_eq!(
        find_reference(input).as_deref(),
        Some("https://arxiv.org/abs/2301.01234")
    );
}

/// With several academic links, the earliest wins.
#[test]
fn test_find_reference_earliest_academic_wins() {
    let input = "compare https://www.nature.com/articles/s41586 with \
                 https://arxiv.org/abs/1706.03762";
    assert_eq!(
        find_reference(input).as_deref(),
        Some("https://www.nature.com/articles/s41586")
    );
}

/// Without academic links, the first URL of any kind is used.
#[test]
fn test_find_reference_falls_back_to_first_url() {
    let input = "see https://example.com/a.pdf or https://example.org/b";
    assert_eq!(find_reference(input).as_deref(), Some("https://example.com/a.pdf"));
}

/// Bare `www.` tokens are detected.
#[test]
fn test_find_reference_bare_www_token() {
    assert_eq!(
        find_reference("check www.example.com/paper please").as_deref(),
        Some("www.example.com/paper")
    );
}

/// Multi-line messages and angle-bracketed links (chat markup).
#[test]
fn test_find_reference_in_chat_markup() {
    let input = "Hey bot,\ncan you read <https://dl.acm.org/doi/10.1145/3290605>\nthanks!";
    assert_eq!(
        find_reference(input).as_deref(),
        Some("https://dl.acm.org/doi/10.1145/3290605")
    );
}

/// Text without URLs yields nothing.
#[test]
fn test_find_reference_none() {
    assert_eq!(find_reference(""), None);
    assert_eq!(find_reference("summarize attention is all you need"), None);
}

/// Domain matching is case-insensitive and covers the full allow-list.
#[test]
fn test_academic_domains_all_match() {
    assert_eq!(ACADEMIC_DOMAINS.len(), 22);
    for domain in ACADEMIC_DOMAINS {
        let upper = format!("https://WWW.{}/paper", domain.to_uppercase());
        assert!(is_academic_url(&upper), "{upper} should be academic");
    }
    assert!(!is_academic_url("https://example.com/paper"));
}
