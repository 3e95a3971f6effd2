//! Reference normalization and format routing.

use url::Url;

use super::ExtractError;

const ARXIV_HOST: &str = "arxiv.org";
const ARXIV_ABS_PREFIX: &str = "/abs/";
const PDF_SUFFIX: &str = ".pdf";

/// Which extraction routine handles a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// arXiv URL; `pdf_url` is the (possibly rewritten) URL to fetch.
    Arxiv {
        /// PDF location derived from the reference.
        pdf_url: Url,
    },
    /// Direct PDF link.
    Pdf,
    /// Anything else is treated as an HTML landing page.
    Html,
}

/// Parses a reference into an absolute http(s) URL.
///
/// `www.`-prefixed references found in free text carry no scheme; they are
/// fetched over https.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidReference`] for unparseable input,
/// non-web schemes, or URLs without a host.
pub fn normalize_reference(reference: &str) -> Result<Url, ExtractError> {
    let trimmed = reference.trim();
    let candidate = if trimmed.starts_with("www.") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| ExtractError::invalid_reference(reference, &e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ExtractError::invalid_reference(
                reference,
                &format!("scheme '{scheme}' is not supported"),
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(ExtractError::invalid_reference(reference, "URL has no host"));
    }

    Ok(parsed)
}

/// Picks the extraction routine. Rules are evaluated in order and are
/// mutually exclusive: arXiv host, then `.pdf` path suffix, then HTML.
#[must_use]
pub fn route_reference(url: &Url) -> Route {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if host.contains(ARXIV_HOST) {
        return Route::Arxiv {
            pdf_url: rewrite_arxiv_abstract(url),
        };
    }

    if url.path().to_ascii_lowercase().ends_with(PDF_SUFFIX) {
        return Route::Pdf;
    }

    Route::Html
}

/// Rewrites an arXiv abstract page (`/abs/<id>`) to its PDF (`/pdf/<id>.pdf`).
///
/// Non-abstract arXiv URLs are returned unchanged.
#[must_use]
pub fn rewrite_arxiv_abstract(url: &Url) -> Url {
    let Some(id) = url.path().strip_prefix(ARXIV_ABS_PREFIX) else {
        return url.clone();
    };
    let id = id.trim_end_matches('/');
    let id = id.strip_suffix(PDF_SUFFIX).unwrap_or(id);

    let mut rewritten = url.clone();
    rewritten.set_path(&format!("/pdf/{id}{PDF_SUFFIX}"));
    rewritten.set_query(None);
    rewritten.set_fragment(None);
    rewritten
}
