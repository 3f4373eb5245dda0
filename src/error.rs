use thiserror::Error;

/// Raised while turning a parsed catalog page into chapter entries.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A "PDF" anchor without an `href`; the page no longer has the expected shape.
    #[error("PDF link #{position} has no href attribute: {html}")]
    MalformedLink { position: usize, html: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed with status code {code} ({reason}). Exiting!")]
    Status {
        url: String,
        code: u16,
        reason: String,
    },
    #[error("Request to {url} failed: {source}. Exiting!")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
