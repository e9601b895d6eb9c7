//! # douban-reviews
//!
//! Review-record extraction for Douban movie pages.
//!
//! Given already-downloaded HTML for a short-comment (`/comments`) or
//! long-review (`/reviews`) listing page, this library locates the review
//! items through ordered fallback selector chains, normalizes each into a
//! [`ReviewRecord`] with every field populated (defaults, never missing
//! values), and returns them in document order. One malformed item never
//! aborts a page.
//!
//! The crate performs no network or file I/O: fetching and tabular output
//! belong to the caller. The sink side of the contract - the fixed
//! [`REVIEW_COLUMNS`] row schema - is exposed via serde and
//! [`ReviewRecord::to_row`].
//!
//! ## Quick Start
//!
//! ```rust
//! use douban_reviews::{extract, ReviewKind};
//!
//! let html = r#"<div class="comment-item">
//!   <span class="comment-info"><a>viewer</a></span>
//!   <span class="comment-time">2023-05-01 14:30</span>
//!   <span class="short">A quiet, devastating film.</span>
//! </div>"#;
//!
//! let page = extract(html, ReviewKind::Short);
//! assert_eq!(page.records[0].username, "viewer");
//! assert_eq!(page.records[0].date, "2023-05-01");
//! assert_eq!(page.records[0].time, "14:30");
//! ```
//!
//! ## Features
//!
//! - **Chained selectors**: every field tries several generations of the
//!   site's markup vocabulary, most specific first
//! - **Total normalization**: timestamps split into date/time, rating
//!   class tokens mapped to star tiers, expand markers stripped
//! - **Page triage**: login walls and bot interstitials classified before
//!   extraction ([`access`])
//! - **Charset handling**: GB-family pages transcoded to UTF-8
//!   ([`extract_bytes`])

mod error;
mod extract;
mod patterns;
mod record;

/// Access triage for fetched pages (login walls, bot interstitials).
pub mod access;

/// Cookie header parsing for callers driving authenticated fetches.
pub mod cookies;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Item-node normalization into review records.
pub mod normalize;

/// Selector chain infrastructure and per-listing rule data.
pub mod selector;

/// Movie main-page helpers.
pub mod subject;

/// Listing URL builders for the fetching collaborator.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_page, PageExtract};
pub use record::{Rating, ReviewKind, ReviewRecord, REVIEW_COLUMNS};

/// Extract review records of one kind from an HTML listing page.
///
/// Parses the HTML leniently and runs [`extract_page`]. A page with no
/// matching review containers yields an empty result, not an error.
///
/// # Example
///
/// ```rust
/// use douban_reviews::{extract, ReviewKind};
///
/// let page = extract("<html><body><p>no reviews</p></body></html>", ReviewKind::Long);
/// assert!(page.is_empty());
/// ```
#[must_use]
pub fn extract(html: &str, kind: ReviewKind) -> PageExtract {
    let doc = dom::parse(html);
    extract_page(&doc, kind)
}

/// Extract review records from raw bytes with charset detection.
///
/// Detects the declared encoding (GB2312/GBK/GB18030 pages are common for
/// this content), transcodes to UTF-8 and extracts as [`extract`].
#[must_use]
pub fn extract_bytes(html: &[u8], kind: ReviewKind) -> PageExtract {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str, kind)
}
