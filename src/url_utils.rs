//! Listing URL builders.
//!
//! The crate never fetches; these helpers give the fetching collaborator
//! the exact pagination URLs the extraction pipeline expects pages from.
//! Sort order is an explicit parameter, never process-wide state.

use url::Url;

use crate::error::Result;
use crate::record::ReviewKind;

const SUBJECT_BASE: &str = "https://movie.douban.com/subject/";

/// Page size of the short-comment listing.
pub const COMMENTS_PAGE_SIZE: u32 = 20;

/// Sort orders accepted by the short-comment listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentSort {
    /// Weighted by recency and score.
    #[default]
    NewScore,
    /// Newest first.
    Time,
    /// Most useful first.
    Useful,
}

impl CommentSort {
    /// Query-parameter value of the sort order.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewScore => "new_score",
            Self::Time => "time",
            Self::Useful => "useful",
        }
    }
}

/// Main page of a subject.
pub fn subject_url(subject_id: &str) -> Result<Url> {
    Ok(Url::parse(&format!("{SUBJECT_BASE}{subject_id}/"))?)
}

/// One page of the short-comment listing, `status=P` (watched) only.
pub fn comments_url(subject_id: &str, start: u32, sort: CommentSort) -> Result<Url> {
    let mut url = Url::parse(&format!("{SUBJECT_BASE}{subject_id}/comments"))?;
    url.query_pairs_mut()
        .append_pair("start", &start.to_string())
        .append_pair("limit", &COMMENTS_PAGE_SIZE.to_string())
        .append_pair("sort", sort.as_str())
        .append_pair("status", "P");
    Ok(url)
}

/// One page of the long-review listing.
pub fn reviews_url(subject_id: &str, start: u32) -> Result<Url> {
    let mut url = Url::parse(&format!("{SUBJECT_BASE}{subject_id}/reviews"))?;
    url.query_pairs_mut()
        .append_pair("start", &start.to_string());
    Ok(url)
}

/// Listing URL for the given kind, paged by [`COMMENTS_PAGE_SIZE`].
///
/// `sort` only applies to the short listing; the reviews listing has no
/// sort parameter.
pub fn listing_url(
    kind: ReviewKind,
    subject_id: &str,
    page: u32,
    sort: CommentSort,
) -> Result<Url> {
    let start = page * COMMENTS_PAGE_SIZE;
    match kind {
        ReviewKind::Short => comments_url(subject_id, start, sort),
        ReviewKind::Long => reviews_url(subject_id, start),
    }
}
