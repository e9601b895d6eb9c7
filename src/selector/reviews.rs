//! Review Listing Selectors
//!
//! Priority-ordered lookup chains for the two listing formats. The short
//! listing (`/comments`) and the long listing (`/reviews`) use different
//! markup vocabularies, and both have drifted over time - hence several
//! generations of class names per field, most specific first.
//!
//! Per-format differences are data, not code: the normalizer runs the same
//! steps over whichever profile [`profile`] hands it.

use crate::record::ReviewKind;
use crate::selector::{FieldChain, Lookup};

/// Field chains for one listing format.
#[derive(Debug, Clone, Copy)]
pub struct FieldChains {
    pub username: FieldChain,
    pub timestamp: FieldChain,
    pub rating: FieldChain,
    pub content: FieldChain,
    pub popularity: FieldChain,
    pub location: FieldChain,
}

/// Container chain plus field chains for one listing format.
#[derive(Debug, Clone, Copy)]
pub struct ReviewProfile {
    /// Container-level chain locating one node per review item.
    pub containers: &'static [&'static str],
    pub fields: FieldChains,
}

/// Chains for the short-comment listing.
pub static SHORT: ReviewProfile = ReviewProfile {
    containers: &[
        "div.comment-item",
        "div[class*='comment']",
        "div.list > div",
    ],
    fields: FieldChains {
        username: FieldChain::new(
            &[
                Lookup::text("a.comment-info"),
                Lookup::text("span.comment-info > a"),
                Lookup::attr("div.avatar > a", "title"),
                Lookup::text("span[class*='comment-info'] a"),
            ],
            "Unknown",
        ),
        timestamp: FieldChain::new(
            &[
                Lookup::text("span.comment-time"),
                Lookup::text("span.comment-date"),
                Lookup::text("span[class*='time']"),
            ],
            "",
        ),
        rating: FieldChain::new(
            &[
                Lookup::attr("span[class*='allstar']", "class"),
                Lookup::attr("span[class*='rating']", "class"),
                Lookup::attr("span[class*='star']", "class"),
            ],
            "",
        ),
        content: FieldChain::new(
            &[
                Lookup::text("span.short"),
                Lookup::text("p.comment-content"),
                Lookup::text_joined("div.comment > p"),
                Lookup::text_joined("[class*='comment'] p"),
            ],
            "",
        ),
        popularity: FieldChain::new(
            &[
                Lookup::text("span.votes"),
                Lookup::text("span[class*='vote-count']"),
                Lookup::text("a[class*='btn'] > span"),
            ],
            "0",
        ),
        location: FieldChain::new(
            &[
                Lookup::text("span.comment-location"),
                Lookup::text("span[class*='from']"),
            ],
            "N/A",
        ),
    },
};

/// Chains for the long-review listing.
pub static LONG: ReviewProfile = ReviewProfile {
    containers: &[
        "div[class*='review-item']",
        "div[class*='review']",
        "div.review-list > div > div",
        "div[class*='main'] div[class*='review'], div[class*='main'] div[class*='content']",
    ],
    fields: FieldChains {
        username: FieldChain::new(
            &[
                Lookup::text("a.name"),
                Lookup::text("a[href*='/people/']"),
                Lookup::text("header > a"),
                Lookup::text("h3 > a"),
                Lookup::text("span.author > a"),
            ],
            "Unknown",
        ),
        timestamp: FieldChain::new(
            &[
                Lookup::text("span.main-meta"),
                Lookup::text("span.time"),
                Lookup::text("header > span"),
                Lookup::text("span.review-time"),
                Lookup::text("span[class*='date']"),
            ],
            "",
        ),
        rating: FieldChain::new(
            &[
                Lookup::attr("span[class*='allstar']", "class"),
                Lookup::attr("span[class*='rating']", "class"),
                Lookup::attr("header span[class*='star']", "class"),
                Lookup::attr("span[class*='rate']", "class"),
            ],
            "",
        ),
        content: FieldChain::new(
            &[
                Lookup::text("div.short-content"),
                Lookup::text("p.content"),
                Lookup::text("div.review-content"),
                Lookup::text_joined("div.review-content p"),
                Lookup::text_joined("div[class*='content']"),
            ],
            "",
        ),
        popularity: FieldChain::new(
            &[
                Lookup::text("span.votes"),
                Lookup::text("a[class*='action'] > span"),
                Lookup::text("a.action-btn.up > span"),
                Lookup::text("span[class*='useful']"),
            ],
            "0",
        ),
        location: FieldChain::new(
            &[
                Lookup::text("span.loc"),
                Lookup::text("span[class*='location']"),
            ],
            "N/A",
        ),
    },
};

/// Profile for a listing format.
#[must_use]
pub fn profile(kind: ReviewKind) -> &'static ReviewProfile {
    match kind {
        ReviewKind::Short => &SHORT,
        ReviewKind::Long => &LONG,
    }
}
