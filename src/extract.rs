//! Page-to-Records Driver
//!
//! Iterates the matched item nodes of one parsed listing page and runs the
//! normalizer over each, isolating per-item failures so one bad item never
//! aborts the page. The source markup is adversarial and unstable, so the
//! driver always returns a (possibly empty) result rather than erroring.

use dom_query::Document;

use crate::normalize::normalize_item;
use crate::record::{ReviewKind, ReviewRecord};
use crate::selector::{self, reviews};

/// Result of extracting one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtract {
    /// Normalized records, in document order.
    pub records: Vec<ReviewRecord>,

    /// Diagnostics for items that were skipped.
    ///
    /// Non-fatal per-item failures land here instead of aborting the page.
    pub warnings: Vec<String>,
}

impl PageExtract {
    /// True when the page yielded no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Extract every review record of the given kind from one parsed page.
///
/// Container lookups fall back through the profile's chain; zero matches
/// means the page has no reviews and yields an empty result, not an error.
/// Idempotent and side-effect-free for the same document and kind.
#[must_use]
pub fn extract_page(doc: &Document, kind: ReviewKind) -> PageExtract {
    let profile = reviews::profile(kind);
    let mut out = PageExtract::default();

    let items = selector::select_items(doc, profile.containers);
    for (index, item) in items.iter().enumerate() {
        match normalize_item(item, kind) {
            Ok(record) => out.records.push(record),
            Err(err) => out.warnings.push(format!("review item {index} skipped: {err}")),
        }
    }
    out
}
