//! Movie main-page helpers.

use dom_query::Document;

use crate::selector::{FieldChain, Lookup};

/// Title lookup chain of the movie main page.
const TITLE: FieldChain = FieldChain::new(
    &[
        Lookup::text("h1 span[property='v:itemreviewed']"),
        Lookup::text("h1"),
        Lookup::text("title"),
    ],
    "",
);

/// Resolve the movie title from a subject page.
///
/// Used by fetching callers to confirm they landed on the expected subject
/// and not an interstitial. `None` when even the `<title>` element is
/// missing or empty.
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    TITLE.try_resolve(&doc.select("html"))
}
