//! Error types for douban-reviews.
//!
//! Field-level selector misses are not errors (they resolve to defaults),
//! and a page with no review containers yields an empty result rather than
//! an `Err`. The variants here cover the cases that do surface.

/// Error type for extraction and URL-building operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A matched container node carried none of the expected review fields.
    ///
    /// Broad fallback container selectors routinely pick up wrapper
    /// elements; those are skipped rather than emitted as all-default
    /// ghost records.
    #[error("no review fields matched on item")]
    EmptyItem,

    /// A listing URL could not be assembled.
    #[error("invalid listing URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
