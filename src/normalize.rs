//! Review Record Normalizer
//!
//! Turns one matched item node into a [`ReviewRecord`], resolving every
//! field through its lookup chain and applying per-field post-processing.
//! Each field falls back to its own default independently, so a record in
//! hand is always fully populated.

use dom_query::Selection;

use crate::error::Error;
use crate::patterns::{EXPAND_MARKER, WHITESPACE};
use crate::record::{Rating, ReviewKind, ReviewRecord};
use crate::selector::reviews;

/// Normalize one matched item node of the given listing format.
///
/// Returns [`Error::EmptyItem`] when no field chain resolves at all -
/// broad fallback container selectors pick up wrapper nodes, and those
/// must be skipped rather than emitted as all-default records.
pub fn normalize_item(item: &Selection, kind: ReviewKind) -> Result<ReviewRecord, Error> {
    let fields = &reviews::profile(kind).fields;

    let username = fields.username.try_resolve(item);
    let timestamp = fields.timestamp.try_resolve(item);
    let rating_token = fields.rating.try_resolve(item);
    let content = fields.content.try_resolve(item);
    let popularity = fields.popularity.try_resolve(item);
    let location = fields.location.try_resolve(item);

    if [&username, &timestamp, &rating_token, &content, &popularity, &location]
        .iter()
        .all(|field| field.is_none())
    {
        return Err(Error::EmptyItem);
    }

    let (date, mut time) = split_timestamp(timestamp.as_deref().unwrap_or_default());
    if kind == ReviewKind::Long {
        // The reviews listing renders dates without a time of day.
        time = String::new();
    }

    Ok(ReviewRecord {
        username: username.unwrap_or_else(|| fields.username.default.to_string()),
        date,
        time,
        location: location.unwrap_or_else(|| fields.location.default.to_string()),
        rating: Rating::from_class_token(rating_token.as_deref().unwrap_or_default()),
        popularity: popularity.unwrap_or_else(|| fields.popularity.default.to_string()),
        content: clean_content(content.as_deref().unwrap_or_default()),
        kind,
    })
}

/// Split a raw timestamp token on whitespace into `(date, time)`.
///
/// `time` is empty when the source carries a bare date.
fn split_timestamp(raw: &str) -> (String, String) {
    let mut tokens = raw.split_whitespace();
    let date = tokens.next().unwrap_or_default().to_string();
    let time = tokens.next().unwrap_or_default().to_string();
    (date, time)
}

/// Strip the trailing "(expand)" marker left on truncated bodies and
/// collapse internal whitespace runs left by nested markup.
fn clean_content(raw: &str) -> String {
    let stripped = EXPAND_MARKER.replace(raw, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}
