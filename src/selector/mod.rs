//! Selector Infrastructure
//!
//! The extraction pipeline never trusts a single selector: third-party
//! markup drifts, so every field is described by an ordered chain of
//! candidate lookups, evaluated eagerly until one yields a value. The same
//! discipline applies at container level when locating the review items of
//! a page.
//!
//! Chains are plain data (`&'static` tables in [`reviews`]), defined once
//! per listing format and reused across every item and page.

use dom_query::{Document, Selection};

use crate::dom;

pub mod reviews;

/// How a matched element is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Text content of the first matching element.
    Text,
    /// Text of every matching element, trimmed and joined with single spaces.
    TextJoined,
    /// Attribute of the first matching element carrying it.
    Attr(&'static str),
}

/// One candidate lookup for a field: a CSS selector plus a value source.
#[derive(Debug, Clone, Copy)]
pub struct Lookup {
    pub css: &'static str,
    pub value: Value,
}

impl Lookup {
    #[must_use]
    pub const fn text(css: &'static str) -> Self {
        Self { css, value: Value::Text }
    }

    #[must_use]
    pub const fn text_joined(css: &'static str) -> Self {
        Self { css, value: Value::TextJoined }
    }

    #[must_use]
    pub const fn attr(css: &'static str, name: &'static str) -> Self {
        Self { css, value: Value::Attr(name) }
    }

    /// Evaluate against one item node. `None` when nothing matched or the
    /// matched value is empty after trimming.
    fn evaluate(&self, item: &Selection) -> Option<String> {
        let matched = item.select(self.css);
        if matched.is_empty() {
            return None;
        }

        match self.value {
            Value::Text => matched.nodes().iter().find_map(|node| {
                let text = dom::text_content(&Selection::from(*node));
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }),
            Value::TextJoined => {
                let joined = matched
                    .nodes()
                    .iter()
                    .map(|node| dom::text_content(&Selection::from(*node)).trim().to_string())
                    .filter(|fragment| !fragment.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                (!joined.is_empty()).then_some(joined)
            }
            Value::Attr(name) => matched.nodes().iter().find_map(|node| {
                dom::get_attribute(&Selection::from(*node), name)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            }),
        }
    }
}

/// Ordered fallback chain for one field, with the field's default.
///
/// Candidates are evaluated in order against one item node; the first
/// non-empty result wins. A single-candidate chain is simply a chain of
/// length 1.
#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub candidates: &'static [Lookup],
    pub default: &'static str,
}

impl FieldChain {
    #[must_use]
    pub const fn new(candidates: &'static [Lookup], default: &'static str) -> Self {
        Self { candidates, default }
    }

    /// First candidate value, or `None` when the whole chain missed.
    #[must_use]
    pub fn try_resolve(&self, item: &Selection) -> Option<String> {
        self.candidates.iter().find_map(|lookup| lookup.evaluate(item))
    }

    /// First candidate value, or the chain's default.
    #[must_use]
    pub fn resolve(&self, item: &Selection) -> String {
        self.try_resolve(item)
            .unwrap_or_else(|| self.default.to_string())
    }
}

/// Locate candidate item nodes with a container-level fallback chain.
///
/// The first selector yielding a non-empty node set wins; when every
/// selector comes up empty the page simply has no items and an empty vec
/// is returned. Document order is preserved.
#[must_use]
pub fn select_items<'a>(doc: &'a Document, chain: &[&str]) -> Vec<Selection<'a>> {
    for css in chain.iter().copied() {
        let matched = doc.select(css);
        if !matched.is_empty() {
            return matched
                .nodes()
                .iter()
                .map(|node| Selection::from(*node))
                .collect();
        }
    }
    Vec::new()
}
