//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so the rest of the pipeline can
//! stay selector-oriented. Parsing is lenient: malformed markup yields a
//! best-effort tree, never an error.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// All text content of a node and its descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// owned storage is needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_read_text() {
        let doc = parse(r#"<div class="box">hello <span>world</span></div>"#);
        let div = doc.select("div.box");

        assert_eq!(text_content(&div), "hello world".into());
        assert_eq!(get_attribute(&div, "class"), Some("box".to_string()));
    }

    #[test]
    fn missing_attributes_return_none() {
        let doc = parse("<p>no attributes</p>");
        let p = doc.select("p");

        assert_eq!(get_attribute(&p, "title"), None);
        assert_eq!(get_attribute(&p, "class"), None);
    }

    #[test]
    fn empty_selection_is_harmless() {
        let doc = parse("<div>content</div>");
        let missing = doc.select("span");

        assert!(missing.is_empty());
        assert_eq!(text_content(&missing), "".into());
        assert_eq!(get_attribute(&missing, "class"), None);
    }

    #[test]
    fn malformed_markup_still_parses() {
        let doc = parse("<div><p>unclosed");
        assert!(doc.select("p").exists());
    }
}
