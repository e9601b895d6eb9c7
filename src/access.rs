//! Access triage for fetched pages.
//!
//! The review site answers some requests with a login wall or a bot
//! interstitial instead of content. Callers should triage a downloaded
//! page before running extraction; an empty extraction result on a
//! non-[`PageAccess::Granted`] page means "blocked", not "no reviews".

use dom_query::Document;

use crate::dom;
use crate::patterns::{BOT_MARKERS, LOGIN_MARKERS};

/// What a fetched page turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// Regular content; safe to extract.
    Granted,
    /// The site answered with a login prompt.
    LoginRequired,
    /// The site answered with a bot interstitial.
    BotChallenge,
}

/// Classify a fetched page by its body text.
#[must_use]
pub fn classify(doc: &Document) -> PageAccess {
    let text = dom::text_content(&doc.select("body"));

    if LOGIN_MARKERS.iter().any(|marker| text.contains(marker)) {
        return PageAccess::LoginRequired;
    }

    let lowered = text.to_lowercase();
    if BOT_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return PageAccess::BotChallenge;
    }

    PageAccess::Granted
}
