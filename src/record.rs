//! Record types for extraction output.
//!
//! One [`ReviewRecord`] is emitted per matched review item. Every field is
//! always populated - absence in the source markup is represented by the
//! field's documented default, never by a missing value. The serde field
//! names, [`REVIEW_COLUMNS`] and [`ReviewRecord::to_row`] all expose the
//! same flat-row schema, which is the durable contract with tabular sinks.

use std::fmt;

use serde::{Serialize, Serializer};

/// Column order of the flat-row sink schema.
///
/// Consumers writing tabular output must preserve this order bit-exact.
pub const REVIEW_COLUMNS: [&str; 8] = [
    "Username",
    "Date",
    "Time",
    "Location of reviewer",
    "Rating of film",
    "Popularity of review",
    "Content",
    "Review Type",
];

/// Discriminator between the two review listing formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewKind {
    /// Short comments from the `/comments` listing.
    Short,
    /// Full-length reviews from the `/reviews` listing.
    Long,
}

impl ReviewKind {
    /// Label used in the `Review Type` output column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Long => "Long",
        }
    }
}

impl fmt::Display for ReviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReviewKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Star rating derived from a CSS-class-like token.
///
/// The source markup encodes ratings as class names (`allstar40`,
/// `rating-star-20`, ...). Unmapped or absent tokens yield [`Rating::NoRating`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rating {
    #[default]
    NoRating,
    OneStar,
    TwoStars,
    ThreeStars,
    FourStars,
    FiveStars,
}

/// Marker vocabulary per tier, unioned across the markup variants seen in
/// the wild. Checked as substring containment.
const RATING_TIERS: [&[&str]; 5] = [
    &["allstar10", "rating10", "star10", "rating-star-10"],
    &["allstar20", "rating20", "star20", "rating-star-20"],
    &["allstar30", "rating30", "star30", "rating-star-30"],
    &["allstar40", "rating40", "star40", "rating-star-40"],
    &["allstar50", "rating50", "star50", "rating-star-50"],
];

const RATINGS_BY_TIER: [Rating; 5] = [
    Rating::OneStar,
    Rating::TwoStars,
    Rating::ThreeStars,
    Rating::FourStars,
    Rating::FiveStars,
];

impl Rating {
    /// Map a raw class token to a rating.
    ///
    /// Tiers are checked in ascending order 1..=5 and the first tier whose
    /// marker appears in the token wins, so the mapping is total and
    /// deterministic even for tokens carrying several markers.
    #[must_use]
    pub fn from_class_token(token: &str) -> Self {
        for (markers, rating) in RATING_TIERS.iter().zip(RATINGS_BY_TIER) {
            if markers.iter().any(|m| token.contains(m)) {
                return rating;
            }
        }
        Self::NoRating
    }

    /// Label used in the `Rating of film` output column.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NoRating => "No rating",
            Self::OneStar => "1 star",
            Self::TwoStars => "2 stars",
            Self::ThreeStars => "3 stars",
            Self::FourStars => "4 stars",
            Self::FiveStars => "5 stars",
        }
    }

}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One normalized review.
///
/// Immutable after construction; field defaults are applied by the
/// normalizer, so a record in hand is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRecord {
    /// Reviewer display name. Default `"Unknown"`.
    #[serde(rename = "Username")]
    pub username: String,

    /// Date token of the review timestamp. Default `""`.
    #[serde(rename = "Date")]
    pub date: String,

    /// Time-of-day token of the review timestamp. Empty when the source
    /// carries no time, and always empty for [`ReviewKind::Long`].
    #[serde(rename = "Time")]
    pub time: String,

    /// Reviewer location. Default `"N/A"`.
    #[serde(rename = "Location of reviewer")]
    pub location: String,

    /// Star rating of the film.
    #[serde(rename = "Rating of film")]
    pub rating: Rating,

    /// Usefulness/vote count, kept as raw text. Default `"0"`.
    #[serde(rename = "Popularity of review")]
    pub popularity: String,

    /// Review body text. Default `""`.
    #[serde(rename = "Content")]
    pub content: String,

    /// Which listing format the record came from.
    #[serde(rename = "Review Type")]
    pub kind: ReviewKind,
}

impl ReviewRecord {
    /// Flatten into one sink row, ordered per [`REVIEW_COLUMNS`].
    #[must_use]
    pub fn to_row(&self) -> [String; 8] {
        [
            self.username.clone(),
            self.date.clone(),
            self.time.clone(),
            self.location.clone(),
            self.rating.label().to_string(),
            self.popularity.clone(),
            self.content.clone(),
            self.kind.label().to_string(),
        ]
    }
}
