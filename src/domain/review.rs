use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::property::string_or_number;

pub const DEFAULT_AVATAR: &str = "/assets/default-avatar.png";

/// Glyph repeated once per rating point.
pub const STAR: char = '★';

/// Upper bound on rendered glyphs; a corrupt rating must not allocate unbounded text.
pub const MAX_STARS: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewUser {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub user: ReviewUser,
    /// Usually whole stars, but fractional values are accepted.
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

impl Review {
    pub fn avatar_or_default(&self) -> &str {
        match self.user.avatar.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DEFAULT_AVATAR,
        }
    }

    pub fn stars(&self) -> String {
        std::iter::repeat_n(STAR, star_count(self.rating)).collect()
    }

    /// The review timestamp as a calendar date (`M/D/YYYY`), or verbatim if unparsable.
    pub fn display_date(&self) -> String {
        parse_review_date(&self.date).map_or_else(
            || self.date.clone(),
            |date| date.format("%-m/%-d/%Y").to_string(),
        )
    }
}

/// Number of star glyphs for a rating: its whole part, at least 0.
pub fn star_count(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    // Float-to-int `as` saturates: negatives land on 0, infinity on usize::MAX.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rating.trunc() as usize;
    whole.min(MAX_STARS)
}

fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
