//! The seven scoring categories, their caps and their status thresholds.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Security,
    SeoBasics,
    SocialPresence,
    ContentRichness,
    ContactPathways,
    TechnicalOps,
    RecruitingPage,
}

impl ScoreCategory {
    /// Report order. The maxima of these sum to 100.
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::Security,
        ScoreCategory::SeoBasics,
        ScoreCategory::SocialPresence,
        ScoreCategory::ContentRichness,
        ScoreCategory::ContactPathways,
        ScoreCategory::TechnicalOps,
        ScoreCategory::RecruitingPage,
    ];

    pub const fn max(self) -> u8 {
        match self {
            ScoreCategory::Security => 10,
            ScoreCategory::SeoBasics => 25,
            ScoreCategory::SocialPresence => 15,
            ScoreCategory::ContentRichness => 15,
            ScoreCategory::ContactPathways => 15,
            ScoreCategory::TechnicalOps => 10,
            ScoreCategory::RecruitingPage => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreCategory::Security => "Security (HTTPS)",
            ScoreCategory::SeoBasics => "SEO basics",
            ScoreCategory::SocialPresence => "Social presence",
            ScoreCategory::ContentRichness => "Content richness",
            ScoreCategory::ContactPathways => "Contact pathways",
            ScoreCategory::TechnicalOps => "Technical / ops",
            ScoreCategory::RecruitingPage => "Recruiting page",
        }
    }

    /// `(good, partial)` lower bounds. All-or-nothing categories have no partial band.
    fn thresholds(self) -> (u8, Option<u8>) {
        match self {
            ScoreCategory::Security | ScoreCategory::RecruitingPage => (10, None),
            ScoreCategory::SeoBasics => (18, Some(10)),
            ScoreCategory::SocialPresence
            | ScoreCategory::ContentRichness
            | ScoreCategory::ContactPathways => (10, Some(5)),
            ScoreCategory::TechnicalOps => (7, Some(3)),
        }
    }

    pub fn status(self, points: u8) -> Status {
        let (good, partial) = self.thresholds();
        if points >= good {
            Status::Good
        } else if partial.is_some_and(|p| points >= p) {
            Status::Partial
        } else {
            Status::Missing
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Partial,
    Missing,
}

impl Status {
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Good => "✅",
            Status::Partial => "⚠️",
            Status::Missing => "❌",
        }
    }
}

/// Points earned in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreDetail {
    pub category: ScoreCategory,
    pub name: &'static str,
    pub points: u8,
    pub max: u8,
    pub status: Status,
}

impl ScoreDetail {
    /// Wrap points already capped by the category rule.
    ///
    /// A rule that overshoots its maximum is a bug: debug builds panic, release
    /// builds clamp so the `points <= max` invariant still holds.
    pub fn new(category: ScoreCategory, points: usize) -> Self {
        let max = category.max();
        debug_assert!(
            points <= usize::from(max),
            "{} rule produced {points} points, max is {max}",
            category.name()
        );
        let points = points.min(usize::from(max)) as u8;
        Self {
            category,
            name: category.name(),
            points,
            max,
            status: category.status(points),
        }
    }

    pub fn glyph(&self) -> &'static str {
        self.status.glyph()
    }

    /// Fraction of the maximum earned, in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        f64::from(self.points) / f64::from(self.max)
    }
}
