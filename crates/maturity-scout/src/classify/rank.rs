//! Five-band sales-priority rank derived from the total score.

use serde::Serialize;
use std::fmt;

/// Rank band. Lower score means a less mature site and a better target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
}

/// Inclusive upper bound of each band, checked in order. `D` takes the rest.
const BANDS: &[(u8, Rank)] = &[(25, Rank::S), (40, Rank::A), (55, Rank::B), (70, Rank::C)];

impl Rank {
    pub fn from_score(score: u8) -> Self {
        BANDS
            .iter()
            .find(|(upper, _)| score <= *upper)
            .map(|(_, rank)| *rank)
            .unwrap_or(Rank::D)
    }

    pub fn letter(self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::S => "top-priority target",
            Rank::A => "high-confidence sales target",
            Rank::B => "medium-confidence sales target",
            Rank::C => "needs review",
            Rank::D => "out of scope — digitally mature",
        }
    }

    /// Style class used by presentation layers.
    pub fn css_class(self) -> &'static str {
        match self {
            Rank::S => "s",
            Rank::A => "a",
            Rank::B => "b",
            Rank::C => "c",
            Rank::D => "d",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Coarse outreach bucket used by batch summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Score 40 or below.
    Target,
    /// Score 41 to 55.
    Maybe,
    /// Score above 55.
    Safe,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=40 => Verdict::Target,
            41..=55 => Verdict::Maybe,
            _ => Verdict::Safe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Target => "sales target",
            Verdict::Maybe => "worth a look",
            Verdict::Safe => "digitally mature",
        }
    }
}
