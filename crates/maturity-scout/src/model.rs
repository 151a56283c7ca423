//! The record produced for one analyzed domain.

use crate::classify::{Industry, Rank, Verdict};
use crate::error::AnalysisError;
use crate::extraction::PageSignals;
use crate::scoring::{ScoreCategory, ScoreDetail, Scorecard};
use chrono::{DateTime, Local};
use serde::Serialize;
use url::Url;

/// Everything known about one domain after a successful pipeline run.
///
/// Built once at the end of [`crate::pipeline::analyze_page`] and never
/// mutated afterwards; presentation layers read it without re-extracting.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Normalized input URL.
    pub url: Url,
    /// URL after redirects.
    pub final_url: Url,
    /// Lowercased host of the input URL.
    pub domain: String,
    pub score: u8,
    pub rank: Rank,
    pub rank_label: &'static str,
    pub industry: Industry,
    pub analyzed_at: DateTime<Local>,
    pub signals: PageSignals,
    pub details: Vec<ScoreDetail>,
}

impl AnalysisResult {
    pub fn new(
        url: Url,
        final_url: Url,
        signals: PageSignals,
        scorecard: Scorecard,
        industry: Industry,
        analyzed_at: DateTime<Local>,
    ) -> Self {
        let domain = url
            .host_str()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let rank = Rank::from_score(scorecard.total);
        Self {
            url,
            final_url,
            domain,
            score: scorecard.total,
            rank,
            rank_label: rank.label(),
            industry,
            analyzed_at,
            signals,
            details: scorecard.details,
        }
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.score)
    }

    pub fn detail(&self, category: ScoreCategory) -> Option<&ScoreDetail> {
        self.details.iter().find(|d| d.category == category)
    }
}

/// A domain that could not be analyzed, with the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// The input exactly as given.
    pub url: String,
    pub kind: &'static str,
    pub reason: String,
}

impl Failure {
    pub fn new(url: impl Into<String>, error: &AnalysisError) -> Self {
        Self {
            url: url.into(),
            kind: error.kind(),
            reason: error.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::result_with_score;
    use super::*;

    #[test]
    fn test_rank_and_domain_derived() {
        let result = result_with_score("WWW.Example.jp", 38);
        assert_eq!(result.domain, "www.example.jp");
        assert_eq!(result.rank, Rank::A);
        assert_eq!(result.rank_label, Rank::A.label());
        assert_eq!(result.verdict(), Verdict::Target);
    }

    #[test]
    fn test_failure_reason_from_error() {
        let failure = Failure::new("bad.example", &AnalysisError::HttpStatus { code: 503 });
        assert_eq!(failure.reason, "HTTP 503");
        assert_eq!(failure.kind, "http_status");
    }
}
