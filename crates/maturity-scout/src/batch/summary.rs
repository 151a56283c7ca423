//! Aggregate view over a batch's successful results.

use crate::classify::Verdict;
use crate::model::AnalysisResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Score 40 or below.
    pub targets: usize,
    /// Score 41 to 55.
    pub maybe: usize,
    /// Score above 55.
    pub safe: usize,
    /// Arithmetic mean of all scores; `None` when nothing succeeded.
    pub mean_score: Option<f64>,
    /// Every result, lowest score first. Equal scores keep input order.
    pub ranked: Vec<AnalysisResult>,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut targets = 0;
        let mut maybe = 0;
        let mut safe = 0;
        for result in results {
            match result.verdict() {
                Verdict::Target => targets += 1,
                Verdict::Maybe => maybe += 1,
                Verdict::Safe => safe += 1,
            }
        }

        let mean_score = if results.is_empty() {
            None
        } else {
            let sum: u32 = results.iter().map(|r| u32::from(r.score)).sum();
            Some(f64::from(sum) / results.len() as f64)
        };

        let mut ranked = results.to_vec();
        ranked.sort_by_key(|r| r.score);

        Self {
            targets,
            maybe,
            safe,
            mean_score,
            ranked,
        }
    }

    pub fn analyzed(&self) -> usize {
        self.ranked.len()
    }

    /// Mean rounded to a whole point for display.
    pub fn mean_display(&self) -> String {
        match self.mean_score {
            Some(mean) => format!("{mean:.0}"),
            None => "-".to_string(),
        }
    }
}
