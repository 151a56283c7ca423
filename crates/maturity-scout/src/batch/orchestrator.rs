//! Sequential batch runner with pacing and per-item failure isolation.

use crate::acquisition::PageFetcher;
use crate::batch::history::ResultHistory;
use crate::batch::rate_limiter::RateLimiter;
use crate::batch::summary::BatchSummary;
use crate::error::BatchError;
use crate::model::{AnalysisResult, Failure};
use crate::pipeline;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// Outcome of one batch. Every input lands in exactly one of the two lists,
/// each kept in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchRun {
    pub results: Vec<AnalysisResult>,
    pub failures: Vec<Failure>,
}

impl BatchRun {
    pub fn len(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_results(&self.results)
    }
}

/// Receives progress while a batch runs. All methods default to no-ops.
pub trait BatchObserver {
    /// Item `index` (zero-based) of `total` is about to be fetched.
    fn on_item_start(&mut self, _index: usize, _total: usize, _url: &str) {}

    fn on_item_done(&mut self, _index: usize, _result: &AnalysisResult) {}

    fn on_item_failed(&mut self, _index: usize, _failure: &Failure) {}

    fn on_finish(&mut self, _run: &BatchRun) {}
}

/// Observer that ignores every event.
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Drives the single-domain pipeline over a list of inputs, one at a time.
pub struct BatchOrchestrator<'a> {
    fetcher: &'a dyn PageFetcher,
    limiter: RateLimiter,
}

impl<'a> BatchOrchestrator<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, pacing: Duration) -> Self {
        Self {
            fetcher,
            limiter: RateLimiter::sequential(pacing),
        }
    }

    /// Analyze every URL in order.
    ///
    /// Successful results are also appended to `history`. Only an empty input
    /// list is an error; individual failures are collected in the run.
    pub async fn run(
        &self,
        urls: &[String],
        history: &mut ResultHistory,
        observer: &mut dyn BatchObserver,
    ) -> Result<BatchRun, BatchError> {
        if urls.is_empty() {
            return Err(BatchError::EmptyInput);
        }

        let total = urls.len();
        info!(total, pacing_ms = self.limiter.interval().as_millis() as u64, "batch starting");
        let mut run = BatchRun::default();

        for (index, raw) in urls.iter().enumerate() {
            let _guard = self.limiter.acquire().await;
            observer.on_item_start(index, total, raw);

            match pipeline::analyze_url(self.fetcher, raw).await {
                Ok(result) => {
                    observer.on_item_done(index, &result);
                    history.push(result.clone());
                    run.results.push(result);
                }
                Err(err) => {
                    warn!(index, url = %raw, error = %err, "batch item failed");
                    let failure = Failure::new(raw.as_str(), &err);
                    observer.on_item_failed(index, &failure);
                    run.failures.push(failure);
                }
            }
        }

        info!(
            analyzed = run.results.len(),
            failed = run.failures.len(),
            "batch complete"
        );
        observer.on_finish(&run);
        Ok(run)
    }
}
