//! Many domains in one run: input parsing, pacing, isolation, aggregation.

pub mod history;
pub mod input;
pub mod orchestrator;
pub mod rate_limiter;
pub mod summary;

pub use history::ResultHistory;
pub use input::{parse_tabular, parse_url_list};
pub use orchestrator::{BatchObserver, BatchOrchestrator, BatchRun, NoopObserver};
pub use rate_limiter::RateLimiter;
pub use summary::BatchSummary;
