//! Maturity Scout: score a company website's digital maturity from its
//! public home page and rank it as a sales-outreach target.
//!
//! The pipeline for one domain is [`acquisition`] → [`extraction`] →
//! [`scoring`] → [`classify`]; [`batch`] runs it over many domains and
//! [`report`] flattens finished results for export.

pub mod acquisition;
pub mod batch;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use acquisition::{normalize_url, FetchedPage, HttpClient, PageFetcher};
pub use batch::{BatchOrchestrator, BatchRun, BatchSummary, ResultHistory};
pub use classify::{Industry, Rank, Verdict};
pub use config::Config;
pub use error::{AnalysisError, BatchError};
pub use model::{AnalysisResult, Failure};
pub use pipeline::{analyze_page, analyze_url};
pub use scoring::{ScoreCategory, ScoreDetail, Scorecard};
