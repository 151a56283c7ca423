//! One domain end to end: normalize, fetch, extract, score, rank, classify.

use crate::acquisition::{normalize_url, FetchedPage, PageFetcher};
use crate::classify::classify_industry;
use crate::error::Result;
use crate::extraction::{Document, PageSignals};
use crate::model::AnalysisResult;
use crate::scoring;
use chrono::Local;
use tracing::info;
use url::Url;

/// Analyze one raw domain or URL.
///
/// Only normalization and fetching can fail. Everything after a successful
/// fetch is a total function of the page.
pub async fn analyze_url(fetcher: &dyn PageFetcher, raw: &str) -> Result<AnalysisResult> {
    let url = normalize_url(raw)?;
    let page = fetcher.fetch(&url).await?;
    Ok(analyze_page(url, &page))
}

/// Score an already fetched page.
pub fn analyze_page(url: Url, page: &FetchedPage) -> AnalysisResult {
    let doc = Document::from_page(page);
    let signals = PageSignals::extract(&doc, &url);
    let scorecard = scoring::score(&signals);
    let industry = classify_industry(&doc.text());

    let result = AnalysisResult::new(
        url,
        page.final_url.clone(),
        signals,
        scorecard,
        industry,
        Local::now(),
    );
    info!(
        domain = %result.domain,
        score = result.score,
        rank = %result.rank,
        industry = %result.industry,
        "analysis complete"
    );
    result
}
