//! `mscout batch`: score a list of sites and print the aggregate report.

use crate::acquisition::HttpClient;
use crate::batch::{
    parse_tabular, parse_url_list, BatchOrchestrator, BatchRun, BatchSummary, ResultHistory,
};
use crate::cli::output::{self, Styled};
use crate::cli::progress::BatchProgress;
use crate::config::Config;
use crate::error::BatchError;
use crate::report::export_to_file;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the URL list comes from.
#[derive(Debug, Clone)]
pub enum BatchInput {
    /// One URL per line.
    List(PathBuf),
    /// Delimited file; one URL picked per row.
    Tabular(PathBuf),
    /// One URL per line on stdin.
    Stdin,
}

impl BatchInput {
    /// Load and parse the raw URL list.
    pub fn load(&self) -> Result<Vec<String>> {
        let urls = match self {
            BatchInput::List(path) => parse_url_list(&read_text(path)?),
            BatchInput::Tabular(path) => parse_tabular(&read_text(path)?),
            BatchInput::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read URLs from stdin")?;
                parse_url_list(&text)
            }
        };
        debug!(count = urls.len(), input = ?self, "batch input parsed");
        Ok(urls)
    }
}

fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(crate::acquisition::charset::decode_body(&bytes, None))
}

/// Run the batch command.
pub async fn run(input: BatchInput, config: &Config, export: Option<&Path>) -> Result<()> {
    let urls = input.load()?;
    if urls.is_empty() {
        return Err(BatchError::EmptyInput.into());
    }

    let s = Styled::new();
    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
        eprintln!(
            "  Analyzing {} sites, {}ms apart",
            urls.len(),
            config.pacing_ms
        );
        eprintln!();
    }

    let client = HttpClient::new(config).context("failed to build HTTP client")?;
    let orchestrator = BatchOrchestrator::new(&client, config.pacing());
    let mut history = ResultHistory::new();
    let mut progress = BatchProgress::new(urls.len(), output::is_quiet() || output::is_json());

    let run = orchestrator.run(&urls, &mut history, &mut progress).await?;
    // One batch per process, so the history holds exactly this run's results.
    let summary = BatchSummary::from_results(history.as_slice());

    if let Some(path) = export {
        export_to_file(path, &summary.ranked)
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !output::is_quiet() && !output::is_json() {
            eprintln!("  Exported {} rows to {}", summary.analyzed(), path.display());
        }
    }

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "summary": {
                "analyzed": summary.analyzed(),
                "failed": run.failures.len(),
                "targets": summary.targets,
                "maybe": summary.maybe,
                "safe": summary.safe,
                "mean_score": summary.mean_score,
            },
            "results": summary.ranked,
            "failures": run.failures,
        }));
        return Ok(());
    }

    print_summary(&s, &run, &summary);
    Ok(())
}

/// Aggregate report: bucket counts, mean, ranked table, failures.
pub fn print_summary(s: &Styled, run: &BatchRun, summary: &BatchSummary) {
    println!();
    output::print_section(
        s,
        &format!("Results ({} analyzed, {} failed)", summary.analyzed(), run.failures.len()),
    );
    output::print_field("Targets (<=40)", &s.red(&summary.targets.to_string()));
    output::print_field("Maybe (41-55)", &s.yellow(&summary.maybe.to_string()));
    output::print_field("Safe (>55)", &s.green(&summary.safe.to_string()));
    output::print_field("Mean score", &summary.mean_display());
    println!();

    if !summary.ranked.is_empty() {
        println!(
            "    {:<4} {:>5}  {:<32} {:<24} {:<6} {:<10}",
            "Rank", "Score", "Domain", "Industry", "Social", "Recruiting"
        );
        for result in &summary.ranked {
            println!(
                "    {:<4} {:>5}  {:<32} {:<24} {:<6} {:<10}",
                result.rank.letter(),
                result.score,
                result.domain,
                result.industry.label(),
                result.signals.links.social_count(),
                if result.signals.links.recruit_found { "yes" } else { "no" }
            );
        }
        println!();
    }

    if !run.failures.is_empty() {
        output::print_section(s, "Failures");
        for failure in &run.failures {
            println!("    {} {} {}", s.fail_sym(), failure.url, s.dim(&failure.reason));
        }
        println!();
    }
}
