//! Progress display for batch runs.

use crate::batch::{BatchObserver, BatchRun};
use crate::cli::output::Styled;
use crate::model::{AnalysisResult, Failure};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Batch observer that drives an `indicatif` bar on stderr.
pub struct BatchProgress {
    bar: ProgressBar,
    styled: Styled,
}

impl BatchProgress {
    pub fn new(total: usize, hidden: bool) -> Self {
        let bar = ProgressBar::new(total as u64);
        if hidden {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) = ProgressStyle::with_template(
            "  {spinner:.cyan} [{bar:30.cyan/dim}] {pos}/{len} {msg}",
        ) {
            bar.set_style(style.progress_chars("\u{2588}\u{2589}\u{2591}"));
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        Self {
            bar,
            styled: Styled::new(),
        }
    }
}

impl BatchObserver for BatchProgress {
    fn on_item_start(&mut self, _index: usize, _total: usize, url: &str) {
        self.bar.set_message(url.to_string());
    }

    fn on_item_done(&mut self, _index: usize, result: &AnalysisResult) {
        self.bar.println(format!(
            "  {} {:<32} {:>3}  {}",
            self.styled.ok_sym(),
            result.domain,
            self.styled.score(result.score),
            result.rank
        ));
        self.bar.inc(1);
    }

    fn on_item_failed(&mut self, _index: usize, failure: &Failure) {
        self.bar.println(format!(
            "  {} {:<32} {}",
            self.styled.fail_sym(),
            failure.url,
            self.styled.dim(&failure.reason)
        ));
        self.bar.inc(1);
    }

    fn on_finish(&mut self, _run: &BatchRun) {
        self.bar.finish_and_clear();
    }
}

/// Spinner for a single long-running request.
pub fn create_spinner(message: &str, hidden: bool) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if hidden {
        bar.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        bar.set_style(style.tick_chars("\u{25b8}\u{25b9}\u{25b8}\u{25b9}\u{25b8}"));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}
