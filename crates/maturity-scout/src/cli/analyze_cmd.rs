//! `mscout analyze <url>`: score one site.

use crate::acquisition::HttpClient;
use crate::cli::output::{self, Styled};
use crate::cli::progress;
use crate::config::Config;
use crate::model::AnalysisResult;
use crate::pipeline;
use crate::report::export_to_file;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the analyze command.
pub async fn run(url: &str, config: &Config, export: Option<&Path>) -> Result<()> {
    let client = HttpClient::new(config).context("failed to build HTTP client")?;
    let spinner = progress::create_spinner(
        &format!("Analyzing {url}"),
        output::is_quiet() || output::is_json(),
    );
    let outcome = pipeline::analyze_url(&client, url).await;
    spinner.finish_and_clear();

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "url": url,
                    "error": err.kind(),
                    "reason": err.to_string(),
                }));
            }
            return Err(err).with_context(|| format!("could not analyze {url}"));
        }
    };

    if let Some(path) = export {
        export_to_file(path, std::slice::from_ref(&result))
            .with_context(|| format!("failed to write {}", path.display()))?;
        if !output::is_quiet() {
            eprintln!("  Exported to {}", path.display());
        }
    }

    if output::is_json() {
        output::print_json(&serde_json::to_value(&result)?);
        return Ok(());
    }

    print_result(&Styled::new(), &result);
    Ok(())
}

/// Human-readable report for one result.
pub fn print_result(s: &Styled, result: &AnalysisResult) {
    let signals = &result.signals;

    println!();
    println!(
        "  {}  {} / 100   rank {} ({})",
        s.bold(&result.domain),
        s.score(result.score),
        s.bold(result.rank.letter()),
        result.rank_label
    );
    println!(
        "  {}",
        s.dim(&format!(
            "{}  {}  {}",
            result.industry,
            result.verdict().label(),
            result.analyzed_at.format("%Y-%m-%d %H:%M")
        ))
    );
    println!();

    output::print_section(s, "Breakdown");
    for detail in &result.details {
        println!(
            "    {} {:<18} {} {:>2}/{}",
            detail.glyph(),
            detail.name,
            s.cyan(&output::meter(detail.points, detail.max, 20)),
            detail.points,
            detail.max
        );
    }
    println!();

    output::print_section(s, "SEO");
    let title = if signals.seo.title.is_empty() {
        s.dim("(none)")
    } else {
        signals.seo.title.clone()
    };
    output::print_field("Title", &format!("{title} ({} chars)", signals.seo.title_length));
    output::print_field(
        "Description",
        &format!("{} chars", signals.seo.description_length),
    );
    output::print_field("Viewport", &output::yes_no(s, signals.seo.has_viewport));
    output::print_field("OGP", &output::yes_no(s, signals.seo.has_ogp));
    output::print_field("H1", &signals.seo.h1_count.to_string());
    output::print_field("Canonical", &output::yes_no(s, signals.seo.has_canonical));
    println!();

    output::print_section(s, "Links");
    output::print_field(
        "Total",
        &format!(
            "{} ({} internal, {} external)",
            signals.links.total_links, signals.links.internal_links, signals.links.external_links
        ),
    );
    for (network, href) in &signals.links.social_links {
        output::print_field(network, &s.dim(href));
    }
    let recruit = match &signals.links.recruit_url {
        Some(href) => format!("{} {}", output::yes_no(s, true), s.dim(href)),
        None => output::yes_no(s, false),
    };
    output::print_field("Recruiting", &recruit);
    println!();

    output::print_section(s, "Contact");
    output::print_field("Form", &output::yes_no(s, signals.contact.has_form));
    output::print_field(
        "Phone",
        signals
            .contact
            .phone_number
            .as_deref()
            .unwrap_or("-"),
    );
    output::print_field("Email link", &output::yes_no(s, signals.contact.has_email_link));
    output::print_field("Contact page", &output::yes_no(s, signals.contact.has_contact_page));
    println!();

    output::print_section(s, "Technical");
    output::print_field("Analytics", &output::yes_no(s, signals.tech.has_analytics));
    output::print_field(
        "Structured data",
        &output::yes_no(s, signals.tech.has_structured_data),
    );
    let coverage = signals
        .tech
        .alt_coverage()
        .map(|pct| format!("{pct}% alt coverage"))
        .unwrap_or_else(|| "no images".to_string());
    output::print_field(
        "Images",
        &format!("{} ({coverage})", signals.tech.image_count),
    );

    if output::is_verbose() && result.final_url != result.url {
        println!();
        output::print_field("Redirected to", result.final_url.as_str());
    }
    println!();
}
