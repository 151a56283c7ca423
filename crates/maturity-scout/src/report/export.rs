//! Flat tabular export, one row per result.

use crate::model::AnalysisResult;
use std::io::{self, Write};
use std::path::Path;

/// Timestamp layout used in the first column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const COLUMNS: [&str; 25] = [
    "analyzed_at",
    "url",
    "score",
    "rank",
    "rank_label",
    "industry",
    "https",
    "title",
    "description",
    "viewport",
    "ogp",
    "h1_count",
    "total_links",
    "internal_links",
    "external_links",
    "social_count",
    "social_networks",
    "recruiting",
    "form",
    "phone",
    "email_link",
    "analytics",
    "structured_data",
    "image_count",
    "images_without_alt",
];

fn mark(flag: bool) -> &'static str {
    if flag {
        "○"
    } else {
        "×"
    }
}

/// Column values for one result, in [`COLUMNS`] order.
pub fn row(result: &AnalysisResult) -> [String; 25] {
    let s = &result.signals;
    let networks: Vec<&str> = s.links.social_links.keys().map(String::as_str).collect();
    [
        result.analyzed_at.format(TIMESTAMP_FORMAT).to_string(),
        result.url.to_string(),
        result.score.to_string(),
        result.rank.letter().to_string(),
        result.rank_label.to_string(),
        result.industry.label().to_string(),
        mark(s.https).to_string(),
        s.seo.title.clone(),
        mark(s.seo.description_length > 0).to_string(),
        mark(s.seo.has_viewport).to_string(),
        mark(s.seo.has_ogp).to_string(),
        s.seo.h1_count.to_string(),
        s.links.total_links.to_string(),
        s.links.internal_links.to_string(),
        s.links.external_links.to_string(),
        s.links.social_count().to_string(),
        networks.join(" / "),
        mark(s.links.recruit_found).to_string(),
        mark(s.contact.has_form).to_string(),
        s.contact.phone_number.clone().unwrap_or_default(),
        mark(s.contact.has_email_link).to_string(),
        mark(s.tech.has_analytics).to_string(),
        mark(s.tech.has_structured_data).to_string(),
        s.tech.image_count.to_string(),
        s.tech.images_without_alt.to_string(),
    ]
}

/// Quote a field when it contains a delimiter, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_line<W: Write>(out: &mut W, fields: &[impl AsRef<str>]) -> io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape(f.as_ref())).collect();
    write!(out, "{}\r\n", line.join(","))
}

/// Write a header plus one row per result.
pub fn write_csv<'a, W, I>(out: &mut W, results: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    write_line(out, &COLUMNS)?;
    for result in results {
        write_line(out, &row(result))?;
    }
    Ok(())
}

/// Render the export to a string.
pub fn to_csv_string<'a>(results: impl IntoIterator<Item = &'a AnalysisResult>) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_csv(&mut buf, results);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write the export to `path`, with a UTF-8 BOM so spreadsheet tools detect the encoding.
pub fn export_to_file<'a>(
    path: &Path,
    results: impl IntoIterator<Item = &'a AnalysisResult>,
) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    file.write_all("\u{feff}".as_bytes())?;
    write_csv(&mut file, results)?;
    file.flush()
}
