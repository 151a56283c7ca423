//! Canonicalize user input into a fetchable absolute URL.

use crate::error::{AnalysisError, Result};
use url::Url;

/// Normalize a raw domain or URL string.
///
/// Trims whitespace, prefixes `https://` when no HTTP scheme is present and
/// guarantees a non-empty path (`/`). No network access happens here.
pub fn normalize_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::validation(raw));
    }

    let candidate = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else if trimmed.contains("://") {
        return Err(AnalysisError::validation(raw));
    } else {
        format!("https://{trimmed}")
    };

    let mut url = Url::parse(&candidate).map_err(|_| AnalysisError::validation(raw))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().map_or(true, str::is_empty) {
        return Err(AnalysisError::validation(raw));
    }
    if url.path().is_empty() {
        url.set_path("/");
    }

    Ok(url)
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
