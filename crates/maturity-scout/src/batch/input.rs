//! Turning pasted text or a delimited file into a list of raw URLs.

/// Suffixes that make a bare cell look like a domain.
pub const KNOWN_SUFFIXES: &[&str] = &[".jp", ".com", ".co.jp", ".net", ".org", ".io"];

const DELIMITER: char = ',';

/// One URL per line; surrounding whitespace trimmed, blank lines dropped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick at most one URL-looking cell from each row of a delimited file.
///
/// Cells are trimmed and unquoted. A cell qualifies when it starts with
/// `http://`/`https://` or contains a dot, and also either starts with
/// `http` or carries one of [`KNOWN_SUFFIXES`] (at the end, or before a
/// path). The first qualifying cell in a row wins.
pub fn parse_tabular(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .filter_map(|row| {
            row.split(DELIMITER)
                .map(clean_cell)
                .find(|cell| looks_like_url(cell))
                .map(str::to_string)
        })
        .collect()
}

fn clean_cell(cell: &str) -> &str {
    cell.trim().trim_matches('"').trim()
}

pub fn looks_like_url(cell: &str) -> bool {
    if cell.is_empty() {
        return false;
    }
    let has_scheme = cell.starts_with("http://") || cell.starts_with("https://");
    if !has_scheme && !cell.contains('.') {
        return false;
    }
    cell.starts_with("http")
        || KNOWN_SUFFIXES
            .iter()
            .any(|suffix| cell.ends_with(suffix) || cell.contains(&format!("{suffix}/")))
}
