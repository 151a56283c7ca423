//! Response body decoding with charset re-detection.
//!
//! Servers that omit a charset get labelled ISO-8859-1 by most HTTP stacks,
//! which garbles Japanese pages. In that case the body itself is sniffed.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes inspected when looking for a `<meta>` charset declaration.
const SNIFF_WINDOW: usize = 2048;

static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([a-z0-9_\-:.]+)"#).unwrap()
});

/// Decode a response body, trusting the declared charset unless it is
/// missing or the ISO-8859-1 fallback.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = declared_charset(content_type)
        .filter(|label| !is_fallback_label(label))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| sniff_encoding(bytes));

    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Pull the `charset=` parameter out of a Content-Type header value.
pub fn declared_charset(content_type: Option<&str>) -> Option<String> {
    content_type?
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches(|c| c == '"' || c == '\'').to_ascii_lowercase())
        .filter(|value| !value.is_empty())
}

fn is_fallback_label(label: &str) -> bool {
    matches!(label, "iso-8859-1" | "latin1" | "latin-1" | "iso8859-1")
}

/// Guess the encoding from the body: BOM, then `<meta>` declaration, then
/// UTF-8 validity, otherwise Shift_JIS.
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    let head = String::from_utf8_lossy(window);
    if let Some(encoding) = META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
    {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        SHIFT_JIS
    }
}
