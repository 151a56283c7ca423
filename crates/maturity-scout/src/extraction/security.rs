//! Transport security signal.

use url::Url;

/// True iff the requested URL uses HTTPS.
///
/// Judged on the normalized request URL, not where redirects end up: an
/// `http://` address that bounces to `https://` still scores as insecure.
pub fn is_https(requested: &Url) -> bool {
    requested.scheme() == "https"
}
