//! Signal extractors. Each reads only the [`Document`] (or the request URL) and performs no I/O.

pub mod contact;
pub mod document;
pub mod links;
pub mod security;
pub mod seo;
pub mod tech;

pub use contact::ContactSignals;
pub use document::Document;
pub use links::LinkSignals;
pub use seo::SeoSignals;
pub use tech::TechSignals;

use serde::Serialize;
use url::Url;

/// Outputs of all five extractors for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSignals {
    pub https: bool,
    pub seo: SeoSignals,
    pub links: LinkSignals,
    pub contact: ContactSignals,
    pub tech: TechSignals,
}

impl PageSignals {
    /// Run every extractor over the document fetched for `requested`.
    pub fn extract(doc: &Document, requested: &Url) -> Self {
        Self {
            https: security::is_https(requested),
            seo: seo::extract(doc),
            links: links::extract(doc),
            contact: contact::extract(doc),
            tech: tech::extract(doc),
        }
    }
}
