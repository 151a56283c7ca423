//! Acquisition layer: turn raw user input into a fetched, decoded page.
//!
//! No retries happen here. A failure ends that domain's analysis.

pub mod charset;
pub mod http_client;
pub mod normalize;

pub use http_client::{FetchedPage, HttpClient, PageFetcher};
pub use normalize::normalize_url;
