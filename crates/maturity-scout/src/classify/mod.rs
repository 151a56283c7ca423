//! Classifiers: industry guess from page text, rank band from total score.

pub mod industry;
pub mod rank;

pub use industry::{classify_industry, Industry};
pub use rank::{Rank, Verdict};
