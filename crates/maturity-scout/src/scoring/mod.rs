//! Composite scorer: seven bounded category scores and their total.
//!
//! Every category is a pure function of extractor output. No category reads
//! another category's result.

pub mod category;

pub use category::{ScoreCategory, ScoreDetail, Status};

use crate::extraction::{ContactSignals, LinkSignals, PageSignals, SeoSignals, TechSignals};
use serde::Serialize;

/// All seven category results plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    /// Sum of category points, always within 0..=100.
    pub total: u8,
    /// One entry per category, in [`ScoreCategory::ALL`] order.
    pub details: Vec<ScoreDetail>,
}

impl Scorecard {
    pub fn detail(&self, category: ScoreCategory) -> Option<&ScoreDetail> {
        self.details.iter().find(|d| d.category == category)
    }
}

/// Score one page's signals.
pub fn score(signals: &PageSignals) -> Scorecard {
    let details = vec![
        security(signals.https),
        seo_basics(&signals.seo),
        social_presence(&signals.links),
        content_richness(&signals.links),
        contact_pathways(&signals.contact),
        technical_ops(&signals.tech, &signals.seo),
        recruiting_page(&signals.links),
    ];
    let total = details.iter().map(|d| d.points).sum();
    Scorecard { total, details }
}

pub fn security(https: bool) -> ScoreDetail {
    ScoreDetail::new(ScoreCategory::Security, if https { 10 } else { 0 })
}

pub fn seo_basics(seo: &SeoSignals) -> ScoreDetail {
    let mut points = 0;

    points += match seo.title_length {
        10..=60 => 8,
        0 => 0,
        _ => 4,
    };
    points += match seo.description_length {
        50..=160 => 7,
        0 => 0,
        _ => 3,
    };
    if seo.has_viewport {
        points += 5;
    }
    points += match seo.h1_count {
        0 => 0,
        1 => 3,
        _ => 1,
    };
    if seo.has_favicon {
        points += 2;
    }

    ScoreDetail::new(ScoreCategory::SeoBasics, points)
}

/// Five points per network, capped at three networks.
pub fn social_presence(links: &LinkSignals) -> ScoreDetail {
    let cap = usize::from(ScoreCategory::SocialPresence.max());
    let points = (5 * links.social_count()).min(cap);
    ScoreDetail::new(ScoreCategory::SocialPresence, points)
}

pub fn content_richness(links: &LinkSignals) -> ScoreDetail {
    let volume = match links.total_links {
        n if n > 100 => 10,
        n if n > 50 => 7,
        n if n > 20 => 4,
        _ => 0,
    };
    let depth = match links.internal_links {
        n if n > 30 => 5,
        n if n > 10 => 3,
        _ => 0,
    };
    let cap = usize::from(ScoreCategory::ContentRichness.max());
    ScoreDetail::new(ScoreCategory::ContentRichness, (volume + depth).min(cap))
}

pub fn contact_pathways(contact: &ContactSignals) -> ScoreDetail {
    let points = [
        (contact.has_form, 6_usize),
        (contact.has_phone, 4),
        (contact.has_email_link, 3),
        (contact.has_contact_page, 2),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, pts)| pts)
    .sum::<usize>()
    .min(usize::from(ScoreCategory::ContactPathways.max()));
    ScoreDetail::new(ScoreCategory::ContactPathways, points)
}

pub fn technical_ops(tech: &TechSignals, seo: &SeoSignals) -> ScoreDetail {
    let points = [
        (tech.has_analytics, 5_usize),
        (tech.has_structured_data, 3),
        (seo.has_ogp, 2),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, pts)| pts)
    .sum::<usize>()
    .min(usize::from(ScoreCategory::TechnicalOps.max()));
    ScoreDetail::new(ScoreCategory::TechnicalOps, points)
}

pub fn recruiting_page(links: &LinkSignals) -> ScoreDetail {
    ScoreDetail::new(
        ScoreCategory::RecruitingPage,
        if links.recruit_found { 10 } else { 0 },
    )
}
