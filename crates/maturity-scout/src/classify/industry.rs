//! Keyword-vote industry guess.
//!
//! Each category scores one vote per keyword present in the lowercased page
//! text. The highest vote wins; ties go to the category declared first in
//! [`INDUSTRY_KEYWORDS`]. No votes at all means [`Industry::Other`].

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Manufacturing,
    ItWeb,
    ConstructionRealEstate,
    FoodService,
    Retail,
    HealthcareWelfare,
    Education,
    ProfessionalServices,
    Other,
}

impl Industry {
    pub fn label(self) -> &'static str {
        match self {
            Industry::Manufacturing => "Manufacturing",
            Industry::ItWeb => "IT/Web",
            Industry::ConstructionRealEstate => "Construction/Real estate",
            Industry::FoodService => "Food service",
            Industry::Retail => "Retail",
            Industry::HealthcareWelfare => "Healthcare/Welfare",
            Industry::Education => "Education",
            Industry::ProfessionalServices => "Professional services",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category table in tie-break priority order.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Manufacturing,
        &["製造", "工場", "製作所", "メーカー", "manufacturing", "factory"],
    ),
    (
        Industry::ItWeb,
        &["システム", "ソフトウェア", "it", "web", "アプリ", "デジタル", "tech"],
    ),
    (
        Industry::ConstructionRealEstate,
        &["建設", "建築", "不動産", "工務店", "リフォーム", "housing"],
    ),
    (
        Industry::FoodService,
        &["飲食", "レストラン", "食堂", "カフェ", "料理", "food"],
    ),
    (
        Industry::Retail,
        &["販売", "ショップ", "ストア", "store", "shop", "通販"],
    ),
    (
        Industry::HealthcareWelfare,
        &["医療", "クリニック", "病院", "介護", "福祉", "歯科"],
    ),
    (
        Industry::Education,
        &["教育", "学校", "スクール", "塾", "学習", "academy"],
    ),
    (
        Industry::ProfessionalServices,
        &["税理士", "会計士", "弁護士", "司法書士", "行政書士", "社労士"],
    ),
];

/// Number of keywords of one category present in already-lowercased text.
fn votes(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}

/// Guess the industry of a page from its visible text.
pub fn classify_industry(text: &str) -> Industry {
    let text = text.to_lowercase();
    let mut best = (Industry::Other, 0);

    for (industry, keywords) in INDUSTRY_KEYWORDS {
        let count = votes(&text, keywords);
        // Strictly greater: earlier categories keep ties.
        if count > best.1 {
            best = (*industry, count);
        }
    }

    best.0
}
