//! Factor scorers: ordered phrase tables evaluated first-match-wins.
//!
//! Every table is plain data so the ranking can be audited (`marketai rules`)
//! and tested in isolation. Rules are checked top to bottom against the
//! case-folded input; the first rule with any matching phrase decides the score.
//!
//! ORDERING RULE: a more specific phrase must sit above any phrase it contains,
//! and scores must not increase going down a table.

use serde::Serialize;

/// One row of a phrase table: any phrase hit yields `score`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhraseRule {
    pub phrases: &'static [&'static str],
    pub score: u32,
}

/// An ordered rule list plus the score used when nothing matches.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PhraseTable {
    pub rules: &'static [PhraseRule],
    pub default: u32,
}

impl PhraseTable {
    /// Scores free text against the table. Total over any input; result is 0–100.
    pub fn score(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.phrases.iter().any(|p| lower.contains(p)))
            .map(|rule| rule.score)
            .unwrap_or(self.default)
            .min(100)
    }
}

pub static BUDGET_TABLE: PhraseTable = PhraseTable {
    rules: &[
        PhraseRule {
            phrases: &["over $1m"],
            score: 100,
        },
        PhraseRule {
            phrases: &["$500k - $1m"],
            score: 95,
        },
        PhraseRule {
            phrases: &["$150k - $500k"],
            score: 85,
        },
        PhraseRule {
            phrases: &["$50k - $150k"],
            score: 70,
        },
        PhraseRule {
            phrases: &["under $50k"],
            score: 50,
        },
    ],
    // "Unknown" and free-form amounts
    default: 40,
};

pub static URGENCY_TABLE: PhraseTable = PhraseTable {
    rules: &[
        PhraseRule {
            phrases: &["immediately", "high"],
            score: 100,
        },
        PhraseRule {
            phrases: &["3 months", "medium"],
            score: 80,
        },
        PhraseRule {
            phrases: &["6+ months", "low"],
            score: 50,
        },
        PhraseRule {
            phrases: &["exploring"],
            score: 40,
        },
    ],
    default: 60,
};

pub static AUTHORITY_TABLE: PhraseTable = PhraseTable {
    rules: &[
        PhraseRule {
            phrases: &["primary decision maker"],
            score: 100,
        },
        PhraseRule {
            phrases: &["budget approver"],
            score: 90,
        },
        PhraseRule {
            phrases: &["technical influencer", "influencer"],
            score: 70,
        },
        PhraseRule {
            phrases: &["end user"],
            score: 50,
        },
    ],
    default: 60,
};

/// Business-domain vocabulary counted by the need scorer. Each word counts once.
pub const NEED_KEYWORDS: &[&str] = &[
    "crm",
    "marketing",
    "sales",
    "automation",
    "analytics",
    "inventory",
    "platform",
    "system",
    "management",
];

const NEED_BASE_SCORE: u32 = 40;
const NEED_POINTS_PER_KEYWORD: u32 = 12;
/// Needs this short (in characters) are treated as unspecified.
const NEED_SHORT_TEXT_MAX_CHARS: usize = 10;
const NEED_SHORT_TEXT_SCORE: u32 = 30;

/// Exact-match industry table, keyed by the lowercase label.
pub const INDUSTRY_SCORES: &[(&str, u32)] = &[
    ("saas", 90),
    ("healthcare", 80),
    ("fintech", 85),
    ("edtech", 75),
    ("retail", 70),
    ("other", 50),
];

pub const INDUSTRY_DEFAULT_SCORE: u32 = 50;

pub fn score_budget(budget: &str) -> u32 {
    BUDGET_TABLE.score(budget)
}

pub fn score_urgency(urgency: &str) -> u32 {
    URGENCY_TABLE.score(urgency)
}

pub fn score_authority(authority: &str) -> u32 {
    AUTHORITY_TABLE.score(authority)
}

/// Scores business-need specificity: 40 + 12 per vocabulary hit, capped at 100.
/// Text of 10 characters or fewer scores 30 regardless of content.
pub fn score_need(business_need: &str) -> u32 {
    if business_need.chars().count() <= NEED_SHORT_TEXT_MAX_CHARS {
        return NEED_SHORT_TEXT_SCORE;
    }

    let lower = business_need.to_lowercase();
    let matched = NEED_KEYWORDS
        .iter()
        .filter(|&&word| lower.contains(word))
        .count() as u32;

    (NEED_BASE_SCORE + matched * NEED_POINTS_PER_KEYWORD).min(100)
}

pub fn score_industry(industry: &str) -> u32 {
    let key = industry.trim().to_lowercase();
    INDUSTRY_SCORES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|&(_, score)| score)
        .unwrap_or(INDUSTRY_DEFAULT_SCORE)
}
