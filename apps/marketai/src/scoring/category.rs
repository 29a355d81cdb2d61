use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores at or above this are Hot.
pub const HOT_THRESHOLD: u32 = 70;
/// Scores at or above this (and below Hot) are Warm.
pub const WARM_THRESHOLD: u32 = 45;

/// Lead tier derived from the numeric lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadCategory {
    Hot,
    Warm,
    Cold,
}

impl LeadCategory {
    /// Lower bounds are inclusive: 70 is Hot, 45 is Warm.
    pub fn from_score(score: u32) -> Self {
        if score >= HOT_THRESHOLD {
            LeadCategory::Hot
        } else if score >= WARM_THRESHOLD {
            LeadCategory::Warm
        } else {
            LeadCategory::Cold
        }
    }

    pub fn priority_tier(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "A-Tier",
            LeadCategory::Warm => "B-Tier",
            LeadCategory::Cold => "C-Tier",
        }
    }

    pub fn contact_timeline(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "within 24 hours",
            LeadCategory::Warm => "within 3 days",
            LeadCategory::Cold => "nurture sequence",
        }
    }

    pub fn priority_note(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "Immediate action recommended.",
            LeadCategory::Warm => "Strong opportunity.",
            LeadCategory::Cold => "Monitor and nurture.",
        }
    }

    /// Final entry of `next_actions` for this tier.
    pub fn closing_action(&self) -> &'static str {
        match self {
            LeadCategory::Hot => "Expedite proposal and timeline",
            LeadCategory::Warm => "Conduct discovery call to advance opportunity",
            LeadCategory::Cold => "Add to nurture email sequence",
        }
    }
}

impl fmt::Display for LeadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeadCategory::Hot => "Hot",
            LeadCategory::Warm => "Warm",
            LeadCategory::Cold => "Cold",
        };
        f.write_str(label)
    }
}
