use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{LeadScoreResult, ScoreOutcome, ScoreSource};

/// Raw lead form fields. All free text; only non-emptiness is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadInput {
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub business_need: String,
    #[serde(default)]
    pub urgency: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub industry: String,
}

impl LeadInput {
    /// Names of required fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("budget", &self.budget),
            ("business_need", &self.business_need),
            ("urgency", &self.urgency),
            ("authority", &self.authority),
            ("industry", &self.industry),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// A scored lead as handed to the persistence layer: raw input, result,
/// which backend produced it, and caller-attached identity and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    pub input: LeadInput,
    pub result: LeadScoreResult,
    pub scorer_backend: ScoreSource,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn new(input: LeadInput, outcome: ScoreOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            result: outcome.result,
            scorer_backend: outcome.source,
            created_at: Utc::now(),
        }
    }
}
