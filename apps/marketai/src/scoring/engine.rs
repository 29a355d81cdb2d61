//! Lead Scoring: pluggable, trait-based scorer for BANT lead qualification.
//!
//! Default: `RuleBasedLeadScorer` (pure-Rust, deterministic, never fails).
//! `LeadScoringService` implements the same trait and tries the model first.
//!
//! The CLI holds an `Arc<dyn LeadScorer>` chosen at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::lead::LeadInput;
use crate::scoring::category::LeadCategory;
use crate::scoring::reasoning;
use crate::scoring::rules::{
    score_authority, score_budget, score_industry, score_need, score_urgency,
};
use crate::scoring::weights::{
    compute_conversion_probability, compute_lead_score, FactorScores, ScoringConfig,
};

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// One factor's score and the text explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScore {
    pub score: u32, // 0 – 100
    pub reasoning: String,
}

/// Per-factor breakdown. Key names are part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget_fit: FactorScore,
    pub need_clarity: FactorScore,
    pub urgency_level: FactorScore,
    pub authority_level: FactorScore,
    pub industry_fit: FactorScore,
}

/// Narrative reasoning. Model replies may omit it, so every field defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedReasoning {
    pub budget_analysis: String,
    pub need_alignment: String,
    pub urgency_signal: String,
    pub authority_assessment: String,
    pub industry_context: String,
    pub bant_summary: String,
}

/// Full lead score returned to callers and persisted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadScoreResult {
    pub lead_score: u32, // 0 – 100
    pub lead_category: LeadCategory,
    pub conversion_probability: u32, // 0 – 100
    pub score_breakdown: ScoreBreakdown,
    #[serde(default)]
    pub detailed_reasoning: DetailedReasoning,
    #[serde(default)]
    pub priority_recommendation: String,
    pub next_actions: Vec<String>,
    pub risk_factors: Vec<String>,
}

/// Which backend produced a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", content = "model", rename_all = "snake_case")]
pub enum ScoreSource {
    /// Parsed from the upstream model's reply; carries the model label.
    Model(String),
    #[serde(rename = "fallback")]
    RuleBased,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub result: LeadScoreResult,
    pub source: ScoreSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The lead scorer trait. Scoring always yields a result: backends that can
/// fail must fall back internally.
#[async_trait]
pub trait LeadScorer: Send + Sync {
    async fn score(&self, input: &LeadInput) -> ScoreOutcome;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedLeadScorer (deterministic fallback)
// ────────────────────────────────────────────────────────────────────────────

/// Rule-based scorer. Fast, deterministic, no I/O.
///
/// Algorithm:
/// 1. Score budget, urgency, authority, need and industry independently (0–100)
/// 2. lead_score = weighted sum / total weight, truncated
/// 3. conversion_probability = lead_score × damping
/// 4. Classify: Hot (≥70), Warm (≥45), Cold
/// 5. Assemble reasoning, next actions and risk factors
pub struct RuleBasedLeadScorer {
    config: ScoringConfig,
}

impl RuleBasedLeadScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl LeadScorer for RuleBasedLeadScorer {
    async fn score(&self, input: &LeadInput) -> ScoreOutcome {
        ScoreOutcome {
            result: evaluate(input, &self.config),
            source: ScoreSource::RuleBased,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Scores a lead with the rule tables. Pure: identical input and config give
/// an identical result.
pub fn evaluate(input: &LeadInput, config: &ScoringConfig) -> LeadScoreResult {
    let factors = FactorScores {
        budget: score_budget(&input.budget),
        urgency: score_urgency(&input.urgency),
        authority: score_authority(&input.authority),
        need: score_need(&input.business_need),
        industry: score_industry(&input.industry),
    };

    let lead_score = compute_lead_score(&factors, &config.weights);
    let conversion_probability =
        compute_conversion_probability(lead_score, config.conversion_damping_pct);
    let category = LeadCategory::from_score(lead_score);

    let budget_reason = reasoning::budget_analysis(&input.budget);
    let need_reason = reasoning::need_alignment(&input.business_need);
    let urgency_reason = reasoning::urgency_analysis(&input.urgency);
    let authority_reason = reasoning::authority_analysis(&input.authority);
    let industry_reason = reasoning::industry_analysis(&input.industry);

    let detailed_reasoning = DetailedReasoning {
        budget_analysis: format!("Budget: {}. Assessment: {budget_reason}", input.budget),
        need_alignment: format!("Need: {}. Clarity: {need_reason}", input.business_need),
        urgency_signal: format!("Urgency: {}. Readiness: {urgency_reason}", input.urgency),
        authority_assessment: format!(
            "Authority: {}. Capability: {authority_reason}",
            input.authority
        ),
        industry_context: format!("Industry: {}. Fit: {industry_reason}", input.industry),
        bant_summary: reasoning::bant_summary(&factors),
    };

    let score_breakdown = ScoreBreakdown {
        budget_fit: FactorScore {
            score: factors.budget,
            reasoning: budget_reason,
        },
        need_clarity: FactorScore {
            score: factors.need,
            reasoning: need_reason,
        },
        urgency_level: FactorScore {
            score: factors.urgency,
            reasoning: urgency_reason,
        },
        authority_level: FactorScore {
            score: factors.authority,
            reasoning: authority_reason,
        },
        industry_fit: FactorScore {
            score: factors.industry,
            reasoning: industry_reason,
        },
    };

    LeadScoreResult {
        lead_score,
        lead_category: category,
        conversion_probability,
        score_breakdown,
        detailed_reasoning,
        priority_recommendation: reasoning::priority_recommendation(category),
        next_actions: reasoning::next_actions(category, &input.authority, &input.business_need),
        risk_factors: reasoning::risk_factors(
            &input.budget,
            &input.authority,
            &input.urgency,
            &input.business_need,
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
