//! Upstream model seam: the single point where a text-generation backend plugs in.
//!
//! ARCHITECTURAL RULE: the scoring service never talks to a vendor directly.
//! Backends implement `ModelBackend`; this module owns prompt text and turns the
//! raw reply into a validated `LeadScoreResult`. Any error here sends the
//! caller down the rule-based fallback path.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::scoring::reasoning::NO_RISKS_PLACEHOLDER;
use crate::scoring::{LeadCategory, LeadScoreResult};

pub mod prompts;
pub mod replay;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("no model backend configured")]
    Unavailable,

    /// Transport or vendor failure reported by a backend implementation.
    #[error("backend error: {0}")]
    Backend(String),

    #[error("model returned empty content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A text-generation backend. Implementations own transport, timeouts and auth.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Short model label reported as the score source.
    fn label(&self) -> &str;

    /// Sends one prompt and returns the raw text reply.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, UpstreamError>;
}

/// Parses a raw model reply into a lead score.
///
/// Rejects scores above 100. Re-derives `lead_category` from `lead_score` so
/// model and fallback results always agree on tier boundaries, and fills in the
/// no-risk placeholder when the model returns an empty risk list.
pub fn parse_model_reply(text: &str) -> Result<LeadScoreResult, UpstreamError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(UpstreamError::EmptyContent);
    }

    let mut result: LeadScoreResult = serde_json::from_str(text)?;

    check_range("lead_score", result.lead_score)?;
    check_range("conversion_probability", result.conversion_probability)?;
    let breakdown = &result.score_breakdown;
    check_range("budget_fit", breakdown.budget_fit.score)?;
    check_range("need_clarity", breakdown.need_clarity.score)?;
    check_range("urgency_level", breakdown.urgency_level.score)?;
    check_range("authority_level", breakdown.authority_level.score)?;
    check_range("industry_fit", breakdown.industry_fit.score)?;

    let category = LeadCategory::from_score(result.lead_score);
    if category != result.lead_category {
        debug!(
            "Model labelled score {} as {}; reclassified as {}",
            result.lead_score, result.lead_category, category
        );
        result.lead_category = category;
    }

    if result.risk_factors.is_empty() {
        result.risk_factors.push(NO_RISKS_PLACEHOLDER.to_string());
    }

    Ok(result)
}

fn check_range(field: &'static str, value: u32) -> Result<(), UpstreamError> {
    if value > 100 {
        return Err(UpstreamError::OutOfRange { field, value });
    }
    Ok(())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(|s| s.trim())
                .unwrap_or(stripped)
        }
        None => text,
    }
}
