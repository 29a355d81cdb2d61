use anyhow::{bail, Context, Result};

use crate::scoring::weights::MAX_WEIGHT;
use crate::scoring::{ScoringConfig, ScoringWeights};

/// Application configuration loaded from environment variables.
/// Built once in `main` and passed down; nothing reads the environment later.
#[derive(Debug, Clone)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let weights = match std::env::var("LEAD_SCORE_WEIGHTS") {
            Ok(raw) => parse_weights(&raw).context("LEAD_SCORE_WEIGHTS is invalid")?,
            Err(_) => ScoringWeights::default(),
        };

        Ok(Config {
            scoring: ScoringConfig {
                weights,
                ..ScoringConfig::default()
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Parses `budget,urgency,authority,need,industry` percentage points.
/// Each value must be at most 100 and the five must total 100.
pub fn parse_weights(raw: &str) -> Result<ScoringWeights> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("'{}' is not a whole number", part.trim()))
        })
        .collect::<Result<Vec<u32>>>()?;

    if let Some(&weight) = values.iter().find(|&&w| w > MAX_WEIGHT) {
        bail!("weight {weight} exceeds {MAX_WEIGHT}");
    }

    let &[budget, urgency, authority, need, industry] = values.as_slice() else {
        bail!(
            "expected 5 comma-separated weights (budget,urgency,authority,need,industry), got {}",
            values.len()
        );
    };

    let weights = ScoringWeights {
        budget,
        urgency,
        authority,
        need,
        industry,
    };

    if !weights.is_balanced() {
        bail!("weights must total 100, got {}", weights.total());
    }

    Ok(weights)
}
