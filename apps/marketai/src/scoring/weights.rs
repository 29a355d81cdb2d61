use serde::{Deserialize, Serialize};

/// Per-factor weights in integer percentage points. Must total 100.
/// Each weight lies in `0..=MAX_WEIGHT`.
///
/// Industry carries weight 0 by default: it is reported in the breakdown but
/// does not move the lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub budget: u32,
    pub urgency: u32,
    pub authority: u32,
    pub need: u32,
    pub industry: u32,
}

pub const MAX_WEIGHT: u32 = 100;

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            budget: 30,
            urgency: 30,
            authority: 20,
            need: 20,
            industry: 0,
        }
    }
}

impl ScoringWeights {
    /// Summed in `u64` so arbitrary weights cannot overflow.
    pub fn total(&self) -> u64 {
        self.as_array().iter().map(|&w| u64::from(w)).sum()
    }

    fn as_array(&self) -> [u32; 5] {
        [self.budget, self.urgency, self.authority, self.need, self.industry]
    }

    pub fn is_balanced(&self) -> bool {
        self.total() == 100
    }
}

/// Engine configuration. Constructed by the caller and passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    /// conversion_probability = lead_score × damping / 100
    pub conversion_damping_pct: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            conversion_damping_pct: 90,
        }
    }
}

/// Raw 0–100 scores produced by the five factor scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorScores {
    pub budget: u32,
    pub urgency: u32,
    pub authority: u32,
    pub need: u32,
    pub industry: u32,
}

/// Weighted lead score: Σ(weight × clamp(score)) / Σ(weight), truncated.
///
/// Integer arithmetic keeps truncation exact (70/70/70/70 is 70, never 69).
pub fn compute_lead_score(factors: &FactorScores, weights: &ScoringWeights) -> u32 {
    let total = weights.total();
    if total == 0 {
        return 0;
    }

    let scores = [
        factors.budget,
        factors.urgency,
        factors.authority,
        factors.need,
        factors.industry,
    ];
    let weighted: u64 = weights
        .as_array()
        .iter()
        .zip(scores)
        .map(|(&w, s)| u64::from(w) * u64::from(s.min(100)))
        .sum();

    // weighted / total is a weighted mean of values ≤ 100, so it fits in u32
    (weighted / total).min(100) as u32
}

pub fn compute_conversion_probability(lead_score: u32, damping_pct: u32) -> u32 {
    let damped = u64::from(lead_score.min(100)) * u64::from(damping_pct) / 100;
    damped.min(100) as u32
}
