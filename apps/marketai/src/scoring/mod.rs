// BANT lead scoring engine.
// Pure and synchronous: factor tables → weighted combiner → tier classifier → reasoning.
// Safe to call from any number of tasks; the tables are read-only statics.

pub mod category;
pub mod engine;
pub mod reasoning;
pub mod rules;
pub mod weights;

// Re-export the public API consumed by the service, models and CLI.
pub use category::LeadCategory;
pub use engine::{
    evaluate, LeadScoreResult, LeadScorer, RuleBasedLeadScorer, ScoreOutcome, ScoreSource,
};
pub use weights::{ScoringConfig, ScoringWeights};
