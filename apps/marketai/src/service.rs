//! Lead Scoring Service: tries the upstream model once, falls back to rules.
//!
//! Flow: build_lead_prompt → backend.complete → parse_model_reply → outcome.
//! Any failure along the way (no backend, transport error, malformed reply)
//! is logged and answered with the rule-based result. There is no retry.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::lead::LeadInput;
use crate::scoring::{evaluate, LeadScorer, ScoreOutcome, ScoreSource, ScoringConfig};
use crate::upstream::prompts::{build_lead_prompt, LEAD_SCORE_SYSTEM};
use crate::upstream::{parse_model_reply, ModelBackend, UpstreamError};

#[derive(Clone)]
pub struct LeadScoringService {
    /// `None` means the model is configured unavailable: every call falls back.
    backend: Option<Arc<dyn ModelBackend>>,
    config: ScoringConfig,
}

impl LeadScoringService {
    pub fn new(backend: Option<Arc<dyn ModelBackend>>, config: ScoringConfig) -> Self {
        Self { backend, config }
    }

    async fn score_upstream(&self, input: &LeadInput) -> Result<ScoreOutcome, UpstreamError> {
        let backend = self.backend.as_ref().ok_or(UpstreamError::Unavailable)?;

        let prompt = build_lead_prompt(input);
        let reply = backend.complete(&prompt, LEAD_SCORE_SYSTEM).await?;
        let result = parse_model_reply(&reply)?;

        Ok(ScoreOutcome {
            result,
            source: ScoreSource::Model(backend.label().to_string()),
        })
    }

    fn fallback(&self, input: &LeadInput) -> ScoreOutcome {
        ScoreOutcome {
            result: evaluate(input, &self.config),
            source: ScoreSource::RuleBased,
        }
    }
}

#[async_trait]
impl LeadScorer for LeadScoringService {
    async fn score(&self, input: &LeadInput) -> ScoreOutcome {
        match self.score_upstream(input).await {
            Ok(outcome) => {
                info!(
                    "Lead scored by model: score={} category={}",
                    outcome.result.lead_score, outcome.result.lead_category
                );
                outcome
            }
            Err(UpstreamError::Unavailable) => {
                info!("No model backend configured; using rule-based scorer");
                self.fallback(input)
            }
            Err(e) => {
                warn!("Model lead scoring failed, falling back to rules: {e}");
                self.fallback(input)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::LeadCategory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned backend that counts calls and records the last prompt.
    struct StubBackend {
        reply: Result<String, String>,
        calls: AtomicUsize,
        last_prompt: std::sync::Mutex<String>,
    }

    impl StubBackend {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(String::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(String::new()),
            })
        }
    }

    #[async_trait]
    impl ModelBackend for StubBackend {
        fn label(&self) -> &str {
            "stub-model"
        }

        async fn complete(&self, prompt: &str, _system: &str) -> Result<String, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            self.reply.clone().map_err(UpstreamError::Backend)
        }
    }

    const VALID_REPLY: &str = r#"```json
    {
        "lead_score": 72,
        "lead_category": "Hot",
        "conversion_probability": 60,
        "score_breakdown": {
            "budget_fit": {"score": 80, "reasoning": "ok"},
            "need_clarity": {"score": 70, "reasoning": "ok"},
            "urgency_level": {"score": 60, "reasoning": "ok"},
            "authority_level": {"score": 75, "reasoning": "ok"},
            "industry_fit": {"score": 90, "reasoning": "ok"}
        },
        "next_actions": ["Call"],
        "risk_factors": []
    }
    ```"#;

    fn input() -> LeadInput {
        LeadInput {
            budget: "Under $50k".to_string(),
            business_need: "help".to_string(),
            urgency: "just exploring".to_string(),
            authority: "end user".to_string(),
            industry: "Retail".to_string(),
        }
    }

    fn service_with(backend: Arc<StubBackend>) -> LeadScoringService {
        LeadScoringService::new(Some(backend as Arc<dyn ModelBackend>), ScoringConfig::default())
    }

    #[tokio::test]
    async fn test_no_backend_uses_rules() {
        let service = LeadScoringService::new(None, ScoringConfig::default());
        let outcome = service.score(&input()).await;

        assert_eq!(outcome.source, ScoreSource::RuleBased);
        assert_eq!(outcome.result, evaluate(&input(), &ScoringConfig::default()));
    }

    #[tokio::test]
    async fn test_valid_model_reply_is_used() {
        let backend = StubBackend::replying(VALID_REPLY);
        let outcome = service_with(backend.clone()).score(&input()).await;

        assert_eq!(outcome.source, ScoreSource::Model("stub-model".to_string()));
        assert_eq!(outcome.result.lead_score, 72);
        assert_eq!(outcome.result.lead_category, LeadCategory::Hot);
        assert!(!outcome.result.risk_factors.is_empty());
        assert!(backend.last_prompt.lock().unwrap().contains("- Budget: Under $50k"));
    }

    #[tokio::test]
    async fn test_backend_error_falls_back_once() {
        let backend = StubBackend::failing("503 Service Unavailable");
        let outcome = service_with(backend.clone()).score(&input()).await;

        assert_eq!(outcome.source, ScoreSource::RuleBased);
        assert_eq!(outcome.result.lead_score, 43);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let backend = StubBackend::replying("I'm sorry, I can't score this lead.");
        let outcome = service_with(backend).score(&input()).await;

        assert_eq!(outcome.source, ScoreSource::RuleBased);
        assert_eq!(outcome.result.lead_category, LeadCategory::Cold);
    }

    #[tokio::test]
    async fn test_out_of_range_reply_falls_back() {
        let reply = VALID_REPLY.replace("\"lead_score\": 72", "\"lead_score\": 250");
        let backend = StubBackend::replying(&reply);
        let outcome = service_with(backend).score(&input()).await;

        assert_eq!(outcome.source, ScoreSource::RuleBased);
    }

    #[tokio::test]
    async fn test_service_is_shareable_across_tasks() {
        let service = Arc::new(LeadScoringService::new(None, ScoringConfig::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.score(&input()).await })
            })
            .collect();

        for handle in handles {
            let outcome = handle.await.unwrap();
            assert_eq!(outcome.result.lead_score, 43);
        }
    }
}
