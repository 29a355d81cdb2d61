mod cli;
mod config;
mod errors;
mod models;
mod scoring;
mod service;
mod upstream;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, ScoreCommand};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::lead::{LeadInput, LeadRecord};
use crate::scoring::category::{HOT_THRESHOLD, WARM_THRESHOLD};
use crate::scoring::rules::{
    PhraseTable, AUTHORITY_TABLE, BUDGET_TABLE, INDUSTRY_DEFAULT_SCORE, INDUSTRY_SCORES,
    NEED_KEYWORDS, URGENCY_TABLE,
};
use crate::scoring::{LeadScorer, RuleBasedLeadScorer, ScoringConfig};
use crate::service::LeadScoringService;
use crate::upstream::replay::ReplayBackend;
use crate::upstream::ModelBackend;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on a malformed LEAD_SCORE_WEIGHTS)
    let config = Config::from_env()?;

    // Structured logging on stderr; stdout carries only JSON output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("MarketAI lead scorer v{}", env!("CARGO_PKG_VERSION"));
    debug!("Scoring config: {:?}", config.scoring);

    match cli.command {
        Commands::Score(cmd) => score_lead(cmd, &config).await,
        Commands::Rules(cmd) => print_json(&RulesReport::new(config.scoring), cmd.pretty),
    }
}

async fn score_lead(cmd: ScoreCommand, config: &Config) -> Result<()> {
    let input = load_input(&cmd).await?;

    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ))
        .into());
    }

    // Rule-based by default; a replayed model reply routes through the fallback service
    let scorer: Arc<dyn LeadScorer> = match &cmd.replay {
        Some(path) => {
            let backend: Arc<dyn ModelBackend> = Arc::new(ReplayBackend::new(path.clone()));
            info!("Model backend: {}", backend.label());
            Arc::new(LeadScoringService::new(Some(backend), config.scoring))
        }
        None => Arc::new(RuleBasedLeadScorer::new(config.scoring)),
    };

    let outcome = scorer.score(&input).await;
    let record = LeadRecord::new(input, outcome);

    info!(
        "Scored lead {}: {} ({})",
        record.id, record.result.lead_score, record.result.lead_category
    );

    print_json(&record, cmd.pretty)
}

/// Reads the lead from `--input` (file or `-` for stdin), else from the field flags.
async fn load_input(cmd: &ScoreCommand) -> Result<LeadInput, AppError> {
    let raw = match cmd.input.as_deref() {
        None => return Ok(cmd.lead_from_flags()),
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
        Some(path) => tokio::fs::read_to_string(path).await?,
    };

    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Everything that decides a rule-based score, for auditing.
#[derive(Serialize)]
struct RulesReport {
    budget: &'static PhraseTable,
    urgency: &'static PhraseTable,
    authority: &'static PhraseTable,
    need_keywords: &'static [&'static str],
    industry: &'static [(&'static str, u32)],
    industry_default: u32,
    hot_threshold: u32,
    warm_threshold: u32,
    scoring: ScoringConfig,
}

impl RulesReport {
    fn new(scoring: ScoringConfig) -> Self {
        Self {
            budget: &BUDGET_TABLE,
            urgency: &URGENCY_TABLE,
            authority: &AUTHORITY_TABLE,
            need_keywords: NEED_KEYWORDS,
            industry: INDUSTRY_SCORES,
            industry_default: INDUSTRY_DEFAULT_SCORE,
            hot_threshold: HOT_THRESHOLD,
            warm_threshold: WARM_THRESHOLD,
            scoring,
        }
    }
}
