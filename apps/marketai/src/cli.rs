use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::lead::LeadInput;

#[derive(Parser)]
#[command(
    name = "marketai",
    version,
    about = "BANT lead scoring with a deterministic rule-based fallback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one lead and print the scored record as JSON
    Score(ScoreCommand),
    /// Print the phrase tables, thresholds and active weights as JSON
    Rules(RulesCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// JSON file holding the lead fields, or `-` for stdin
    #[arg(
        short,
        long,
        conflicts_with_all = ["budget", "business_need", "urgency", "authority", "industry"]
    )]
    pub input: Option<PathBuf>,
    #[arg(long)]
    pub budget: Option<String>,
    #[arg(long)]
    pub business_need: Option<String>,
    #[arg(long)]
    pub urgency: Option<String>,
    #[arg(long)]
    pub authority: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    /// Captured model reply to parse before falling back to the rules
    #[arg(long)]
    pub replay: Option<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}

impl ScoreCommand {
    /// Builds a lead from the individual flags; absent flags become empty fields.
    pub fn lead_from_flags(&self) -> LeadInput {
        LeadInput {
            budget: self.budget.clone().unwrap_or_default(),
            business_need: self.business_need.clone().unwrap_or_default(),
            urgency: self.urgency.clone().unwrap_or_default(),
            authority: self.authority.clone().unwrap_or_default(),
            industry: self.industry.clone().unwrap_or_default(),
        }
    }
}

#[derive(Args)]
pub struct RulesCommand {
    #[arg(long)]
    pub pretty: bool,
}
