//! Human-readable reasoning, next actions and risk factors for a scored lead.
//!
//! None of this text feeds back into the score. Predicates here are independent
//! substring checks on the case-folded inputs.

use crate::scoring::category::LeadCategory;
use crate::scoring::weights::FactorScores;

/// Emitted when no risk predicate triggers, so `risk_factors` is never empty.
pub const NO_RISKS_PLACEHOLDER: &str = "No significant identified risks";

/// How much of the business need is quoted in the business-case action.
const NEED_ACTION_MAX_CHARS: usize = 50;
/// Needs shorter than this are flagged as unclear.
const NEED_CLARITY_MIN_CHARS: usize = 20;

pub fn budget_analysis(budget: &str) -> String {
    let lower = budget.to_lowercase();
    let segment = if lower.contains("500k") || lower.contains("1m") {
        "enterprise-level"
    } else if lower.contains("150k") {
        "mid-market"
    } else {
        "SMB"
    };
    format!("Investment capacity: {budget} indicates {segment} purchasing power.")
}

pub fn need_alignment(business_need: &str) -> String {
    let len = business_need.chars().count();
    let potential = if len > 30 {
        "High"
    } else if len > 15 {
        "Medium"
    } else {
        "Needs clarification"
    };
    format!("Clear business need identified. Alignment potential: {potential}.")
}

pub fn urgency_analysis(urgency: &str) -> String {
    let lower = urgency.to_lowercase();
    if lower.contains("immediately") || lower.contains("high") {
        "Immediate buying window. High procurement readiness.".to_string()
    } else if lower.contains('3') {
        "Medium-term timeline. Reasonable decision cycle.".to_string()
    } else {
        "Extended timeline. Early-stage opportunity.".to_string()
    }
}

pub fn authority_analysis(authority: &str) -> String {
    let lower = authority.to_lowercase();
    if lower.contains("primary decision maker") {
        "Direct decision authority. Fast deal closure likely.".to_string()
    } else if lower.contains("budget") {
        "Strong budget control. Key stakeholder.".to_string()
    } else if lower.contains("technical") || lower.contains("influencer") {
        "Influential in process. Secondary approval needed.".to_string()
    } else {
        "End user perspective. Approval chain required.".to_string()
    }
}

pub fn industry_analysis(industry: &str) -> String {
    format!("{industry} sector shows strong adoption of solutions. Market-fit confirmed.")
}

pub fn bant_summary(factors: &FactorScores) -> String {
    format!(
        "BANT Alignment: Budget {}/100, Authority {}/100, Need {}/100, Timeline {}/100",
        factors.budget, factors.authority, factors.need, factors.urgency
    )
}

pub fn priority_recommendation(category: LeadCategory) -> String {
    format!(
        "PRIORITY: {}. Contact {}. {}",
        category.priority_tier(),
        category.contact_timeline(),
        category.priority_note()
    )
}

/// Always three actions: stakeholder, business case, tier-specific close.
pub fn next_actions(category: LeadCategory, authority: &str, business_need: &str) -> Vec<String> {
    let mut actions = Vec::with_capacity(3);

    if authority.to_lowercase().contains("primary decision maker") {
        actions.push("Schedule executive-level demo with decision maker".to_string());
    } else {
        actions.push("Identify and engage primary decision maker".to_string());
    }

    let need_excerpt: String = business_need.chars().take(NEED_ACTION_MAX_CHARS).collect();
    actions.push(format!("Prepare business case addressing: {need_excerpt}"));

    actions.push(category.closing_action().to_string());
    actions
}

pub fn risk_factors(
    budget: &str,
    authority: &str,
    urgency: &str,
    business_need: &str,
) -> Vec<String> {
    let budget = budget.to_lowercase();
    let authority = authority.to_lowercase();
    let urgency = urgency.to_lowercase();

    let mut risks = Vec::new();

    if budget.contains("unknown") || budget.contains("under") {
        risks.push("Budget constraints may limit solution scope".to_string());
    }
    if authority.contains("end user") || authority.contains("influencer") {
        risks.push("Multiple approval levels required".to_string());
    }
    if urgency.contains("exploring") || urgency.contains("low") {
        risks.push("Extended sales cycle likely".to_string());
    }
    if business_need.chars().count() < NEED_CLARITY_MIN_CHARS {
        risks.push("Business need clarity needs refinement".to_string());
    }

    if risks.is_empty() {
        risks.push(NO_RISKS_PLACEHOLDER.to_string());
    }
    risks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_analysis_segments() {
        assert!(budget_analysis("Over $1M").contains("enterprise-level"));
        assert!(budget_analysis("$500K - $1M").contains("enterprise-level"));
        assert!(budget_analysis("$150K - $500K").contains("enterprise-level"));
        assert!(budget_analysis("$50K - $150K").contains("mid-market"));
        assert!(budget_analysis("Under $50K").contains("SMB"));
    }

    #[test]
    fn test_need_alignment_by_length() {
        assert!(need_alignment(&"x".repeat(31)).ends_with("High."));
        assert!(need_alignment(&"x".repeat(30)).ends_with("Medium."));
        assert!(need_alignment(&"x".repeat(15)).ends_with("Needs clarification."));
    }

    #[test]
    fn test_urgency_analysis() {
        assert!(urgency_analysis("Immediately").starts_with("Immediate buying window"));
        assert!(urgency_analysis("Within 3 months").starts_with("Medium-term"));
        assert!(urgency_analysis("Just exploring").starts_with("Extended timeline"));
    }

    #[test]
    fn test_authority_analysis() {
        assert!(authority_analysis("Primary Decision Maker").starts_with("Direct decision"));
        assert!(authority_analysis("Budget Approver").starts_with("Strong budget control"));
        assert!(authority_analysis("Technical Influencer").starts_with("Influential"));
        assert!(authority_analysis("End User").starts_with("End user perspective"));
    }

    #[test]
    fn test_bant_summary_lists_all_four() {
        let factors = FactorScores {
            budget: 100,
            urgency: 40,
            authority: 50,
            need: 30,
            industry: 70,
        };
        assert_eq!(
            bant_summary(&factors),
            "BANT Alignment: Budget 100/100, Authority 50/100, Need 30/100, Timeline 40/100"
        );
    }

    #[test]
    fn test_priority_recommendation_text() {
        assert_eq!(
            priority_recommendation(LeadCategory::Hot),
            "PRIORITY: A-Tier. Contact within 24 hours. Immediate action recommended."
        );
        assert_eq!(
            priority_recommendation(LeadCategory::Cold),
            "PRIORITY: C-Tier. Contact nurture sequence. Monitor and nurture."
        );
    }

    #[test]
    fn test_next_actions_for_decision_maker() {
        let actions = next_actions(LeadCategory::Hot, "Primary Decision Maker", "CRM rollout");
        assert_eq!(
            actions,
            vec![
                "Schedule executive-level demo with decision maker",
                "Prepare business case addressing: CRM rollout",
                "Expedite proposal and timeline",
            ]
        );
    }

    #[test]
    fn test_next_actions_for_other_roles() {
        let actions = next_actions(LeadCategory::Warm, "End User", "CRM rollout");
        assert_eq!(actions[0], "Identify and engage primary decision maker");
        assert_eq!(actions[2], "Conduct discovery call to advance opportunity");
    }

    #[test]
    fn test_next_actions_truncates_need_to_50_chars() {
        let need = "a".repeat(80);
        let actions = next_actions(LeadCategory::Cold, "End User", &need);
        let excerpt = actions[1].trim_start_matches("Prepare business case addressing: ");
        assert_eq!(excerpt.chars().count(), 50);
    }

    #[test]
    fn test_next_actions_truncation_respects_char_boundaries() {
        let need = "é".repeat(60);
        let actions = next_actions(LeadCategory::Cold, "End User", &need);
        assert!(actions[1].ends_with(&"é".repeat(50)));
    }

    #[test]
    fn test_risk_factors_placeholder_when_clean() {
        let risks = risk_factors(
            "Over $1M",
            "Primary Decision Maker",
            "Immediately",
            "We need a CRM automation platform for sales",
        );
        assert_eq!(risks, vec![NO_RISKS_PLACEHOLDER]);
    }

    #[test]
    fn test_risk_factors_all_trigger_in_order() {
        let risks = risk_factors("Under $50k", "end user", "just exploring", "help");
        assert_eq!(
            risks,
            vec![
                "Budget constraints may limit solution scope",
                "Multiple approval levels required",
                "Extended sales cycle likely",
                "Business need clarity needs refinement",
            ]
        );
    }

    #[test]
    fn test_risk_factors_are_independent() {
        let risks = risk_factors("Unknown", "Primary Decision Maker", "High", &"x".repeat(25));
        assert_eq!(risks, vec!["Budget constraints may limit solution scope"]);

        let risks = risk_factors("Over $1M", "Influencer", "Low", &"x".repeat(25));
        assert_eq!(
            risks,
            vec!["Multiple approval levels required", "Extended sales cycle likely"]
        );
    }
}
