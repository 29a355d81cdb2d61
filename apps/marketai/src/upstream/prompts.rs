// Lead scoring prompt constants.
// Thresholds quoted to the model must match scoring::category.

use crate::models::lead::LeadInput;

/// System prompt for lead scoring: enforces JSON-only output.
pub const LEAD_SCORE_SYSTEM: &str = "You are an expert B2B lead scoring analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// BANT lead scoring prompt template. Replace every `{field}` before sending.
pub const LEAD_SCORE_PROMPT_TEMPLATE: &str = r#"Analyze this specific lead and provide a detailed, BANT-based score.

BANT ANALYSIS CRITERIA:
- B = Budget (capacity for investment)
- A = Authority (decision-making power)
- N = Need (business problem fit)
- T = Timeline (urgency/buying timeline)

LEAD PROFILE:
- Budget: {budget}
- Business Need: {business_need}
- Urgency (Timeline): {urgency}
- Authority Level: {authority}
- Industry: {industry}

Return a JSON object with this EXACT schema:
{
  "lead_score": <integer 0-100, calculated for this lead>,
  "lead_category": <"Hot" if score 70-100, "Warm" if 45-69, "Cold" if below 45>,
  "conversion_probability": <integer 0-100 based on BANT alignment>,
  "detailed_reasoning": {
    "budget_analysis": "<this budget relative to industry and solution area>",
    "need_alignment": "<how well this business need aligns with available solutions>",
    "urgency_signal": "<what this timeline says about buying readiness>",
    "authority_assessment": "<capability of this authority level to move the deal>",
    "industry_context": "<dynamics in the {industry} industry>",
    "bant_summary": "<overall BANT alignment>"
  },
  "score_breakdown": {
    "budget_fit": {"score": <0-100>, "reasoning": "<budget analysis>"},
    "need_clarity": {"score": <0-100>, "reasoning": "<need clarity>"},
    "urgency_level": {"score": <0-100>, "reasoning": "<timeline readiness>"},
    "authority_level": {"score": <0-100>, "reasoning": "<decision-making capability>"},
    "industry_fit": {"score": <0-100>, "reasoning": "<industry opportunity>"}
  },
  "priority_recommendation": "<A/B/C tier recommendation with action timeline>",
  "next_actions": ["<tactic 1>", "<tactic 2>", "<tactic 3>"],
  "risk_factors": ["<risk 1>", "<risk 2>"]
}

Rules:
- Base scores on the Budget, Authority, Need and Timeline given above.
- Lower scores if the timeline is vague or authority is low.
- Higher scores for Primary Decision Maker + high urgency + clear need + strong budget."#;

/// Fills the lead scoring template with the lead's fields.
pub fn build_lead_prompt(input: &LeadInput) -> String {
    LEAD_SCORE_PROMPT_TEMPLATE
        .replace("{budget}", &input.budget)
        .replace("{business_need}", &input.business_need)
        .replace("{urgency}", &input.urgency)
        .replace("{authority}", &input.authority)
        .replace("{industry}", &input.industry)
}
