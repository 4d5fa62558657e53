//! Prompt builders and response parsing for the explanation layer

use super::{ContextMap, CustomerProfile, Recommendation};
use crate::offer::OfferTier;
use forge_core::{Decision, DecisionInput, Outcome};
use forge_runtime::HistorySummary;
use serde_json::Value;

/// System instruction sent with every collaborator prompt
pub const SYSTEM_PROMPT: &str = "You advise a customer retention team. Decisions are already \
     made by a rules engine; describe them plainly and never change them or invent figures.";

const SUMMARY: &str = "SUMMARY:";
const RATIONALE: &str = "RATIONALE:";
const SUGGESTED_ACTIONS: &str = "SUGGESTED_ACTIONS:";

/// Prompt asking for a 2-3 sentence explanation of one decision
pub fn explanation_prompt(
    decision: &Decision,
    input: &DecisionInput,
    context: Option<&ContextMap>,
) -> String {
    let context_block = match context {
        Some(context) if !context.is_empty() => {
            format!("\n\nAdditional Context:\n{}", format_fields(context))
        }
        _ => String::new(),
    };

    format!(
        "Explain the following business decision in clear, simple language:\n\n\
         Decision Made: {}\n\
         Reason: {}\n\
         Expected Value: ${:.2}\n\n\
         Input Metrics:\n{}{}\n\n\
         Provide a 2-3 sentence explanation that:\n\
         1. States what action to take\n\
         2. Explains why this maximizes business value\n\
         3. Mentions key risk factors\n\n\
         Keep it concise and actionable.",
        decision.outcome(),
        decision.reason(),
        decision.expected_value(),
        format_fields(&input.to_fields()),
        context_block
    )
}

/// Prompt asking for SUMMARY / RATIONALE / SUGGESTED_ACTIONS sections
pub fn recommendation_prompt(decision: &Decision, input: &DecisionInput) -> String {
    format!(
        "You are an AI advisor for a customer retention system. Based on the following \
         analysis, provide actionable recommendations:\n\n\
         Decision: {}\n\
         Reason: {}\n\
         Expected Value: ${:.2}\n\n\
         User Metrics:\n\
         - Anomaly Score: {}\n\
         - Request Count Today: {}\n\
         - Churn Probability: {:.1}%\n\n\
         Provide a response in this format:\n\
         {} [One-line summary]\n\
         {} [Why this decision maximizes value]\n\
         {} [3-4 specific actions to take]",
        decision.outcome(),
        decision.reason(),
        decision.expected_value(),
        input.anomaly_score(),
        input.request_count_today(),
        input.churn().unwrap_or(0.0) * 100.0,
        SUMMARY,
        RATIONALE,
        SUGGESTED_ACTIONS
    )
}

/// Prompt asking for a short customer-facing retention message
pub fn message_prompt(
    profile: &CustomerProfile,
    intervention_type: &str,
    offer: Option<OfferTier>,
) -> String {
    let tenure = profile
        .tenure_months
        .map_or_else(|| "N/A".to_string(), |t| t.to_string());
    let charges = profile
        .monthly_charges
        .map_or_else(|| "N/A".to_string(), |c| format!("{:.2}", c));
    let offer = offer.map_or_else(|| "Loyalty appreciation".to_string(), |o| o.description());

    format!(
        "Generate a friendly, personalized customer retention message.\n\n\
         Customer Profile:\n\
         - Tenure: {} months\n\
         - Monthly Charges: ${}\n\n\
         Intervention Type: {}\n\
         Offer: {}\n\n\
         Write a warm, concise message (2-3 sentences) that:\n\
         1. Acknowledges their loyalty\n\
         2. Presents the offer naturally\n\
         3. Includes a clear call-to-action\n\n\
         Write a complete, ready-to-send message.",
        tenure, charges, intervention_type, offer
    )
}

/// Prompt asking for trends, opportunities and risks over a history summary
pub fn insights_prompt(summary: &HistorySummary, time_period: &str) -> String {
    let stats = match summary {
        HistorySummary::NoHistory { message } => message.clone(),
        HistorySummary::Stats(stats) => {
            let breakdown = stats
                .decision_breakdown
                .iter()
                .map(|(outcome, count)| format!("{}: {}", outcome, count))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "- Total Decisions: {}\n\
                 - Decision Breakdown: {}\n\
                 - Total Expected Value: ${:.2}\n\
                 - Average Value per Decision: ${:.2}",
                stats.total_decisions, breakdown, stats.total_expected_value, stats.average_value
            )
        }
    };

    format!(
        "Analyze these decision-making patterns and provide strategic insights:\n\n\
         Decision Statistics for {}:\n{}\n\n\
         Provide:\n\
         1. KEY TRENDS: What patterns do you see?\n\
         2. OPPORTUNITIES: Where can we improve ROI?\n\
         3. RISKS: What concerns should we monitor?\n\
         4. RECOMMENDATIONS: 3 specific actions to optimize decision-making\n\n\
         Be specific and actionable.",
        time_period, stats
    )
}

/// Prompt for a free-text question about the system
pub fn query_prompt(question: &str, recent_decisions: usize) -> String {
    let outcomes = Outcome::ALL
        .iter()
        .map(Outcome::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Answer this question about a customer decision system:\n\n\
         Question: {}\n\n\
         System Context:\n\
         - This is an ML-driven system for customer interventions\n\
         - Recent decisions: {}\n\
         - Decision types: {}\n\n\
         Provide a clear, helpful answer in 2-3 sentences.",
        question, recent_decisions, outcomes
    )
}

/// Render a field map as a bullet list with title-cased keys.
/// Non-integral numbers are shown with three decimals.
pub fn format_fields(fields: &serde_json::Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("- {}: {}", title_case(key), format_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| format!("{:.3}", f)),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone, Copy)]
enum Section {
    Summary,
    Rationale,
    SuggestedActions,
}

impl Section {
    const ALL: [(Section, &'static str); 3] = [
        (Section::Summary, SUMMARY),
        (Section::Rationale, RATIONALE),
        (Section::SuggestedActions, SUGGESTED_ACTIONS),
    ];

    fn field(self, parts: &mut Recommendation) -> &mut String {
        match self {
            Section::Summary => &mut parts.summary,
            Section::Rationale => &mut parts.rationale,
            Section::SuggestedActions => &mut parts.suggested_actions,
        }
    }
}

/// Split a sectioned response into a [`Recommendation`].
///
/// Lines that do not start a section are appended to the current one,
/// separated by a space. Text before the first section is ignored.
pub fn parse_sectioned_response(response: &str) -> Recommendation {
    let mut parts = Recommendation::default();
    let mut current = None;

    for line in response.lines().map(str::trim) {
        let header = Section::ALL
            .iter()
            .find_map(|(section, marker)| line.strip_prefix(*marker).map(|rest| (*section, rest)));

        match (header, current) {
            (Some((section, rest)), _) => {
                *section.field(&mut parts) = rest.trim().to_string();
                current = Some(section);
            }
            (None, Some(section)) if !line.is_empty() => {
                let text = section.field(&mut parts);
                text.push(' ');
                text.push_str(line);
            }
            _ => {}
        }
    }

    parts
}
