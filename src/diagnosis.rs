//! Qualitative diagnosis of a scored lead.

use crate::config::AnalysisConfig;
use crate::models::{
    DigitalProfile, Diagnosis, LeadInput, PainCategory, ScoreResult, Severity, Tier,
};
use std::collections::BTreeMap;

const DIGITAL_INDUSTRIES: [&str; 5] = ["tecnología", "software", "ecommerce", "fintech", "saas"];
const TRADITIONAL_INDUSTRIES: [&str; 4] =
    ["manufactura", "construcción", "agricultura", "retail físico"];

pub const HOT_CLOSE_TIME: &str = "2-4 weeks";
pub const DEFAULT_CLOSE_TIME: &str = "1-3 months";

/// Keywords per pain-point category. Phrases come from Spanish-language
/// intake forms, so the keywords do too.
fn pain_keywords(category: PainCategory) -> &'static [&'static str] {
    match category {
        PainCategory::LeadGeneration => &["lead", "cliente"],
        PainCategory::Conversion => &["conversión", "venta"],
        PainCategory::Automation => &["automatización", "proceso"],
        PainCategory::Nurturing => &["seguimiento", "nurturing"],
    }
}

pub fn diagnose(lead: &LeadInput, score: &ScoreResult, config: &AnalysisConfig) -> Diagnosis {
    Diagnosis {
        summary: format!("Lead {} with {:.1}% fit", score.tier, score.percentage),
        strengths: strengths(lead, score),
        weaknesses: weaknesses(lead, score),
        digital_profile: digital_profile(&lead.industry),
        critical_pain_points: classify_pain_points(&lead.pain_points),
        revenue_potential: lead.marketing_budget.max(0.0) * config.revenue_potential_rate,
        estimated_close_time: close_time(score.tier).to_string(),
    }
}

/// Each check stands alone; a lead can be strong on one axis and weak on another.
fn strengths(lead: &LeadInput, score: &ScoreResult) -> Vec<String> {
    let mut strengths = Vec::new();
    if score.financial >= 20 {
        strengths.push("Solid financial capacity".to_string());
    }
    if score.size >= 15 {
        strengths.push("Organization of considerable size".to_string());
    }
    if score.budget >= 20 {
        strengths.push("Well-sized marketing budget".to_string());
    }
    if score.urgency >= 10.0 {
        strengths.push("High urgency of need".to_string());
    }
    if lead.decision_maker {
        strengths.push("Direct contact with the decision maker".to_string());
    }
    strengths
}

fn weaknesses(lead: &LeadInput, score: &ScoreResult) -> Vec<String> {
    let mut weaknesses = Vec::new();
    if score.financial < 15 {
        weaknesses.push("Limited financial capacity".to_string());
    }
    if score.budget < 15 {
        weaknesses.push("Insufficient marketing budget".to_string());
    }
    if score.urgency < 8.0 {
        weaknesses.push("Low implementation urgency".to_string());
    }
    if !lead.decision_maker {
        weaknesses.push("Not the final decision maker".to_string());
    }
    weaknesses
}

/// Digital-native keywords are checked first and win when a label matches both sets.
pub fn digital_profile(industry: &str) -> DigitalProfile {
    let industry = industry.to_lowercase();
    if DIGITAL_INDUSTRIES.iter().any(|kw| industry.contains(kw)) {
        DigitalProfile::High
    } else if TRADITIONAL_INDUSTRIES.iter().any(|kw| industry.contains(kw)) {
        DigitalProfile::Medium
    } else {
        DigitalProfile::Variable
    }
}

/// Lead-generation keyword shared with phrases about other groups
/// ("seguimiento de clientes", "conversión de clientes").
const CUSTOMER_KEYWORD: &str = "cliente";

/// Finds the category of a single pain-point phrase.
///
/// Categories are tried in fixed order and the first match wins. The one
/// exception is a lead-generation match made only through "cliente": a
/// keyword of another category appearing earlier in the phrase takes over,
/// with the fixed order breaking ties at the same offset.
pub fn classify_pain_point(phrase: &str) -> Option<PainCategory> {
    let phrase = phrase.to_lowercase();
    let first_offset = |category: PainCategory| {
        pain_keywords(category)
            .iter()
            .filter_map(|kw| phrase.find(kw))
            .min()
    };

    let category = PainCategory::ALL
        .iter()
        .copied()
        .find(|&category| first_offset(category).is_some())?;

    if category != PainCategory::LeadGeneration || phrase.contains("lead") {
        return Some(category);
    }

    let customer_at = phrase.find(CUSTOMER_KEYWORD)?;
    let leading = PainCategory::ALL
        .iter()
        .copied()
        .filter(|&other| other != PainCategory::LeadGeneration)
        .filter_map(|other| first_offset(other).map(|offset| (offset, other)))
        .filter(|&(offset, _)| offset < customer_at)
        .min();

    Some(leading.map_or(category, |(_, other)| other))
}

/// Builds the category → severity map.
///
/// A later phrase in the same category overwrites the earlier entry. Severity
/// is fixed per category today so the overwrite is invisible, but any
/// per-phrase severity would silently lose the earlier value.
pub fn classify_pain_points(pain_points: &[String]) -> BTreeMap<PainCategory, Severity> {
    let mut analysis = BTreeMap::new();
    for phrase in pain_points {
        if let Some(category) = classify_pain_point(phrase) {
            analysis.insert(category, category.severity());
        }
    }
    analysis
}

pub fn close_time(tier: Tier) -> &'static str {
    if tier == Tier::Hot {
        HOT_CLOSE_TIME
    } else {
        DEFAULT_CLOSE_TIME
    }
}
