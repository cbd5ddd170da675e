//! Task recommendations for the content, paid-media and follow-up teams.

use crate::config::AnalysisConfig;
use crate::models::{
    ContentPlan, Diagnosis, FollowUpPlan, LeadInput, PainCategory, PaidMediaPlan, Priority,
    RecommendationSet, ScoreResult, Tier,
};

const HOT_NEXT_STEPS: [&str; 3] = [
    "URGENT: Follow-up schedules a demo within 24-48h",
    "Content prepares a personalized visual proposal",
    "Paid media sets up immediate retargeting",
];

const WARM_NEXT_STEPS: [&str; 3] = [
    "Follow-up books a discovery call",
    "Paid media starts a nurturing campaign",
    "Content creates targeted educational material",
];

const NURTURE_NEXT_STEPS: [&str; 3] = [
    "Follow-up adds the lead to an automated sequence",
    "Monthly behavior monitoring",
    "Re-evaluate in 90 days",
];

pub fn recommend(
    lead: &LeadInput,
    score: &ScoreResult,
    diagnosis: &Diagnosis,
    config: &AnalysisConfig,
) -> RecommendationSet {
    RecommendationSet {
        content: content_plan(score, diagnosis),
        paid_media: paid_media_plan(lead, score, config),
        follow_up: follow_up_plan(score.tier),
        next_steps: next_steps(score.tier)
            .iter()
            .map(|step| step.to_string())
            .collect(),
        estimated_timeline: diagnosis.estimated_close_time.clone(),
    }
}

fn content_plan(score: &ScoreResult, diagnosis: &Diagnosis) -> ContentPlan {
    let mut tasks = Vec::new();
    if diagnosis
        .critical_pain_points
        .contains_key(&PainCategory::LeadGeneration)
    {
        tasks.push("Create an industry-specific case study".to_string());
        tasks.push("Design a personalized landing page".to_string());
    }
    if score.tier.is_engaged() {
        tasks.push("Prepare a personalized visual proposal".to_string());
        tasks.push("Build an interactive product demo".to_string());
    }

    ContentPlan {
        priority: if score.tier.is_engaged() {
            Priority::High
        } else {
            Priority::Medium
        },
        tasks,
        deadline: if score.tier == Tier::Hot { "48h" } else { "1 week" }.to_string(),
    }
}

fn paid_media_plan(lead: &LeadInput, score: &ScoreResult, config: &AnalysisConfig) -> PaidMediaPlan {
    let suggested_budget = suggested_monthly_budget(lead.marketing_budget, config);

    let mut tasks = Vec::new();
    if score.budget >= 20 {
        tasks.push("Propose a B2B LinkedIn Ads strategy".to_string());
        tasks.push("Set up retargeting campaigns".to_string());
    }
    if lead.urgency >= 7 {
        tasks.push("Launch a limited-time urgency campaign".to_string());
    }
    tasks.push(format!("Suggested budget: ${}/month", suggested_budget));

    PaidMediaPlan {
        priority: if score.budget >= 20 {
            Priority::High
        } else {
            Priority::Medium
        },
        tasks,
        suggested_budget,
    }
}

/// Truncates toward zero; negative or non-finite budgets suggest nothing.
pub fn suggested_monthly_budget(marketing_budget: f64, config: &AnalysisConfig) -> u64 {
    let amount = marketing_budget * config.paid_media_budget_share;
    if amount.is_finite() && amount > 0.0 {
        amount.trunc() as u64
    } else {
        0
    }
}

/// The task list is chosen by tier alone.
fn follow_up_plan(tier: Tier) -> FollowUpPlan {
    let tasks: [&str; 2] = match tier {
        Tier::Hot => [
            "Schedule a demo within the next 48h",
            "Prepare a personalized commercial proposal",
        ],
        Tier::Warm => ["5-email nurturing sequence", "Discovery call within 1 week"],
        Tier::Cold | Tier::Unqualified => [
            "Add to the monthly education sequence",
            "Quarterly re-qualification follow-up",
        ],
    };

    FollowUpPlan {
        priority: if tier == Tier::Hot {
            Priority::Critical
        } else {
            Priority::High
        },
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
        cadence: if tier == Tier::Hot { "immediate" } else { "1-2 weeks" }.to_string(),
    }
}

pub fn next_steps(tier: Tier) -> &'static [&'static str; 3] {
    match tier {
        Tier::Hot => &HOT_NEXT_STEPS,
        Tier::Warm => &WARM_NEXT_STEPS,
        Tier::Cold | Tier::Unqualified => &NURTURE_NEXT_STEPS,
    }
}
