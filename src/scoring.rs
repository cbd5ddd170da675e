//! Lead scoring.
//!
//! Converts raw lead attributes into five bounded sub-scores:
//!
//! | Component | Range | Shape |
//! |-----------|-------|-------|
//! | financial | 5–30  | step on annual revenue |
//! | size      | 5–20  | step on employee count |
//! | budget    | 5–25  | step on budget ÷ revenue |
//! | urgency   | 0–15  | linear |
//! | authority | 3–10  | binary |
//!
//! The total is their plain sum and selects the [`Tier`].

use crate::models::{LeadInput, ScoreResult, Tier};

pub const MAX_FINANCIAL: u32 = 30;
pub const MAX_SIZE: u32 = 20;
pub const MAX_BUDGET: u32 = 25;
pub const MAX_URGENCY: f64 = 15.0;
pub const MAX_AUTHORITY: u32 = 10;

/// Scores a lead. Never fails: out-of-range numbers are clamped first.
pub fn score(lead: &LeadInput) -> ScoreResult {
    let revenue = non_negative(lead.annual_revenue);
    let budget = non_negative(lead.marketing_budget);

    let financial = financial_score(revenue);
    let size = size_score(lead.employee_count);
    let budget_score = budget_ratio_score(budget_ratio(budget, revenue));
    let urgency = urgency_score(lead.urgency);
    let authority = authority_score(lead.decision_maker);

    let total = f64::from(financial + size + budget_score + authority) + urgency;
    let tier = Tier::from_total(total);

    ScoreResult {
        total,
        financial,
        size,
        budget: budget_score,
        urgency,
        authority,
        tier,
        priority: tier.priority(),
        percentage: total / 100.0 * 100.0,
    }
}

pub fn financial_score(annual_revenue: f64) -> u32 {
    if annual_revenue >= 1_000_000.0 {
        MAX_FINANCIAL
    } else if annual_revenue >= 500_000.0 {
        20
    } else if annual_revenue >= 100_000.0 {
        15
    } else {
        5
    }
}

pub fn size_score(employee_count: u32) -> u32 {
    if employee_count >= 100 {
        MAX_SIZE
    } else if employee_count >= 50 {
        15
    } else if employee_count >= 10 {
        10
    } else {
        5
    }
}

/// Marketing budget as a fraction of revenue; zero when there is no revenue.
pub fn budget_ratio(marketing_budget: f64, annual_revenue: f64) -> f64 {
    if annual_revenue > 0.0 {
        marketing_budget / annual_revenue
    } else {
        0.0
    }
}

pub fn budget_ratio_score(ratio: f64) -> u32 {
    if ratio >= 0.10 {
        MAX_BUDGET
    } else if ratio >= 0.05 {
        20
    } else if ratio >= 0.02 {
        15
    } else {
        5
    }
}

/// Linear in urgency, the only continuous component.
pub fn urgency_score(urgency: i32) -> f64 {
    f64::from(urgency.clamp(0, 10)) * MAX_URGENCY / 10.0
}

pub fn authority_score(decision_maker: bool) -> u32 {
    if decision_maker {
        MAX_AUTHORITY
    } else {
        3
    }
}

fn non_negative(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
