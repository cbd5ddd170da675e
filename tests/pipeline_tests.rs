/// Scenario tests for the qualification pipeline
/// Covers reference leads end to end: score, diagnosis and recommendations
use sherlock_lead_api::config::AnalysisConfig;
use sherlock_lead_api::diagnosis::classify_pain_points;
use sherlock_lead_api::models::{DigitalProfile, LeadInput, PainCategory, Priority, Tier};
use sherlock_lead_api::pipeline::analyze;

fn lead(
    revenue: f64,
    employees: u32,
    budget: f64,
    urgency: i32,
    decision_maker: bool,
    industry: &str,
) -> LeadInput {
    LeadInput {
        name: "Test Contact".to_string(),
        company: "Test Co".to_string(),
        annual_revenue: revenue,
        employee_count: employees,
        industry: industry.to_string(),
        pain_points: vec![],
        marketing_budget: budget,
        current_channels: vec![],
        objectives: vec![],
        urgency,
        decision_maker,
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_mid_market_tech_lead_is_warm() {
        let lead = lead(800_000.0, 45, 40_000.0, 8, true, "tecnología");
        let analysis = analyze(&lead, &AnalysisConfig::default());
        let scoring = &analysis.scoring;

        assert_eq!(scoring.financial, 20);
        assert_eq!(scoring.size, 10);
        // 40k / 800k sits exactly on the 5% breakpoint
        assert_eq!(scoring.budget, 20);
        assert_eq!(scoring.urgency, 12.0);
        assert_eq!(scoring.authority, 10);
        assert_eq!(scoring.total, 72.0);
        assert_eq!(scoring.tier, Tier::Warm);
        assert_eq!(scoring.priority, Priority::Medium);
        assert_eq!(analysis.diagnosis.digital_profile, DigitalProfile::High);
    }

    #[test]
    fn test_zero_revenue_lead_is_unqualified() {
        let lead = lead(0.0, 5, 0.0, 1, false, "panadería");
        let analysis = analyze(&lead, &AnalysisConfig::default());
        let scoring = &analysis.scoring;

        assert_eq!(scoring.financial, 5);
        assert_eq!(scoring.size, 5);
        assert_eq!(scoring.budget, 5);
        assert_eq!(scoring.urgency, 1.5);
        assert_eq!(scoring.authority, 3);
        assert_eq!(scoring.total, 19.5);
        assert_eq!(scoring.tier, Tier::Unqualified);
        assert_eq!(scoring.priority, Priority::VeryLow);

        assert_eq!(analysis.diagnosis.digital_profile, DigitalProfile::Variable);
        assert_eq!(analysis.diagnosis.revenue_potential, 0.0);
        assert_eq!(
            analysis.diagnosis.weaknesses,
            vec![
                "Limited financial capacity".to_string(),
                "Insufficient marketing budget".to_string(),
                "Low implementation urgency".to_string(),
                "Not the final decision maker".to_string(),
            ]
        );
    }

    #[test]
    fn test_enterprise_lead_is_hot() {
        let lead = lead(2_000_000.0, 200, 300_000.0, 10, true, "fintech");
        let analysis = analyze(&lead, &AnalysisConfig::default());

        assert_eq!(analysis.scoring.financial, 30);
        assert_eq!(analysis.scoring.size, 20);
        assert_eq!(analysis.scoring.budget, 25);
        assert_eq!(analysis.scoring.urgency, 15.0);
        assert_eq!(analysis.scoring.authority, 10);
        assert_eq!(analysis.scoring.total, 100.0);
        assert_eq!(analysis.scoring.tier, Tier::Hot);
        assert_eq!(analysis.scoring.priority, Priority::High);

        let recs = &analysis.recommendations;
        assert_eq!(recs.follow_up.cadence, "immediate");
        assert_eq!(recs.follow_up.priority, Priority::Critical);
        assert_eq!(recs.content.deadline, "48h");
        assert_eq!(recs.estimated_timeline, "2-4 weeks");
        assert_eq!(recs.paid_media.suggested_budget, 120_000);
        assert_eq!(recs.next_steps.len(), 3);
        assert!(recs.next_steps[0].starts_with("URGENT"));
    }

    #[test]
    fn test_cold_lead_band() {
        // 15 + 10 + 5 + 7.5 + 3 = 40.5
        let lead = lead(150_000.0, 20, 1_000.0, 5, false, "retail físico");
        let analysis = analyze(&lead, &AnalysisConfig::default());

        assert_eq!(analysis.scoring.total, 40.5);
        assert_eq!(analysis.scoring.tier, Tier::Cold);
        assert_eq!(analysis.scoring.priority, Priority::Low);
        assert_eq!(analysis.diagnosis.digital_profile, DigitalProfile::Medium);
        assert_eq!(analysis.recommendations.content.priority, Priority::Medium);
    }
}

#[cfg(test)]
mod pain_point_tests {
    use super::*;

    #[test]
    fn test_follow_up_phrase_is_nurturing_not_lead_generation() {
        let map = classify_pain_points(&["seguimiento de clientes".to_string()]);

        assert!(map.contains_key(&PainCategory::Nurturing));
        assert!(!map.contains_key(&PainCategory::LeadGeneration));
    }

    #[test]
    fn test_lead_generation_pain_drives_content_tasks() {
        let mut cold = lead(150_000.0, 20, 1_000.0, 5, false, "salud");
        cold.pain_points = vec!["Pocos clientes nuevos".to_string()];
        let analysis = analyze(&cold, &AnalysisConfig::default());

        assert_eq!(
            analysis.recommendations.content.tasks,
            vec![
                "Create an industry-specific case study".to_string(),
                "Design a personalized landing page".to_string(),
            ]
        );
    }

    #[test]
    fn test_process_phrase_about_leads_keeps_lead_generation_tasks() {
        let mut cold = lead(150_000.0, 20, 1_000.0, 5, false, "salud");
        cold.pain_points = vec![
            "proceso de leads".to_string(),
            "automatización de ventas".to_string(),
        ];
        let analysis = analyze(&cold, &AnalysisConfig::default());

        assert_eq!(
            analysis
                .diagnosis
                .critical_pain_points
                .keys()
                .copied()
                .collect::<Vec<_>>(),
            vec![PainCategory::LeadGeneration, PainCategory::Conversion]
        );
        assert_eq!(analysis.recommendations.content.tasks.len(), 2);
    }

    #[test]
    fn test_unrecognized_pain_points_are_ignored() {
        let map = classify_pain_points(&[
            "rotación de personal".to_string(),
            "".to_string(),
        ]);
        assert!(map.is_empty());
    }
}

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn test_same_input_same_analysis() {
        let config = AnalysisConfig::default();
        let lead = LeadInput::sample();

        assert_eq!(analyze(&lead, &config), analyze(&lead, &config));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let lead = LeadInput::sample();
        let before = lead.clone();
        let _ = analyze(&lead, &AnalysisConfig::default());
        assert_eq!(lead, before);
    }
}
