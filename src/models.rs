use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

// ============ Request Models ============

/// A prospective customer submitted for qualification.
///
/// Field names follow the public API contract. The Spanish names used by the
/// first version of the intake form are accepted as aliases so older clients
/// keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadInput {
    /// Contact name.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Company name.
    #[serde(alias = "empresa")]
    pub company: String,
    /// Annual revenue in USD.
    #[serde(alias = "facturacion_anual")]
    pub annual_revenue: f64,
    /// Number of employees.
    #[serde(alias = "empleados")]
    pub employee_count: u32,
    /// Free-text industry label.
    #[serde(alias = "industria")]
    pub industry: String,
    /// Pain points in the order the lead reported them.
    pub pain_points: Vec<String>,
    /// Yearly marketing budget in USD.
    #[serde(alias = "presupuesto_marketing")]
    pub marketing_budget: f64,
    /// Marketing channels already in use.
    #[serde(alias = "canales_actuales")]
    pub current_channels: Vec<String>,
    /// Business objectives.
    #[serde(alias = "objetivos_principales")]
    pub objectives: Vec<String>,
    /// Self-reported urgency, 1 (none) to 10 (immediate).
    #[serde(alias = "urgencia")]
    pub urgency: i32,
    /// Whether the contact signs off on the purchase.
    pub decision_maker: bool,
}

impl LeadInput {
    /// Returns every range violation found in the lead, empty when valid.
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.company.trim().is_empty() {
            errors.push("company cannot be empty".to_string());
        }
        if !self.annual_revenue.is_finite() || self.annual_revenue < 0.0 {
            errors.push("annual_revenue must be a non-negative number".to_string());
        }
        if !self.marketing_budget.is_finite() || self.marketing_budget < 0.0 {
            errors.push("marketing_budget must be a non-negative number".to_string());
        }
        if !(1..=10).contains(&self.urgency) {
            errors.push(format!(
                "urgency must be between 1 and 10 (got {})",
                self.urgency
            ));
        }

        errors
    }

    /// Built-in lead used by the sample endpoint and the CLI smoke run.
    pub fn sample() -> Self {
        Self {
            name: "Ricardo Empresario".to_string(),
            company: "TechCorp Solutions".to_string(),
            annual_revenue: 800_000.0,
            employee_count: 45,
            industry: "tecnología".to_string(),
            pain_points: vec![
                "generación de leads".to_string(),
                "automatización de procesos".to_string(),
            ],
            marketing_budget: 40_000.0,
            current_channels: vec!["Google Ads".to_string(), "LinkedIn".to_string()],
            objectives: vec![
                "aumentar leads".to_string(),
                "mejorar conversión".to_string(),
            ],
            urgency: 8,
            decision_maker: true,
        }
    }
}

// ============ Scoring ============

/// Qualification category, ordered from least to most qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Unqualified,
    Cold,
    Warm,
    Hot,
}

impl Tier {
    /// Maps a total score onto its band. Lower bounds are inclusive.
    pub fn from_total(total: f64) -> Self {
        if total >= 80.0 {
            Tier::Hot
        } else if total >= 60.0 {
            Tier::Warm
        } else if total >= 40.0 {
            Tier::Cold
        } else {
            Tier::Unqualified
        }
    }

    /// Sales priority paired with this tier.
    pub fn priority(self) -> Priority {
        match self {
            Tier::Hot => Priority::High,
            Tier::Warm => Priority::Medium,
            Tier::Cold => Priority::Low,
            Tier::Unqualified => Priority::VeryLow,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Hot => "HOT",
            Tier::Warm => "WARM",
            Tier::Cold => "COLD",
            Tier::Unqualified => "UNQUALIFIED",
        }
    }

    /// HOT and WARM leads get active, personalized treatment.
    pub fn is_engaged(self) -> bool {
        matches!(self, Tier::Hot | Tier::Warm)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority label shared by the scoring result and the role blocks.
///
/// Labels stay in Spanish because the sales team's CRM filters on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "CRÍTICA")]
    Critical,
    #[serde(rename = "ALTA")]
    High,
    #[serde(rename = "MEDIA")]
    Medium,
    #[serde(rename = "BAJA")]
    Low,
    #[serde(rename = "MUY BAJA")]
    VeryLow,
}

/// Output of the scoring stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    #[serde(rename = "score_total", serialize_with = "round_one_decimal")]
    pub total: f64,
    #[serde(rename = "score_financial")]
    pub financial: u32,
    #[serde(rename = "score_size")]
    pub size: u32,
    #[serde(rename = "score_budget")]
    pub budget: u32,
    #[serde(rename = "score_urgency", serialize_with = "round_one_decimal")]
    pub urgency: f64,
    #[serde(rename = "score_authority")]
    pub authority: u32,
    pub tier: Tier,
    pub priority: Priority,
    /// Total expressed as a share of the 100-point maximum.
    #[serde(serialize_with = "round_one_decimal")]
    pub percentage: f64,
}

// ============ Diagnosis ============

/// How digitally mature the lead's industry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitalProfile {
    #[serde(rename = "HIGH - Digitally native industry")]
    High,
    #[serde(rename = "MEDIUM - Industry undergoing digitalization")]
    Medium,
    #[serde(rename = "VARIABLE - Requires specific analysis")]
    Variable,
}

/// Pain-point category. Declaration order is the fixed matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainCategory {
    LeadGeneration,
    Conversion,
    Automation,
    Nurturing,
}

impl PainCategory {
    pub const ALL: [PainCategory; 4] = [
        PainCategory::LeadGeneration,
        PainCategory::Conversion,
        PainCategory::Automation,
        PainCategory::Nurturing,
    ];

    pub fn severity(self) -> Severity {
        match self {
            PainCategory::LeadGeneration | PainCategory::Conversion => Severity::Critical,
            PainCategory::Automation | PainCategory::Nurturing => Severity::Important,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Important,
}

/// Output of the diagnosis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub digital_profile: DigitalProfile,
    pub critical_pain_points: BTreeMap<PainCategory, Severity>,
    pub revenue_potential: f64,
    pub estimated_close_time: String,
}

// ============ Recommendations ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPlan {
    pub priority: Priority,
    pub tasks: Vec<String>,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidMediaPlan {
    pub priority: Priority,
    pub tasks: Vec<String>,
    /// Suggested monthly spend in whole USD.
    pub suggested_budget: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub priority: Priority,
    pub tasks: Vec<String>,
    pub cadence: String,
}

/// Output of the recommendation stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub content: ContentPlan,
    pub paid_media: PaidMediaPlan,
    pub follow_up: FollowUpPlan,
    pub next_steps: Vec<String>,
    pub estimated_timeline: String,
}

// ============ API Response Models ============

/// Everything the pipeline derives from one lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadAnalysis {
    pub scoring: ScoreResult,
    pub diagnosis: Diagnosis,
    pub recommendations: RecommendationSet,
}

/// Response payload for `POST /api/v1/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Opaque identifier assigned at the boundary.
    pub lead_id: String,
    /// RFC 3339 timestamp of the analysis.
    pub timestamp: String,
    #[serde(flatten)]
    pub analysis: LeadAnalysis,
}

fn round_one_decimal<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}
