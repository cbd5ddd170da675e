use serde::Deserialize;

/// Tunable multipliers consumed by the analysis pipeline.
///
/// Passed by reference into [`crate::pipeline::analyze`] on every call; the
/// pipeline never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Share of the marketing budget counted as revenue potential.
    pub revenue_potential_rate: f64,
    /// Share of the marketing budget suggested as monthly paid-media spend.
    pub paid_media_budget_share: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            revenue_potential_rate: 0.30,
            paid_media_budget_share: 0.40,
        }
    }
}

/// Rules for the content compliance agent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComplianceConfig {
    /// Lowercase terms that reject text content outright.
    pub forbidden_keywords: Vec<String>,
    /// Flag image descriptions that suggest underage depictions.
    pub enforce_age_appropriateness: bool,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            forbidden_keywords: vec!["illegal_activity_simulation".to_string()],
            enforce_age_appropriateness: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub max_body_bytes: usize,
    pub analysis: AnalysisConfig,
    pub compliance: ComplianceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
            max_body_bytes: 1024 * 1024,
            analysis: AnalysisConfig::default(),
            compliance: ComplianceConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            rate_limit_per_second: std::env::var("RATE_LIMIT_PER_SECOND")
                .unwrap_or_else(|_| defaults.rate_limit_per_second.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_PER_SECOND must be a positive integer"))
                .and_then(|n: u64| {
                    if n == 0 {
                        anyhow::bail!("RATE_LIMIT_PER_SECOND cannot be zero");
                    }
                    Ok(n)
                })?,
            rate_limit_burst: std::env::var("RATE_LIMIT_BURST")
                .unwrap_or_else(|_| defaults.rate_limit_burst.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("RATE_LIMIT_BURST must be a positive integer"))
                .and_then(|n: u32| {
                    if n == 0 {
                        anyhow::bail!("RATE_LIMIT_BURST cannot be zero");
                    }
                    Ok(n)
                })?,
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| defaults.max_body_bytes.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_BODY_BYTES must be a number of bytes"))?,
            analysis: AnalysisConfig {
                revenue_potential_rate: rate_from_env(
                    "REVENUE_POTENTIAL_RATE",
                    defaults.analysis.revenue_potential_rate,
                )?,
                paid_media_budget_share: rate_from_env(
                    "PAID_MEDIA_BUDGET_SHARE",
                    defaults.analysis.paid_media_budget_share,
                )?,
            },
            compliance: ComplianceConfig {
                forbidden_keywords: std::env::var("COMPLIANCE_FORBIDDEN_KEYWORDS")
                    .ok()
                    .map(|raw| parse_keyword_list(&raw))
                    .unwrap_or(defaults.compliance.forbidden_keywords),
                enforce_age_appropriateness: std::env::var("COMPLIANCE_ENFORCE_AGE")
                    .ok()
                    .map(|raw| parse_bool(&raw))
                    .transpose()?
                    .unwrap_or(defaults.compliance.enforce_age_appropriateness),
            },
        };

        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "Rate limit: {} req/s, burst {}",
            config.rate_limit_per_second,
            config.rate_limit_burst
        );
        tracing::debug!(
            "Analysis multipliers: revenue potential {}, paid media share {}",
            config.analysis.revenue_potential_rate,
            config.analysis.paid_media_budget_share
        );

        Ok(config)
    }
}

fn rate_from_env(name: &str, default: f64) -> anyhow::Result<f64> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };

    let rate: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a decimal number", name))?;
    if !(0.0..=1.0).contains(&rate) {
        anyhow::bail!("{} must be between 0 and 1 (got {})", name, rate);
    }
    Ok(rate)
}

fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{}'", other),
    }
}
