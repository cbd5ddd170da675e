use crate::agents::{AgentKind, AgentOutcome, AgentRegistry};
use crate::config::Config;
use crate::errors::{AppError, ResultExt};
use crate::models::{AnalysisResponse, LeadInput};
use crate::pipeline;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

pub const SERVICE_NAME: &str = "sherlock-lead-api";

/// Shared application state injected into handlers.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Registered content agents.
    pub agents: AgentRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let agents = AgentRegistry::new(config.compliance.clone());
        Self { config, agents }
    }
}

/// Request payload for `POST /api/v1/agents/:kind/execute`.
#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub context: Option<Value>,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "description": "Lead qualification: scoring, diagnosis and team recommendations",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check endpoint.
///
/// Returns the service status, version and current time.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })),
    )
}

/// POST /api/v1/analyze
///
/// Validates the lead, runs the qualification pipeline and stamps the result
/// with a lead id and timestamp.
///
/// # Returns
///
/// * `Result<Json<AnalysisResponse>, AppError>` - The analysis, 400 for a
///   malformed body or 422 for out-of-range values.
pub async fn analyze_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadInput>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(lead) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let errors = lead.validation_errors();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    Ok(Json(run_analysis(&state, &lead)))
}

/// GET /api/v1/analyze/sample
///
/// Runs the pipeline on the built-in sample lead. Handy for smoke-testing a
/// deployment without crafting a payload.
pub async fn analyze_sample(State(state): State<Arc<AppState>>) -> Json<AnalysisResponse> {
    Json(run_analysis(&state, &LeadInput::sample()))
}

fn run_analysis(state: &AppState, lead: &LeadInput) -> AnalysisResponse {
    let now = Utc::now();
    let lead_id = new_lead_id(now);

    let analysis = pipeline::analyze(lead, &state.config.analysis);

    tracing::info!(
        "Analyzed lead {} ({}): tier={}, score={:.1}, pain_points={}",
        lead_id,
        lead.company,
        analysis.scoring.tier,
        analysis.scoring.total,
        analysis.diagnosis.critical_pain_points.len()
    );

    AnalysisResponse {
        lead_id,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        analysis,
    }
}

/// `LEAD_YYYYmmdd_HHMMSS_xxxxxxxx`; the random suffix keeps ids unique
/// within the same second.
pub fn new_lead_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("LEAD_{}_{}", now.format("%Y%m%d_%H%M%S"), &suffix[..8])
}

/// GET /api/v1/agents
pub async fn list_agents(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "agents": state.agents.capabilities() }))
}

/// POST /api/v1/agents/:kind/execute
///
/// Runs one agent. Registered placeholders answer 501 so callers can branch
/// on availability.
pub async fn execute_agent(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    payload: Result<Json<AgentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let kind: AgentKind = kind.parse().map_err(AppError::BadRequest)?;
    let Json(request) = payload
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
        .with_context(|| format!("Invalid payload for agent {}", kind))?;

    let agent = state
        .agents
        .get(kind)
        .ok_or_else(|| AppError::InternalError(format!("Agent {} is not registered", kind)))?;

    tracing::info!("Executing agent {}", kind);

    match agent.execute(&request.data, request.context.as_ref()) {
        AgentOutcome::Completed(result) => Ok(Json(json!({
            "agent": kind,
            "result": result,
        }))),
        AgentOutcome::NotImplemented { kind } => Err(AppError::NotImplemented(format!(
            "Agent {} is not implemented yet",
            kind
        ))),
    }
}
