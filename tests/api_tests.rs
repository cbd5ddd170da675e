/// HTTP tests against the in-process router
/// Exercises routing, validation and error mapping without binding a socket
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sherlock_lead_api::config::Config;
use sherlock_lead_api::handlers::AppState;
use sherlock_lead_api::server::build_app;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    build_app(Arc::new(AppState::new(Config::default())), false).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn valid_lead() -> Value {
    json!({
        "name": "Laura Gómez",
        "company": "Shopify Partners MX",
        "annual_revenue": 2000000.0,
        "employee_count": 200,
        "industry": "Ecommerce",
        "pain_points": ["seguimiento de clientes", "baja conversión"],
        "marketing_budget": 300000.0,
        "current_channels": ["Meta Ads"],
        "objectives": ["escalar ventas"],
        "urgency": 10,
        "decision_maker": true
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_root_describes_service() {
    let (status, body) = send(get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "sherlock-lead-api");
}

#[tokio::test]
async fn test_analyze_returns_full_contract() {
    let (status, body) = send(post_json("/api/v1/analyze", &valid_lead())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["lead_id"].as_str().unwrap().starts_with("LEAD_"));
    assert!(body["timestamp"].is_string());

    let scoring = &body["scoring"];
    assert_eq!(scoring["score_total"], 100.0);
    assert_eq!(scoring["score_financial"], 30);
    assert_eq!(scoring["score_urgency"], 15.0);
    assert_eq!(scoring["tier"], "HOT");
    assert_eq!(scoring["priority"], "ALTA");
    assert_eq!(scoring["percentage"], 100.0);

    let diagnosis = &body["diagnosis"];
    assert_eq!(diagnosis["summary"], "Lead HOT with 100.0% fit");
    assert_eq!(
        diagnosis["digital_profile"],
        "HIGH - Digitally native industry"
    );
    assert_eq!(diagnosis["critical_pain_points"]["nurturing"], "important");
    assert_eq!(diagnosis["critical_pain_points"]["conversion"], "critical");
    assert!(diagnosis["critical_pain_points"]
        .get("lead_generation")
        .is_none());
    assert_eq!(diagnosis["estimated_close_time"], "2-4 weeks");

    let recs = &body["recommendations"];
    assert_eq!(recs["content"]["deadline"], "48h");
    assert_eq!(recs["paid_media"]["suggested_budget"], 120000);
    assert_eq!(recs["follow_up"]["priority"], "CRÍTICA");
    assert_eq!(recs["follow_up"]["cadence"], "immediate");
    assert_eq!(recs["next_steps"].as_array().unwrap().len(), 3);
    assert_eq!(recs["estimated_timeline"], "2-4 weeks");
}

#[tokio::test]
async fn test_legacy_paths_and_spanish_fields() {
    let lead = json!({
        "nombre": "Ricardo",
        "empresa": "TechCorp",
        "facturacion_anual": 800000,
        "empleados": 45,
        "industria": "tecnología",
        "pain_points": ["generación de leads"],
        "presupuesto_marketing": 40000,
        "canales_actuales": [],
        "objetivos_principales": [],
        "urgencia": 8,
        "decision_maker": true
    });
    let (status, body) = send(post_json("/analyze", &lead)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scoring"]["score_total"], 72.0);
    assert_eq!(body["scoring"]["tier"], "WARM");
}

#[tokio::test]
async fn test_sample_endpoint() {
    for uri in ["/api/v1/analyze/sample", "/test"] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scoring"]["tier"], "WARM");
        assert_eq!(body["scoring"]["priority"], "MEDIA");
    }
}

#[tokio::test]
async fn test_out_of_range_urgency_is_unprocessable() {
    let mut lead = valid_lead();
    lead["urgency"] = json!(11);
    let (status, body) = send(post_json("/api/v1/analyze", &lead)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid lead");
    assert!(body["details"][0]
        .as_str()
        .unwrap()
        .contains("urgency"));
}

#[tokio::test]
async fn test_negative_revenue_is_unprocessable() {
    let mut lead = valid_lead();
    lead["annual_revenue"] = json!(-1.0);
    let (status, _) = send(post_json("/api/v1/analyze", &lead)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let mut lead = valid_lead();
    lead.as_object_mut().unwrap().remove("decision_maker");
    let (status, body) = send(post_json("/api/v1/analyze", &lead)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("decision_maker"));
}

#[tokio::test]
async fn test_missing_pain_points_is_bad_request() {
    let mut lead = valid_lead();
    lead.as_object_mut().unwrap().remove("pain_points");
    let (status, body) = send(post_json("/api/v1/analyze", &lead)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("pain_points"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/analyze")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_agents() {
    let (status, body) = send(get("/api/v1/agents")).await;

    assert_eq!(status, StatusCode::OK);
    let agents = body["agents"].as_array().unwrap();
    assert_eq!(agents.len(), 5);
    assert_eq!(agents[0]["kind"], "content-compliance");
    assert_eq!(agents[0]["available"], true);
    assert_eq!(agents[2]["available"], false);
}

#[tokio::test]
async fn test_execute_compliance_agent() {
    let request = post_json(
        "/api/v1/agents/content-compliance/execute",
        &json!({ "data": { "text_content": "A fantasy story." } }),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["agent"], "content-compliance");
    assert_eq!(body["result"]["compliance_status"], "approved");
}

#[tokio::test]
async fn test_pending_agent_is_not_implemented() {
    let request = post_json("/api/v1/agents/narrative/execute", &json!({ "data": {} }));
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert!(body["error"].as_str().unwrap().contains("narrative"));
}

#[tokio::test]
async fn test_unknown_agent_is_bad_request() {
    let request = post_json("/api/v1/agents/copywriter/execute", &json!({ "data": {} }));
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
