//! Content agents that downstream teams can invoke alongside lead analysis.
//!
//! Every agent implements [`Agent`]. Capabilities that have not been built yet
//! are still registered so callers can discover them, but they answer with
//! [`AgentOutcome::NotImplemented`] instead of failing.

use crate::config::ComplianceConfig;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    ContentCompliance,
    Assembly,
    Narrative,
    ImagePrompt,
    VoiceScript,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::ContentCompliance,
        AgentKind::Assembly,
        AgentKind::Narrative,
        AgentKind::ImagePrompt,
        AgentKind::VoiceScript,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::ContentCompliance => "content-compliance",
            AgentKind::Assembly => "assembly",
            AgentKind::Narrative => "narrative",
            AgentKind::ImagePrompt => "image-prompt",
            AgentKind::VoiceScript => "voice-script",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown agent '{}'", s))
    }
}

/// Result of an agent run.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentOutcome {
    Completed(Value),
    NotImplemented { kind: AgentKind },
}

pub trait Agent: Send + Sync {
    fn kind(&self) -> AgentKind;

    /// Runs the agent on `data`. `context` carries optional caller state.
    fn execute(&self, data: &Value, context: Option<&Value>) -> AgentOutcome;

    fn is_available(&self) -> bool {
        true
    }
}

// ============ Content Compliance ============

/// Checks text and image descriptions against the configured content policy.
pub struct ComplianceAgent {
    rules: ComplianceConfig,
}

impl ComplianceAgent {
    pub fn new(rules: ComplianceConfig) -> Self {
        if rules.forbidden_keywords.is_empty() {
            tracing::warn!("ComplianceAgent has no forbidden keywords; text checks are disabled");
        }
        Self { rules }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Approved,
    Rejected,
    NeedsReview,
}

impl Agent for ComplianceAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::ContentCompliance
    }

    fn execute(&self, data: &Value, _context: Option<&Value>) -> AgentOutcome {
        let text = str_field(data, "text_content");
        let image_description = str_field(data, "image_description");
        let text_lower = text.to_lowercase();

        let mut issues = Vec::new();
        let mut status = ComplianceStatus::Approved;

        if self
            .rules
            .forbidden_keywords
            .iter()
            .any(|kw| text_lower.contains(kw.as_str()))
        {
            issues.push("Text contains potentially problematic simulated content.".to_string());
            status = ComplianceStatus::Rejected;
        }

        if self.rules.enforce_age_appropriateness
            && image_description
                .to_lowercase()
                .contains("underage_looking_character")
        {
            issues.push(
                "Image description suggests potentially non-compliant depiction.".to_string(),
            );
            status = ComplianceStatus::NeedsReview;
        }

        if text.is_empty() && image_description.is_empty() {
            issues.push("No content provided for compliance check.".to_string());
            status = ComplianceStatus::Rejected;
        }

        tracing::info!(
            "Compliance review finished: status={:?}, issues={}",
            status,
            issues.len()
        );

        AgentOutcome::Completed(json!({
            "compliance_status": status,
            "issues": issues,
            "checked_items": {
                "text": !text.is_empty(),
                "image_description": !image_description.is_empty(),
            }
        }))
    }
}

// ============ Assembly ============

/// Merges narrative, image-prompt and voice-script outputs into one piece.
pub struct AssemblyAgent;

impl AssemblyAgent {
    /// (input key, text key, element type, element field, error label)
    const PARTS: [(&'static str, &'static str, &'static str, &'static str, &'static str); 3] = [
        (
            "narrative_output",
            "narrative_text",
            "narrative",
            "content",
            "Narrative",
        ),
        (
            "image_prompt_output",
            "image_prompt_text",
            "image_suggestion",
            "prompt",
            "Image prompt",
        ),
        (
            "voice_script_output",
            "voice_script_text",
            "voice_over_script",
            "script",
            "Voice script",
        ),
    ];
}

impl Agent for AssemblyAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Assembly
    }

    fn execute(&self, data: &Value, _context: Option<&Value>) -> AgentOutcome {
        let title = data
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Untitled Piece");

        let mut elements: Vec<Value> = Vec::new();
        let mut previews: Vec<String> = Vec::new();
        let mut errors: Vec<String> = Vec::new();

        for (input_key, text_key, element_type, field, label) in Self::PARTS {
            let Some(part) = data.get(input_key).filter(|v| v.is_object()) else {
                continue;
            };

            match part.get(text_key).and_then(Value::as_str) {
                Some(text) if !text.is_empty() => {
                    elements.push(json!({ "type": element_type, field: text }));
                    previews.push(text.chars().take(PREVIEW_CHARS).collect());
                }
                _ => {
                    if let Some(err) = part.get("error").filter(|e| reports_error(e)) {
                        let err = err
                            .as_str()
                            .map(str::to_string)
                            .unwrap_or_else(|| err.to_string());
                        errors.push(format!("{} error: {}", label, err));
                    }
                }
            }
        }

        let summary = if errors.is_empty() && previews.len() == Self::PARTS.len() {
            format!(
                "Assembled story: [NARRATIVE] {}... [IMAGE PROMPT] {}... [VOICE SCRIPT] {}...",
                previews[0], previews[1], previews[2]
            )
        } else {
            "Assembly incomplete or contains errors.".to_string()
        };

        tracing::debug!(
            "Assembled '{}' with {} element(s), {} error(s)",
            title,
            elements.len(),
            errors.len()
        );

        AgentOutcome::Completed(json!({
            "assembled_content": {
                "title": title,
                "story_elements": elements,
                "errors": errors,
                "summary": summary,
            }
        }))
    }
}

/// Upstream agents leave `error` empty, `false` or zero when nothing failed.
fn reports_error(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

// ============ Placeholders ============

/// Registered capability with no implementation yet.
pub struct PendingAgent {
    kind: AgentKind,
}

impl Agent for PendingAgent {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    fn execute(&self, _data: &Value, _context: Option<&Value>) -> AgentOutcome {
        AgentOutcome::NotImplemented { kind: self.kind }
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ============ Registry ============

#[derive(Debug, Clone, Serialize)]
pub struct Capability {
    pub kind: AgentKind,
    pub available: bool,
}

pub struct AgentRegistry {
    agents: Vec<Box<dyn Agent>>,
}

impl AgentRegistry {
    pub fn new(compliance: ComplianceConfig) -> Self {
        let agents: Vec<Box<dyn Agent>> = vec![
            Box::new(ComplianceAgent::new(compliance)),
            Box::new(AssemblyAgent),
            Box::new(PendingAgent {
                kind: AgentKind::Narrative,
            }),
            Box::new(PendingAgent {
                kind: AgentKind::ImagePrompt,
            }),
            Box::new(PendingAgent {
                kind: AgentKind::VoiceScript,
            }),
        ];
        Self { agents }
    }

    pub fn get(&self, kind: AgentKind) -> Option<&dyn Agent> {
        self.agents
            .iter()
            .find(|agent| agent.kind() == kind)
            .map(|agent| agent.as_ref())
    }

    /// Lists every registered kind and whether it does real work.
    pub fn capabilities(&self) -> Vec<Capability> {
        self.agents
            .iter()
            .map(|agent| Capability {
                kind: agent.kind(),
                available: agent.is_available(),
            })
            .collect()
    }
}

fn str_field<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}
