use lufa_core::models::plan::PlanRecord;
use lufa_core::profile::ValidationProfile;
use lufa_core::schema::build_schema;
use lufa_core::validate::validate;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::generator::StructuredGenerator;
use crate::prompt::PLAN_PROMPT;

/// Requests business plans from a [`StructuredGenerator`].
///
/// Each [`request_plan`](Self::request_plan) makes exactly one external
/// call. Retrying is the caller's decision.
pub struct PlanClient<G> {
    generator: G,
    profile: ValidationProfile,
}

impl<G: StructuredGenerator> PlanClient<G> {
    pub fn new(generator: G, profile: ValidationProfile) -> Self {
        Self { generator, profile }
    }

    pub fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate, decode and validate one plan.
    pub async fn request_plan(&self) -> Result<PlanRecord, GenerationError> {
        let request_id = Uuid::new_v4();
        let schema = build_schema(&self.profile);
        info!(request_id = %request_id, "requesting business plan");

        let result = match self.generator.generate_structured(PLAN_PROMPT, &schema).await {
            Ok(payload) => parse_plan(payload.as_deref(), &self.profile),
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(plan) => info!(
                request_id = %request_id,
                title = %plan.title,
                flowchart_steps = plan.flowchart.len(),
                cost_items = plan.cost_analysis.len(),
                "business plan ready"
            ),
            Err(e) => warn!(
                request_id = %request_id,
                kind = e.kind(),
                error = %e,
                "business plan request failed"
            ),
        }

        result
    }
}

/// Decode and validate a raw payload.
pub fn parse_plan(
    payload: Option<&str>,
    profile: &ValidationProfile,
) -> Result<PlanRecord, GenerationError> {
    let value = decode_payload(payload)?;
    Ok(validate(&value, profile)?)
}

/// Decode a payload into an untyped JSON value.
///
/// Surrounding whitespace and a single Markdown code fence are removed
/// first; models add them even when told not to.
pub fn decode_payload(payload: Option<&str>) -> Result<Value, GenerationError> {
    let text = payload.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    serde_json::from_str(body).map_err(|e| GenerationError::MalformedPayload(e.to_string()))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.trim_end().strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((info, inner)) if !info.trim_start().starts_with(['{', '[']) => inner.trim(),
        _ => body.trim(),
    }
}
