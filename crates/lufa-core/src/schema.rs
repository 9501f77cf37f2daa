use serde_json::{Map, Value, json};

use crate::error::CoreError;
use crate::profile::{PlanField, ValidationProfile};

/// Field names used in the plan response payload.
pub mod field {
    pub const TITLE: &str = "title";
    pub const EXECUTIVE_SUMMARY: &str = "executiveSummary";
    pub const MARKET_ANALYSIS: &str = "marketAnalysis";
    pub const PRODUCTION_PROCESS: &str = "productionProcess";
    pub const PRODUCT_SPECIFICATIONS: &str = "productSpecifications";
    pub const EXPORT_STRATEGY: &str = "exportStrategy";
    pub const FLOWCHART: &str = "flowchart";
    pub const COST_ANALYSIS: &str = "costAnalysis";
    pub const TIMELINE: &str = "timeline";
    pub const FINANCIAL_PROJECTIONS: &str = "financialProjections";
    pub const CONCLUSION: &str = "conclusion";
}

/// Field names of the rows inside the sequence fields.
pub mod row_field {
    pub const STEP: &str = "step";
    pub const ACTIVITY: &str = "activity";
    pub const DESCRIPTION: &str = "description";
    pub const CONCEPT: &str = "concept";
    pub const UNIT: &str = "unit";
    pub const ESTIMATED_COST: &str = "estimatedCost";
    pub const PERIOD: &str = "period";
    pub const PHASE: &str = "phase";
    pub const MILESTONES: &str = "milestones";
}

/// Structural description of the expected response, sent alongside the
/// prompt. It describes every field; only the profile's fields are listed
/// as required.
///
/// The model is asked to honor it, but nothing guarantees that it does, so
/// responses still go through [`crate::validate::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDescriptor {
    schema: Value,
}

impl SchemaDescriptor {
    pub fn as_json(&self) -> &Value {
        &self.schema
    }

    pub fn to_pretty_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.schema)?)
    }

    /// Names listed under `required`, in profile order.
    pub fn required(&self) -> Vec<&str> {
        self.schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Build the JSON Schema describing a plan record for the given profile.
pub fn build_schema(profile: &ValidationProfile) -> SchemaDescriptor {
    let mut properties = Map::new();
    for f in PlanField::ALL {
        let property = match f {
            PlanField::Flowchart => array_of(&[
                (row_field::STEP, "integer"),
                (row_field::ACTIVITY, "string"),
                (row_field::DESCRIPTION, "string"),
            ]),
            PlanField::CostAnalysis => array_of(&[
                (row_field::CONCEPT, "string"),
                (row_field::UNIT, "string"),
                (row_field::ESTIMATED_COST, "string"),
            ]),
            PlanField::Timeline => array_of(&[
                (row_field::PERIOD, "string"),
                (row_field::PHASE, "string"),
                (row_field::MILESTONES, "string"),
            ]),
            _ => json!({ "type": "string" }),
        };
        properties.insert(f.as_str().to_string(), property);
    }

    let required: Vec<Value> = profile
        .fields()
        .iter()
        .map(|f| Value::String(f.as_str().to_string()))
        .collect();

    SchemaDescriptor {
        schema: json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    }
}

fn array_of(columns: &[(&str, &str)]) -> Value {
    let mut item_properties = Map::new();
    for (name, ty) in columns {
        item_properties.insert((*name).to_string(), json!({ "type": ty }));
    }
    let item_required: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();

    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": item_properties,
            "required": item_required,
        }
    })
}
