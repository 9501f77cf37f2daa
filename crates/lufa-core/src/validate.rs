use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::models::plan::PlanRecord;
use crate::profile::{FieldKind, PlanField, ValidationProfile};

/// Check a decoded response against `profile` and coerce it into a
/// [`PlanRecord`].
///
/// All required fields are checked before anything is reported, so a
/// `MissingFields` error names every offending field at once. A required
/// text field is offending when it is absent, not a string, or blank after
/// trimming. A required sequence is offending when it is absent or not an
/// array; an empty array is accepted.
pub fn validate(raw: &Value, profile: &ValidationProfile) -> Result<PlanRecord, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::NotAnObject {
        found: json_type_name(raw),
    })?;

    let missing: Vec<PlanField> = profile
        .fields()
        .iter()
        .copied()
        .filter(|f| !is_present(object, *f))
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    PlanRecord::deserialize(raw).map_err(|e| ValidationError::Malformed(e.to_string()))
}

fn is_present(object: &Map<String, Value>, field: PlanField) -> bool {
    match (field.kind(), object.get(field.as_str())) {
        (FieldKind::Text, Some(Value::String(s))) => !s.trim().is_empty(),
        (FieldKind::Sequence, Some(Value::Array(_))) => true,
        _ => false,
    }
}

/// Human name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
