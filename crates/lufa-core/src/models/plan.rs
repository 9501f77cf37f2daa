use serde::{Deserialize, Serialize};

/// The structured business plan produced by one generation cycle.
///
/// Only [`crate::validate::validate`] builds one from untrusted input, so a
/// `PlanRecord` in hand always satisfies the profile it was validated
/// against. Fields the profile does not require default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub executive_summary: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub market_analysis: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub production_process: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub product_specifications: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub export_strategy: String,
    #[serde(default, deserialize_with = "lenient::rows")]
    pub flowchart: Vec<FlowStep>,
    #[serde(default, deserialize_with = "lenient::rows")]
    pub cost_analysis: Vec<CostItem>,
    #[serde(default, deserialize_with = "lenient::rows")]
    pub timeline: Vec<TimelinePhase>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub financial_projections: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub conclusion: String,
}

/// One step of the operational flowchart.
///
/// `step` is expected to count up from 1 but is never checked; rows are
/// always presented in sequence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    #[serde(default, deserialize_with = "lenient::step")]
    pub step: Step,
    #[serde(default, deserialize_with = "lenient::text")]
    pub activity: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

/// A flowchart step number exactly as the model sent it.
///
/// Whole non-negative numbers are kept as numbers; anything else (`"primero"`,
/// `-1`, `2.7`) is kept verbatim as a label so it displays unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Step {
    Number(u64),
    Label(String),
}

impl Step {
    pub fn number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Label(_) => None,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl From<u64> for Step {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub concept: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: String,
    /// Free-form currency text, e.g. `"CAD 12,500"`. Never parsed.
    #[serde(default, deserialize_with = "lenient::text")]
    pub estimated_cost: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePhase {
    #[serde(default, deserialize_with = "lenient::text")]
    pub period: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phase: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub milestones: String,
}

/// Deserializers that accept what models actually send instead of what the
/// schema asked for: numbers where text was expected, `null` for absent
/// values, step numbers as strings.
mod lenient {
    use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        match Value::deserialize(d)? {
            Value::String(s) => Ok(s),
            Value::Null => Ok(String::new()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(de::Error::custom(format!(
                "expected text, found {}",
                crate::validate::json_type_name(&other)
            ))),
        }
    }

    pub fn rows<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(d)? {
            Value::Null => Ok(Vec::new()),
            value @ Value::Array(_) => serde_json::from_value(value).map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected a list, found {}",
                crate::validate::json_type_name(&other)
            ))),
        }
    }

    /// Never fails: values that are not whole step numbers become labels.
    pub fn step<'de, D: Deserializer<'de>>(d: D) -> Result<super::Step, D::Error> {
        use super::Step;

        let step = match Value::deserialize(d)? {
            Value::Number(n) => match n.as_u64() {
                Some(v) => Step::Number(v),
                None => Step::Label(n.to_string()),
            },
            Value::String(s) => Step::Label(s),
            Value::Null => Step::default(),
            other => Step::Label(other.to_string()),
        };
        Ok(step)
    }
}
