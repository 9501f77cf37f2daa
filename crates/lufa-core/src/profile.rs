use serde::{Deserialize, Serialize};

use crate::schema::field;

/// A top-level field of the plan record, named as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanField {
    Title,
    ExecutiveSummary,
    MarketAnalysis,
    ProductionProcess,
    ProductSpecifications,
    ExportStrategy,
    Flowchart,
    CostAnalysis,
    Timeline,
    FinancialProjections,
    Conclusion,
}

/// Shape of a plan field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string that must be non-empty after trimming when required.
    Text,
    /// An array that must be present when required; empty is fine.
    Sequence,
}

impl PlanField {
    /// Every field, in schema order.
    pub const ALL: [PlanField; 11] = [
        PlanField::Title,
        PlanField::ExecutiveSummary,
        PlanField::MarketAnalysis,
        PlanField::ProductionProcess,
        PlanField::ProductSpecifications,
        PlanField::ExportStrategy,
        PlanField::Flowchart,
        PlanField::CostAnalysis,
        PlanField::Timeline,
        PlanField::FinancialProjections,
        PlanField::Conclusion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => field::TITLE,
            Self::ExecutiveSummary => field::EXECUTIVE_SUMMARY,
            Self::MarketAnalysis => field::MARKET_ANALYSIS,
            Self::ProductionProcess => field::PRODUCTION_PROCESS,
            Self::ProductSpecifications => field::PRODUCT_SPECIFICATIONS,
            Self::ExportStrategy => field::EXPORT_STRATEGY,
            Self::Flowchart => field::FLOWCHART,
            Self::CostAnalysis => field::COST_ANALYSIS,
            Self::Timeline => field::TIMELINE,
            Self::FinancialProjections => field::FINANCIAL_PROJECTIONS,
            Self::Conclusion => field::CONCLUSION,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Flowchart | Self::CostAnalysis | Self::Timeline => FieldKind::Sequence,
            _ => FieldKind::Text,
        }
    }
}

impl std::fmt::Display for PlanField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two required-field profiles a generation request can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    /// Narrative sections only.
    Minimal,
    /// Narrative sections plus flowchart, cost analysis and timeline.
    #[default]
    Extended,
}

/// The ordered set of fields a response must carry to be accepted.
///
/// Order matters: validation errors list offending fields in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationProfile {
    fields: Vec<PlanField>,
}

impl ValidationProfile {
    pub fn minimal() -> Self {
        Self {
            fields: vec![
                PlanField::Title,
                PlanField::ExecutiveSummary,
                PlanField::ProductSpecifications,
                PlanField::MarketAnalysis,
                PlanField::FinancialProjections,
                PlanField::Conclusion,
            ],
        }
    }

    pub fn extended() -> Self {
        Self {
            fields: vec![
                PlanField::Title,
                PlanField::ExecutiveSummary,
                PlanField::Flowchart,
                PlanField::CostAnalysis,
                PlanField::Timeline,
                PlanField::ProductSpecifications,
                PlanField::MarketAnalysis,
                PlanField::FinancialProjections,
                PlanField::Conclusion,
            ],
        }
    }

    /// Build a profile from an arbitrary field list. Duplicates are dropped,
    /// keeping the first occurrence.
    pub fn custom(fields: impl IntoIterator<Item = PlanField>) -> Self {
        let mut unique = Vec::new();
        for f in fields {
            if !unique.contains(&f) {
                unique.push(f);
            }
        }
        Self { fields: unique }
    }

    pub fn fields(&self) -> &[PlanField] {
        &self.fields
    }

    pub fn requires(&self, field: PlanField) -> bool {
        self.fields.contains(&field)
    }
}

impl From<ProfileKind> for ValidationProfile {
    fn from(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Minimal => Self::minimal(),
            ProfileKind::Extended => Self::extended(),
        }
    }
}

impl Default for ValidationProfile {
    fn default() -> Self {
        Self::extended()
    }
}
