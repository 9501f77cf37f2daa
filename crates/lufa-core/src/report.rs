//! Report view model: the on-screen structure of a plan.
//!
//! Sections come out in a fixed order and sequence fields keep their source
//! order, so the same record always reads the same way on screen and in the
//! exported document.

use serde::Serialize;

use crate::models::plan::PlanRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Title,
    ExecutiveSummary,
    MarketAnalysis,
    ProductionAndSpecifications,
    Flowchart,
    CostAnalysis,
    Timeline,
    ExportStrategy,
    FinancialProjections,
    Conclusion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Text(String),
    Rows(Vec<SectionRow>),
}

/// One row of a tabular section.
///
/// - flowchart: `label` = step number, `value` = activity, `detail` = description
/// - cost analysis: `label` = concept, `value` = estimated cost, `detail` = unit
/// - timeline: `label` = period, `value` = phase, `detail` = milestones
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    pub label: String,
    pub value: String,
    pub detail: String,
}

/// Derive the report sections from a validated plan.
pub fn to_sections(plan: &PlanRecord) -> Vec<Section> {
    vec![
        text(SectionKind::Title, "Proyecto", &plan.title),
        text(
            SectionKind::ExecutiveSummary,
            "Resumen Ejecutivo",
            &plan.executive_summary,
        ),
        text(
            SectionKind::MarketAnalysis,
            "Mercado Canadiense",
            &plan.market_analysis,
        ),
        text(
            SectionKind::ProductionAndSpecifications,
            "Producción y Especificaciones",
            &join_paragraphs(&[&plan.production_process, &plan.product_specifications]),
        ),
        rows(
            SectionKind::Flowchart,
            "Flujograma Operativo",
            plan.flowchart.iter().map(|s| SectionRow {
                label: s.step.to_string(),
                value: s.activity.clone(),
                detail: s.description.clone(),
            }),
        ),
        rows(
            SectionKind::CostAnalysis,
            "Análisis de Costos",
            plan.cost_analysis.iter().map(|c| SectionRow {
                label: c.concept.clone(),
                value: c.estimated_cost.clone(),
                detail: c.unit.clone(),
            }),
        ),
        rows(
            SectionKind::Timeline,
            "Cronograma de Ejecución",
            plan.timeline.iter().map(|t| SectionRow {
                label: t.period.clone(),
                value: t.phase.clone(),
                detail: t.milestones.clone(),
            }),
        ),
        text(
            SectionKind::ExportStrategy,
            "Estrategia de Exportación",
            &plan.export_strategy,
        ),
        text(
            SectionKind::FinancialProjections,
            "Proyecciones Financieras",
            &plan.financial_projections,
        ),
        text(
            SectionKind::Conclusion,
            "Conclusión Estratégica",
            &plan.conclusion,
        ),
    ]
}

fn text(kind: SectionKind, heading: &str, body: &str) -> Section {
    Section {
        kind,
        heading: heading.to_string(),
        body: SectionBody::Text(body.to_string()),
    }
}

fn rows(kind: SectionKind, heading: &str, rows: impl Iterator<Item = SectionRow>) -> Section {
    Section {
        kind,
        heading: heading.to_string(),
        body: SectionBody::Rows(rows.collect()),
    }
}

/// Join non-blank paragraphs with a blank line.
fn join_paragraphs(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
