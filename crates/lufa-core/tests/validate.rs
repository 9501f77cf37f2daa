use lufa_core::error::ValidationError;
use lufa_core::models::plan::Step;
use lufa_core::profile::{PlanField, ValidationProfile};
use lufa_core::validate::validate;
use serde_json::{Value, json};

fn full_plan() -> Value {
    json!({
        "title": "Lufa Canadá 2025",
        "executiveSummary": "Exportación de esponjas de lufa premium.",
        "marketAnalysis": "Demanda creciente de productos eco-friendly en Ontario.",
        "productionProcess": "Cultivo orgánico, cosecha y secado al sol.",
        "productSpecifications": "Esponjas ergonómicas con mango antideslizante.",
        "exportStrategy": "Consolidación marítima vía Montreal.",
        "flowchart": [
            { "step": 1, "activity": "Siembra", "description": "Semillas certificadas." },
            { "step": 2, "activity": "Cosecha", "description": "Fruto maduro y seco." }
        ],
        "costAnalysis": [
            { "concept": "Semillas", "unit": "kg", "estimatedCost": "USD 120" },
            { "concept": "Flete", "unit": "contenedor", "estimatedCost": "USD 3,400" }
        ],
        "timeline": [
            { "period": "Mes 1-3", "phase": "Cultivo", "milestones": "Primera cosecha" }
        ],
        "financialProjections": "ROI del 35% al segundo año.",
        "conclusion": "Proyecto viable."
    })
}

fn without(mut value: Value, fields: &[&str]) -> Value {
    let object = value.as_object_mut().unwrap();
    for f in fields {
        object.remove(*f);
    }
    value
}

#[test]
fn reports_every_missing_field_in_profile_order() {
    let raw = without(full_plan(), &["conclusion", "marketAnalysis"]);

    let err = validate(&raw, &ValidationProfile::extended()).unwrap_err();

    assert_eq!(
        err,
        ValidationError::MissingFields {
            fields: vec![PlanField::MarketAnalysis, PlanField::Conclusion],
        }
    );
    let message = err.to_string();
    assert!(message.contains("marketAnalysis"));
    assert!(message.contains("conclusion"));
}

#[test]
fn whitespace_only_text_counts_as_missing() {
    let mut raw = full_plan();
    raw["executiveSummary"] = json!("   \n\t");
    raw["title"] = json!("");

    let err = validate(&raw, &ValidationProfile::extended()).unwrap_err();

    assert_eq!(
        err.missing_fields(),
        &[PlanField::Title, PlanField::ExecutiveSummary]
    );
}

#[test]
fn empty_sequences_are_present_but_absent_ones_are_not() {
    let mut raw = without(full_plan(), &["timeline"]);
    raw["flowchart"] = json!([]);
    raw["costAnalysis"] = json!([]);

    let err = validate(&raw, &ValidationProfile::extended()).unwrap_err();
    assert_eq!(err.missing_fields(), &[PlanField::Timeline]);

    raw["timeline"] = json!([]);
    let plan = validate(&raw, &ValidationProfile::extended()).unwrap();
    assert!(plan.flowchart.is_empty());
    assert!(plan.timeline.is_empty());
}

#[test]
fn wrong_type_for_required_field_is_offending() {
    let mut raw = full_plan();
    raw["title"] = json!(42);
    raw["flowchart"] = json!({ "step": 1 });

    let err = validate(&raw, &ValidationProfile::extended()).unwrap_err();
    assert_eq!(err.missing_fields(), &[PlanField::Title, PlanField::Flowchart]);
}

#[test]
fn non_object_payload_is_rejected() {
    let err = validate(&json!(["title"]), &ValidationProfile::extended()).unwrap_err();
    assert_eq!(err, ValidationError::NotAnObject { found: "array" });
}

#[test]
fn valid_plan_round_trips_unchanged() {
    let raw = full_plan();

    let plan = validate(&raw, &ValidationProfile::extended()).unwrap();

    assert_eq!(serde_json::to_value(&plan).unwrap(), raw);
    assert_eq!(plan.cost_analysis[1].estimated_cost, "USD 3,400");
    assert_eq!(plan.flowchart[1].step, Step::Number(2));
}

#[test]
fn minimal_profile_accepts_plan_without_sequences() {
    let raw = without(
        full_plan(),
        &["flowchart", "costAnalysis", "timeline", "exportStrategy"],
    );

    assert!(validate(&raw, &ValidationProfile::extended()).is_err());

    let plan = validate(&raw, &ValidationProfile::minimal()).unwrap();
    assert!(plan.flowchart.is_empty());
    assert!(plan.cost_analysis.is_empty());
    assert_eq!(plan.export_strategy, "");
}

#[test]
fn custom_profile_checks_only_its_fields() {
    let raw = json!({ "title": "Solo título" });
    let profile = ValidationProfile::custom([PlanField::Title, PlanField::Title]);

    assert_eq!(profile.fields(), &[PlanField::Title]);
    let plan = validate(&raw, &profile).unwrap();
    assert_eq!(plan.title, "Solo título");
}

#[test]
fn odd_row_values_are_kept_as_provided() {
    let mut raw = full_plan();
    raw["flowchart"] = json!([
        { "step": 3, "activity": "Empaque", "description": "" },
        { "step": "1", "activity": "Siembra" },
        { "step": "primero", "activity": "Riego", "description": "Goteo" },
        { "step": -2, "activity": "Poda" },
        { "step": 2.7, "activity": "Secado" },
        { "activity": "Selección" }
    ]);
    raw["costAnalysis"] = json!([
        { "concept": "Mano de obra", "unit": "mes", "estimatedCost": 1500 },
        { "concept": "Seguro", "unit": "año", "estimatedCost": "a convenir" }
    ]);

    let plan = validate(&raw, &ValidationProfile::extended()).unwrap();

    let steps: Vec<String> = plan.flowchart.iter().map(|s| s.step.to_string()).collect();
    assert_eq!(steps, vec!["3", "1", "primero", "-2", "2.7", ""]);
    assert_eq!(plan.flowchart[0].step.number(), Some(3));
    assert_eq!(plan.flowchart[2].step, Step::Label("primero".to_string()));
    assert_eq!(plan.flowchart[3].step.number(), None);
    assert_eq!(plan.flowchart[1].description, "");
    assert_eq!(plan.cost_analysis[0].estimated_cost, "1500");
    assert_eq!(plan.cost_analysis[1].estimated_cost, "a convenir");
}

#[test]
fn null_optional_text_becomes_empty() {
    let mut raw = full_plan();
    raw["exportStrategy"] = Value::Null;

    let plan = validate(&raw, &ValidationProfile::extended()).unwrap();
    assert_eq!(plan.export_strategy, "");
}

#[test]
fn non_object_row_is_malformed() {
    let mut raw = full_plan();
    raw["timeline"] = json!(["Mes 1"]);

    let err = validate(&raw, &ValidationProfile::extended()).unwrap_err();
    assert!(matches!(err, ValidationError::Malformed(_)));
}
