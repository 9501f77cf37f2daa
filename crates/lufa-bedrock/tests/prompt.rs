use lufa_bedrock::prompt::{PLAN_PROMPT, build_system_prompt};
use lufa_core::profile::ValidationProfile;
use lufa_core::schema::build_schema;

#[test]
fn system_prompt_embeds_schema_block() {
    let schema = build_schema(&ValidationProfile::extended());

    let prompt = build_system_prompt(&schema);

    assert!(prompt.contains("<response_schema>"));
    assert!(prompt.trim_end().ends_with("</response_schema>"));

    let start = prompt.find("<response_schema>").unwrap() + "<response_schema>".len();
    let end = prompt.find("</response_schema>").unwrap();
    let embedded: serde_json::Value = serde_json::from_str(&prompt[start..end]).unwrap();
    assert_eq!(&embedded, schema.as_json());
}

#[test]
fn plan_prompt_asks_for_every_section() {
    for needle in [
        "Resumen ejecutivo",
        "mercado canadiense",
        "Flujograma",
        "costos",
        "Cronograma",
        "Proyecciones financieras",
        "Conclusión",
    ] {
        assert!(PLAN_PROMPT.contains(needle), "prompt should mention {needle}");
    }
}
