use std::sync::Mutex;

use async_trait::async_trait;
use lufa_app::controller::{CONNECTION_FAILED, Controller, ExportSettings};
use lufa_app::terminal::{Command, run};
use lufa_bedrock::client::PlanClient;
use lufa_bedrock::error::TransportError;
use lufa_bedrock::generator::StructuredGenerator;
use lufa_core::profile::ValidationProfile;
use lufa_core::schema::SchemaDescriptor;
use lufa_export::paginate::PageGeometry;
use lufa_export::styles::Theme;

struct Replies(Mutex<Vec<Result<Option<String>, TransportError>>>);

#[async_trait]
impl StructuredGenerator for Replies {
    async fn generate_structured(
        &self,
        _prompt: &str,
        _schema: &SchemaDescriptor,
    ) -> Result<Option<String>, TransportError> {
        self.0.lock().unwrap().remove(0)
    }
}

fn plan() -> Result<Option<String>, TransportError> {
    Ok(Some(
        serde_json::json!({
            "title": "Lufa Ontario",
            "executiveSummary": "Exportar esponjas de lufa.",
            "marketAnalysis": "Consumidores conscientes.",
            "flowchart": [{ "step": 1, "activity": "Siembra", "description": "Marzo" }],
            "costAnalysis": [],
            "timeline": [{ "period": "Año 1", "phase": "Piloto", "milestones": "" }],
            "productSpecifications": "Discos faciales",
            "financialProjections": "Margen 35%",
            "conclusion": "Adelante"
        })
        .to_string(),
    ))
}

async fn session(
    replies: Vec<Result<Option<String>, TransportError>>,
    input: &str,
) -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = Controller::new(
        PlanClient::new(Replies(Mutex::new(replies)), ValidationProfile::extended()),
        ExportSettings {
            output_dir: dir.path().to_path_buf(),
            theme: Theme::default(),
            geometry: PageGeometry::default(),
        },
    );

    let mut out = Vec::new();
    run(&mut controller, input.as_bytes(), &mut out).await.unwrap();
    (String::from_utf8(out).unwrap(), dir)
}

#[test]
fn commands_parse_case_insensitively() {
    assert_eq!(Command::parse("g"), Some(Command::Generate));
    assert_eq!(Command::parse(" E \n"), Some(Command::Export));
    assert_eq!(Command::parse("salir"), Some(Command::Quit));
    assert_eq!(Command::parse("x"), None);
}

#[tokio::test]
async fn generate_prints_report_sections() {
    let (out, _dir) = session(vec![plan()], "g\nq\n").await;

    assert!(out.contains("== PROYECTO =="));
    assert!(out.contains("Lufa Ontario"));
    assert!(out.contains("== FLUJOGRAMA OPERATIVO =="));
    assert!(out.contains("  1 | Siembra | Marzo"));
    assert!(out.contains("  Año 1 | Piloto\n"));
    assert!(out.contains("[completed] > "));
}

#[tokio::test]
async fn export_requires_a_plan() {
    let (out, dir) = session(vec![], "e\nq\n").await;

    assert!(out.contains("No hay un plan para exportar"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn failure_offers_retry_and_retry_exports() {
    let replies = vec![Err(TransportError("timeout".to_string())), plan()];
    let (out, dir) = session(replies, "g\ne\ng\ne\n").await;

    assert!(out.contains(CONNECTION_FAILED));
    assert!(out.contains("Escriba g para reintentar."));
    assert!(out.contains("No hay un plan para exportar"));
    assert!(out.contains("PDF guardado en"));

    let files: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("Lufa_Export_Plan_"));
    assert!(files[0].ends_with(".pdf"));
}

#[tokio::test]
async fn unknown_command_prints_help() {
    let (out, _dir) = session(vec![], "zz\n").await;

    assert!(out.contains("Comando desconocido."));
}
