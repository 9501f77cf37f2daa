//! Owns the generation status and drives it from user commands.

use std::path::PathBuf;

use jiff::civil::Date;
use lufa_bedrock::client::PlanClient;
use lufa_bedrock::error::GenerationError;
use lufa_bedrock::generator::StructuredGenerator;
use lufa_core::models::status::{GenerationStatus, StatusEvent};
use lufa_export::paginate::PageGeometry;
use lufa_export::pdf::generate_pdf;
use lufa_export::styles::Theme;
use tracing::info;

/// Shown when the generation service could not be reached.
pub const CONNECTION_FAILED: &str =
    "No se pudo conectar con el servicio de IA. Verifique su conexión.";

/// Shown when the service answered with something that is not a usable plan.
pub const INVALID_PLAN: &str =
    "El servicio de IA devolvió un plan incompleto o inválido. Intente generarlo de nuevo.";

/// Where and how exported documents are written.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output_dir: PathBuf,
    pub theme: Theme,
    pub geometry: PageGeometry,
}

pub struct Controller<G> {
    client: PlanClient<G>,
    status: GenerationStatus,
    export: ExportSettings,
}

impl<G: StructuredGenerator> Controller<G> {
    pub fn new(client: PlanClient<G>, export: ExportSettings) -> Self {
        Self {
            client,
            status: GenerationStatus::default(),
            export,
        }
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    /// Request a new plan. Works from every state but `Generating`; a
    /// failure replaces whatever plan was on display.
    pub async fn generate(&mut self) -> eyre::Result<&GenerationStatus> {
        self.apply(StatusEvent::Generate)?;

        let event = match self.client.request_plan().await {
            Ok(plan) => StatusEvent::Succeeded(plan),
            Err(e) => StatusEvent::Failed(user_message(&e).to_string()),
        };
        self.apply(event)?;

        Ok(&self.status)
    }

    /// Write the plan on display to a dated PDF in the output directory.
    pub fn export(&self, date: Date) -> eyre::Result<PathBuf> {
        let plan = self.status.plan().ok_or_else(|| {
            eyre::eyre!(
                "no completed plan to export (status: {})",
                self.status.label()
            )
        })?;

        let bytes = generate_pdf(plan, &self.export.theme, &self.export.geometry)?;

        std::fs::create_dir_all(&self.export.output_dir)?;
        let path = self.export.output_dir.join(export_filename(date));
        std::fs::write(&path, &bytes)
            .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;

        info!(path = %path.display(), bytes = bytes.len(), "plan exported");
        Ok(path)
    }

    /// [`export`](Self::export) dated with today's local date.
    pub fn export_today(&self) -> eyre::Result<PathBuf> {
        self.export(jiff::Zoned::now().date())
    }

    fn apply(&mut self, event: StatusEvent) -> eyre::Result<()> {
        let from = self.status.label();
        let next = self.status.next(event)?;
        info!(from, to = next.label(), "status changed");
        self.status = next;
        Ok(())
    }
}

/// `Lufa_Export_Plan_<YYYY-MM-DD>.pdf`
pub fn export_filename(date: Date) -> String {
    format!("Lufa_Export_Plan_{date}.pdf")
}

pub fn user_message(error: &GenerationError) -> &'static str {
    match error {
        GenerationError::Transport(_) => CONNECTION_FAILED,
        GenerationError::EmptyResponse
        | GenerationError::MalformedPayload(_)
        | GenerationError::SchemaViolation(_) => INVALID_PLAN,
    }
}
