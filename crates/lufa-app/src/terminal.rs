//! Line-oriented front end.
//!
//! Commands: `g` generates (or retries, or regenerates), `e` exports the
//! plan on display, `q` quits. End of input also quits.

use std::io::Write;

use lufa_bedrock::generator::StructuredGenerator;
use lufa_core::models::plan::PlanRecord;
use lufa_core::models::status::GenerationStatus;
use lufa_core::report::{SectionBody, to_sections};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::controller::Controller;

const HELP: &str = "Comandos: g = generar plan, e = exportar PDF, q = salir";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Generate,
    Export,
    Quit,
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "g" | "generar" => Some(Self::Generate),
            "e" | "exportar" => Some(Self::Export),
            "q" | "salir" => Some(Self::Quit),
            "h" | "?" | "ayuda" => Some(Self::Help),
            _ => None,
        }
    }
}

/// Read commands from `input` until `q` or end of input.
pub async fn run<G, R, W>(controller: &mut Controller<G>, input: R, out: &mut W) -> eyre::Result<()>
where
    G: StructuredGenerator,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Plan Maestro de Exportación de Lufa")?;
    writeln!(out, "{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "[{}] > ", controller.status().label())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Generate) => {
                writeln!(out, "Generando plan estratégico...")?;
                match controller.generate().await? {
                    GenerationStatus::Completed(plan) => print_report(out, plan)?,
                    GenerationStatus::Failed { message } => {
                        writeln!(out, "Error: {message}")?;
                        writeln!(out, "Escriba g para reintentar.")?;
                    }
                    _ => {}
                }
            }
            Some(Command::Export) => {
                if controller.status().plan().is_none() {
                    writeln!(out, "No hay un plan para exportar. Escriba g para generarlo.")?;
                    continue;
                }
                match controller.export_today() {
                    Ok(path) => writeln!(out, "PDF guardado en {}", path.display())?,
                    Err(e) => {
                        tracing::warn!(error = %e, "export failed");
                        writeln!(out, "No se pudo exportar el PDF: {e}")?;
                    }
                }
            }
            Some(Command::Quit) => break,
            Some(Command::Help) => writeln!(out, "{HELP}")?,
            None => writeln!(out, "Comando desconocido. {HELP}")?,
        }
    }

    Ok(())
}

/// Print the report view of `plan`, one section after another.
pub fn print_report<W: Write>(out: &mut W, plan: &PlanRecord) -> std::io::Result<()> {
    for section in to_sections(plan) {
        writeln!(out)?;
        writeln!(out, "== {} ==", section.heading.to_uppercase())?;
        match section.body {
            SectionBody::Text(text) => writeln!(out, "{text}")?,
            SectionBody::Rows(rows) => {
                for row in rows {
                    if row.detail.is_empty() {
                        writeln!(out, "  {} | {}", row.label, row.value)?;
                    } else {
                        writeln!(out, "  {} | {} | {}", row.label, row.value, row.detail)?;
                    }
                }
            }
        }
    }
    writeln!(out)?;
    writeln!(out, "Escriba e para exportar a PDF o g para regenerar.")
}
