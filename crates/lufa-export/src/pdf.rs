use lufa_core::models::plan::PlanRecord;
use oxidize_pdf::{Color, Document, Font, Page};
use tracing::info;

use crate::error::ExportError;
use crate::paginate::{DrawInstruction, PageGeometry, layout, page_count};
use crate::render::plan_blocks;
use crate::styles::{Rgb, Theme};

/// Generate the PDF for a plan.
///
/// The flow is:
/// 1. PlanRecord → styled blocks (via the report view model)
/// 2. Blocks → draw instructions (via the paginator)
/// 3. Draw instructions + first-page banner → PDF bytes (this function)
pub fn generate_pdf(
    plan: &PlanRecord,
    theme: &Theme,
    geometry: &PageGeometry,
) -> Result<Vec<u8>, ExportError> {
    let blocks = plan_blocks(plan, theme);
    let instructions = layout(&blocks, geometry)?;
    let pages = page_count(&instructions);

    info!(
        blocks = blocks.len(),
        lines = instructions.len(),
        pages,
        "rendering plan to PDF"
    );

    let mut doc = Document::new();
    doc.set_title(&plan.title);
    doc.set_creator("lufa-planner");

    let canvas = Canvas { geometry };
    let mut rendered: Vec<Page> = (0..pages).map(|_| canvas.blank_page()).collect();

    if let Some(first) = rendered.first_mut() {
        canvas.draw_banner(first, theme, &plan.title)?;
    }
    for instruction in &instructions {
        // Page numbers are 1-based and contiguous.
        let page = &mut rendered[instruction.page - 1];
        canvas.draw_line(page, instruction)?;
    }

    for page in rendered {
        doc.add_page(page);
    }

    doc.to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Maps page units measured from the top-left corner onto PDF user space
/// (points from the bottom-left corner).
struct Canvas<'a> {
    geometry: &'a PageGeometry,
}

impl Canvas<'_> {
    fn points(&self, units: f64) -> f64 {
        units * self.geometry.points_per_unit
    }

    fn flip_y(&self, y: f64) -> f64 {
        self.points(self.geometry.page_height - y)
    }

    fn blank_page(&self) -> Page {
        Page::new(
            self.points(self.geometry.page_width),
            self.points(self.geometry.page_height),
        )
    }

    fn draw_banner(&self, page: &mut Page, theme: &Theme, subtitle: &str) -> Result<(), ExportError> {
        page.graphics()
            .set_fill_color(color(theme.banner_fill))
            .rect(
                0.0,
                self.flip_y(theme.banner_height),
                self.points(self.geometry.page_width),
                self.points(theme.banner_height),
            )
            .fill();

        page.text()
            .set_font(Font::Helvetica, theme.banner_title_size)
            .set_fill_color(color(theme.banner_text))
            .at(
                self.points(self.geometry.margin),
                self.flip_y(theme.banner_title_baseline),
            )
            .write(&theme.banner_title)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        page.text()
            .set_font(Font::Helvetica, theme.banner_subtitle_size)
            .set_fill_color(color(theme.banner_text))
            .at(
                self.points(self.geometry.margin),
                self.flip_y(theme.banner_subtitle_baseline),
            )
            .write(subtitle)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        Ok(())
    }

    fn draw_line(&self, page: &mut Page, instruction: &DrawInstruction) -> Result<(), ExportError> {
        if instruction.text.is_empty() {
            return Ok(());
        }
        let font = if instruction.bold {
            Font::HelveticaBold
        } else {
            Font::Helvetica
        };

        page.text()
            .set_font(font, instruction.font_size)
            .set_fill_color(color(instruction.color))
            .at(self.points(instruction.x), self.flip_y(instruction.y))
            .write(&instruction.text)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.unit();
    Color::rgb(r, g, b)
}
