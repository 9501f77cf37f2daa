//! Page layout: turns an ordered list of styled blocks into positioned
//! draw instructions.
//!
//! The overflow check runs once per block, before the block is placed. A
//! block that does not fit below the cursor moves whole to a fresh page; a
//! block taller than a page is still placed whole and runs past the bottom
//! of its page. Page counts depend on this rule, so it must not become a
//! per-line check.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigurationError;
use crate::metrics::wrap_text;
use crate::styles::{Rgb, TextStyle};

/// A layout-ready unit of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { text: String, level: u8 },
    Paragraph { text: String },
    BulletItem { text: String },
}

impl Block {
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. } | Self::Paragraph { text } | Self::BulletItem { text } => {
                text
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub block: Block,
    pub style: TextStyle,
}

/// Page dimensions and spacing, all in page units measured from the top
/// left corner with `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Left, right and top margin.
    pub margin: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub line_height: f64,
    /// A block whose last line would end below this line starts a new page.
    pub bottom_threshold: f64,
    /// Extra space after every block.
    pub block_spacing: f64,
    /// Cursor position of the first block on the first page, below the banner.
    pub content_start: f64,
    /// Points per page unit; font sizes are in points.
    pub points_per_unit: f64,
}

impl PageGeometry {
    /// A4 portrait in millimetres.
    pub fn a4_millimetres() -> Self {
        Self {
            margin: 20.0,
            page_width: 210.0,
            page_height: 297.0,
            line_height: 7.0,
            bottom_threshold: 280.0,
            block_spacing: 5.0,
            content_start: 55.0,
            points_per_unit: 72.0 / 25.4,
        }
    }

    /// Width available to text, in page units.
    pub fn text_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let values = [
            ("margin", self.margin),
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("line_height", self.line_height),
            ("bottom_threshold", self.bottom_threshold),
            ("block_spacing", self.block_spacing),
            ("content_start", self.content_start),
            ("points_per_unit", self.points_per_unit),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFinite { name });
            }
        }

        for (name, value) in [
            ("margin", self.margin),
            ("block_spacing", self.block_spacing),
            ("content_start", self.content_start),
        ] {
            if value < 0.0 {
                return Err(ConfigurationError::Negative { name, value });
            }
        }
        for (name, value) in [
            ("page_height", self.page_height),
            ("line_height", self.line_height),
            ("points_per_unit", self.points_per_unit),
        ] {
            if value <= 0.0 {
                return Err(ConfigurationError::NotPositive { name, value });
            }
        }

        if self.text_width() <= 0.0 {
            return Err(ConfigurationError::NoTextWidth {
                margin: self.margin,
                page_width: self.page_width,
            });
        }
        if self.bottom_threshold <= self.margin {
            return Err(ConfigurationError::ThresholdAboveMargin {
                threshold: self.bottom_threshold,
                margin: self.margin,
            });
        }
        if self.bottom_threshold > self.page_height {
            return Err(ConfigurationError::ThresholdBeyondPage {
                threshold: self.bottom_threshold,
                page_height: self.page_height,
            });
        }
        if self.content_start >= self.bottom_threshold {
            return Err(ConfigurationError::ContentStartOutOfRange {
                content_start: self.content_start,
                threshold: self.bottom_threshold,
            });
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4_millimetres()
    }
}

/// One line of text placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawInstruction {
    pub text: String,
    /// Page units from the left edge.
    pub x: f64,
    /// Baseline in page units from the top edge.
    pub y: f64,
    pub font_size: f64,
    pub bold: bool,
    pub color: Rgb,
    /// 1-based page number.
    pub page: usize,
    /// Index of the source block in the input.
    pub block: usize,
}

/// Lay out `blocks` in order, starting on page 1 at `content_start`.
///
/// Identical inputs always produce identical output.
pub fn layout(
    blocks: &[StyledBlock],
    geometry: &PageGeometry,
) -> Result<Vec<DrawInstruction>, ConfigurationError> {
    geometry.validate()?;
    let max_width_points = geometry.text_width() * geometry.points_per_unit;

    let mut instructions = Vec::new();
    let mut page = 1;
    let mut cursor = geometry.content_start;

    for (index, styled) in blocks.iter().enumerate() {
        let style = &styled.style;
        style.validate()?;

        let lines = wrap_text(styled.block.text(), style.font_size, style.bold, max_width_points);
        let extent = lines.len() as f64 * geometry.line_height;

        if cursor + extent > geometry.bottom_threshold {
            page += 1;
            cursor = geometry.margin;
            debug!(block = index, page, "page break before block");

            if cursor + extent > geometry.bottom_threshold {
                warn!(
                    block = index,
                    page,
                    lines = lines.len(),
                    "block is taller than a page and overflows it"
                );
            }
        }

        for (i, line) in lines.into_iter().enumerate() {
            instructions.push(DrawInstruction {
                text: line,
                x: geometry.margin,
                y: cursor + i as f64 * geometry.line_height,
                font_size: style.font_size,
                bold: style.bold,
                color: style.color,
                page,
                block: index,
            });
        }

        cursor += extent + geometry.block_spacing;
    }

    Ok(instructions)
}

/// Number of pages the instructions occupy; at least 1.
pub fn page_count(instructions: &[DrawInstruction]) -> usize {
    instructions.iter().map(|i| i.page).max().unwrap_or(1)
}
