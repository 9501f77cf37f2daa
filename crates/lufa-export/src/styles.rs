use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Channels scaled to `0.0..=1.0`.
    pub fn unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }
}

/// Font and color attached to a block. The layout engine only reads the
/// size and weight (for wrapping); everything is copied onto the draw
/// instructions unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    pub bold: bool,
    pub color: Rgb,
}

impl TextStyle {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigurationError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }
}

/// Visual theme of the exported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Text printed in the first-page banner above the plan title.
    pub banner_title: String,
    pub banner_fill: Rgb,
    pub banner_text: Rgb,
    /// Banner height in page units, measured from the top edge.
    pub banner_height: f64,
    pub banner_title_size: f64,
    /// Baseline of the banner title in page units from the top edge.
    pub banner_title_baseline: f64,
    pub banner_subtitle_size: f64,
    pub banner_subtitle_baseline: f64,
    pub heading: TextStyle,
    pub body: TextStyle,
    pub bullet: TextStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            banner_title: "LUFA EXPORT MASTER PLAN".to_string(),
            banner_fill: Rgb(15, 23, 42),
            banner_text: Rgb::WHITE,
            banner_height: 45.0,
            banner_title_size: 24.0,
            banner_title_baseline: 25.0,
            banner_subtitle_size: 12.0,
            banner_subtitle_baseline: 35.0,
            heading: TextStyle {
                font_size: 14.0,
                bold: true,
                color: Rgb(16, 185, 129),
            },
            body: TextStyle {
                font_size: 10.0,
                bold: false,
                color: Rgb(51, 65, 85),
            },
            bullet: TextStyle {
                font_size: 9.0,
                bold: false,
                color: Rgb(71, 85, 105),
            },
        }
    }
}
