use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid export configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Page geometry or styling that the layout engine cannot work with.
///
/// These are programming or configuration mistakes, not conditions a user
/// can recover from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("page geometry value `{name}` must be a finite number")]
    NonFinite { name: &'static str },

    #[error("page geometry value `{name}` must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("page geometry value `{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("margins of {margin} leave no text width on a page {page_width} wide")]
    NoTextWidth { margin: f64, page_width: f64 },

    #[error("bottom threshold {threshold} must lie below the top margin {margin}")]
    ThresholdAboveMargin { threshold: f64, margin: f64 },

    #[error("bottom threshold {threshold} exceeds the page height {page_height}")]
    ThresholdBeyondPage { threshold: f64, page_height: f64 },

    #[error("content start {content_start} must lie above the bottom threshold {threshold}")]
    ContentStartOutOfRange { content_start: f64, threshold: f64 },

    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f64),
}
