//! lufa-export
//!
//! Paginated PDF export of a business plan: font metrics and word wrap,
//! the page layout engine, plan-to-block conversion and the PDF writer.

pub mod error;
pub mod metrics;
pub mod paginate;
pub mod pdf;
pub mod render;
pub mod styles;
