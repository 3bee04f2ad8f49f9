//! Prediction inspection report.
//!
//! Streams prediction lines, bins each example's absolute error into a fixed
//! color palette and renders one colored HTML block per surviving example.
//! The report is a debugging aid, not a validated pipeline: any per-record
//! failure (malformed line, oversized context, write error on one block)
//! drops that record and processing continues.

pub mod palette;
pub mod record;
pub mod render;

pub use palette::{bin_error, color_for, BINS, PALETTE};
pub use record::{parse_line, ParseError, PredictionRecord};
pub use render::{render, ReportConfig, ReportStats};
