//! Order report workflow
//!
//! Full-range retrieval, normalization and CSV artifact generation:
//! derive the date range, collect every page, normalize field aliases,
//! write the artifact.

pub mod collect;
pub mod export;
pub mod range;

pub use collect::collect_orders;
pub use export::{EXPORT_COLUMNS, export_report, report_filename, write_report};
pub use range::{ReportKind, ReportRange};
