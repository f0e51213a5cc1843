//! Courier Client - API client for the delivery-management backend
//!
//! Typed endpoint wrappers over the backend REST surface, plus the console
//! workflows built on top of them: paginated report collection, CSV export,
//! connected-task resolution and the order-editor action orchestrator.

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod resolve;
pub mod search;
pub mod transport;

pub use actions::{Notice, OrderEditor, ReorderDraft};
pub use api::{HttpCourierApi, OrdersApi, PlansApi, SearchApi, TokensApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use report::{ReportKind, ReportRange, collect_orders, export_report, report_filename};
pub use resolve::{Resolution, resolve_role};
pub use search::DebouncedSearch;
pub use transport::HttpTransport;

// Re-export shared types for convenience
pub use shared::ApiEnvelope;
pub use shared::models::{OrderRecord, RawOrder, StatusCode, TaskRole};
