//! Core contracts for synthgen.
//!
//! This crate owns the schema-authoring model, the construction of the
//! generation request, and the projection of returned rows into the table
//! and raw views. It performs no network I/O.

pub mod atomic;
pub mod attribute;
pub mod error;
pub mod export;
pub mod render;
pub mod request;
pub mod result;
pub mod session;
pub mod store;

pub use atomic::write_bytes_atomic;
pub use attribute::{Attribute, AttributeDraft, AttributeKind, AttributeList};
pub use error::{CoreError, Result, SubmitBlocked};
pub use export::{DEFAULT_EXPORT_NAME, EXPORT_MIME_TYPE, ExportWriter};
pub use render::{ResultView, TableView, derive_headers, project, render_raw, render_table};
pub use request::{COUNT_FIELD, GenerationRequest, PROMPT_FIELD, describe_attributes};
pub use result::{CellValue, ResultRow, ResultSet};
pub use session::{DEFAULT_RECORD_COUNT, RequestLifecycle, Session};
pub use store::{ResultStore, ViewMode};
