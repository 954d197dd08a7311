use std::path::Path;

use crate::atomic::write_bytes_atomic;
use crate::error::{CoreError, Result};
use crate::result::ResultSet;

/// Default artifact name offered on save.
pub const DEFAULT_EXPORT_NAME: &str = "synthetic_data.json";
/// MIME type of the artifact.
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// Serializes the current result into the downloadable JSON artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportWriter;

impl ExportWriter {
    /// Two-space pretty JSON, byte-identical to the raw view.
    pub fn serialize(current: Option<&ResultSet>) -> Result<Vec<u8>> {
        let rows = current.ok_or(CoreError::NoResult)?;
        Ok(serde_json::to_vec_pretty(rows)?)
    }

    /// Writes the artifact to `path` through a temp file and rename.
    /// Returns the number of bytes written.
    pub fn write_to(current: Option<&ResultSet>, path: &Path) -> Result<u64> {
        let data = Self::serialize(current)?;
        write_bytes_atomic(path, &data)?;
        tracing::info!(
            event = "export_written",
            path = %path.display(),
            bytes = data.len()
        );
        Ok(data.len() as u64)
    }
}
