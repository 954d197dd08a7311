use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use synthgen_client::DEFAULT_ENDPOINT;
use synthgen_core::{DEFAULT_EXPORT_NAME, DEFAULT_RECORD_COUNT, ViewMode, write_bytes_atomic};

use super::{WorkspacePaths, WorkspaceResult};

/// Persisted tool settings. Attribute lists are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub export_dir: PathBuf,
    pub export_file_name: String,
    pub default_record_count: i64,
    pub default_view: ViewMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            export_dir: PathBuf::from("out"),
            export_file_name: DEFAULT_EXPORT_NAME.to_string(),
            default_record_count: DEFAULT_RECORD_COUNT,
            default_view: ViewMode::Table,
        }
    }
}

pub fn load_or_create_settings(paths: &WorkspacePaths) -> WorkspaceResult<Settings> {
    let path = paths.settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(paths, &settings)?;
    Ok(settings)
}

pub fn save_settings(paths: &WorkspacePaths, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(&paths.settings_path(), encoded.as_bytes())?;
    Ok(())
}
