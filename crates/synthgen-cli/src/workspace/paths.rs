use std::path::{Path, PathBuf};

use super::{Settings, WorkspaceResult};

#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: PathBuf) -> Self {
        let config_dir = root.join("config");
        let logs_dir = root.join("logs");
        Self {
            root,
            config_dir,
            logs_dir,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.logs_dir.join("synthgen.log")
    }

    /// Default save destination. A relative `export_dir` is resolved against
    /// the workspace root.
    pub fn export_path(&self, settings: &Settings) -> PathBuf {
        let dir = if settings.export_dir.is_absolute() {
            settings.export_dir.clone()
        } else {
            self.root.join(&settings.export_dir)
        };
        dir.join(&settings.export_file_name)
    }

    pub fn ensure_dirs(&self) -> WorkspaceResult<()> {
        create_if_missing(&self.root)?;
        create_if_missing(&self.config_dir)?;
        create_if_missing(&self.logs_dir)?;
        Ok(())
    }
}

fn create_if_missing(path: &Path) -> WorkspaceResult<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_path_resolves_relative_dir_under_root() {
        let paths = WorkspacePaths::new(PathBuf::from("ws"));
        let settings = Settings::default();
        assert_eq!(
            paths.export_path(&settings),
            PathBuf::from("ws").join("out").join("synthetic_data.json")
        );
    }

    #[test]
    fn export_path_keeps_absolute_dir() {
        let paths = WorkspacePaths::new(PathBuf::from("ws"));
        let settings = Settings {
            export_dir: PathBuf::from("/tmp/exports"),
            ..Settings::default()
        };
        assert_eq!(
            paths.export_path(&settings),
            PathBuf::from("/tmp/exports/synthetic_data.json")
        );
    }
}
