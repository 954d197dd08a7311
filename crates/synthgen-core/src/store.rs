use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::result::ResultSet;

/// Active presentation of the latest result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    Raw,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Raw,
            ViewMode::Raw => ViewMode::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Raw => "raw",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "raw" | "json" => Ok(ViewMode::Raw),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Latest successful result plus the active view mode.
///
/// Both fields are only ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    current: Option<ResultSet>,
    view_mode: ViewMode,
}

impl ResultStore {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            current: None,
            view_mode,
        }
    }

    pub fn commit(&mut self, result: ResultSet) {
        self.current = Some(result);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn current(&self) -> Option<&ResultSet> {
        self.current.as_ref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }
}
