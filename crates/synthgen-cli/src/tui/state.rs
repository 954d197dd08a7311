use std::path::PathBuf;
use std::sync::Arc;

use synthgen_client::{GenerationClient, HttpGenerationClient};
use synthgen_core::{ResultSet, Session};

use crate::workspace::{Settings, WorkspacePaths};

pub const MAX_MESSAGES: usize = 200;

/// Form element that currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Domain,
    AttributeName,
    AttributeKind,
    AttributeList,
    Records,
    Seed,
    Generate,
    Results,
}

impl Focus {
    pub const ORDER: [Focus; 8] = [
        Focus::Domain,
        Focus::AttributeName,
        Focus::AttributeKind,
        Focus::AttributeList,
        Focus::Records,
        Focus::Seed,
        Focus::Generate,
        Focus::Results,
    ];

    pub fn next(self) -> Self {
        let index = Self::position(self);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = Self::position(self);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn position(focus: Focus) -> usize {
        Self::ORDER
            .iter()
            .position(|candidate| *candidate == focus)
            .unwrap_or(0)
    }
}

pub enum AppEvent {
    GenerationDone(Result<ResultSet, String>),
}

pub struct App {
    pub runtime: tokio::runtime::Handle,
    pub tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
    pub client: Arc<dyn GenerationClient>,
    pub paths: WorkspacePaths,
    pub settings: Settings,
    pub session: Session,
    pub focus: Focus,
    /// Text of the records field; may be transiently unparseable (`-`).
    pub records_input: String,
    pub list_cursor: usize,
    pub scroll_offset: u16,
    pub messages: Vec<String>,
    pub should_quit: bool,
    pub spinner_idx: usize,
}

impl App {
    pub fn new(
        runtime: tokio::runtime::Handle,
        paths: WorkspacePaths,
        settings: Settings,
        tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let client: Arc<dyn GenerationClient> =
            Arc::new(HttpGenerationClient::new(settings.endpoint.clone()));
        Self::with_client(runtime, paths, settings, tx, client)
    }

    pub fn with_client(
        runtime: tokio::runtime::Handle,
        paths: WorkspacePaths,
        settings: Settings,
        tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        let session = Session::new(settings.default_record_count, settings.default_view);
        let records_input = session.record_count.to_string();
        Self {
            runtime,
            tx,
            client,
            paths,
            settings,
            session,
            focus: Focus::Domain,
            records_input,
            list_cursor: 0,
            scroll_offset: 0,
            messages: Vec::new(),
            should_quit: false,
            spinner_idx: 0,
        }
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.messages.push(format!("[{stamp}] {}", message.into()));
        if self.messages.len() > MAX_MESSAGES {
            let overflow = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(0..overflow);
        }
    }

    pub fn export_path(&self) -> PathBuf {
        self.paths.export_path(&self.settings)
    }

    /// Keeps the list cursor on an existing attribute after removals.
    pub fn clamp_list_cursor(&mut self) {
        let len = self.session.attributes.len();
        self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
    }

    /// Commits the records field text. Empty input or a lone `-` counts as 0;
    /// the key handler never lets the text leave the `i64` range.
    pub fn sync_record_count(&mut self) {
        let value = self.records_input.parse::<i64>().unwrap_or(0);
        self.session.set_record_count(value);
    }
}
