//! Application state for one authoring session.
//!
//! Every user action maps to one transition method. Transitions never
//! perform I/O; the network call happens between `begin_generation` and
//! `finish_generation`, driven by whoever owns the session.

use crate::attribute::{AttributeDraft, AttributeKind, AttributeList};
use crate::error::SubmitBlocked;
use crate::render::{ResultView, project};
use crate::request::GenerationRequest;
use crate::result::ResultSet;
use crate::store::{ResultStore, ViewMode};

/// Record count the form starts with.
pub const DEFAULT_RECORD_COUNT: i64 = 100;

/// Lifecycle of the most recent generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestLifecycle {
    #[default]
    Idle,
    InFlight,
    Succeeded {
        rows: usize,
    },
    Failed {
        message: String,
    },
}

impl RequestLifecycle {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestLifecycle::InFlight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub domain: String,
    pub attributes: AttributeList,
    pub draft: AttributeDraft,
    pub record_count: i64,
    pub seed: String,
    pub store: ResultStore,
    pub lifecycle: RequestLifecycle,
    pub last_error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT, ViewMode::default())
    }
}

impl Session {
    pub fn new(record_count: i64, view_mode: ViewMode) -> Self {
        Self {
            domain: String::new(),
            attributes: AttributeList::new(),
            draft: AttributeDraft::default(),
            record_count,
            seed: String::new(),
            store: ResultStore::new(view_mode),
            lifecycle: RequestLifecycle::Idle,
            last_error: None,
        }
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = domain.into();
    }

    pub fn set_seed(&mut self, seed: impl Into<String>) {
        self.seed = seed.into();
    }

    pub fn set_record_count(&mut self, record_count: i64) {
        self.record_count = record_count;
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_kind(&mut self, kind: AttributeKind) {
        self.draft.kind = kind;
    }

    /// Appends the draft and resets the editor. A blank draft is left as is.
    pub fn commit_draft(&mut self) -> bool {
        let appended = self.attributes.append(self.draft.to_attribute());
        if appended {
            self.draft = AttributeDraft::default();
        }
        appended
    }

    pub fn remove_attribute(&mut self, index: usize) -> bool {
        self.attributes.remove_at(index).is_some()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.store.set_view_mode(mode);
    }

    pub fn toggle_view_mode(&mut self) {
        self.store.set_view_mode(self.store.view_mode().toggled());
    }

    /// Why generation cannot start right now, if anything.
    pub fn blocked_reason(&self) -> Option<SubmitBlocked> {
        if self.lifecycle.is_in_flight() {
            Some(SubmitBlocked::InFlight)
        } else if self.domain.trim().is_empty() {
            Some(SubmitBlocked::EmptyDomain)
        } else if self.attributes.is_empty() {
            Some(SubmitBlocked::NoAttributes)
        } else {
            None
        }
    }

    pub fn can_generate(&self) -> bool {
        self.blocked_reason().is_none()
    }

    /// Builds the request and marks it in flight.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, SubmitBlocked> {
        if let Some(reason) = self.blocked_reason() {
            return Err(reason);
        }
        let request =
            GenerationRequest::build(&self.domain, &self.attributes, self.record_count, &self.seed);
        self.lifecycle = RequestLifecycle::InFlight;
        Ok(request)
    }

    /// Resolves the in-flight request. On failure the previous result stays.
    pub fn finish_generation(&mut self, outcome: Result<ResultSet, String>) {
        match outcome {
            Ok(rows) => {
                self.lifecycle = RequestLifecycle::Succeeded { rows: rows.len() };
                self.last_error = None;
                self.store.commit(rows);
            }
            Err(message) => {
                self.lifecycle = RequestLifecycle::Failed {
                    message: message.clone(),
                };
                self.last_error = Some(message);
            }
        }
    }

    pub fn view(&self) -> ResultView {
        project(&self.store)
    }
}
