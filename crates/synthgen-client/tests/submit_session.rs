use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use synthgen_client::{GenerationClient, GenerationError, submit_session};
use synthgen_core::{
    AttributeKind, GenerationRequest, RequestLifecycle, ResultRow, ResultSet, Session,
    SubmitBlocked, ViewMode,
};

enum Scripted {
    Rows(ResultSet),
    Status(u16),
}

/// In-process stand-in for the generation service.
struct ScriptedClient {
    responses: Mutex<VecDeque<Scripted>>,
    received: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    fn new(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.received.lock().expect("lock received").len()
    }

    fn last_request(&self) -> Option<GenerationRequest> {
        self.received.lock().expect("lock received").last().cloned()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn submit(&self, request: &GenerationRequest) -> Result<ResultSet, GenerationError> {
        self.received
            .lock()
            .expect("lock received")
            .push(request.clone());
        let next = self
            .responses
            .lock()
            .expect("lock responses")
            .pop_front()
            .expect("no scripted response left");
        match next {
            Scripted::Rows(rows) => Ok(rows),
            Scripted::Status(status) => Err(GenerationError::Status {
                status,
                body: "upstream failure".to_string(),
            }),
        }
    }
}

fn employee_session() -> Session {
    let mut session = Session::default();
    session.set_domain("Employee");
    session.set_draft_name("id");
    session.set_draft_kind(AttributeKind::Number);
    session.commit_draft();
    session.set_draft_name("hired");
    session.set_draft_kind(AttributeKind::Date);
    session.commit_draft();
    session.set_record_count(3);
    session
}

#[tokio::test]
async fn successful_submit_commits_rows() {
    let rows = vec![
        ResultRow::new().with("id", 1).with("hired", "2020-01-01"),
        ResultRow::new().with("id", 2).with("hired", "2020-02-01"),
    ];
    let client = ScriptedClient::new(vec![Scripted::Rows(rows.clone())]);
    let mut session = employee_session();

    let count = submit_session(&mut session, &client).await.expect("submit");

    assert_eq!(count, 2);
    assert_eq!(session.store.current(), Some(&rows));
    assert_eq!(session.lifecycle, RequestLifecycle::Succeeded { rows: 2 });
    let request = client.last_request().expect("request sent");
    assert_eq!(
        request.prompt(),
        "Domain: Employee, Attributes: id (number), hired (date), Records: 3, Seed: "
    );
}

#[tokio::test]
async fn failed_submit_keeps_previous_result() {
    let first = vec![ResultRow::new().with("id", 1)];
    let client = ScriptedClient::new(vec![Scripted::Rows(first.clone()), Scripted::Status(500)]);
    let mut session = employee_session();
    session.set_view_mode(ViewMode::Raw);

    submit_session(&mut session, &client).await.expect("first submit");
    let err = submit_session(&mut session, &client)
        .await
        .expect_err("second submit fails");

    assert!(matches!(err, GenerationError::Status { status: 500, .. }));
    assert_eq!(session.store.current(), Some(&first));
    assert_eq!(session.store.view_mode(), ViewMode::Raw);
    assert!(
        session
            .last_error
            .as_deref()
            .is_some_and(|message| message.contains("500"))
    );
}

#[tokio::test]
async fn client_is_never_called_without_attributes() {
    let client = ScriptedClient::new(Vec::new());
    let mut session = Session::default();
    session.set_domain("Employee");

    let err = submit_session(&mut session, &client)
        .await
        .expect_err("blocked");

    assert!(matches!(
        err,
        GenerationError::Blocked(SubmitBlocked::NoAttributes)
    ));
    assert_eq!(client.calls(), 0);
    assert!(session.store.current().is_none());
}

#[tokio::test]
async fn client_is_never_called_without_domain() {
    let client = ScriptedClient::new(Vec::new());
    let mut session = employee_session();
    session.set_domain("");

    let err = submit_session(&mut session, &client)
        .await
        .expect_err("blocked");

    assert!(matches!(
        err,
        GenerationError::Blocked(SubmitBlocked::EmptyDomain)
    ));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn in_flight_session_is_not_resubmitted() {
    let client = ScriptedClient::new(Vec::new());
    let mut session = employee_session();
    session.begin_generation().expect("start first request");

    let err = submit_session(&mut session, &client)
        .await
        .expect_err("blocked");

    assert!(matches!(err, GenerationError::Blocked(SubmitBlocked::InFlight)));
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn negative_record_count_reaches_the_wire_unchanged() {
    let client = ScriptedClient::new(vec![Scripted::Rows(Vec::new())]);
    let mut session = employee_session();
    session.set_record_count(-5);

    submit_session(&mut session, &client).await.expect("submit");

    let request = client.last_request().expect("request sent");
    assert_eq!(request.record_count, -5);
    assert_eq!(request.form_fields()[1], ("num", "-5".to_string()));
}
