use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use synthgen_client::run_request;
use synthgen_core::{ExportWriter, ResultSet};

use crate::CliError;
use crate::tui::state::{App, AppEvent, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), CliError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('g') => start_generation(app),
            KeyCode::Char('t') => toggle_view(app),
            KeyCode::Char('e') => export_result(app),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        _ => match app.focus {
            Focus::Domain => edit_text(&mut app.session.domain, key.code),
            Focus::Seed => edit_text(&mut app.session.seed, key.code),
            Focus::AttributeName => handle_name_key(app, key.code),
            Focus::AttributeKind => handle_kind_key(app, key.code),
            Focus::AttributeList => handle_list_key(app, key.code),
            Focus::Records => handle_records_key(app, key.code),
            Focus::Generate => {
                if key.code == KeyCode::Enter {
                    start_generation(app);
                }
            }
            Focus::Results => handle_results_key(app, key.code),
        },
    }
    Ok(())
}

/// Applies a finished request to the session.
pub fn finish_generation(app: &mut App, outcome: Result<ResultSet, String>) {
    match &outcome {
        Ok(rows) => app.push_message(format!("generated {} rows", rows.len())),
        Err(err) => app.push_message(format!("error: {err}")),
    }
    app.session.finish_generation(outcome);
    app.scroll_offset = 0;
}

fn edit_text(target: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(ch) => target.push(ch),
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn handle_name_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => add_attribute(app),
        other => edit_text(&mut app.session.draft.name, other),
    }
}

fn handle_kind_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => add_attribute(app),
        KeyCode::Char(' ') | KeyCode::Right | KeyCode::Down => {
            let next = app.session.draft.kind.cycle();
            app.session.set_draft_kind(next);
        }
        KeyCode::Left | KeyCode::Up => {
            // Three steps forward is one step back on a four-value cycle.
            let prev = app.session.draft.kind.cycle().cycle().cycle();
            app.session.set_draft_kind(prev);
        }
        _ => {}
    }
}

fn add_attribute(app: &mut App) {
    if app.session.commit_draft() {
        app.list_cursor = app.session.attributes.len().saturating_sub(1);
    }
}

fn handle_list_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.list_cursor = app.list_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.list_cursor = (app.list_cursor + 1)
                .min(app.session.attributes.len().saturating_sub(1));
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
            if app.session.remove_attribute(app.list_cursor) {
                app.clamp_list_cursor();
            }
        }
        _ => {}
    }
}

fn handle_records_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let candidate = format!("{}{ch}", app.records_input);
            // Digits that would overflow the count are refused.
            if candidate.parse::<i64>().is_err() {
                return;
            }
            app.records_input = candidate;
        }
        KeyCode::Char('-') if app.records_input.is_empty() => app.records_input.push('-'),
        KeyCode::Backspace => {
            app.records_input.pop();
        }
        _ => return,
    }
    app.sync_record_count();
}

fn handle_results_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up => app.scroll_offset = app.scroll_offset.saturating_sub(1),
        KeyCode::Down => app.scroll_offset = app.scroll_offset.saturating_add(1),
        KeyCode::PageUp => app.scroll_offset = app.scroll_offset.saturating_sub(10),
        KeyCode::PageDown => app.scroll_offset = app.scroll_offset.saturating_add(10),
        KeyCode::Char('t') => toggle_view(app),
        KeyCode::Char('e') => export_result(app),
        _ => {}
    }
}

fn toggle_view(app: &mut App) {
    app.session.toggle_view_mode();
    app.scroll_offset = 0;
}

fn start_generation(app: &mut App) {
    let request = match app.session.begin_generation() {
        Ok(request) => request,
        Err(reason) => {
            tracing::info!(event = "submit_blocked", reason = %reason);
            app.push_message(format!("cannot generate: {reason}"));
            return;
        }
    };

    app.push_message(format!(
        "generating {} records for {}...",
        request.record_count, request.domain_label
    ));
    let client = app.client.clone();
    let tx = app.tx.clone();
    app.runtime.spawn(async move {
        let outcome = run_request(client.as_ref(), &request)
            .await
            .map_err(|err| err.to_string());
        tx.send(AppEvent::GenerationDone(outcome)).ok();
    });
}

fn export_result(app: &mut App) {
    if app.session.store.current().is_none() {
        app.push_message("nothing to export yet");
        return;
    }
    let path = app.export_path();
    match ExportWriter::write_to(app.session.store.current(), &path) {
        Ok(bytes) => app.push_message(format!("saved {bytes} bytes to {}", path.display())),
        Err(err) => {
            tracing::warn!(event = "export_failed", error = %err);
            app.push_message(format!("export failed: {err}"));
        }
    }
}
