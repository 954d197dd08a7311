use std::collections::HashSet;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap};
use synthgen_core::{RequestLifecycle, ResultView, TableView};

use crate::tui::state::{App, Focus};
use crate::tui::utils::{clipped_input, window_start};

pub const HEADER_HEIGHT: u16 = 1;
pub const FORM_HEIGHT: u16 = 9;
pub const FOOTER_HEIGHT: u16 = 2;
const LABEL_WIDTH: usize = 11;
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.size());

    draw_header(frame, app, layout[0]);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[1]);
    draw_fields(frame, app, form[0]);
    draw_attribute_list(frame, app, form[1]);

    draw_results(frame, app, layout[2]);
    draw_footer(frame, app, layout[3]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            " synthgen ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("endpoint {}", app.settings.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<9}: "), label_style(focused)),
        Span::raw(value),
    ])
}

fn draw_fields(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = panel(" Dataset ".to_string(), false);
    let inner = block.inner(area);
    let width = inner.width as usize;
    let session = &app.session;

    let text_fields: [(Focus, &str, &str); 4] = [
        (Focus::Domain, "Domain", &session.domain),
        (Focus::AttributeName, "Attribute", &session.draft.name),
        (Focus::Records, "Records", &app.records_input),
        (Focus::Seed, "Seed", &session.seed),
    ];

    let mut lines = Vec::new();
    let mut cursor = None;
    for (focus, label, value) in text_fields {
        let (visible, offset) = clipped_input(value, width, LABEL_WIDTH);
        if app.focus == focus {
            cursor = Some((
                inner.x + LABEL_WIDTH as u16 + offset,
                inner.y + lines.len() as u16,
            ));
        }
        lines.push(field_line(label, visible, app.focus == focus));
        if focus == Focus::AttributeName {
            let kind = format!("< {} >", session.draft.kind);
            lines.push(field_line("Kind", kind, app.focus == Focus::AttributeKind));
        }
    }

    lines.push(Line::from(""));
    lines.push(generate_line(app));

    frame.render_widget(Paragraph::new(lines).block(block), area);
    if let Some((x, y)) = cursor {
        frame.set_cursor(x, y);
    }
}

fn generate_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::Generate;
    if app.session.lifecycle.is_in_flight() {
        let spinner = SPINNER[app.spinner_idx % SPINNER.len()];
        return Line::from(Span::styled(
            format!(" {spinner} generating..."),
            Style::default().fg(Color::Yellow),
        ));
    }

    let mut style = if app.session.can_generate() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    let mut spans = vec![Span::styled(" [ Generate ] ", style)];
    if let Some(reason) = app.session.blocked_reason() {
        spans.push(Span::styled(
            format!(" {reason}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_attribute_list(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::AttributeList;
    let attributes = &app.session.attributes;
    let block = panel(format!(" Attributes ({}) ", attributes.len()), focused);
    let height = block.inner(area).height as usize;

    let lines: Vec<Line> = if attributes.is_empty() {
        vec![Line::from(Span::styled(
            "  none yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let start = window_start(app.list_cursor, height);
        attributes
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(index, attribute)| {
                if focused && index == app.list_cursor {
                    Line::from(vec![
                        Span::styled(" ► ", Style::default().fg(Color::Green)),
                        Span::styled(
                            attribute.describe(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("   "),
                        Span::styled(attribute.describe(), Style::default().fg(Color::Gray)),
                    ])
                }
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_results(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Results;
    let mode = app.session.store.view_mode();
    let block = panel(format!(" Results [{mode}] "), focused);

    match app.session.view() {
        ResultView::Empty => frame.render_widget(block, area),
        ResultView::Raw(text) => {
            let raw = Paragraph::new(text)
                .block(block)
                .scroll((app.scroll_offset, 0));
            frame.render_widget(raw, area);
        }
        ResultView::Table(table) => {
            frame.render_widget(result_table(&table, app.scroll_offset).block(block), area);
        }
    }
}

/// Rows whose shape differs from the header are drawn in yellow.
fn result_table(table: &TableView, scroll_offset: u16) -> Table<'static> {
    let columns = table.column_count().max(1);
    let widths = vec![Constraint::Min(6); columns];
    let mismatched: HashSet<usize> = table.mismatched_rows().into_iter().collect();

    let header = Row::new(table.headers.clone()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = table
        .rows
        .iter()
        .enumerate()
        .skip(scroll_offset as usize)
        .map(|(index, cells)| {
            let row = Row::new(cells.clone());
            if mismatched.contains(&index) {
                row.style(Style::default().fg(Color::Yellow))
            } else {
                row
            }
        })
        .collect();

    Table::new(rows, widths).header(header).column_spacing(2)
}

fn draw_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let status = match (&app.session.lifecycle, &app.session.last_error) {
        (RequestLifecycle::InFlight, _) => Line::from(Span::styled(
            format!(
                " {} waiting for {}",
                SPINNER[app.spinner_idx % SPINNER.len()],
                app.settings.endpoint
            ),
            Style::default().fg(Color::Yellow),
        )),
        (_, Some(error)) => Line::from(Span::styled(
            format!(" error: {error}"),
            Style::default().fg(Color::Red),
        )),
        _ => Line::from(Span::styled(
            format!(" {}", app.messages.last().map(String::as_str).unwrap_or("ready")),
            Style::default().fg(Color::Gray),
        )),
    };
    let help = Line::from(Span::styled(
        " Tab focus  Enter add  Del remove  Ctrl-G generate  Ctrl-T table/raw  Ctrl-E export  Esc quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(
        Paragraph::new(vec![status, help]).wrap(Wrap { trim: true }),
        area,
    );
}
