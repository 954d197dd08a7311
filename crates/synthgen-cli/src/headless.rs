use std::fmt::Write as _;

use synthgen_client::{HttpGenerationClient, submit_session};
use synthgen_core::{
    Attribute, AttributeKind, ExportWriter, GenerationRequest, ResultView, Session, TableView,
    ViewMode,
};

use crate::workspace::{Settings, WorkspacePaths};
use crate::{AuthoringArgs, CliError, GenerateArgs};

/// Parses `NAME:KIND`; a bare `NAME` is a string attribute.
pub fn parse_attribute(value: &str) -> Result<Attribute, String> {
    match value.rsplit_once(':') {
        Some((name, kind)) => Ok(Attribute::new(name, kind.parse::<AttributeKind>()?)),
        None => Ok(Attribute::new(value, AttributeKind::String)),
    }
}

/// Replays the arguments through the same transitions the form uses, so
/// blank attribute names are dropped exactly as they are in the TUI.
pub fn session_from_args(args: &AuthoringArgs, settings: &Settings, view: ViewMode) -> Session {
    let record_count = args.records.unwrap_or(settings.default_record_count);
    let mut session = Session::new(record_count, view);
    session.set_domain(args.domain.clone());
    for attribute in &args.attributes {
        session.set_draft_name(attribute.name.clone());
        session.set_draft_kind(attribute.kind);
        if !session.commit_draft() {
            tracing::debug!(event = "attribute_rejected", kind = %attribute.kind);
        }
    }
    session.set_seed(args.seed.clone());
    session
}

pub async fn run_generate(
    args: GenerateArgs,
    paths: &WorkspacePaths,
    settings: &Settings,
) -> Result<(), CliError> {
    let view = args.view.unwrap_or(settings.default_view);
    let mut session = session_from_args(&args.authoring, settings, view);
    let client = HttpGenerationClient::new(settings.endpoint.clone());

    let count = submit_session(&mut session, &client).await?;
    print!("{}", render_view(&session.view()));

    let destination = match (args.out, args.save) {
        (Some(path), _) => Some(path),
        (None, true) => Some(paths.export_path(settings)),
        (None, false) => None,
    };
    if let Some(path) = destination {
        let bytes = ExportWriter::write_to(session.store.current(), &path)?;
        eprintln!("saved {bytes} bytes to {}", path.display());
    }
    eprintln!("{count} rows generated");
    Ok(())
}

pub fn run_describe(args: &AuthoringArgs, settings: &Settings) {
    let session = session_from_args(args, settings, settings.default_view);
    print!("{}", describe_session(&session));
}

fn describe_session(session: &Session) -> String {
    let request = GenerationRequest::build(
        &session.domain,
        &session.attributes,
        session.record_count,
        &session.seed,
    );
    let mut out = String::new();
    let _ = writeln!(out, "descriptor: {}", request.attribute_descriptor);
    for (name, value) in request.form_fields() {
        let _ = writeln!(out, "{name}: {value}");
    }
    match session.blocked_reason() {
        None => out.push_str("generate: ready\n"),
        Some(reason) => {
            let _ = writeln!(out, "generate: blocked ({reason})");
        }
    }
    out
}

pub fn render_view(view: &ResultView) -> String {
    match view {
        ResultView::Empty => String::new(),
        ResultView::Raw(text) => format!("{text}\n"),
        ResultView::Table(table) => format_table(table),
    }
}

/// Plain-text table. Each row prints only the cells it has, so a row with a
/// different shape than the header stays visibly ragged.
pub fn format_table(table: &TableView) -> String {
    let mut widths = vec![0usize; table.column_count()];
    for cells in std::iter::once(&table.headers).chain(table.rows.iter()) {
        for (index, cell) in cells.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &table.headers, &widths);
    let rule: Vec<String> = widths
        .iter()
        .take(table.headers.len())
        .map(|width| "-".repeat(*width))
        .collect();
    push_line(&mut out, &rule, &widths);
    for cells in &table.rows {
        push_line(&mut out, cells, &widths);
    }

    let mismatched = table.mismatched_rows();
    if !mismatched.is_empty() {
        let rows: Vec<String> = mismatched.iter().map(|index| index.to_string()).collect();
        let _ = writeln!(out, "\nrows not matching the header: {}", rows.join(", "));
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthgen_core::{ResultSet, render_table};

    fn args(attributes: &[&str], records: Option<i64>) -> AuthoringArgs {
        AuthoringArgs {
            domain: "Employee".to_string(),
            attributes: attributes
                .iter()
                .map(|value| parse_attribute(value).expect("parse attribute"))
                .collect(),
            records,
            seed: String::new(),
        }
    }

    #[test]
    fn parses_name_and_kind() {
        assert_eq!(
            parse_attribute("hired:date"),
            Ok(Attribute::new("hired", AttributeKind::Date))
        );
        assert_eq!(
            parse_attribute("title"),
            Ok(Attribute::new("title", AttributeKind::String))
        );
        assert_eq!(
            parse_attribute("ratio:x:number"),
            Ok(Attribute::new("ratio:x", AttributeKind::Number))
        );
        assert!(parse_attribute("id:uuid").is_err());
    }

    #[test]
    fn describe_prints_wire_fields() {
        let session = session_from_args(
            &args(&["id:number", "hired:date"], Some(3)),
            &Settings::default(),
            ViewMode::Table,
        );
        let expected = "descriptor: id (number), hired (date)\n\
             str: Domain: Employee, Attributes: id (number), hired (date), Records: 3, Seed: \n\
             num: 3\n\
             generate: ready\n";
        assert_eq!(describe_session(&session), expected);
    }

    #[test]
    fn blank_attribute_is_dropped_and_blocks() {
        let session = session_from_args(
            &args(&[" :number"], None),
            &Settings::default(),
            ViewMode::Table,
        );
        assert!(session.attributes.is_empty());
        assert_eq!(session.record_count, 100);
        assert!(
            describe_session(&session).ends_with("generate: blocked (attribute list is empty)\n")
        );
    }

    #[test]
    fn ragged_rows_print_their_own_cells() {
        let rows: ResultSet =
            serde_json::from_str(r#"[{"a":1,"b":22},{"a":333}]"#).expect("parse rows");
        let text = format_table(&render_table(&rows));
        let expected = "a    b\n---  --\n1    22\n333\n\nrows not matching the header: 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_table_prints_blank_header() {
        assert_eq!(format_table(&render_table(&[])), "\n\n");
    }
}
