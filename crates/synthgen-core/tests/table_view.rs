use synthgen_core::{ResultRow, ResultSet, ResultStore, ResultView, ViewMode, project, render_table};

fn load_rows(json: &str) -> ResultSet {
    serde_json::from_str(json).expect("parse rows")
}

#[test]
fn short_row_renders_fewer_cells_than_header() {
    let rows = load_rows(r#"[{"a":1,"b":2},{"a":3}]"#);
    let table = render_table(&rows);

    assert_eq!(table.headers, vec!["a", "b"]);
    assert_eq!(table.rows[0], vec!["1", "2"]);
    assert_eq!(table.rows[1], vec!["3"]);
    assert_eq!(table.rows[1].len() + 1, table.headers.len());
    assert_eq!(table.mismatched_rows(), vec![1]);
    assert_eq!(table.column_count(), 2);
}

#[test]
fn wide_row_extends_column_count() {
    let rows = load_rows(r#"[{"a":1},{"a":2,"b":"x","c":null}]"#);
    let table = render_table(&rows);

    assert_eq!(table.headers, vec!["a"]);
    assert_eq!(table.rows[1], vec!["2", "x", ""]);
    assert_eq!(table.column_count(), 3);
}

#[test]
fn headers_ignore_authored_attribute_order() {
    let rows = load_rows(r#"[{"hired":"2020-01-01","id":7}]"#);
    let table = render_table(&rows);
    assert_eq!(table.headers, vec!["hired", "id"]);
    assert!(table.mismatched_rows().is_empty());
}

#[test]
fn raw_view_is_two_space_pretty_json() {
    let mut store = ResultStore::new(ViewMode::Raw);
    store.commit(vec![ResultRow::new().with("id", 1).with("ok", true)]);

    let ResultView::Raw(text) = project(&store) else {
        panic!("expected raw view");
    };
    let expected = r#"[
  {
    "id": 1,
    "ok": true
  }
]"#;
    assert_eq!(text, expected);
}

#[test]
fn raw_view_accepts_heterogeneous_rows() {
    let mut store = ResultStore::new(ViewMode::Raw);
    store.commit(load_rows(r#"[{"a":1},{"b":[1,2]},{}]"#));
    assert!(matches!(project(&store), ResultView::Raw(_)));
}
