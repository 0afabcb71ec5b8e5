use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use oas3_ts_gen::{
  document::{Document, HttpMethod},
  generator::codegen::HookKind,
  utils::spec::SpecLoader,
};

use crate::ui::{Colors, colors::IntoComfyColor, term_width};

/// One row of `list operations`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  operation_id: Option<String>,
  method: HttpMethod,
  path: String,
  binding: &'static str,
}

fn binding(method: HttpMethod) -> &'static str {
  if !method.is_bindable() {
    return "skipped";
  }
  match HookKind::for_verb(method) {
    HookKind::Query => "query",
    HookKind::Mutation => "mutation",
  }
}

/// Operations sorted by id; operations without an id sort last.
fn operation_rows(document: &Document) -> Vec<OperationRow> {
  let mut rows = document
    .operations()
    .map(|(path, method, operation)| OperationRow {
      operation_id: operation.operation_id.clone(),
      method,
      path: path.to_string(),
      binding: binding(method),
    })
    .collect::<Vec<_>>();

  rows.sort_by(|a, b| match (&a.operation_id, &b.operation_id) {
    (Some(left), Some(right)) => left.cmp(right),
    (Some(_), None) => std::cmp::Ordering::Less,
    (None, Some(_)) => std::cmp::Ordering::Greater,
    (None, None) => a.path.cmp(&b.path),
  });
  rows
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["OPERATION ID", "METHOD", "PATH", "BINDING"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  for operation in operation_rows(&document) {
    let mut row = Row::new();
    let id_cell = match operation.operation_id {
      Some(id) => Cell::new(id)
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
      None => Cell::new("<missing>").fg(IntoComfyColor::into(colors.accent())),
    };
    row.add_cell(id_cell);
    row.add_cell(
      Cell::new(operation.method.as_ref().to_uppercase())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(operation.binding).fg(IntoComfyColor::into(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
