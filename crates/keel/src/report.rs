use ascii_table::AsciiTable;
use keel_driver::{ProjectResolver, ResourceEntry};

/// Wide enough for absolute paths; the default width truncates them.
const TABLE_MAX_WIDTH: usize = 240;

pub fn project_rows(resolver: &ProjectResolver) -> Vec<Vec<String>> {
  let mut rows = Vec::new();

  for name in resolver.project_names() {
    let paths = resolver.project_paths(name);
    let status = if paths.len() > 1 { "ambiguous" } else { "ok" };

    for path in paths {
      rows.push(vec![name.to_string(), path.display().to_string(), status.to_string()]);
    }
  }

  rows
}

pub fn print_projects(resolver: &ProjectResolver) {
  let mut ascii_table = AsciiTable::default();
  ascii_table.set_max_width(TABLE_MAX_WIDTH);
  ascii_table.column(0).set_header("Name");
  ascii_table.column(1).set_header("Path");
  ascii_table.column(2).set_header("Status");

  ascii_table.print(project_rows(resolver));
}

pub fn resource_rows(entries: &[(&'static str, ResourceEntry)]) -> Vec<Vec<String>> {
  entries
    .iter()
    .map(|(kind, entry)| vec![kind.to_string(), entry.name.clone(), entry.path.display().to_string()])
    .collect()
}

pub fn print_resources(entries: &[(&'static str, ResourceEntry)]) {
  let mut ascii_table = AsciiTable::default();
  ascii_table.set_max_width(TABLE_MAX_WIDTH);
  ascii_table.column(0).set_header("Kind");
  ascii_table.column(1).set_header("Name");
  ascii_table.column(2).set_header("Source");

  ascii_table.print(resource_rows(entries));
}
