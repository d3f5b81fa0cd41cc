use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_model::{ColumnType, ComponentConfig, ComponentRow};
use catalog_search::LeafScore;
use catalog_store::{CheckReport, CheckStatus};
use catalog_tree::CatalogTree;

/// Data rows of a component, one table row per catalog entry.
///
/// The selected row is marked with `>` in the index column.
pub fn component_table(config: &ComponentConfig, selected: Option<usize>) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(config.columns.iter().map(|column| header_cell(&column.header())));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in config.columns.iter().enumerate() {
        if column.column_type == Some(ColumnType::Number) {
            align_column(&mut table, index + 1, CellAlignment::Right);
        }
    }

    for (index, row) in config.data.iter().enumerate() {
        let is_selected = selected == Some(index);
        let marker = if is_selected {
            Cell::new(format!("> {index}"))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell(index)
        };
        let mut cells = vec![marker];
        cells.extend(
            config
                .columns
                .iter()
                .map(|column| value_cell(row, &column.key, is_selected)),
        );
        table.add_row(cells);
    }
    table
}

/// Matching leaves with their scores, for `search --explain`.
pub fn matches_table(tree: &CatalogTree, scores: &[LeafScore]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Path"),
        header_cell("Score"),
        header_cell("Explanation"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for score in scores {
        let node = tree.node(score.node);
        table.add_row(vec![
            Cell::new(&node.display_name),
            Cell::new(node.component_path.as_deref().unwrap_or("-")),
            Cell::new(format!("{:.3}", score.score)),
            dim_cell(score.explain()),
        ]);
    }
    table
}

/// Per-component result of `check`.
pub fn check_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Component"),
        header_cell("Status"),
        header_cell("Columns"),
        header_cell("Rows"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for component in &report.components {
        let status = match component.status {
            CheckStatus::Ok if component.warnings.is_empty() => Cell::new("OK").fg(Color::Green),
            CheckStatus::Ok => Cell::new("WARN").fg(Color::Yellow),
            CheckStatus::Error => Cell::new("ERROR")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        };
        let notes = match &component.error {
            Some(error) => Cell::new(error).fg(Color::Red),
            None if component.warnings.is_empty() => dim_cell("-"),
            None => Cell::new(component.warnings.join("\n")),
        };
        table.add_row(vec![
            Cell::new(&component.path),
            status,
            Cell::new(component.columns),
            Cell::new(component.rows),
            notes,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(row: &ComponentRow, key: &str, selected: bool) -> Cell {
    match row.get(key) {
        Some(value) if selected => Cell::new(value.raw()).add_attribute(Attribute::Bold),
        Some(value) => Cell::new(value.raw()),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
