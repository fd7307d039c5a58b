//! Console output: saved-file lines and projection previews.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use flowsel_extract::{Projection, SavedProjection};

/// Rows shown in the console preview.
pub const PREVIEW_ROWS: usize = 5;

/// Wider tables show their first and last columns around an ellipsis.
const PREVIEW_MAX_COLUMNS: usize = 8;
const PREVIEW_HEAD_COLUMNS: usize = 4;
const PREVIEW_TAIL_COLUMNS: usize = 3;

pub fn saved_line(saved: &SavedProjection) -> String {
    format!(
        "Saved {} rows × {} columns to {}",
        saved.rows,
        saved.columns,
        saved.path.display()
    )
}

pub fn selected_columns_line(columns: &[String]) -> String {
    format!("Selected columns ({}): {:?}", columns.len(), columns)
}

pub fn print_saved(saved: &SavedProjection) {
    println!("{}", saved_line(saved));
}

/// Citation, selected columns, then the first rows.
pub fn print_preview(projection: &Projection) {
    println!("{}", projection.citation);
    println!("{}", selected_columns_line(&projection.columns()));
    println!("{}", preview_table(&projection.frame, PREVIEW_ROWS));
    println!(
        "[{} rows x {} columns]",
        projection.frame.height(),
        projection.frame.width()
    );
}

/// Indices of the columns shown in a preview; `None` marks the ellipsis.
fn preview_columns(width: usize) -> Vec<Option<usize>> {
    if width <= PREVIEW_MAX_COLUMNS {
        return (0..width).map(Some).collect();
    }
    let mut shown: Vec<Option<usize>> = (0..PREVIEW_HEAD_COLUMNS).map(Some).collect();
    shown.push(None);
    shown.extend((width - PREVIEW_TAIL_COLUMNS..width).map(Some));
    shown
}

pub fn preview_table(df: &DataFrame, max_rows: usize) -> Table {
    let head = df.head(Some(max_rows));
    let columns = head.get_columns();
    let shown = preview_columns(columns.len());

    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    for index in &shown {
        header.push(match index {
            Some(i) => header_cell(columns[*i].name().as_str()),
            None => dim_cell("…"),
        });
    }
    table.set_header(header);
    apply_table_style(&mut table);

    for row in 0..head.height() {
        let mut cells = vec![dim_cell(row)];
        for index in &shown {
            cells.push(match index {
                Some(i) => value_cell(columns[*i].get(row).unwrap_or(AnyValue::Null)),
                None => dim_cell("…"),
            });
        }
        table.add_row(cells);
    }
    for index in 1..=shown.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn value_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => dim_cell("null"),
        other => Cell::new(any_to_string(other)),
    }
}

/// Display text for a preview value.
fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float without trailing zeros; non-finite values as is.
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !v.is_finite() || !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
