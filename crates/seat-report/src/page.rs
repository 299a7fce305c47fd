//! Printable seating page for one classroom.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use seat_core::cohort_summary;
use seat_model::{AllocationResult, Student};

use crate::header::DocumentHeader;

const FOOTER_LEFT: &str = "Exam Coordinator";
const FOOTER_RIGHT: &str = "HOD";

/// Renders the seating page for `result` as plain text.
///
/// Desks are laid out as a table with one `Column N` header per grid column.
/// Each occupied desk shows its registers on one line and the matching
/// cohorts on the next.
pub fn render_text_page(result: &AllocationResult, header: &DocumentHeader) -> String {
    let mut lines: Vec<String> = header
        .title_lines()
        .into_iter()
        .map(str::to_string)
        .collect();
    lines.push(String::new());
    lines.push(format!("Hall No: {}", result.hall_no));
    lines.push(format!("({})", cohort_summary(&result.grid)));
    lines.push(format!("Date: {}", header.date_label()));
    lines.push(String::new());

    let table = seat_table(result);
    let width = table.lines().map(|line| line.chars().count()).max().unwrap_or(0);
    lines.push(table.to_string());
    lines.push(String::new());
    lines.push(footer(width));

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn seat_table(result: &AllocationResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(
            (1..=result.grid.columns())
                .map(|column| Cell::new(format!("Column {column}")).set_alignment(CellAlignment::Center)),
        );
    for row in result.grid.iter_rows() {
        table.add_row(row.iter().map(|seat| desk_cell(seat)));
    }
    table
}

fn desk_cell(seat: &[Student]) -> Cell {
    if seat.is_empty() {
        return Cell::new("");
    }
    let registers = seat
        .iter()
        .map(|student| student.register.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let cohorts = seat
        .iter()
        .map(Student::cohort)
        .collect::<Vec<_>>()
        .join(", ");
    Cell::new(format!("{registers}\n{cohorts}")).set_alignment(CellAlignment::Center)
}

fn footer(width: usize) -> String {
    let gap = width
        .saturating_sub(FOOTER_LEFT.len() + FOOTER_RIGHT.len())
        .max(4);
    format!("{FOOTER_LEFT}{}{FOOTER_RIGHT}", " ".repeat(gap))
}
