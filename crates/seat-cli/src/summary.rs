use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use seat_cli::pipeline::unseated_alert;
use seat_ingest::SkippedLine;
use seat_model::SeatingType;

use crate::types::{AllocateResult, RosterResult};

pub fn print_allocation_summary(result: &AllocateResult) {
    println!("Exam mode: {}", result.exam_mode);
    if result.dry_run {
        println!("Output: (dry run, nothing written)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Hall"),
        header_cell("Rows x Columns"),
        header_cell("Seating"),
        header_cell("Capacity"),
        header_cell("Seated"),
        header_cell("Cohorts"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    let mut total_capacity = 0usize;
    for classroom in &result.classrooms {
        total_capacity += classroom.capacity;
        table.add_row(vec![
            Cell::new(&classroom.hall_no)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{} x {}", classroom.rows, classroom.columns)),
            seating_cell(classroom.seating_type),
            Cell::new(classroom.capacity),
            seated_cell(classroom.seated, classroom.capacity),
            cohort_cell(&classroom.cohorts),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_capacity).add_attribute(Attribute::Bold),
        Cell::new(result.seated).add_attribute(Attribute::Bold),
        Cell::new(format!("{} students", result.total_students))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_skipped(&result.skipped);
    if !result.outputs.is_empty() {
        println!("Documents written: {}", result.outputs.len());
    }
    if let Some(alert) = unseated_alert(result.unseated) {
        eprintln!("warning: {alert}");
    }
}

pub fn print_roster(result: &RosterResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Year"),
        header_cell("Department"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Students"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Right);
    for (index, entry) in result.roster.entries().iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(entry.year),
            Cell::new(&entry.department),
            Cell::new(&entry.start_register),
            Cell::new(&entry.end_register),
            Cell::new(entry.student_count()),
        ]);
    }
    println!("{table}");
    println!(
        "Total: {} students in {} ranges",
        result.roster.total_students(),
        result.roster.len()
    );
    print_skipped(&result.skipped);
}

fn print_skipped(skipped: &[(PathBuf, SkippedLine)]) {
    if skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Line"),
        header_cell("Content"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (path, line) in skipped {
        table.add_row(vec![
            dim_cell(path.display()),
            Cell::new(line.line),
            Cell::new(&line.content),
            Cell::new(&line.reason).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped lines:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn seating_cell(seating_type: SeatingType) -> Cell {
    match seating_type {
        SeatingType::TwoSeater => Cell::new(seating_type).fg(Color::Magenta),
        SeatingType::SingleSeater => Cell::new(seating_type),
    }
}

fn seated_cell(seated: usize, capacity: usize) -> Cell {
    if seated == 0 {
        dim_cell(seated)
    } else if seated < capacity {
        Cell::new(seated).fg(Color::Yellow)
    } else {
        Cell::new(seated).fg(Color::Green)
    }
}

fn cohort_cell(cohorts: &str) -> Cell {
    if cohorts.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(cohorts)
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
