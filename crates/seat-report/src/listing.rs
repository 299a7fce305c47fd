//! Flat CSV seat listing, one row per seated student.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use seat_model::{AllocationResult, Year};

pub const LISTING_COLUMNS: [&str; 7] = [
    "hall_no",
    "row",
    "column",
    "seat",
    "register",
    "year",
    "department",
];

#[derive(Debug, Serialize)]
struct ListingRow<'a> {
    hall_no: &'a str,
    row: usize,
    column: usize,
    seat: usize,
    register: &'a str,
    year: Year,
    department: &'a str,
}

/// Writes the seat listing of `result` to `writer`.
///
/// Rows, columns and seats are 1-based. Desks appear row by row, left to
/// right.
pub fn write_seat_listing<W: Write>(writer: W, result: &AllocationResult) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(LISTING_COLUMNS)
        .context("write seat listing header")?;
    for (row, column, seat) in result.grid.occupied_seats() {
        for (index, student) in seat.iter().enumerate() {
            csv.serialize(ListingRow {
                hall_no: &result.hall_no,
                row: row + 1,
                column: column + 1,
                seat: index + 1,
                register: &student.register,
                year: student.year,
                department: &student.department,
            })
            .with_context(|| format!("write listing row for {}", student.register))?;
        }
    }
    csv.flush().context("flush seat listing")?;
    Ok(())
}

/// Seat listing of `result` as a string.
pub fn seat_listing(result: &AllocationResult) -> Result<String> {
    let mut buffer = Vec::new();
    write_seat_listing(&mut buffer, result)?;
    String::from_utf8(buffer).context("seat listing is not valid UTF-8")
}
