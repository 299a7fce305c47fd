//! Seating documents.
//!
//! - **Text pages**: one printable page per classroom with the institution
//!   header, cohort summary and a desk table
//! - **Seat listings**: one CSV row per seated student
//! - **Plan export**: the whole [`seat_model::SeatingPlan`] as JSON

mod header;
mod listing;
mod output;
mod page;

pub use header::{
    DEFAULT_COLLEGE_NAME, DEFAULT_DEPARTMENT, DEFAULT_INSTITUTION_TYPE, DocumentHeader,
    PAGE_DATE_FORMAT,
};
pub use listing::{LISTING_COLUMNS, seat_listing, write_seat_listing};
pub use output::{
    OutputFormat, PLAN_FILE_NAME, document_file_name, write_documents, write_plan_json,
};
pub use page::render_text_page;
