//! Writing seating documents to disk.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use seat_model::{AllocationResult, SeatingPlan};

use crate::header::DocumentHeader;
use crate::listing::write_seat_listing;
use crate::page::render_text_page;

/// File name of the whole-plan JSON export.
pub const PLAN_FILE_NAME: &str = "seating-plan.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Printable page per classroom.
    Text,
    /// Seat listing per classroom.
    Csv,
    /// Whole plan in one file.
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Csv, OutputFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// `seating-arrangement-{hall}.{ext}`, with characters that are unsafe in
/// file names replaced by `_`.
pub fn document_file_name(hall_no: &str, format: OutputFormat) -> String {
    stem_file_name(&file_stem(hall_no), format)
}

fn stem_file_name(stem: &str, format: OutputFormat) -> String {
    format!("seating-arrangement-{stem}.{}", format.extension())
}

fn file_stem(hall_no: &str) -> String {
    hall_no
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Sanitized stem for `hall_no` not yet in `taken`. Halls that sanitize to
/// the same stem get `-2`, `-3`, ... in plan order.
fn unique_stem(hall_no: &str, taken: &mut BTreeSet<String>) -> String {
    let base = file_stem(hall_no);
    let mut stem = base.clone();
    let mut suffix = 2;
    while !taken.insert(stem.clone()) {
        stem = format!("{base}-{suffix}");
        suffix += 1;
    }
    stem
}

/// Writes the requested documents for `plan` into `output_dir`.
///
/// Text and CSV documents are written per classroom in plan order, followed
/// by the JSON plan. Returns every path written.
pub fn write_documents(
    output_dir: &Path,
    plan: &SeatingPlan,
    header: &DocumentHeader,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut formats = formats.to_vec();
    formats.sort();
    formats.dedup();

    let mut outputs = Vec::new();
    let mut stems = BTreeSet::new();
    for result in &plan.results {
        let stem = unique_stem(&result.hall_no, &mut stems);
        if stem != file_stem(&result.hall_no) {
            warn!(hall_no = %result.hall_no, stem = %stem, "document name clash, using suffixed name");
        }
        for format in formats.iter().copied().filter(|f| *f != OutputFormat::Json) {
            let path = output_dir.join(stem_file_name(&stem, format));
            write_classroom_document(&path, result, header, format)?;
            debug!(path = %path.display(), hall_no = %result.hall_no, "wrote classroom document");
            outputs.push(path);
        }
    }
    if formats.contains(&OutputFormat::Json) {
        let path = output_dir.join(PLAN_FILE_NAME);
        write_plan_json(&path, plan)?;
        outputs.push(path);
    }
    info!(
        output_dir = %output_dir.display(),
        files = outputs.len(),
        "documents written"
    );
    Ok(outputs)
}

/// Writes `plan` as pretty-printed JSON.
pub fn write_plan_json(path: &Path, plan: &SeatingPlan) -> Result<()> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, plan)
        .with_context(|| format!("serialize plan to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

fn write_classroom_document(
    path: &Path,
    result: &AllocationResult,
    header: &DocumentHeader,
    format: OutputFormat,
) -> Result<()> {
    let mut writer = create(path)?;
    match format {
        OutputFormat::Text => writer
            .write_all(render_text_page(result, header).as_bytes())
            .with_context(|| format!("write {}", path.display()))?,
        OutputFormat::Csv => write_seat_listing(&mut writer, result)
            .with_context(|| format!("write {}", path.display()))?,
        OutputFormat::Json => return Ok(()),
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
