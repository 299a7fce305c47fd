//! Stages of an allocation run: ingest, allocate, output.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use seat_core::{ClassroomRegistry, SeatingSession, StudentRoster, cohort_summary};
use seat_ingest::{SkippedLine, read_classrooms, read_student_file};
use seat_model::{ExamMode, SeatingPlan, SeatingType};
use seat_report::{DocumentHeader, OutputFormat, write_documents};

/// Inputs loaded from disk.
#[derive(Debug, Default)]
pub struct IngestResult {
    pub roster: StudentRoster,
    pub classrooms: ClassroomRegistry,
    /// Student lines dropped during import, with the file they came from.
    pub skipped: Vec<(PathBuf, SkippedLine)>,
}

/// Students loaded from one or more files.
#[derive(Debug, Default)]
pub struct StudentIngest {
    pub roster: StudentRoster,
    /// Student lines dropped during import, with the file they came from.
    pub skipped: Vec<(PathBuf, SkippedLine)>,
}

/// Per-classroom line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassroomSummary {
    pub hall_no: String,
    pub rows: usize,
    pub columns: usize,
    pub seating_type: SeatingType,
    pub capacity: usize,
    pub seated: usize,
    pub cohorts: String,
}

/// Loads classrooms and every student file, consolidating students into
/// one roster in file order.
pub fn ingest(classrooms_path: &Path, student_paths: &[PathBuf]) -> Result<IngestResult> {
    let span = info_span!("ingest", classrooms = %classrooms_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let classrooms = read_classrooms(classrooms_path)
        .with_context(|| format!("load classrooms from {}", classrooms_path.display()))?;
    let classrooms = ClassroomRegistry::from_classrooms(classrooms)
        .with_context(|| format!("register classrooms from {}", classrooms_path.display()))?;

    let students = ingest_students(student_paths)?;
    let result = IngestResult {
        roster: students.roster,
        classrooms,
        skipped: students.skipped,
    };

    info!(
        classrooms = result.classrooms.len(),
        entries = result.roster.len(),
        students = result.roster.total_students(),
        skipped = result.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(result)
}

/// Reads every student file into one roster in file order.
///
/// A file named more than once (after resolving the path) is read only the
/// first time.
pub fn ingest_students(student_paths: &[PathBuf]) -> Result<StudentIngest> {
    let mut result = StudentIngest::default();
    let mut seen = BTreeSet::new();
    for path in student_paths {
        let key = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            warn!(path = %path.display(), "student file already loaded, skipping");
            continue;
        }
        let outcome = read_student_file(path)
            .with_context(|| format!("load students from {}", path.display()))?;
        result.roster.extend(outcome.entries);
        result
            .skipped
            .extend(outcome.skipped.into_iter().map(|line| (path.clone(), line)));
    }
    Ok(result)
}

/// Runs the allocator over the ingested inputs.
pub fn allocate(ingested: &IngestResult, mode: ExamMode) -> SeatingPlan {
    let mut session = SeatingSession::new(mode)
        .with_roster(ingested.roster.clone())
        .with_classrooms(ingested.classrooms.clone());
    let capacity = session.classrooms().total_capacity(mode);
    let demand = session.roster().total_students();
    if u64::try_from(capacity).is_ok_and(|capacity| capacity < demand) {
        warn!(capacity, demand, "enabled classrooms cannot hold every student");
    }
    session.plan().clone()
}

/// Writes documents unless `dry_run` is set. Returns the written paths.
pub fn output(
    output_dir: &Path,
    plan: &SeatingPlan,
    header: &DocumentHeader,
    formats: &[OutputFormat],
    dry_run: bool,
) -> Result<Vec<PathBuf>> {
    if dry_run {
        info!(output_dir = %output_dir.display(), "dry run, no documents written");
        return Ok(Vec::new());
    }
    write_documents(output_dir, plan, header, formats)
        .with_context(|| format!("write documents to {}", output_dir.display()))
}

/// Summary rows for each classroom that took part in `plan`.
pub fn classroom_summaries(
    plan: &SeatingPlan,
    classrooms: &ClassroomRegistry,
) -> Vec<ClassroomSummary> {
    plan.results
        .iter()
        .map(|result| ClassroomSummary {
            hall_no: result.hall_no.clone(),
            rows: result.grid.rows(),
            columns: result.grid.columns(),
            seating_type: result.seating_type,
            capacity: classrooms
                .get(&result.hall_no)
                .map_or(0, |classroom| classroom.capacity(plan.exam_mode)),
            seated: result.seated_count,
            cohorts: cohort_summary(&result.grid),
        })
        .collect()
}

/// Alert shown when students are left without a seat.
pub fn unseated_alert(unseated: usize) -> Option<String> {
    (unseated > 0).then(|| {
        format!(
            "Not enough seats in all classrooms for all students! {unseated} students couldn't be seated."
        )
    })
}
