use std::path::PathBuf;

use seat_cli::pipeline::ClassroomSummary;
use seat_core::StudentRoster;
use seat_ingest::SkippedLine;
use seat_model::ExamMode;

#[derive(Debug)]
pub struct AllocateResult {
    pub exam_mode: ExamMode,
    pub output_dir: PathBuf,
    pub classrooms: Vec<ClassroomSummary>,
    pub total_students: u64,
    pub seated: usize,
    pub unseated: usize,
    pub skipped: Vec<(PathBuf, SkippedLine)>,
    pub outputs: Vec<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RosterResult {
    pub roster: StudentRoster,
    pub skipped: Vec<(PathBuf, SkippedLine)>,
}
