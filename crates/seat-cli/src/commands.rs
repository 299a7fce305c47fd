use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use seat_cli::pipeline::{allocate, classroom_summaries, ingest, ingest_students, output};
use seat_model::ExamMode;

use crate::cli::{AllocateArgs, RosterArgs};
use crate::types::{AllocateResult, RosterResult};

pub fn run_allocate(args: &AllocateArgs) -> Result<AllocateResult> {
    let exam_mode = ExamMode::from(args.exam_mode);
    let span = info_span!("allocate_run", exam_mode = %exam_mode);
    let _guard = span.enter();
    let start = Instant::now();

    let ingested = ingest(&args.classrooms, &args.students)?;
    let plan = allocate(&ingested, exam_mode);
    let outputs = output(
        &args.output_dir,
        &plan,
        &args.header.to_header(),
        &args.format.formats(),
        args.dry_run,
    )?;

    info!(
        seated = plan.seated_count(),
        unseated = plan.unseated_count(),
        documents = outputs.len(),
        duration_ms = start.elapsed().as_millis(),
        "allocation run complete"
    );
    Ok(AllocateResult {
        exam_mode,
        output_dir: args.output_dir.clone(),
        classrooms: classroom_summaries(&plan, &ingested.classrooms),
        total_students: ingested.roster.total_students(),
        seated: plan.seated_count(),
        unseated: plan.unseated_count(),
        skipped: ingested.skipped,
        outputs,
        dry_run: args.dry_run,
    })
}

pub fn run_roster(args: &RosterArgs) -> Result<RosterResult> {
    let students = ingest_students(&args.students)?;
    Ok(RosterResult {
        roster: students.roster,
        skipped: students.skipped,
    })
}
