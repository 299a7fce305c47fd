//! CLI argument definitions for `seatplan`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use seat_model::ExamMode;
use seat_report::{
    DEFAULT_COLLEGE_NAME, DEFAULT_DEPARTMENT, DEFAULT_INSTITUTION_TYPE, DocumentHeader,
    OutputFormat,
};

#[derive(Parser)]
#[command(
    name = "seatplan",
    version,
    about = "Exam seat allocation - place students into exam halls",
    long_about = "Place students into exam halls.\n\n\
                  Internal exams may seat two students of different years per desk.\n\
                  Semester exams seat one student per desk and keep students of the\n\
                  same department out of neighbouring desks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Allocate seats and write seating documents.
    Allocate(AllocateArgs),

    /// Show the consolidated student roster.
    Roster(RosterArgs),
}

#[derive(Parser)]
pub struct AllocateArgs {
    /// Classroom definitions (.json, or CSV with hall_no,rows,columns,seating_type).
    #[arg(long = "classrooms", value_name = "FILE")]
    pub classrooms: PathBuf,

    /// Student files with year,department,register lines.
    #[arg(long = "students", value_name = "FILE", num_args = 1.., required = true)]
    pub students: Vec<PathBuf>,

    /// Exam mode deciding seating density and neighbour rules.
    #[arg(long = "exam-mode", value_enum, default_value = "internal")]
    pub exam_mode: ExamModeArg,

    /// Output directory for generated documents.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "seating")]
    pub output_dir: PathBuf,

    /// Documents to generate.
    #[arg(long = "format", value_enum, default_value = "all")]
    pub format: OutputFormatArg,

    /// Allocate and report without writing documents.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 1 when any student is left without a seat.
    #[arg(long = "fail-on-unseated")]
    pub fail_on_unseated: bool,

    #[command(flatten)]
    pub header: HeaderArgs,
}

/// Institution header printed on each seating page.
#[derive(Args)]
pub struct HeaderArgs {
    #[arg(long = "college-name", default_value = DEFAULT_COLLEGE_NAME)]
    pub college_name: String,

    #[arg(long = "institution-type", default_value = DEFAULT_INSTITUTION_TYPE)]
    pub institution_type: String,

    #[arg(long = "department", default_value = DEFAULT_DEPARTMENT)]
    pub department: String,

    /// Assessment title, e.g. "Internal Assessment - II".
    #[arg(long = "assessment", default_value = "")]
    pub assessment: String,

    /// Exam date (YYYY-MM-DD).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

impl HeaderArgs {
    pub fn to_header(&self) -> DocumentHeader {
        DocumentHeader {
            college_name: self.college_name.clone(),
            institution_type: self.institution_type.clone(),
            department: self.department.clone(),
            assessment: self.assessment.clone(),
            date: self.date,
        }
    }
}

#[derive(Parser)]
pub struct RosterArgs {
    /// Student files with year,department,register lines.
    #[arg(long = "students", value_name = "FILE", num_args = 1.., required = true)]
    pub students: Vec<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExamModeArg {
    Internal,
    Semester,
}

impl From<ExamModeArg> for ExamMode {
    fn from(arg: ExamModeArg) -> Self {
        match arg {
            ExamModeArg::Internal => ExamMode::Internal,
            ExamModeArg::Semester => ExamMode::Semester,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Csv,
    Json,
    All,
}

impl OutputFormatArg {
    pub fn formats(self) -> Vec<OutputFormat> {
        match self {
            OutputFormatArg::Text => vec![OutputFormat::Text],
            OutputFormatArg::Csv => vec![OutputFormat::Csv],
            OutputFormatArg::Json => vec![OutputFormat::Json],
            OutputFormatArg::All => OutputFormat::ALL.to_vec(),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
