//! Document generation against real allocation runs.

use std::fs;

use seat_core::generate_seating_plan;
use seat_model::{Classroom, ExamMode, SeatingPlan, SeatingType, StudentRangeEntry};
use seat_report::{
    DocumentHeader, OutputFormat, PLAN_FILE_NAME, render_text_page, seat_listing,
    write_documents,
};
use tempfile::TempDir;

fn two_seater_plan() -> SeatingPlan {
    generate_seating_plan(
        &[
            StudentRangeEntry::parse("1st", "CSE", "001", "002").unwrap(),
            StudentRangeEntry::parse("2nd", "ECE", "010", "011").unwrap(),
        ],
        &[Classroom::new("B308", 1, 2, SeatingType::TwoSeater).unwrap()],
        ExamMode::Internal,
    )
}

#[test]
fn seat_listing_matches_grid() {
    let plan = two_seater_plan();
    let listing = seat_listing(&plan.results[0]).expect("listing");
    insta::assert_snapshot!(listing, @r"
    hall_no,row,column,seat,register,year,department
    B308,1,1,1,001,I,CSE
    B308,1,1,2,010,II,ECE
    B308,1,2,1,002,I,CSE
    B308,1,2,2,011,II,ECE
    ");
}

#[test]
fn writes_every_requested_format() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("out");
    let plan = two_seater_plan();
    let paths = write_documents(&out, &plan, &DocumentHeader::default(), &OutputFormat::ALL)
        .expect("write documents");

    let names: Vec<String> = paths
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "seating-arrangement-B308.txt",
            "seating-arrangement-B308.csv",
            PLAN_FILE_NAME,
        ]
    );

    let page = fs::read_to_string(&paths[0]).expect("read page");
    assert_eq!(page, render_text_page(&plan.results[0], &DocumentHeader::default()));

    let json = fs::read_to_string(&paths[2]).expect("read plan");
    let restored: SeatingPlan = serde_json::from_str(&json).expect("parse plan");
    assert_eq!(restored, plan);
}

#[test]
fn sanitized_name_clash_keeps_both_classrooms() {
    let dir = TempDir::new().expect("temp dir");
    let plan = generate_seating_plan(
        &[StudentRangeEntry::parse("1st", "CSE", "001", "002").unwrap()],
        &[
            Classroom::new("A 1", 1, 1, SeatingType::SingleSeater).unwrap(),
            Classroom::new("A_1", 1, 1, SeatingType::SingleSeater).unwrap(),
        ],
        ExamMode::Internal,
    );
    let paths = write_documents(
        dir.path(),
        &plan,
        &DocumentHeader::default(),
        &[OutputFormat::Csv],
    )
    .expect("write documents");
    assert_eq!(
        paths,
        vec![
            dir.path().join("seating-arrangement-A_1.csv"),
            dir.path().join("seating-arrangement-A_1-2.csv"),
        ]
    );
    assert!(fs::read_to_string(&paths[0]).expect("read").contains("A 1,1,1,1,001"));
    assert!(fs::read_to_string(&paths[1]).expect("read").contains("A_1,1,1,1,002"));
}

#[test]
fn json_only_skips_classroom_documents() {
    let dir = TempDir::new().expect("temp dir");
    let plan = two_seater_plan();
    let paths = write_documents(
        dir.path(),
        &plan,
        &DocumentHeader::default(),
        &[OutputFormat::Json, OutputFormat::Json],
    )
    .expect("write documents");
    assert_eq!(paths, vec![dir.path().join(PLAN_FILE_NAME)]);
}

#[test]
fn unseated_students_survive_in_plan_export() {
    let dir = TempDir::new().expect("temp dir");
    let plan = generate_seating_plan(
        &[StudentRangeEntry::parse("1st", "CSE", "1", "3").unwrap()],
        &[Classroom::new("A313", 1, 2, SeatingType::SingleSeater).unwrap()],
        ExamMode::Semester,
    );
    assert_eq!(plan.unseated_count(), 2);
    let paths = write_documents(dir.path(), &plan, &DocumentHeader::default(), &[OutputFormat::Json])
        .expect("write documents");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths[0]).expect("read")).expect("json");
    assert_eq!(value["exam_mode"], "semester");
    assert_eq!(value["unseated"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["unseated"][0]["register"], "002");
}
