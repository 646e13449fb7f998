//! Integration tests for opening workout log files.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use ironweek::storage::codec;
use ironweek::storage::{CodecError, LoadError};
use ironweek::workouts::{default_workout, Exercise, ExerciseType, LogEvent, Workout, WorkoutLog};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_weeks() -> Vec<Workout> {
    vec![
        default_workout(),
        Workout::new(
            112.4,
            date(2015, 1, 9),
            date(2015, 1, 15),
            vec![Exercise::new(ExerciseType::Squat, 20, vec![12, 12])],
        ),
    ]
}

fn write_binary(dir: &TempDir, name: &str, workouts: &[Workout]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, codec::to_bytes(workouts).unwrap()).unwrap();
    path
}

/// Test a successful load replaces the log contents.
#[test]
fn test_load_replaces_contents() {
    let dir = TempDir::new().unwrap();
    let path = write_binary(&dir, "weeks.iwl", &two_weeks());

    let mut log = WorkoutLog::new();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(log.load_from_file(Some(&path), &mut errors));
    assert!(errors.is_empty());
    assert_eq!(log.len(), 2);
    assert_eq!(log.get(1).unwrap().body_weight(), 112.4);
    assert_eq!(log.get(1).unwrap().exercise(0).unwrap().reps().as_slice(), &[12, 12]);
}

/// Test a workout with no exercises survives a load.
#[test]
fn test_load_workout_without_exercises() {
    let dir = TempDir::new().unwrap();
    let empty_week = Workout::new(110.0, date(2015, 2, 6), date(2015, 2, 12), Vec::new());
    let path = write_binary(&dir, "rest.iwl", &[empty_week]);

    let mut log = WorkoutLog::new();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(log.load_from_file(Some(&path), &mut errors));
    assert_eq!(log.len(), 1);
    assert_eq!(log.get(0).unwrap().num_exercises(), 0);
    assert!(log.get(0).unwrap().exercises().is_empty());
}

/// Test a truncated file is reported and leaves an empty display.
#[test]
fn test_truncated_file_clears_display() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cut.iwl");
    let bytes = codec::to_bytes(&two_weeks()).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 5]).unwrap();

    let mut log = WorkoutLog::new();
    assert!(!log.is_empty());
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(!log.load_from_file(Some(&path), &mut errors));
    assert!(log.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], LoadError::Deserialize(_)));
}

/// Test a file with a foreign header is rejected.
#[test]
fn test_foreign_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.iwl");
    fs::write(&path, b"shopping list: eggs, milk").unwrap();

    let mut log = WorkoutLog::new();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(!log.load_from_file(Some(&path), &mut errors));
    assert!(log.is_empty());
    assert_eq!(errors, vec![LoadError::Deserialize(CodecError::InvalidMagic)]);
}

/// Test a missing file is reported as an IO fault and still clears the display.
#[test]
fn test_missing_file_is_io_fault() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.iwl");

    let mut log = WorkoutLog::new();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(!log.load_from_file(Some(&path), &mut errors));
    assert!(log.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], LoadError::Io(_)));
}

/// Test a cancelled or empty selection changes nothing.
#[test]
fn test_no_selection_keeps_log() {
    let mut log = WorkoutLog::new();
    log.poll_changes();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(!log.load_from_file(None, &mut errors));
    assert!(!log.load_from_file(Some(Path::new("")), &mut errors));

    assert_eq!(log.len(), 1);
    assert!(errors.is_empty());
    assert!(log.poll_changes().is_empty());
}

/// Test the JSON rendering loads like the binary one.
#[test]
fn test_load_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weeks.json");
    fs::write(&path, codec::to_json(&two_weeks()).unwrap()).unwrap();

    let mut log = WorkoutLog::empty();
    let mut errors: Vec<LoadError> = Vec::new();

    assert!(log.load_from_file(Some(&path), &mut errors));
    assert_eq!(log.len(), 2);
    assert_eq!(log.get(0).unwrap().num_exercises(), ExerciseType::COUNT);
}

/// Test loading detaches the previous workouts and watches the new ones.
#[test]
fn test_load_rewires_observers() {
    let dir = TempDir::new().unwrap();
    let path = write_binary(&dir, "weeks.iwl", &two_weeks());

    let mut log = WorkoutLog::new();
    let mut errors: Vec<LoadError> = Vec::new();
    assert!(log.load_from_file(Some(&path), &mut errors));
    log.poll_changes();

    log.workout_mut(1).unwrap().set_body_weight(115.0);
    assert_eq!(
        log.poll_changes(),
        vec![LogEvent::Workout {
            index: 1,
            property: ironweek::workouts::Property::BodyWeight,
        }]
    );

    let discarded = log.clear();
    assert_eq!(discarded.len(), 2);
    for workout in &discarded {
        assert!(!workout.is_attached());
        assert_eq!(workout.subscriber_count(), 0);
    }
}
