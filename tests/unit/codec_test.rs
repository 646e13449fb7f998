//! Unit tests for the workout log file format.

use chrono::NaiveDate;
use ironweek::storage::codec::{
    decode_workout, encode_workout, from_bytes, from_json, to_bytes, to_json, FORMAT_VERSION,
};
use ironweek::storage::{CodecError, Value, WorkoutRecord, WorkoutValue};
use ironweek::workouts::{default_workout, Exercise, ExerciseType, Workout};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mixed_log() -> Vec<Workout> {
    vec![
        default_workout(),
        Workout::new(111.25, date(2015, 1, 9), date(2015, 1, 15), Vec::new()),
        Workout::new(
            109.8,
            date(2015, 1, 16),
            date(2015, 1, 22),
            vec![
                Exercise::new(ExerciseType::Lunge, 0, Vec::new()),
                Exercise::new(ExerciseType::DumbbellPullover, 25, vec![12, 10, 8, 6, 4]),
                Exercise::new(ExerciseType::Crunch, -5, vec![50]),
            ],
        ),
    ]
}

fn assert_same_log(actual: &[Workout], expected: &[Workout]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.body_weight(), e.body_weight());
        assert_eq!(a.start_date(), e.start_date());
        assert_eq!(a.end_date(), e.end_date());
        assert_eq!(a.num_exercises(), e.num_exercises());
        for (ax, ex) in a.exercises().iter().zip(e.exercises()) {
            assert_eq!(ax.exercise_type(), ex.exercise_type());
            assert_eq!(ax.weight(), ex.weight());
            assert_eq!(ax.reps().as_slice(), ex.reps().as_slice());
            assert_eq!(ax.sets(), ax.reps().len());
        }
    }
}

#[test]
fn test_binary_roundtrip_preserves_every_field() {
    let log = mixed_log();
    let decoded = from_bytes(&to_bytes(&log).unwrap()).unwrap();
    assert_same_log(&decoded, &log);
}

#[test]
fn test_json_roundtrip_preserves_every_field() {
    let log = mixed_log();
    let decoded = from_json(&to_json(&log).unwrap()).unwrap();
    assert_same_log(&decoded, &log);
}

#[test]
fn test_empty_log_roundtrip() {
    let decoded = from_bytes(&to_bytes(&[]).unwrap()).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_header_carries_current_version() {
    let bytes = to_bytes(&mixed_log()).unwrap();
    assert_eq!(&bytes[0..4], b"IWLG");
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), FORMAT_VERSION);
}

#[test]
fn test_exercise_records_are_nested_by_index() {
    let record = encode_workout(&default_workout());

    assert_eq!(record.get_int32("numexercises"), Ok(10));
    let ninth = record.get_exercise("exercises_9").unwrap();
    assert_eq!(ninth.get_int32("exercisetype"), Ok(ExerciseType::Lunge.ordinal()));
    assert_eq!(ninth.get_int32("reps_2"), Ok(10));
    assert!(matches!(
        record.get("startdate"),
        Ok(WorkoutValue::Scalar(Value::Date(_)))
    ));
}

#[test]
fn test_persisted_count_only_bounds_reading() {
    let record = encode_workout(&Workout::new(
        100.0,
        date(2015, 1, 2),
        date(2015, 1, 8),
        vec![
            Exercise::new(ExerciseType::Squat, 20, vec![8]),
            Exercise::new(ExerciseType::Lunge, 20, vec![8]),
        ],
    ));
    // A stale count of 1 reads only the first child; the extra is ignored.
    let mut rewritten = WorkoutRecord::new();
    for field in record.fields() {
        if field.key == "numexercises" {
            rewritten.add_int32("numexercises", 1);
        } else {
            rewritten.add(field.key.clone(), field.value.clone());
        }
    }

    let decoded = decode_workout(&rewritten).unwrap();
    assert_eq!(decoded.num_exercises(), 1);
    assert_eq!(decoded.exercises().len(), 1);
}

#[test]
fn test_newer_json_version_is_rejected() {
    let json = to_json(&mixed_log()).unwrap();
    let text = String::from_utf8(json).unwrap().replacen(
        &format!("\"version\": {}", FORMAT_VERSION),
        "\"version\": 99",
        1,
    );

    assert_eq!(
        from_json(text.as_bytes()).map(|w| w.len()),
        Err(CodecError::UnsupportedVersion(99))
    );
}

/// Build a file body that nests one single-field record inside another
/// `depth` times, tagging every value with `tag`.
fn nested_body(depth: usize, tag: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + depth * 29);
    bytes.extend_from_slice(b"IWLG");
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    // one top-level workout record
    bytes.extend_from_slice(&1u64.to_le_bytes());
    for _ in 0..depth {
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.extend_from_slice(&1u64.to_le_bytes());
        bytes.push(b'a');
        bytes.extend_from_slice(&tag.to_le_bytes());
    }
    bytes
}

#[test]
fn test_deeply_nested_records_are_rejected() {
    for tag in [1, 3] {
        let bytes = nested_body(200_000, tag);
        assert!(matches!(from_bytes(&bytes), Err(CodecError::Encoding(_))));
    }
}
