//! Workout log file format.
//!
//! Each entity is encoded by a pair of pure functions into a keyed
//! [`Record`]. A file is a short header followed by the top-level sequence
//! of workout records:
//!
//! ```text
//! binary: b"IWLG" | version: u32 LE | bincode(Vec<WorkoutRecord>)
//! json:   {"magic": "IWLG", "version": 1, "workouts": [...]}
//! ```
//!
//! Workout record: `bodyweight`, `startdate`, `enddate`, `numexercises`,
//! then `exercises_0..n`. Exercise record: `exercisetype` (ordinal),
//! `weight`, `sets`, then `reps_0..n`. Persisted counts are only used as
//! loop bounds while reading; the decoded entities derive them again.

use serde::{Deserialize, Serialize};

use super::error::CodecError;
use super::record::{ExerciseRecord, FieldValue, Record, Value, WorkoutRecord};
use crate::workouts::{Exercise, ExerciseType, Property, Workout};

/// File format version
pub const FORMAT_VERSION: u32 = 1;

/// Magic identifier at the start of every workout log file
pub const MAGIC: [u8; 4] = *b"IWLG";

const HEADER_LEN: usize = 8;

/// Encode an exercise into its keyed record.
pub fn encode_exercise(exercise: &Exercise) -> ExerciseRecord {
    let mut record = ExerciseRecord::new();
    record.add_int32(
        Property::ExerciseType.key(),
        exercise.exercise_type().ordinal(),
    );
    record.add_int32(Property::Weight.key(), exercise.weight());
    record.add_int32(Property::Sets.key(), count_to_i32(exercise.sets()));

    for (index, reps) in exercise.reps().iter().enumerate() {
        record.add_int32(Property::Reps.indexed_key(index), *reps);
    }

    record
}

/// Decode an exercise from its keyed record.
pub fn decode_exercise(record: &ExerciseRecord) -> Result<Exercise, CodecError> {
    let type_key = Property::ExerciseType.key();
    let ordinal = record.get_int32(&type_key)?;
    let exercise_type =
        ExerciseType::from_ordinal(ordinal).ok_or_else(|| CodecError::InvalidValue {
            field: type_key,
            value: ordinal.to_string(),
        })?;

    let weight = record.get_int32(&Property::Weight.key())?;
    let sets = read_count(record, Property::Sets)?;

    let reps = (0..sets)
        .map(|index| record.get_int32(&Property::Reps.indexed_key(index)))
        .collect::<Result<Vec<i32>, CodecError>>()?;

    Ok(Exercise::new(exercise_type, weight, reps))
}

/// Encode a workout, including its exercises, into its keyed record.
pub fn encode_workout(workout: &Workout) -> WorkoutRecord {
    let mut record = WorkoutRecord::new();
    record.add_double(Property::BodyWeight.key(), workout.body_weight());
    record.add_date(Property::StartDate.key(), workout.start_date());
    record.add_date(Property::EndDate.key(), workout.end_date());
    record.add_int32(
        Property::NumExercises.key(),
        count_to_i32(workout.num_exercises()),
    );

    for (index, exercise) in workout.exercises().iter().enumerate() {
        record.add_exercise(
            Property::Exercises.indexed_key(index),
            encode_exercise(exercise),
        );
    }

    record
}

/// Decode a workout, including its exercises, from its keyed record.
pub fn decode_workout(record: &WorkoutRecord) -> Result<Workout, CodecError> {
    let weight_key = Property::BodyWeight.key();
    let body_weight = record.get_double(&weight_key)?;
    if !body_weight.is_finite() {
        return Err(CodecError::InvalidValue {
            field: weight_key,
            value: body_weight.to_string(),
        });
    }
    let start_date = record.get_date(&Property::StartDate.key())?;
    let end_date = record.get_date(&Property::EndDate.key())?;
    let num_exercises = read_count(record, Property::NumExercises)?;

    let exercises = (0..num_exercises)
        .map(|index| {
            let key = Property::Exercises.indexed_key(index);
            decode_exercise(record.get_exercise(&key)?)
        })
        .collect::<Result<Vec<Exercise>, CodecError>>()?;

    Ok(Workout::new(body_weight, start_date, end_date, exercises))
}

/// Encode a sequence of workouts into records.
pub fn encode_workouts(workouts: &[Workout]) -> Vec<WorkoutRecord> {
    workouts.iter().map(encode_workout).collect()
}

/// Decode a sequence of workout records. Any faulty record fails the whole sequence.
pub fn decode_workouts(records: &[WorkoutRecord]) -> Result<Vec<Workout>, CodecError> {
    records.iter().map(decode_workout).collect()
}

/// Serialize workouts to the binary file format.
pub fn to_bytes(workouts: &[Workout]) -> Result<Vec<u8>, CodecError> {
    check_finite(workouts)?;
    let body = bincode::serialize(&encode_workouts(workouts))
        .map_err(|e| CodecError::Encoding(e.to_string()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + body.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Deserialize workouts from the binary file format.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<Workout>, CodecError> {
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version_bytes: [u8; 4] = bytes
        .get(MAGIC.len()..HEADER_LEN)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(CodecError::Truncated)?;
    check_version(u32::from_le_bytes(version_bytes))?;

    let records: Vec<WorkoutRecord> = bincode::deserialize(&bytes[HEADER_LEN..])
        .map_err(|e| CodecError::Encoding(e.to_string()))?;

    decode_workouts(&records)
}

/// JSON rendering of a workout log file.
#[derive(Debug, Serialize, Deserialize)]
struct JsonDocument {
    magic: String,
    version: u32,
    workouts: Vec<WorkoutRecord>,
}

/// Serialize workouts to the JSON file format.
pub fn to_json(workouts: &[Workout]) -> Result<Vec<u8>, CodecError> {
    check_finite(workouts)?;
    let document = JsonDocument {
        magic: String::from_utf8_lossy(&MAGIC).into_owned(),
        version: FORMAT_VERSION,
        workouts: encode_workouts(workouts),
    };
    serde_json::to_vec_pretty(&document).map_err(|e| CodecError::Encoding(e.to_string()))
}

/// Deserialize workouts from the JSON file format.
pub fn from_json(bytes: &[u8]) -> Result<Vec<Workout>, CodecError> {
    let document: JsonDocument =
        serde_json::from_slice(bytes).map_err(|e| CodecError::Encoding(e.to_string()))?;

    if document.magic.as_bytes() != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    check_version(document.version)?;

    decode_workouts(&document.workouts)
}

/// Body weights must survive both formats; JSON has no NaN or infinity.
fn check_finite(workouts: &[Workout]) -> Result<(), CodecError> {
    match workouts.iter().find(|w| !w.body_weight().is_finite()) {
        Some(workout) => Err(CodecError::InvalidValue {
            field: Property::BodyWeight.key(),
            value: workout.body_weight().to_string(),
        }),
        None => Ok(()),
    }
}

fn check_version(version: u32) -> Result<(), CodecError> {
    if version > FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    Ok(())
}

/// Read a persisted count, rejecting negative values.
fn read_count<V>(record: &Record<V>, property: Property) -> Result<usize, CodecError>
where
    V: FieldValue + From<Value>,
{
    let key = property.key();
    let count = record.get_int32(&key)?;
    usize::try_from(count).map_err(|_| CodecError::InvalidValue {
        field: key,
        value: count.to_string(),
    })
}

fn count_to_i32(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
