//! Keyed records: the on-disk shape of every persisted entity.
//!
//! A record is an ordered list of `key -> value` fields. Sequences are
//! flattened into a count field plus one field per element keyed by
//! position (`reps_0`, `reps_1`, ...).
//!
//! The schema is exactly two levels deep. A [`WorkoutRecord`] may hold
//! [`ExerciseRecord`]s; an exercise record holds scalars only, so a decoder
//! never recurses further than that whatever the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// A single persisted scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Double(f64),
    Date(NaiveDate),
    Int32(i32),
}

/// A field value of a workout record: a scalar or a nested exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkoutValue {
    Scalar(Value),
    Exercise(ExerciseRecord),
}

impl From<Value> for WorkoutValue {
    fn from(value: Value) -> Self {
        WorkoutValue::Scalar(value)
    }
}

/// Value stored in a record field.
pub trait FieldValue {
    /// The scalar held, if this value is one.
    fn as_scalar(&self) -> Option<&Value>;
}

impl FieldValue for Value {
    fn as_scalar(&self) -> Option<&Value> {
        Some(self)
    }
}

impl FieldValue for WorkoutValue {
    fn as_scalar(&self) -> Option<&Value> {
        match self {
            WorkoutValue::Scalar(value) => Some(value),
            WorkoutValue::Exercise(_) => None,
        }
    }
}

/// One keyed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field<V = Value> {
    pub key: String,
    pub value: V,
}

/// An ordered set of keyed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<V = Value> {
    fields: Vec<Field<V>>,
}

/// Record of one exercise; scalars only.
pub type ExerciseRecord = Record<Value>;

/// Record of one workout; scalars plus nested exercise records.
pub type WorkoutRecord = Record<WorkoutValue>;

impl<V> Record<V> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field. Keys are expected to be unique; lookups return the first match.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        self.fields.push(Field {
            key: key.into(),
            value,
        });
    }

    /// Look up a field value by key.
    pub fn get(&self, key: &str) -> Result<&V, CodecError> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
            .ok_or_else(|| CodecError::MissingField(key.to_string()))
    }

    pub fn fields(&self) -> &[Field<V>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<V: FieldValue + From<Value>> Record<V> {
    pub fn add_double(&mut self, key: impl Into<String>, value: f64) {
        self.add(key, Value::Double(value).into());
    }

    pub fn add_date(&mut self, key: impl Into<String>, value: NaiveDate) {
        self.add(key, Value::Date(value).into());
    }

    pub fn add_int32(&mut self, key: impl Into<String>, value: i32) {
        self.add(key, Value::Int32(value).into());
    }

    pub fn get_double(&self, key: &str) -> Result<f64, CodecError> {
        match self.get(key)?.as_scalar() {
            Some(Value::Double(v)) => Ok(*v),
            _ => Err(mismatch(key, "double")),
        }
    }

    pub fn get_date(&self, key: &str) -> Result<NaiveDate, CodecError> {
        match self.get(key)?.as_scalar() {
            Some(Value::Date(v)) => Ok(*v),
            _ => Err(mismatch(key, "date")),
        }
    }

    pub fn get_int32(&self, key: &str) -> Result<i32, CodecError> {
        match self.get(key)?.as_scalar() {
            Some(Value::Int32(v)) => Ok(*v),
            _ => Err(mismatch(key, "int32")),
        }
    }
}

impl Record<WorkoutValue> {
    pub fn add_exercise(&mut self, key: impl Into<String>, value: ExerciseRecord) {
        self.add(key, WorkoutValue::Exercise(value));
    }

    pub fn get_exercise(&self, key: &str) -> Result<&ExerciseRecord, CodecError> {
        match self.get(key)? {
            WorkoutValue::Exercise(v) => Ok(v),
            WorkoutValue::Scalar(_) => Err(mismatch(key, "exercise record")),
        }
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn mismatch(key: &str, expected: &'static str) -> CodecError {
    CodecError::TypeMismatch {
        key: key.to_string(),
        expected,
    }
}
