//! Storage module for workout files and configuration.

pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod record;

pub use config::{AppConfig, ConfigError, Theme, UiSettings};
pub use error::{CodecError, LoadError, SaveError};
pub use file::{read_workouts, write_workouts, FileFormat, LoadReporter, TracingReporter};
pub use record::{ExerciseRecord, Field, FieldValue, Record, Value, WorkoutRecord, WorkoutValue};
