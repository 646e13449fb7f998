//! IronWeek - Weekly Strength Workout Log
//!
//! A small desktop application for recording weekly workouts: body weight,
//! the week's date range, and per-exercise weight with one rep count per
//! set. The core is an observable data model with keyed binary
//! persistence; the egui shell sits on top of it.

pub mod i18n;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use i18n::ExerciseLabels;
pub use storage::config::AppConfig;
pub use workouts::{Exercise, ExerciseType, Workout, WorkoutLog};
