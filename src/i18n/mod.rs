//! Human readable exercise labels.
//!
//! Labels live in a key-value resource (`<TypeName>.Description = Label`).
//! The table is built once and handed to whatever needs it; nothing here
//! is global.

use std::collections::HashMap;

use crate::workouts::ExerciseType;

/// Lookup from exercise type to display label.
#[derive(Debug, Clone, Default)]
pub struct ExerciseLabels {
    entries: HashMap<String, String>,
}

impl ExerciseLabels {
    /// Labels from the bundled English resource.
    pub fn english() -> Self {
        Self::parse(include_str!("locales/en-US/exercises.ftl"))
    }

    /// Parse `key = value` lines, skipping comments and blank lines.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { entries }
    }

    /// Override or add the label for one exercise type.
    pub fn insert(&mut self, exercise_type: ExerciseType, label: impl Into<String>) {
        self.entries
            .insert(exercise_type.description_key(), label.into());
    }

    /// Label for `exercise_type`, falling back to its symbolic name.
    pub fn label(&self, exercise_type: ExerciseType) -> &str {
        self.entries
            .get(&exercise_type.description_key())
            .map(String::as_str)
            .unwrap_or_else(|| exercise_type.name())
    }

    /// Number of labels known.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
