//! Reading and writing workout log files.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::codec;
use super::error::{LoadError, SaveError};
use crate::workouts::Workout;

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Native binary format
    Binary,
    /// JSON rendering of the same records
    Json,
}

impl FileFormat {
    /// Detect the format from the file extension. Anything but `.json` is binary.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
        {
            Some(ext) if ext == "json" => FileFormat::Json,
            _ => FileFormat::Binary,
        }
    }

    /// Get file extension for format
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Binary => "iwl",
            FileFormat::Json => "json",
        }
    }
}

/// Read every workout stored in the file at `path`.
///
/// The file is opened read-only and closed before decoding starts, on
/// every path.
pub fn read_workouts(path: &Path) -> Result<Vec<Workout>, LoadError> {
    if path.as_os_str().is_empty() {
        return Err(LoadError::InvalidPath);
    }

    let bytes = {
        let mut file = File::open(path).map_err(|e| LoadError::Io(e.to_string()))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| LoadError::Io(e.to_string()))?;
        bytes
    };

    let workouts = match FileFormat::from_path(path) {
        FileFormat::Binary => codec::from_bytes(&bytes)?,
        FileFormat::Json => codec::from_json(&bytes)?,
    };

    tracing::debug!(
        "Read {} workouts ({} bytes) from {}",
        workouts.len(),
        bytes.len(),
        path.display()
    );

    Ok(workouts)
}

/// Write `workouts` to the file at `path`, replacing any previous content.
pub fn write_workouts(path: &Path, workouts: &[Workout]) -> Result<(), SaveError> {
    if path.as_os_str().is_empty() {
        return Err(SaveError::InvalidPath);
    }

    let bytes = match FileFormat::from_path(path) {
        FileFormat::Binary => codec::to_bytes(workouts)?,
        FileFormat::Json => codec::to_json(workouts)?,
    };

    let mut file = File::create(path).map_err(|e| SaveError::Io(e.to_string()))?;
    file.write_all(&bytes)
        .map_err(|e| SaveError::Io(e.to_string()))?;
    file.flush().map_err(|e| SaveError::Io(e.to_string()))?;

    tracing::debug!(
        "Wrote {} workouts ({} bytes) to {}",
        workouts.len(),
        bytes.len(),
        path.display()
    );

    Ok(())
}

/// Receives load faults so they can be shown to the user.
pub trait LoadReporter {
    fn report(&mut self, error: &LoadError);
}

/// Reports load faults to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl LoadReporter for TracingReporter {
    fn report(&mut self, error: &LoadError) {
        tracing::error!("{}", error);
    }
}

impl LoadReporter for Vec<LoadError> {
    fn report(&mut self, error: &LoadError) {
        self.push(error.clone());
    }
}
