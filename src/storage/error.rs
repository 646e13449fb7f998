//! Errors raised while encoding, decoding, reading and writing workout files.

use thiserror::Error;

/// Errors turning workouts into records and bytes, and back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// File does not start with the workout log magic bytes
    #[error("Not a workout log file")]
    InvalidMagic,

    /// File was written by a newer format version
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// Input ended inside the file header
    #[error("File header is truncated")]
    Truncated,

    /// A keyed field is absent from a record
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A keyed field holds a different kind of value
    #[error("Field {key} is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    /// A field value is outside its allowed range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The bincode or JSON layer failed
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Errors loading a workout file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// No path was given
    #[error("No file path given")]
    InvalidPath,

    /// The file could not be opened or read
    #[error("Could not read file from disk: {0}")]
    Io(String),

    /// The file content is malformed, truncated or from a newer version
    #[error("Error deserializing workout file: {0}")]
    Deserialize(#[from] CodecError),
}

/// Errors saving a workout file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SaveError {
    /// No path was given
    #[error("No file path given")]
    InvalidPath,

    /// The file could not be created or written
    #[error("Could not write file to disk: {0}")]
    Io(String),

    /// The workouts could not be encoded
    #[error("Error serializing workout file: {0}")]
    Serialize(#[from] CodecError),
}
