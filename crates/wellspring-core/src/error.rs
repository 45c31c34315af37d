//! Core error types for wellspring-core.
//!
//! This module defines a comprehensive error hierarchy using thiserror
//! for better error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::AgeGroup;

/// Core error type for wellspring-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Submission attempted before every question was answered
    #[error("Incomplete submission: {answered} of {total} questions answered")]
    IncompleteSubmission { answered: usize, total: usize },

    /// A per-user document that downstream steps depend on is absent
    #[error("Not found: {what} for user '{user}'")]
    NotFound { what: &'static str, user: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),

    /// Store is locked by another session
    #[error("Store is locked")]
    Locked,

    /// Optimistic write lost the race against a concurrent session
    #[error("Write conflict: stored version no longer matches {expected_version}")]
    Conflict { expected_version: u64 },

    /// Stored document failed to decode
    #[error("Corrupt stored document: {0}")]
    Corrupt(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Response vector does not line up with the questionnaire
    #[error("Response count {actual} does not match question count {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Answer option index outside the 0..=3 range
    #[error("Option index {index} out of range (questions have 4 options)")]
    InvalidOption { index: usize },

    /// Age outside every supported bracket
    #[error("No questionnaire supports age {years}")]
    UnsupportedAge { years: u32 },

    /// No questionnaire shipped for the age group
    #[error("No questionnaire available for age group '{age_group}'")]
    NoQuestionnaire { age_group: AgeGroup },

    /// No task catalog shipped for the age group
    #[error("No task catalog available for age group '{age_group}'")]
    NoTaskCatalog { age_group: AgeGroup },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },
}

// Helper implementations for converting from other error types

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            // Both a held write lock and an expired busy timeout surface
            // as the same condition to callers.
            rusqlite::Error::SqliteFailure(err, _msg) => match err.code {
                rusqlite::ErrorCode::DatabaseLocked | rusqlite::ErrorCode::DatabaseBusy => {
                    StoreError::Locked
                }
                _ => StoreError::QueryFailed(err.to_string()),
            },
            _ => StoreError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
