//! Error types for the fantasy scoring CLI.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("required column {column:?} missing from input header")]
    MissingColumn { column: String },

    #[error("cannot parse {column:?} value {value:?} as a number for player {player:?}")]
    FieldParse {
        column: String,
        value: String,
        player: String,
    },

    #[error("unknown scoring profile: {name}")]
    UnknownProfile { name: String },

    #[error("top-N threshold must be at least 1")]
    InvalidThreshold,

    #[error("chart rendering failed: {message}")]
    Chart { message: String },
}
