use crate::model::{Field, InputMode};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("GumbelDistribution - data has not been set")]
    MissingField { mode: InputMode },

    #[error("GumbelDistribution - no \"{field}\" entry")]
    Schema { field: &'static str },

    #[error("GumbelDistribution - field {field} is not used in {mode} mode")]
    FieldNotInMode { field: Field, mode: InputMode },

    #[error("GumbelDistribution - {what} must be positive and finite, got {value}")]
    Degenerate { what: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
