// File: crates/multiline-core/src/error.rs
// Summary: Error taxonomy surfaced by layout, normalization and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The dataset has no categories. Non-fatal: the chart renders nothing.
    #[error("dataset has no categories")]
    EmptyDataset,

    #[error("category {category} has {found} series, expected {expected} (from category 0)")]
    MismatchedSeriesLength {
        category: usize,
        expected: usize,
        found: usize,
    },

    #[error("category {category}, group {group}: value {index} is not a number")]
    NonNumericValue {
        category: usize,
        group: usize,
        index: usize,
    },

    #[error("category {category}, group {group}: value {index} is negative ({value})")]
    NegativeValue {
        category: usize,
        group: usize,
        index: usize,
        value: f64,
    },

    #[error("category {category} has no series group")]
    MissingSeriesGroup { category: usize },

    #[error("unsupported interpolation `{0}`")]
    UnsupportedInterpolation(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    /// Whether the error aborts a redraw. Only an empty dataset is tolerated.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ChartError::EmptyDataset)
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
