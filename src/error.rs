// Error types for loading data and building models.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// One side of the train/test split ended up with no rows.
    #[error("{split} split is empty (threshold index {threshold})")]
    EmptySplit { split: &'static str, threshold: usize },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: &'static str, value: String },

    #[error("weights must have shape ({expected}, 1), got {got:?}")]
    WeightShape { expected: usize, got: (usize, usize) },
}
