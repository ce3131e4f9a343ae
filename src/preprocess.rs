// Train/test partitioning of the matchup table into feature and label matrices.
use log::info;
use ndarray::Array2;

use crate::error::DataError;
use crate::io::MatchupRecord;
use crate::matrix::Matrix;

/// Number of feature columns: Hp_1, Attack_1, Hp_2, Attack_2.
pub const N_FEATURES: usize = 4;

/// Feature names in column order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = ["hp_1", "attack_1", "hp_2", "attack_2"];

/// Share of rows (by index) that go to the training split, in percent.
const TRAIN_PERCENT: usize = 80;

/// The four matrices produced by the split.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub x_train: Matrix,
    pub y_train: Matrix,
    pub x_test: Matrix,
    pub y_test: Matrix,
}

/// Index threshold separating train (`<=`) from test (`>`).
pub fn split_threshold(total_rows: usize) -> usize {
    total_rows * TRAIN_PERCENT / 100
}

fn features(rows: &[&MatchupRecord]) -> Matrix {
    Array2::from_shape_fn((rows.len(), N_FEATURES), |(i, j)| rows[i].features()[j])
}

fn labels(rows: &[&MatchupRecord]) -> Matrix {
    Array2::from_shape_fn((rows.len(), 1), |(i, _)| rows[i].winner)
}

/// Split records on their `Index` column: `index <= floor(total_rows * 0.8)` trains,
/// everything above tests. Row order within each split follows the file.
pub fn train_test_split(
    records: &[MatchupRecord],
    total_rows: usize,
) -> Result<Dataset, DataError> {
    let threshold = split_threshold(total_rows);
    let (train, test): (Vec<&MatchupRecord>, Vec<&MatchupRecord>) =
        records.iter().partition(|r| r.index <= threshold);

    if train.is_empty() {
        return Err(DataError::EmptySplit { split: "train", threshold });
    }
    if test.is_empty() {
        return Err(DataError::EmptySplit { split: "test", threshold });
    }
    info!(
        "split at index {}: {} train rows, {} test rows",
        threshold,
        train.len(),
        test.len()
    );

    Ok(Dataset {
        x_train: features(&train),
        y_train: labels(&train),
        x_test: features(&test),
        y_test: labels(&test),
    })
}

/// Load a matchup csv and split it. `total_rows` defaults to the number of data rows
/// in the file, rows skipped as malformed included.
pub fn load_dataset(path: &str, total_rows: Option<usize>) -> Result<Dataset, DataError> {
    let (records, rows_seen) = crate::io::load_csv_counted(path)?;
    info!("loaded {} of {} rows from {}", records.len(), rows_seen, path);
    train_test_split(&records, total_rows.unwrap_or(rows_seen))
}
