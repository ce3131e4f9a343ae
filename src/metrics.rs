// Decision thresholding, accuracy and cross-entropy cost.
use crate::matrix::{self, Matrix};

/// Probabilities are kept in `[EPSILON, 1 - EPSILON]` before taking logs in `cost`.
const EPSILON: f64 = 1e-15;

/// Probability to class label: below 0.5 is 0, anything else (0.5 included) is 1.
pub fn decision_boundary(probabilities: &Matrix) -> Matrix {
    matrix::threshold_column(probabilities, 0.5)
}

/// Percentage of rows where the predicted label equals the true label.
pub fn accuracy_pred(predicted: &Matrix, y: &Matrix) -> f64 {
    let n = y.nrows() as f64;
    let mismatches = matrix::count_non_zero(&matrix::subtract(predicted, y)) as f64;
    (1.0 - mismatches / n) * 100.0
}

/// Mean binary cross-entropy of `probabilities` against labels `y`.
pub fn cost(probabilities: &Matrix, y: &Matrix) -> f64 {
    let observations = y.nrows() as f64;
    let p = probabilities.mapv(|v| v.clamp(EPSILON, 1.0 - EPSILON));

    // y = 1 term
    let class1 = matrix::multiply(&matrix::multiply_scalar(-1.0, y), &matrix::log(&p));
    // y = 0 term
    let class2 = matrix::multiply(
        &matrix::subtract_scalar(1.0, y),
        &matrix::log(&matrix::subtract_scalar(1.0, &p)),
    );

    matrix::sum(&matrix::subtract(&class1, &class2)) / observations
}
