//! Binary logistic regression trained with batch gradient descent.
use log::{debug, info};
use ndarray::Array2;

use crate::error::ModelError;
use crate::matrix::{self, Matrix};
use crate::metrics::{accuracy_pred, cost, decision_boundary};
use crate::preprocess::N_FEATURES;

/// Default number of iterations between two cost evaluations.
pub const DEFAULT_COST_LOG_INTERVAL: usize = 1000;

/// Diagnostics from the last `fit` call.
#[derive(Debug, Clone, Default)]
pub struct TrainingSummary {
    /// Thresholded predictions of the last iteration (before its update).
    pub predictions: Option<Matrix>,
    /// Accuracy of `predictions` against the training labels, in percent.
    pub accuracy: Option<f64>,
    /// `(iteration, cost)` recorded every `cost_log_interval` iterations.
    pub cost_history: Vec<(usize, f64)>,
}

#[derive(Debug, Clone)]
pub struct LogisticRegression {
    learning_rate: f64,
    n_iters: usize,
    cost_log_interval: usize,
    weights: Matrix,
    bias: f64,
    summary: TrainingSummary,
}

impl LogisticRegression {
    pub fn new(
        learning_rate: f64,
        n_iters: usize,
        weights: Matrix,
        bias: f64,
    ) -> Result<Self, ModelError> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ModelError::InvalidHyperparameter {
                name: "learning_rate",
                value: learning_rate.to_string(),
            });
        }
        if n_iters == 0 {
            return Err(ModelError::InvalidHyperparameter {
                name: "n_iters",
                value: n_iters.to_string(),
            });
        }
        if weights.dim() != (N_FEATURES, 1) {
            return Err(ModelError::WeightShape {
                expected: N_FEATURES,
                got: weights.dim(),
            });
        }
        Ok(Self {
            learning_rate,
            n_iters,
            cost_log_interval: DEFAULT_COST_LOG_INTERVAL,
            weights,
            bias,
            summary: TrainingSummary::default(),
        })
    }

    /// Weights all 1.0, bias 0.0.
    pub fn with_defaults(learning_rate: f64, n_iters: usize) -> Result<Self, ModelError> {
        Self::new(learning_rate, n_iters, Array2::ones((N_FEATURES, 1)), 0.0)
    }

    pub fn with_cost_log_interval(mut self, interval: usize) -> Result<Self, ModelError> {
        if interval == 0 {
            return Err(ModelError::InvalidHyperparameter {
                name: "cost_log_interval",
                value: interval.to_string(),
            });
        }
        self.cost_log_interval = interval;
        Ok(self)
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn summary(&self) -> &TrainingSummary {
        &self.summary
    }

    fn linear(&self, x: &Matrix) -> Matrix {
        matrix::add_scalar(self.bias, &matrix::dot(x, &self.weights))
    }

    /// `dw = Xᵗ·(p - y) / n`, `db = Σ(p - y) / n`.
    fn gradients(probabilities: &Matrix, x: &Matrix, y: &Matrix) -> (Matrix, f64) {
        let scale = 1.0 / x.nrows() as f64;
        let residual = matrix::subtract(probabilities, y);
        let dw = matrix::multiply_scalar(scale, &matrix::dot(&matrix::transpose(x), &residual));
        let db = scale * matrix::sum(&residual);
        (dw, db)
    }

    /// Runs `n_iters - 1` gradient-descent steps on `(x, y)` and returns the final
    /// weights and bias.
    pub fn fit(&mut self, x: &Matrix, y: &Matrix) -> (Matrix, f64) {
        assert_eq!(
            x.nrows(),
            y.nrows(),
            "fit: {} feature rows but {} labels",
            x.nrows(),
            y.nrows()
        );
        let mut summary = TrainingSummary::default();

        for i in 0..self.n_iters.saturating_sub(1) {
            let probabilities = matrix::sigmoid(&self.linear(x));
            let predictions = decision_boundary(&probabilities);
            summary.accuracy = Some(accuracy_pred(&predictions, y));
            summary.predictions = Some(predictions);

            let (dw, db) = Self::gradients(&probabilities, x, y);
            let step = matrix::multiply_scalar(self.learning_rate, &dw);
            self.weights = matrix::subtract(&self.weights, &step);
            self.bias -= self.learning_rate * db;

            if i % self.cost_log_interval == 0 {
                let c = cost(&probabilities, y);
                info!("iteration {}: cost {:.6}", i, c);
                summary.cost_history.push((i, c));
            }
        }

        if let Some(acc) = summary.accuracy {
            debug!("final training accuracy {:.2}%", acc);
        }
        self.summary = summary;
        (self.weights.clone(), self.bias)
    }

    /// Class labels (0.0 or 1.0) for every row of `x`.
    pub fn predict_labels(&self, x: &Matrix) -> Matrix {
        decision_boundary(&matrix::sigmoid(&self.linear(x)))
    }

    /// Predicted labels for `x` and their accuracy against `y`, in percent.
    pub fn predict(&self, x: &Matrix, y: &Matrix) -> (Matrix, f64) {
        let predictions = self.predict_labels(x);
        let accuracy = accuracy_pred(&predictions, y);
        (predictions, accuracy)
    }
}
