// Turning two combatants into a model input and a model label back into a winner.
use ndarray::Array2;

use crate::matrix::Matrix;
use crate::model::LogisticRegression;

#[derive(Debug, Clone)]
pub struct Combatant {
    pub name: String,
    pub hp: f64,
    pub attack: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

impl Winner {
    /// Label 0 is the first combatant, anything else the second.
    pub fn from_label(label: f64) -> Self {
        if label == 0.0 {
            Winner::First
        } else {
            Winner::Second
        }
    }

    pub fn pick<'a>(self, first: &'a Combatant, second: &'a Combatant) -> &'a Combatant {
        match self {
            Winner::First => first,
            Winner::Second => second,
        }
    }
}

/// 1×4 row `[hp_a, attack_a, hp_b, attack_b]`.
pub fn feature_row(a: &Combatant, b: &Combatant) -> Matrix {
    let row = [a.hp, a.attack, b.hp, b.attack];
    Array2::from_shape_fn((1, row.len()), |(_, j)| row[j])
}

pub fn predict_winner(model: &LogisticRegression, a: &Combatant, b: &Combatant) -> Winner {
    let labels = model.predict_labels(&feature_row(a, b));
    Winner::from_label(labels[(0, 0)])
}
