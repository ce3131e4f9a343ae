// Elementwise and linear-algebra helpers over a dense f64 matrix.
// Every function borrows its operands and returns a freshly allocated result.
// Shape mismatches are programming errors and panic.
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix2};

/// Row-major 2-D matrix of f64 values.
pub type Matrix = Array2<f64>;

fn assert_same_shape(op: &str, a: &Matrix, b: &Matrix) {
    assert_eq!(
        a.dim(),
        b.dim(),
        "{}: dimension mismatch {:?} vs {:?}",
        op,
        a.dim(),
        b.dim()
    );
}

fn assert_single_column(op: &str, m: &Matrix) {
    assert_eq!(m.ncols(), 1, "{}: expected a single column, got {:?}", op, m.dim());
}

pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    assert_same_shape("add", a, b);
    a + b
}

pub fn subtract(a: &Matrix, b: &Matrix) -> Matrix {
    assert_same_shape("subtract", a, b);
    a - b
}

/// `c + m` for every cell.
pub fn add_scalar(c: f64, m: &Matrix) -> Matrix {
    m.mapv(|v| c + v)
}

/// `c - m` for every cell. Note the operand order: the scalar is the minuend.
pub fn subtract_scalar(c: f64, m: &Matrix) -> Matrix {
    m.mapv(|v| c - v)
}

/// Hadamard (elementwise) product.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    assert_same_shape("multiply", a, b);
    a * b
}

pub fn multiply_scalar(c: f64, m: &Matrix) -> Matrix {
    m.mapv(|v| c * v)
}

/// Elementwise natural log. Non-positive cells yield `-inf` or `NaN`.
pub fn log(m: &Matrix) -> Matrix {
    m.mapv(f64::ln)
}

/// Transposed view of `m`, no copy.
pub fn transpose(m: &Matrix) -> ArrayView2<'_, f64> {
    m.t()
}

/// Matrix product `a · b`.
pub fn dot<S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> Matrix
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    assert_eq!(
        a.ncols(),
        b.nrows(),
        "dot: inner dimension mismatch {:?} vs {:?}",
        a.dim(),
        b.dim()
    );
    a.dot(b)
}

/// Sum of a single-column matrix.
pub fn sum(m: &Matrix) -> f64 {
    assert_single_column("sum", m);
    m.sum()
}

/// Number of non-zero cells in a single-column matrix.
pub fn count_non_zero(m: &Matrix) -> usize {
    assert_single_column("count_non_zero", m);
    m.iter().filter(|&&v| v != 0.0).count()
}

/// 1.0 where `v >= cutoff`, otherwise 0.0.
pub fn threshold_column(m: &Matrix, cutoff: f64) -> Matrix {
    m.mapv(|v| if v < cutoff { 0.0 } else { 1.0 })
}

pub fn sigmoid_scalar(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Logistic function applied to every cell.
///
/// In f64 the result saturates: `z >= ~37` gives exactly 1.0 and `z <= ~-745` gives
/// exactly 0.0, so callers taking logs of it must clamp first (see `metrics::cost`).
pub fn sigmoid(m: &Matrix) -> Matrix {
    m.mapv(sigmoid_scalar)
}
