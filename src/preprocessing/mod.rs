//! Preprocessing transformers for rank-based feature scaling.
//!
//! This module provides transformers that rescale data before training.
//!
//! # Example
//!
//! ```
//! use escalar::prelude::*;
//!
//! // One feature, three samples
//! let data = Matrix::from_vec(3, 1, vec![3.0, 1.0, 2.0]).expect("valid matrix dimensions");
//!
//! let mut scaler = DerivativeRankScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! // Evenly spaced values map onto an evenly spaced ramp with max 1
//! assert!((scaled[0] - 1.0).abs() < 1e-6);
//! assert!((scaled[1] - 1.0 / 3.0).abs() < 1e-6);
//! assert!((scaled[2] - 2.0 / 3.0).abs() < 1e-6);
//! ```

use crate::error::{EscalarError, Result};
use crate::primitives::{Matrix, Vector};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Scales features by ranking the discrete derivative of the sorted data.
///
/// Where a standard scaler normalizes by magnitude, this transformer
/// normalizes by *spacing*: each column is sorted, its consecutive step
/// sizes are extracted, and the steps are recursively reduced to a rank
/// signal before being re-integrated into a monotonic lookup table. The
/// output reflects how values are ordered and how unevenly they are
/// spread, not how large they are, and always has maximum absolute
/// value 1.
///
/// `fit` builds the per-column lookup table; `transform` interpolates
/// query values through it, clamping out-of-range queries to the table
/// edges and passing NaN through unchanged.
///
/// # Example
///
/// ```
/// use escalar::prelude::*;
///
/// let train = Matrix::from_vec(4, 1, vec![1.0, 2.0, 4.0, 100.0]).expect("valid matrix dimensions");
///
/// let mut scaler = DerivativeRankScaler::new();
/// scaler.fit(&train).expect("fit should succeed");
///
/// // The outlier at 100 lands at 1.0; a far larger query clamps there too
/// let probe = Matrix::from_vec(2, 1, vec![100.0, 1e9]).expect("valid matrix dimensions");
/// let scaled = scaler.transform(&probe).expect("transform should succeed");
/// assert!((scaled[0] - 1.0).abs() < 1e-6);
/// assert!((scaled[1] - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivativeRankScaler {
    /// Recursion depth of the derivative/rank reduction.
    derivative_order: usize,
    /// Steps no larger than this are treated as equal (collapsed to zero).
    epsilon: f32,
    /// Sorted, cleaned training values per column (computed during fit).
    x_fit: Option<Matrix<f32>>,
    /// Transformed counterparts of `x_fit`, same shape and row alignment.
    y_fit: Option<Matrix<f32>>,
}

impl Default for DerivativeRankScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl DerivativeRankScaler {
    /// Creates a new `DerivativeRankScaler` with default settings
    /// (derivative order 1, epsilon 0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            derivative_order: 1,
            epsilon: 0.0,
            x_fit: None,
            y_fit: None,
        }
    }

    /// Sets the recursion depth of the derivative/rank reduction.
    ///
    /// Order 0 ranks the sorted values directly; each additional level
    /// ranks the structure of the step sizes one layer deeper.
    #[must_use]
    pub fn with_derivative_order(mut self, derivative_order: usize) -> Self {
        self.derivative_order = derivative_order;
        self
    }

    /// Sets the step-equality threshold (conventionally 0).
    ///
    /// Validated at fit time: must be finite and non-negative.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the configured derivative order.
    #[must_use]
    pub fn derivative_order(&self) -> usize {
        self.derivative_order
    }

    /// Returns the configured epsilon.
    #[must_use]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.x_fit.is_some()
    }

    /// Returns the sorted fitted values (one column per feature).
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn x_fit(&self) -> &Matrix<f32> {
        self.x_fit
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Returns the transformed fitted values, aligned with [`x_fit`](Self::x_fit).
    ///
    /// # Panics
    ///
    /// Panics if the scaler is not fitted.
    #[must_use]
    pub fn y_fit(&self) -> &Matrix<f32> {
        self.y_fit
            .as_ref()
            .expect("Scaler not fitted. Call fit() first.")
    }

    /// Clears any fitted state, returning the scaler to its unfitted state.
    pub fn reset(&mut self) {
        self.x_fit = None;
        self.y_fit = None;
    }

    /// Fits on a single feature given as a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    pub fn fit_vector(&mut self, x: &Vector<f32>) -> Result<()> {
        self.fit(&Matrix::from_column(x))
    }

    /// Transforms a single feature given as a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaler is unfitted or was fitted on more
    /// than one feature.
    pub fn transform_vector(&self, x: &Vector<f32>) -> Result<Vector<f32>> {
        self.transform(&Matrix::from_column(x))
    }

    /// Fits and transforms a single feature given as a vector.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    pub fn fit_transform_vector(&mut self, x: &Vector<f32>) -> Result<Vector<f32>> {
        self.fit_transform(&Matrix::from_column(x))
    }
}

impl Transformer for DerivativeRankScaler {
    /// Builds the per-column lookup table from training data.
    ///
    /// Non-finite entries are replaced with the column's finite maximum
    /// before sorting; the substitute is never read back at transform
    /// time because interpolation clamps infinities to the table edges
    /// and passes NaN through. Any previously fitted state is replaced.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(EscalarError::ValidationError {
                message: "cannot fit with zero samples".to_string(),
            });
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(EscalarError::InvalidHyperparameter {
                param: "epsilon".to_string(),
                value: format!("{}", self.epsilon),
                constraint: "finite value >= 0".to_string(),
            });
        }

        let mut x_cols = Vec::with_capacity(n_features);
        let mut y_cols = Vec::with_capacity(n_features);
        for j in 0..n_features {
            let sorted = clean_and_sort(x.column(j).as_slice(), j)?;
            let ranked = derivative_rank(&sorted, self.derivative_order, self.epsilon);
            x_cols.push(Vector::from_vec(sorted));
            y_cols.push(Vector::from_vec(ranked));
        }

        self.x_fit = Some(Matrix::from_columns(&x_cols).map_err(EscalarError::from)?);
        self.y_fit = Some(Matrix::from_columns(&y_cols).map_err(EscalarError::from)?);

        Ok(())
    }

    /// Interpolates query values through the fitted lookup table.
    ///
    /// Queries below the fitted minimum (including negative infinity)
    /// map to the first fitted output, queries above the maximum
    /// (including positive infinity) map to the last, NaN maps to NaN.
    /// The result is flat, with element `i * n_cols + j` holding the
    /// value for query cell `(i, j)`.
    fn transform(&self, x: &Matrix<f32>) -> Result<Vector<f32>> {
        let x_fit = self.x_fit.as_ref().ok_or_else(|| EscalarError::ValidationError {
            message: "DerivativeRankScaler not fitted. Call fit() first.".to_string(),
        })?;
        let y_fit = self.y_fit.as_ref().ok_or_else(|| EscalarError::ValidationError {
            message: "DerivativeRankScaler not fitted. Call fit() first.".to_string(),
        })?;

        let (n_samples, n_features) = x.shape();
        if n_features != x_fit.n_cols() {
            return Err(EscalarError::dimension_mismatch(
                "n_features",
                x_fit.n_cols(),
                n_features,
            ));
        }

        let knots_x: Vec<Vector<f32>> = (0..n_features).map(|j| x_fit.column(j)).collect();
        let knots_y: Vec<Vector<f32>> = (0..n_features).map(|j| y_fit.column(j)).collect();

        let mut out = Vec::with_capacity(n_samples * n_features);
        for i in 0..n_samples {
            for j in 0..n_features {
                out.push(interp(x.get(i, j), knots_x[j].as_slice(), knots_y[j].as_slice()));
            }
        }

        Ok(Vector::from_vec(out))
    }
}

/// Replaces non-finite entries with the column's finite maximum and
/// sorts ascending.
///
/// The column must contain at least one finite value; sorting needs a
/// numerically ordered sequence, which is also why the non-finite
/// entries must be substituted rather than kept.
fn clean_and_sort(column: &[f32], col_idx: usize) -> Result<Vec<f32>> {
    let finite_max = column
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f32::max)
        .ok_or_else(|| EscalarError::ValidationError {
            message: format!("column {col_idx} has no finite values"),
        })?;

    let mut cleaned: Vec<f32> = column
        .iter()
        .map(|&v| if v.is_finite() { v } else { finite_max })
        .collect();
    cleaned.sort_by(f32::total_cmp);
    Ok(cleaned)
}

/// Stable argsort: indices that sort `x` ascending, ties in original order.
fn argsort(x: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
    order
}

/// Recursively ranks the step-size structure of `x` and re-integrates it
/// into a monotonic sequence with maximum absolute value 1.
///
/// Each level sorts its input, takes consecutive differences, and hands
/// the differences one level deeper; at depth 0 every step collapses to
/// 1 (or 0 when it doesn't exceed `epsilon`), turning spacing into a
/// pure rank signal. Re-integration then cumulatively sums the steps
/// from the smallest value and undoes the sort, and the result is scaled
/// to max-abs 1. An all-zero reconstruction (e.g. an all-zero column)
/// skips the scaling and stays zero.
fn derivative_rank(x: &[f32], d: usize, epsilon: f32) -> Vec<f32> {
    if x.is_empty() {
        return Vec::new();
    }

    let order = argsort(x);
    let sorted: Vec<f32> = order.iter().map(|&i| x[i]).collect();
    let x0 = sorted[0];
    let mut delta: Vec<f32> = sorted.windows(2).map(|w| w[1] - w[0]).collect();

    if d > 0 {
        delta = derivative_rank(&delta, d - 1, epsilon);
    }

    // Sorted-order differences are non-negative by construction; a
    // negative step here means the recursion itself is broken.
    assert!(
        delta.iter().all(|&s| s >= 0.0),
        "negative step size during re-integration"
    );

    if d == 0 {
        for step in &mut delta {
            *step = if *step > epsilon { 1.0 } else { 0.0 };
        }
    }

    let mut acc = x0;
    let mut integrated = Vec::with_capacity(x.len());
    integrated.push(acc);
    for step in &delta {
        acc += step;
        integrated.push(acc);
    }

    let mut out = vec![0.0; x.len()];
    for (k, &idx) in order.iter().enumerate() {
        out[idx] = integrated[k];
    }

    let max_abs = out.iter().fold(0.0_f32, |m, v| m.max(v.abs()));
    if max_abs > 0.0 {
        for v in &mut out {
            *v /= max_abs;
        }
    }
    out
}

/// Piecewise-linear interpolation of `q` against the knots (`xp`, `fp`):
/// queries outside the knot range clamp to the edge values, NaN in gives
/// NaN out. `xp` must be sorted ascending and non-empty.
fn interp(q: f32, xp: &[f32], fp: &[f32]) -> f32 {
    if q.is_nan() {
        return f32::NAN;
    }
    let n = xp.len();
    if q <= xp[0] {
        return fp[0];
    }
    if q >= xp[n - 1] {
        return fp[n - 1];
    }

    // First knot >= q; q is strictly inside the knot range here, so
    // hi is in 1..n and xp[hi - 1] < q.
    let hi = xp.partition_point(|&v| v < q);
    if xp[hi] == q {
        return fp[hi];
    }
    let lo = hi - 1;
    let t = (q - xp[lo]) / (xp[hi] - xp[lo]);
    fp[lo] + t * (fp[hi] - fp[lo])
}
