//! Core traits for data transformers.
//!
//! These traits define the API contracts for fit/transform components.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Trait for data transformers (scalers, encoders, etc.).
///
/// Transformers follow sklearn conventions: `fit` learns state from
/// training data, `transform` applies it to query data. `transform`
/// returns a flat vector of per-cell results in row-major order
/// (element `i * n_cols + j` holds the result for cell `(i, j)`).
///
/// # Examples
///
/// ```
/// use escalar::prelude::*;
///
/// let data = Matrix::from_vec(3, 1, vec![3.0, 1.0, 2.0]).unwrap();
///
/// let mut scaler = DerivativeRankScaler::new();
/// let scaled = scaler.fit_transform(&data).unwrap();
/// assert_eq!(scaled.len(), 3);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or the query
    /// shape doesn't match the fitted shape.
    fn transform(&self, x: &Matrix<f32>) -> Result<Vector<f32>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transforming fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Vector<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}
