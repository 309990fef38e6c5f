//! Standardization utilities feeding the clustering task.
//!
//! Provides a per-column mean/std `Scaler` over `ndarray` matrices where
//! rows are observations and columns are variables.
use ndarray::{Array2, Axis};

use crate::error::DataError;

/// Per-column mean/std standard scaler.
#[derive(Clone, Debug)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-12;
}

/// Fit a `Scaler` from a matrix where rows are observations.
///
/// Uses the population variance, so standardized columns have unit variance
/// under the same convention the tests check.
pub fn fit_scaler(x: &Array2<f64>) -> Result<Scaler, DataError> {
    let (n_rows, n_cols) = x.dim();
    if n_rows == 0 || n_cols == 0 {
        return Err(DataError::EmptyMatrix);
    }

    let mean: Vec<f64> = x
        .mean_axis(Axis(0))
        .ok_or(DataError::EmptyMatrix)?
        .to_vec();

    let n = n_rows as f64;
    let mut std = vec![0.0; n_cols];
    for row in x.rows() {
        for (c, value) in row.iter().enumerate() {
            let d = value - mean[c];
            std[c] += d * d;
        }
    }
    for v in std.iter_mut() {
        *v = (*v / n).sqrt().max(Scaler::MIN_STD);
    }

    Ok(Scaler { mean, std })
}

/// Standardize every row of `x` with the fitted `Scaler`.
pub fn transform_all(x: &Array2<f64>, scaler: &Scaler) -> Array2<f64> {
    let mut out = x.clone();
    for mut row in out.rows_mut() {
        for (c, value) in row.iter_mut().enumerate() {
            *value = (*value - scaler.mean[c]) / scaler.std[c];
        }
    }
    out
}

/// Fit a scaler and return the standardized matrix in one call.
pub fn fit_transform(x: &Array2<f64>) -> Result<Array2<f64>, DataError> {
    let scaler = fit_scaler(x)?;
    Ok(transform_all(x, &scaler))
}
